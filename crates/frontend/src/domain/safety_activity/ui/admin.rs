use contracts::domain::safety_activity::{format_tags, parse_tags, SafetyActivity, SafetyActivityDto};
use leptos::prelude::*;

use crate::domain::safety_activity::model;
use crate::system::auth::context::use_auth;

/// Back-office CRUD for Safety Days activities. Tags are edited as
/// comma-separated `label:color` pairs.
#[component]
pub fn SafetyActivitiesAdminPage() -> impl IntoView {
    let (session, _) = use_auth();
    let (items, set_items) = signal::<Vec<SafetyActivity>>(Vec::new());
    let form = RwSignal::new(SafetyActivityDto::default());
    let (tags_text, set_tags_text) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let token = move || session.get_untracked().access_token();

    let reload = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_all().await {
                Ok(v) => set_items.set(v),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    Effect::new(move |_| reload());

    let reset_form = move || {
        form.set(SafetyActivityDto::default());
        set_tags_text.set(String::new());
        set_error.set(None);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut dto = form.get();
        dto.tags = parse_tags(&tags_text.get());

        if let Err(msg) = dto.validate() {
            set_error.set(Some(msg));
            return;
        }

        let Some(token) = token() else { return };
        wasm_bindgen_futures::spawn_local(async move {
            match model::save(&dto, &token).await {
                Ok(()) => {
                    form.set(SafetyActivityDto::default());
                    set_tags_text.set(String::new());
                    set_error.set(None);
                    reload();
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let on_delete = move |id: String| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Supprimer définitivement cette activité ?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let Some(token) = token() else { return };
        wasm_bindgen_futures::spawn_local(async move {
            match model::delete(&id, &token).await {
                Ok(()) => reload(),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let is_editing = move || form.get().id.is_some();

    view! {
        <div class="admin-page">
            <h1>"Safety Days"</h1>

            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}

            <form class="admin-form" on:submit=on_submit>
                <h2>{move || if is_editing() { "Modifier l'activité" } else { "Nouvelle activité" }}</h2>

                <div class="form-group">
                    <label>"Titre *"</label>
                    <input
                        type="text"
                        prop:value=move || form.get().title
                        on:input=move |ev| form.update(|d| d.title = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label>"Description"</label>
                    <textarea
                        prop:value=move || form.get().description.unwrap_or_default()
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            form.update(|d| d.description = (!v.is_empty()).then_some(v));
                        }
                    />
                </div>

                <div class="form-group">
                    <label>"Image (URL)"</label>
                    <input
                        type="text"
                        prop:value=move || form.get().image_url.unwrap_or_default()
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            form.update(|d| d.image_url = (!v.is_empty()).then_some(v));
                        }
                    />
                </div>

                <div class="form-group">
                    <label>"Tags (label:couleur, séparés par des virgules)"</label>
                    <input
                        type="text"
                        placeholder="Incendie:red, Esprit d'équipe:green"
                        prop:value=move || tags_text.get()
                        on:input=move |ev| set_tags_text.set(event_target_value(&ev))
                    />
                </div>

                <div class="admin-form__actions">
                    <button type="submit" class="button button--primary">
                        {move || if is_editing() { "Enregistrer" } else { "Créer" }}
                    </button>
                    <Show when=is_editing>
                        <button type="button" class="button button--secondary" on:click=move |_| reset_form()>
                            "Annuler"
                        </button>
                    </Show>
                </div>
            </form>

            <table class="admin-table">
                <thead>
                    <tr>
                        <th>"Titre"</th>
                        <th>"Tags"</th>
                        <th>"Créée le"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || items.get().into_iter().map(|a| {
                        let id = a.id.clone();
                        let edit_source = a.clone();
                        view! {
                            <tr>
                                <td>{a.title.clone()}</td>
                                <td>{format_tags(&a.tags)}</td>
                                <td>{a.created_at.format("%Y-%m-%d").to_string()}</td>
                                <td class="admin-table__actions">
                                    <button class="button button--small" on:click=move |_| {
                                        form.set(SafetyActivityDto::from(&edit_source));
                                        set_tags_text.set(format_tags(&edit_source.tags));
                                        set_error.set(None);
                                    }>
                                        "Modifier"
                                    </button>
                                    <button class="button button--small button--danger" on:click=move |_| on_delete(id.clone())>
                                        "Supprimer"
                                    </button>
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}
