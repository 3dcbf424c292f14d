use contracts::domain::formateur::{Formateur, FormateurDto};
use leptos::prelude::*;

use crate::domain::formateur::model;
use crate::system::auth::context::use_auth;

/// Back-office CRUD for trainers, including the mobility flags.
#[component]
pub fn FormateursAdminPage() -> impl IntoView {
    let (session, _) = use_auth();
    let (items, set_items) = signal::<Vec<Formateur>>(Vec::new());
    let form = RwSignal::new(FormateurDto::default());
    let (error, set_error) = signal::<Option<String>>(None);

    let token = move || session.get_untracked().access_token();

    let reload = move || {
        let Some(token) = token() else { return };
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_all(&token).await {
                Ok(v) => set_items.set(v),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    Effect::new(move |_| reload());

    let reset_form = move || {
        form.set(FormateurDto::default());
        set_error.set(None);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let dto = form.get();

        if let Err(msg) = dto.validate() {
            set_error.set(Some(msg));
            return;
        }

        let Some(token) = token() else { return };
        wasm_bindgen_futures::spawn_local(async move {
            match model::save(&dto, &token).await {
                Ok(()) => {
                    form.set(FormateurDto::default());
                    set_error.set(None);
                    reload();
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let on_delete = move |id: i64| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Supprimer définitivement ce formateur ?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let Some(token) = token() else { return };
        wasm_bindgen_futures::spawn_local(async move {
            match model::delete(id, &token).await {
                Ok(()) => reload(),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let on_toggle_publish = move |id: i64| {
        let Some(token) = token() else { return };
        wasm_bindgen_futures::spawn_local(async move {
            match model::toggle_publish(id, &token).await {
                Ok(()) => reload(),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let is_editing = move || form.get().id.is_some();

    view! {
        <div class="admin-page">
            <h1>"Formateurs"</h1>

            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}

            <form class="admin-form" on:submit=on_submit>
                <h2>{move || if is_editing() { "Modifier le formateur" } else { "Nouveau formateur" }}</h2>

                <div class="form-group">
                    <label>"Nom *"</label>
                    <input
                        type="text"
                        prop:value=move || form.get().name
                        on:input=move |ev| form.update(|d| d.name = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label>"Ville"</label>
                    <input
                        type="text"
                        prop:value=move || form.get().city.unwrap_or_default()
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            form.update(|d| d.city = (!v.is_empty()).then_some(v));
                        }
                    />
                </div>

                <div class="form-group">
                    <label>"Note (0 à 5)"</label>
                    <input
                        type="number"
                        min="0"
                        max="5"
                        step="0.1"
                        prop:value=move || form.get().rating.map(|r| r.to_string()).unwrap_or_default()
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            form.update(|d| d.rating = v.parse::<f64>().ok());
                        }
                    />
                </div>

                <div class="form-group">
                    <label>"Nombre d'avis"</label>
                    <input
                        type="number"
                        min="0"
                        prop:value=move || form.get().total_ratings.map(|n| n.to_string()).unwrap_or_default()
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            form.update(|d| d.total_ratings = v.parse::<i32>().ok());
                        }
                    />
                </div>

                <div class="form-group">
                    <label>"Taux de complétion (%)"</label>
                    <input
                        type="number"
                        min="0"
                        max="100"
                        prop:value=move || form.get().completion_rate.map(|n| n.to_string()).unwrap_or_default()
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            form.update(|d| d.completion_rate = v.parse::<i32>().ok());
                        }
                    />
                </div>

                <div class="form-group">
                    <label>"Spécialités (séparées par des virgules)"</label>
                    <input
                        type="text"
                        placeholder="Secourisme, Incendie, CACES"
                        prop:value=move || form.get().specialties.unwrap_or_default()
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            form.update(|d| d.specialties = (!v.is_empty()).then_some(v));
                        }
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
                    <label>"Photo (URL)"</label>
                    <input
                        type="text"
                        prop:value=move || form.get().image_url.unwrap_or_default()
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            form.update(|d| d.image_url = (!v.is_empty()).then_some(v));
                        }
                    />
                </div>

                <div class="form-group form-group--inline">
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || form.get().mobility_national
                            on:change=move |ev| form.update(|d| d.mobility_national = event_target_checked(&ev))
                        />
                        "Mobilité nationale"
                    </label>
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || form.get().mobility_international
                            on:change=move |ev| form.update(|d| d.mobility_international = event_target_checked(&ev))
                        />
                        "Mobilité internationale"
                    </label>
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || form.get().is_published
                            on:change=move |ev| form.update(|d| d.is_published = event_target_checked(&ev))
                        />
                        "Publié"
                    </label>
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
                        <th>"Nom"</th>
                        <th>"Ville"</th>
                        <th>"Spécialités"</th>
                        <th>"Note"</th>
                        <th>"Publié"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || items.get().into_iter().map(|f| {
                        let id = f.id;
                        let edit_source = f.clone();
                        view! {
                            <tr>
                                <td>{f.name.clone()}</td>
                                <td>{f.city.clone().unwrap_or_else(|| "—".into())}</td>
                                <td>{f.specialties.clone().unwrap_or_else(|| "—".into())}</td>
                                <td>{f.rating.map(|r| format!("{:.1}", r)).unwrap_or_else(|| "—".into())}</td>
                                <td>{if f.is_published { "Oui" } else { "Non" }}</td>
                                <td class="admin-table__actions">
                                    <button class="button button--small" on:click=move |_| {
                                        form.set(FormateurDto::from(&edit_source));
                                        set_error.set(None);
                                    }>
                                        "Modifier"
                                    </button>
                                    <button class="button button--small" on:click=move |_| on_toggle_publish(id)>
                                        {if f.is_published { "Dépublier" } else { "Publier" }}
                                    </button>
                                    <button class="button button--small button--danger" on:click=move |_| on_delete(id)>
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
