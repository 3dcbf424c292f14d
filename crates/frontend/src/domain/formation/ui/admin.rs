use contracts::domain::category::Category;
use contracts::domain::formation::{Formation, FormationDto};
use leptos::prelude::*;

use crate::domain::category::model as category_model;
use crate::domain::formation::model;
use crate::domain::formation::ui::public::category_label;
use crate::system::auth::context::use_auth;

/// Back-office CRUD for formations. One form bound to the record being
/// edited; the list is reloaded after every mutation.
#[component]
pub fn FormationsAdminPage() -> impl IntoView {
    let (session, _) = use_auth();
    let (items, set_items) = signal::<Vec<Formation>>(Vec::new());
    let (categories, set_categories) = signal::<Vec<Category>>(Vec::new());
    let form = RwSignal::new(FormationDto::default());
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

    Effect::new(move |_| {
        reload();
        wasm_bindgen_futures::spawn_local(async move {
            match category_model::fetch_categories().await {
                Ok(v) => set_categories.set(v),
                Err(e) => log::error!("failed to fetch categories: {}", e),
            }
        });
    });

    let reset_form = move || {
        form.set(FormationDto::default());
        set_error.set(None);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let dto = form.get();

        // Client-side validation blocks the request entirely.
        if let Err(msg) = dto.validate() {
            set_error.set(Some(msg));
            return;
        }

        let Some(token) = token() else { return };
        wasm_bindgen_futures::spawn_local(async move {
            match model::save(&dto, &token).await {
                Ok(()) => {
                    form.set(FormationDto::default());
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
                w.confirm_with_message("Supprimer définitivement cette formation ?")
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
            <h1>"Formations"</h1>

            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}

            <form class="admin-form" on:submit=on_submit>
                <h2>{move || if is_editing() { "Modifier la formation" } else { "Nouvelle formation" }}</h2>

                <div class="form-group">
                    <label>"Titre *"</label>
                    <input
                        type="text"
                        prop:value=move || form.get().title
                        on:input=move |ev| form.update(|d| d.title = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label>"Catégorie *"</label>
                    <select on:change=move |ev| {
                        let v = event_target_value(&ev);
                        form.update(|d| d.category_id = v.parse::<i64>().ok());
                    }>
                        <option value="" selected=move || form.get().category_id.is_none()>
                            "— Choisir une catégorie —"
                        </option>
                        {move || categories.get().into_iter().map(|c| {
                            let id = c.id;
                            view! {
                                <option
                                    value=id.to_string()
                                    selected=move || form.get().category_id == Some(id)
                                >
                                    {c.name}
                                </option>
                            }
                        }).collect_view()}
                    </select>
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
                    <label>"Description courte"</label>
                    <textarea
                        prop:value=move || form.get().short_desc.unwrap_or_default()
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            form.update(|d| d.short_desc = (!v.is_empty()).then_some(v));
                        }
                    />
                </div>

                <div class="form-group">
                    <label>"Durée (jours)"</label>
                    <input
                        type="number"
                        min="0"
                        prop:value=move || form.get().duration_days.map(|d| d.to_string()).unwrap_or_default()
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            form.update(|d| d.duration_days = v.parse::<i32>().ok());
                        }
                    />
                </div>

                <div class="form-group">
                    <label>"Prix (MAD)"</label>
                    <input
                        type="number"
                        min="0"
                        step="0.01"
                        prop:value=move || form.get().price_mad.map(|p| p.to_string()).unwrap_or_default()
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            form.update(|d| d.price_mad = v.parse::<f64>().ok());
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

                <div class="form-group form-group--inline">
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || form.get().is_published
                            on:change=move |ev| form.update(|d| d.is_published = event_target_checked(&ev))
                        />
                        "Publiée"
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
                        <th>"Titre"</th>
                        <th>"Catégorie"</th>
                        <th>"Ville"</th>
                        <th>"Créée le"</th>
                        <th>"Publiée"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let cats = categories.get();
                        items.get().into_iter().map(|f| {
                            let id = f.id;
                            let label = category_label(&cats, f.category_id);
                            let edit_source = f.clone();
                            view! {
                                <tr>
                                    <td>{f.title.clone()}</td>
                                    <td>{label}</td>
                                    <td>{f.city.clone().unwrap_or_else(|| "—".into())}</td>
                                    <td>{f.created_at.format("%Y-%m-%d").to_string()}</td>
                                    <td>{if f.is_published { "Oui" } else { "Non" }}</td>
                                    <td class="admin-table__actions">
                                        <button class="button button--small" on:click=move |_| {
                                            form.set(FormationDto::from(&edit_source));
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
                        }).collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}
