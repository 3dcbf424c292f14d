use contracts::domain::formateur::{derive_specialty_tabs, has_specialty, Formateur};
use leptos::prelude::*;

use crate::domain::formateur::model;
use crate::layout::public::{BackToHome, SiteFooter, SiteHeader};
use crate::shared::list_utils::{contains_ci, filter_list, Searchable};

impl Searchable for Formateur {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.name, filter)
            || self
                .city
                .as_deref()
                .map(|c| contains_ci(c, filter))
                .unwrap_or(false)
            || self
                .specialties
                .as_deref()
                .map(|s| contains_ci(s, filter))
                .unwrap_or(false)
            || self
                .description
                .as_deref()
                .map(|d| contains_ci(d, filter))
                .unwrap_or(false)
    }
}

#[component]
pub fn FormateurCard(formateur: Formateur) -> impl IntoView {
    let specialties = formateur
        .specialties
        .as_deref()
        .map(contracts::domain::formateur::split_specialties)
        .unwrap_or_default();

    view! {
        <article class="formateur-card">
            {formateur.image_url.clone().map(|url| view! {
                <img class="formateur-card__image" src=url alt=formateur.name.clone() />
            })}
            <div class="formateur-card__body">
                <h3 class="formateur-card__name">{formateur.name.clone()}</h3>
                {formateur.city.clone().map(|city| view! {
                    <p class="formateur-card__city">{city}</p>
                })}
                {formateur.rating.map(|r| view! {
                    <p class="formateur-card__rating">
                        {format!("★ {:.1} ({} avis)", r, formateur.total_ratings.unwrap_or(0))}
                    </p>
                })}
                {formateur.completion_rate.map(|rate| view! {
                    <p class="formateur-card__completion">
                        {format!("{}% de sessions menées à terme", rate)}
                    </p>
                })}
                <div class="formateur-card__specialties">
                    {specialties.into_iter().map(|s| view! {
                        <span class="chip">{s}</span>
                    }).collect_view()}
                </div>
                {formateur.description.clone().map(|desc| view! {
                    <p class="formateur-card__desc">{desc}</p>
                })}
                <div class="formateur-card__mobility">
                    {formateur.mobility_national.then(|| view! {
                        <span class="chip chip--outline">"Mobilité nationale"</span>
                    })}
                    {formateur.mobility_international.then(|| view! {
                        <span class="chip chip--outline">"Mobilité internationale"</span>
                    })}
                </div>
            </div>
        </article>
    }
}

/// Public trainers page: one fetch on mount, then purely local
/// filtering by derived specialty tab and text search.
#[component]
pub fn NosFormateursPage() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Formateur>>(Vec::new());
    let (selected_tab, set_selected_tab) = signal::<Option<String>>(None);
    let (search, set_search) = signal(String::new());

    Effect::new(move |_| {
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_public().await {
                Ok(v) => set_items.set(v),
                Err(e) => {
                    log::error!("failed to fetch formateurs: {}", e);
                    set_items.set(Vec::new());
                }
            }
        });
    });

    let tabs = move || {
        let list = items.get();
        derive_specialty_tabs(list.iter().filter_map(|f| f.specialties.as_deref()))
    };

    let filtered = move || {
        let mut list = items.get();
        if let Some(tab) = selected_tab.get() {
            list.retain(|f| {
                f.specialties
                    .as_deref()
                    .map(|s| has_specialty(s, &tab))
                    .unwrap_or(false)
            });
        }
        filter_list(list, &search.get())
    };

    view! {
        <div class="page">
            <SiteHeader />
            <main class="page__content">
                <BackToHome />
                <h1>"Nos Formateurs"</h1>

                <div class="tabs">
                    <button
                        class="tabs__tab"
                        class:tabs__tab--active=move || selected_tab.get().is_none()
                        on:click=move |_| set_selected_tab.set(None)
                    >
                        "Tous"
                    </button>
                    {move || tabs().into_iter().map(|tab| {
                        let tab_for_click = tab.clone();
                        let tab_for_active = tab.clone();
                        view! {
                            <button
                                class="tabs__tab"
                                class:tabs__tab--active=move || selected_tab.get().as_deref() == Some(tab_for_active.as_str())
                                on:click=move |_| set_selected_tab.set(Some(tab_for_click.clone()))
                            >
                                {tab}
                            </button>
                        }
                    }).collect_view()}
                </div>

                <input
                    type="text"
                    class="search-input"
                    placeholder="Rechercher un formateur..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />

                {move || {
                    let list = filtered();
                    if list.is_empty() {
                        view! { <p class="empty-state">"Aucun formateur trouvé."</p> }.into_any()
                    } else {
                        view! {
                            <div class="card-grid">
                                {list.into_iter().map(|f| view! {
                                    <FormateurCard formateur=f />
                                }).collect_view()}
                            </div>
                        }.into_any()
                    }
                }}
            </main>
            <SiteFooter />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn formateur(name: &str, specialties: Option<&str>) -> Formateur {
        Formateur {
            id: 1,
            name: name.into(),
            city: Some("Rabat".into()),
            rating: None,
            total_ratings: None,
            completion_rate: None,
            specialties: specialties.map(Into::into),
            description: None,
            image_url: None,
            is_published: true,
            mobility_national: false,
            mobility_international: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_search_covers_specialties() {
        let f = formateur("A. Benali", Some("Secourisme, Incendie"));
        assert!(f.matches_filter("incendie"));
        assert!(f.matches_filter("benali"));
        assert!(f.matches_filter("rabat"));
        assert!(!f.matches_filter("caces"));
    }

    #[test]
    fn test_trainer_without_specialties_still_searchable_by_name() {
        let f = formateur("A. Benali", None);
        assert!(f.matches_filter("benali"));
        assert!(!f.matches_filter("incendie"));
    }
}
