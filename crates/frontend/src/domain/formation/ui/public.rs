use contracts::domain::category::Category;
use contracts::domain::formation::Formation;
use leptos::prelude::*;

use crate::domain::category::model as category_model;
use crate::domain::formation::model;
use crate::layout::public::{BackToHome, SiteFooter, SiteHeader};
use crate::shared::list_utils::{contains_ci, filter_list, Searchable};
use crate::shared::request_guard::RequestSequence;

impl Searchable for Formation {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.title, filter)
            || self
                .city
                .as_deref()
                .map(|c| contains_ci(c, filter))
                .unwrap_or(false)
            || self
                .short_desc
                .as_deref()
                .map(|d| contains_ci(d, filter))
                .unwrap_or(false)
    }
}

/// Category label for a card. A formation whose category was deleted
/// keeps rendering, with a placeholder instead of a name.
pub fn category_label(categories: &[Category], category_id: Option<i64>) -> String {
    category_id
        .and_then(|id| categories.iter().find(|c| c.id == id))
        .map(|c| c.name.clone())
        .unwrap_or_else(|| "—".to_string())
}

#[component]
pub fn FormationCard(formation: Formation, category: String) -> impl IntoView {
    view! {
        <article class="formation-card">
            {formation.image_url.clone().map(|url| view! {
                <img class="formation-card__image" src=url alt=formation.title.clone() />
            })}
            <div class="formation-card__body">
                <span class="formation-card__category">{category}</span>
                <h3 class="formation-card__title">{formation.title.clone()}</h3>
                {formation.city.clone().map(|city| view! {
                    <p class="formation-card__city">{city}</p>
                })}
                {formation.short_desc.clone().map(|desc| view! {
                    <p class="formation-card__desc">{desc}</p>
                })}
                <div class="formation-card__meta">
                    {formation.duration_days.map(|d| view! {
                        <span>{format!("{} jour(s)", d)}</span>
                    })}
                    {formation.price_mad.map(|p| view! {
                        <span>{format!("{} MAD", p)}</span>
                    })}
                </div>
            </div>
        </article>
    }
}

/// "Nos Formations" preview section on the home page: one tab per
/// category, a few published formations of the selected one.
#[component]
pub fn FormationsSection() -> impl IntoView {
    let (categories, set_categories) = signal::<Vec<Category>>(Vec::new());
    let (items, set_items) = signal::<Vec<Formation>>(Vec::new());
    let (selected, set_selected) = signal::<Option<String>>(None);
    let seq = RequestSequence::new();

    let load = {
        let seq = seq.clone();
        move |slug: Option<String>| {
            let seq = seq.clone();
            let generation = seq.begin();
            wasm_bindgen_futures::spawn_local(async move {
                match model::fetch_public(slug.as_deref()).await {
                    Ok(v) => {
                        if seq.is_current(generation) {
                            set_items.set(v);
                        }
                    }
                    Err(e) => {
                        log::error!("failed to fetch formations: {}", e);
                        if seq.is_current(generation) {
                            set_items.set(Vec::new());
                        }
                    }
                }
            });
        }
    };

    {
        let load = load.clone();
        Effect::new(move |_| {
            let load = load.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match category_model::fetch_categories().await {
                    Ok(list) => {
                        let first_slug = list.first().map(|c| c.slug.clone());
                        set_categories.set(list);
                        set_selected.set(first_slug.clone());
                        load(first_slug);
                    }
                    Err(e) => log::error!("failed to fetch categories: {}", e),
                }
            });
        });
    }

    let select_tab = {
        let load = load.clone();
        move |slug: String| {
            set_selected.set(Some(slug.clone()));
            load(Some(slug));
        }
    };

    view! {
        <section class="formations-section">
            <h2>"Nos Formations"</h2>
            <div class="tabs">
                {move || {
                    let select_tab = select_tab.clone();
                    categories.get().into_iter().map(|cat| {
                        let slug = cat.slug.clone();
                        let active_slug = cat.slug.clone();
                        let select_tab = select_tab.clone();
                        view! {
                            <button
                                class="tabs__tab"
                                class:tabs__tab--active=move || selected.get().as_deref() == Some(active_slug.as_str())
                                on:click=move |_| select_tab(slug.clone())
                            >
                                {cat.name}
                            </button>
                        }
                    }).collect_view()
                }}
            </div>
            <div class="card-grid">
                {move || {
                    let cats = categories.get();
                    items.get().into_iter().take(3).map(|f| {
                        let label = category_label(&cats, f.category_id);
                        view! { <FormationCard formation=f category=label /> }
                    }).collect_view()
                }}
            </div>
            <a class="button button--primary" href="/nos-formations">
                "Découvrez toutes nos formations"
            </a>
        </section>
    }
}

/// Full catalog page: "Toutes nos formations" plus one tab per category,
/// with a local text search.
#[component]
pub fn NosFormationsPage() -> impl IntoView {
    let (categories, set_categories) = signal::<Vec<Category>>(Vec::new());
    let (items, set_items) = signal::<Vec<Formation>>(Vec::new());
    let (selected, set_selected) = signal::<Option<String>>(None);
    let (search, set_search) = signal(String::new());
    let seq = RequestSequence::new();

    let load = {
        let seq = seq.clone();
        move |slug: Option<String>| {
            let seq = seq.clone();
            let generation = seq.begin();
            wasm_bindgen_futures::spawn_local(async move {
                match model::fetch_public(slug.as_deref()).await {
                    Ok(v) => {
                        if seq.is_current(generation) {
                            set_items.set(v);
                        }
                    }
                    Err(e) => {
                        log::error!("failed to fetch formations: {}", e);
                        if seq.is_current(generation) {
                            set_items.set(Vec::new());
                        }
                    }
                }
            });
        }
    };

    {
        let load = load.clone();
        Effect::new(move |_| {
            load(None);
            wasm_bindgen_futures::spawn_local(async move {
                match category_model::fetch_categories().await {
                    Ok(list) => set_categories.set(list),
                    Err(e) => log::error!("failed to fetch categories: {}", e),
                }
            });
        });
    }

    let select_tab = {
        let load = load.clone();
        move |slug: Option<String>| {
            set_selected.set(slug.clone());
            load(slug);
        }
    };
    let select_all = select_tab.clone();

    let filtered = move || filter_list(items.get(), &search.get());

    view! {
        <div class="page">
            <SiteHeader />
            <main class="page__content">
                <BackToHome />
                <h1>"Nos Formations"</h1>

                <div class="tabs">
                    <button
                        class="tabs__tab"
                        class:tabs__tab--active=move || selected.get().is_none()
                        on:click=move |_| select_all(None)
                    >
                        "Toutes nos formations"
                    </button>
                    {move || {
                        let select_tab = select_tab.clone();
                        categories.get().into_iter().map(|cat| {
                            let slug = cat.slug.clone();
                            let active_slug = cat.slug.clone();
                            let select_tab = select_tab.clone();
                            view! {
                                <button
                                    class="tabs__tab"
                                    class:tabs__tab--active=move || selected.get().as_deref() == Some(active_slug.as_str())
                                    on:click=move |_| select_tab(Some(slug.clone()))
                                >
                                    {cat.name}
                                </button>
                            }
                        }).collect_view()
                    }}
                </div>

                <input
                    type="text"
                    class="search-input"
                    placeholder="Rechercher une formation..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />

                {move || {
                    let cats = categories.get();
                    let list = filtered();
                    if list.is_empty() {
                        view! { <p class="empty-state">"Aucune formation trouvée."</p> }.into_any()
                    } else {
                        view! {
                            <div class="card-grid">
                                {list.into_iter().map(|f| {
                                    let label = category_label(&cats, f.category_id);
                                    view! { <FormationCard formation=f category=label /> }
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

    fn formation(title: &str, city: Option<&str>, desc: Option<&str>) -> Formation {
        Formation {
            id: 1,
            category_id: Some(1),
            title: title.into(),
            city: city.map(Into::into),
            short_desc: desc.map(Into::into),
            duration_days: None,
            price_mad: None,
            image_url: None,
            is_published: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_search_covers_title_city_and_description() {
        let f = formation("SST initial", Some("Casablanca"), Some("Gestes qui sauvent"));
        assert!(f.matches_filter("sst"));
        assert!(f.matches_filter("casa"));
        assert!(f.matches_filter("gestes"));
        assert!(!f.matches_filter("incendie"));
    }

    #[test]
    fn test_missing_optional_fields_do_not_match() {
        let f = formation("SST initial", None, None);
        assert!(!f.matches_filter("casa"));
    }

    #[test]
    fn test_dangling_category_renders_placeholder() {
        let categories = vec![Category {
            id: 1,
            slug: "secourisme".into(),
            name: "Secourisme".into(),
            order_index: 0,
        }];
        assert_eq!(category_label(&categories, Some(1)), "Secourisme");
        assert_eq!(category_label(&categories, Some(99)), "—");
        assert_eq!(category_label(&categories, None), "—");
    }
}
