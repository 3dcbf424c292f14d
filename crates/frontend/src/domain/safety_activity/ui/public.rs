use contracts::domain::safety_activity::SafetyActivity;
use leptos::prelude::*;

use crate::domain::safety_activity::model;
use crate::layout::public::{BackToHome, SiteFooter, SiteHeader};

#[component]
pub fn SafetyActivityCard(activity: SafetyActivity) -> impl IntoView {
    view! {
        <article class="activity-card">
            {activity.image_url.clone().map(|url| view! {
                <img class="activity-card__image" src=url alt=activity.title.clone() />
            })}
            <div class="activity-card__body">
                <h3 class="activity-card__title">{activity.title.clone()}</h3>
                <div class="activity-card__tags">
                    {activity.tags.iter().map(|tag| view! {
                        <span class=format!("chip chip--{}", tag.color)>{tag.label.clone()}</span>
                    }).collect_view()}
                </div>
                {activity.description.clone().map(|desc| view! {
                    <p class="activity-card__desc">{desc}</p>
                })}
            </div>
        </article>
    }
}

/// Safety Days page: team-building and awareness activities.
#[component]
pub fn SafetyDaysPage() -> impl IntoView {
    let (items, set_items) = signal::<Vec<SafetyActivity>>(Vec::new());

    Effect::new(move |_| {
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_all().await {
                Ok(v) => set_items.set(v),
                Err(e) => {
                    log::error!("failed to fetch safety activities: {}", e);
                    set_items.set(Vec::new());
                }
            }
        });
    });

    view! {
        <div class="page">
            <SiteHeader />
            <main class="page__content">
                <BackToHome />
                <h1>"Safety Days"</h1>
                <p class="page__intro">
                    "Des journées d'animation pour ancrer la culture sécurité dans vos équipes."
                </p>

                {move || {
                    let list = items.get();
                    if list.is_empty() {
                        view! { <p class="empty-state">"Aucune activité pour le moment."</p> }.into_any()
                    } else {
                        view! {
                            <div class="card-grid">
                                {list.into_iter().map(|a| view! {
                                    <SafetyActivityCard activity=a />
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
