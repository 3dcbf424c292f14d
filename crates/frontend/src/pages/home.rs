use leptos::prelude::*;

use crate::domain::formation::ui::public::FormationsSection;
use crate::layout::public::{SiteFooter, SiteHeader};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page">
            <SiteHeader />
            <main class="page__content">
                <section class="hero">
                    <h1>"Formation, prévention et sécurité au travail"</h1>
                    <p>
                        "Himaya accompagne les entreprises marocaines dans la montée en "
                        "compétences de leurs équipes : secourisme, incendie, habilitations "
                        "et journées de sensibilisation."
                    </p>
                    <div class="hero__actions">
                        <a class="button button--primary" href="/nos-formations">"Nos Formations"</a>
                        <a class="button button--secondary" href="/safety-days">"Safety Days"</a>
                    </div>
                </section>

                <FormationsSection />

                <section class="home-links">
                    <a class="home-links__item" href="/nos-formateurs">
                        <h3>"Nos Formateurs"</h3>
                        <p>"Un réseau de formateurs certifiés, partout au Maroc."</p>
                    </a>
                    <a class="home-links__item" href="/safety-days">
                        <h3>"Safety Days"</h3>
                        <p>"Des animations pour faire vivre la culture sécurité."</p>
                    </a>
                </section>
            </main>
            <SiteFooter />
        </div>
    }
}
