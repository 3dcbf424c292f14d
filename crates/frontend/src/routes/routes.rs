use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::domain::formateur::ui::admin::FormateursAdminPage;
use crate::domain::formateur::ui::public::NosFormateursPage;
use crate::domain::formation::ui::admin::FormationsAdminPage;
use crate::domain::formation::ui::public::NosFormationsPage;
use crate::domain::safety_activity::ui::admin::SafetyActivitiesAdminPage;
use crate::domain::safety_activity::ui::public::SafetyDaysPage;
use crate::layout::admin::AdminShell;
use crate::pages::home::HomePage;
use crate::system::pages::login::LoginPage;

#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page page--not-found">
            <h1>"Page introuvable"</h1>
            <a href="/">"← Retour à l'accueil"</a>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/nos-formations") view=NosFormationsPage />
                <Route path=path!("/nos-formateurs") view=NosFormateursPage />
                <Route path=path!("/safety-days") view=SafetyDaysPage />
                <Route path=path!("/auth") view=LoginPage />
                <ParentRoute path=path!("/protected/admin") view=AdminShell>
                    <Route path=path!("formations") view=FormationsAdminPage />
                    <Route path=path!("formateurs") view=FormateursAdminPage />
                    <Route path=path!("safety-activities") view=SafetyActivitiesAdminPage />
                    <Route
                        path=path!("")
                        view=|| view! { <Redirect path="/protected/admin/formations" /> }
                    />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
