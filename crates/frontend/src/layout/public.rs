use leptos::prelude::*;

/// Top navigation shared by every public page.
#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">"Himaya"</a>
            <nav class="site-header__nav">
                <a href="/">"Accueil"</a>
                <a href="/nos-formations">"Nos Formations"</a>
                <a href="/nos-formateurs">"Nos Formateurs"</a>
                <a href="/safety-days">"Safety Days"</a>
            </nav>
        </header>
    }
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p>"Himaya — Formation, prévention et sécurité au travail"</p>
            <a href="/auth">"Espace administration"</a>
        </footer>
    }
}

/// Back link rendered at the top of the catalog sub-pages.
#[component]
pub fn BackToHome() -> impl IntoView {
    view! {
        <a class="back-link" href="/">"← Retour à l'accueil"</a>
    }
}
