use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;

use crate::system::auth::context::{do_logout, use_auth, SessionState};
use crate::system::auth::guard::RequireAuth;

/// Back-office chrome: sidebar navigation plus the routed admin page.
/// Everything under it sits behind the session guard.
#[component]
pub fn AdminShell() -> impl IntoView {
    view! {
        <RequireAuth>
            <div class="admin-shell">
                <AdminSidebar />
                <main class="admin-shell__content">
                    <Outlet />
                </main>
            </div>
        </RequireAuth>
    }
}

#[component]
fn AdminSidebar() -> impl IntoView {
    let (session, set_session) = use_auth();
    let navigate = use_navigate();

    let username = move || match session.get() {
        SessionState::Authenticated { user, .. } => user.username,
        _ => String::new(),
    };

    let on_logout = move |_| {
        do_logout(session, set_session);
        navigate("/", Default::default());
    };

    view! {
        <aside class="admin-sidebar">
            <div class="admin-sidebar__brand">"Himaya Admin"</div>
            <nav class="admin-sidebar__nav">
                <a href="/protected/admin/formations">"Formations"</a>
                <a href="/protected/admin/formateurs">"Formateurs"</a>
                <a href="/protected/admin/safety-activities">"Safety Days"</a>
            </nav>
            <div class="admin-sidebar__footer">
                <span class="admin-sidebar__user">{username}</span>
                <button class="button button--secondary" on:click=on_logout>
                    "Se déconnecter"
                </button>
                <a href="/">"Voir le site"</a>
            </div>
        </aside>
    }
}
