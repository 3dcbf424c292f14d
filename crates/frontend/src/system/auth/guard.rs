use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::{use_auth, SessionState};

/// Wraps the admin routes. While the session is still resolving nothing
/// is rendered; an unauthenticated visitor is redirected to the login
/// page.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (session, _) = use_auth();

    view! {
        {move || match session.get() {
            SessionState::Unknown => ().into_any(),
            SessionState::Unauthenticated => view! { <Redirect path="/auth" /> }.into_any(),
            SessionState::Authenticated { .. } => children().into_any(),
        }}
    }
}
