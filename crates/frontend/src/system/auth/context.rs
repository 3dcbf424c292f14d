use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

/// Session state, resolved once on app start. Protected routes render
/// nothing while it is `Unknown` so a valid stored token never causes a
/// redirect flash to the login page.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionState {
    #[default]
    Unknown,
    Authenticated {
        access_token: String,
        user: UserInfo,
    },
    Unauthenticated,
}

impl SessionState {
    pub fn access_token(&self) -> Option<String> {
        match self {
            SessionState::Authenticated { access_token, .. } => Some(access_token.clone()),
            _ => None,
        }
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (session, set_session) = signal(SessionState::Unknown);

    // Try to restore the session from localStorage on mount
    Effect::new(move |_| {
        spawn_local(async move {
            let Some(access_token) = storage::get_access_token() else {
                set_session.set(SessionState::Unauthenticated);
                return;
            };

            // Validate the token by fetching the current user
            match api::get_current_user(&access_token).await {
                Ok(user) => {
                    set_session.set(SessionState::Authenticated { access_token, user });
                }
                Err(_) => {
                    storage::clear_token();
                    set_session.set(SessionState::Unauthenticated);
                }
            }
        });
    });

    provide_context(session);
    provide_context(set_session);

    children()
}

/// Hook to access session state
pub fn use_auth() -> (ReadSignal<SessionState>, WriteSignal<SessionState>) {
    let session =
        use_context::<ReadSignal<SessionState>>().expect("AuthProvider not found in component tree");
    let set_session = use_context::<WriteSignal<SessionState>>()
        .expect("AuthProvider not found in component tree");

    (session, set_session)
}

/// Helper: perform logout. Clears the stored token and resets the
/// session; the server call is best-effort.
pub fn do_logout(session: ReadSignal<SessionState>, set_session: WriteSignal<SessionState>) {
    let token = session.get_untracked().access_token();
    storage::clear_token();
    set_session.set(SessionState::Unauthenticated);

    if let Some(token) = token {
        spawn_local(async move {
            if let Err(e) = api::logout(&token).await {
                log::warn!("logout request failed: {}", e);
            }
        });
    }
}
