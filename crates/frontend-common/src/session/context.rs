//! Session context and provider
//!
//! Holds the admin and doctor tokens. Views receive the handle explicitly
//! (see the login page) instead of reaching for a global.

use super::storage::BrowserTokenStore;
use prescripto_core::{LoginOutcome, Notification, Role, SessionTokens};
use std::rc::Rc;
use yew::prelude::*;

/// Session state
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SessionState {
    pub tokens: SessionTokens,
}

/// Session context actions
pub enum SessionAction {
    /// Adopt tokens that are already in `localStorage`
    Replace(SessionTokens),
}

/// Session context
pub type SessionContext = UseReducerHandle<SessionState>;

impl SessionState {
    /// State restored from `localStorage`
    pub fn restore() -> Self {
        Self {
            tokens: SessionTokens::restore(&BrowserTokenStore),
        }
    }
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let SessionAction::Replace(tokens) = action;

        if tokens == self.tokens {
            return self;
        }
        Rc::new(Self { tokens })
    }
}

/// Persist a login outcome, then update the session
///
/// Returns the toast to show, which is an error when storage refused the token.
pub fn complete_login(session: &SessionContext, outcome: &LoginOutcome) -> Notification {
    let mut tokens = session.tokens.clone();
    let notification = tokens.complete_login(&BrowserTokenStore, outcome);
    session.dispatch(SessionAction::Replace(tokens));
    notification
}

/// Remove `role`'s token, then update the session
pub fn complete_logout(session: &SessionContext, role: Role) -> Notification {
    let mut tokens = session.tokens.clone();
    let notification = tokens.complete_logout(&BrowserTokenStore, role);
    session.dispatch(SessionAction::Replace(tokens));
    notification
}

/// Session provider props
#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

/// Session provider component
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_reducer(SessionState::restore);

    html! {
        <ContextProvider<SessionContext> context={session}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

/// Hook to use session context
#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .expect("SessionContext not found. Make sure to wrap your component with SessionProvider")
}
