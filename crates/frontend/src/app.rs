use crate::pages::{Dashboard, LoginPage};
use prescripto_frontend_common::{
    AppContextProvider, SessionProvider, ToastProvider, use_session,
};
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <AppContextProvider>
            <SessionProvider>
                <ToastProvider>
                    <AppContent />
                </ToastProvider>
            </SessionProvider>
        </AppContextProvider>
    }
}

#[function_component(AppContent)]
fn app_content() -> Html {
    let session = use_session();

    match session.tokens.active_role() {
        Some(role) => html! { <Dashboard session={session.clone()} {role} /> },
        None => html! { <LoginPage session={session.clone()} /> },
    }
}
