pub mod app_context;
pub mod components;
pub mod logging;
pub mod session;

pub use app_context::{AppContext, AppContextProvider, use_app_context};
pub use components::{Spinner, ToastAction, ToastContext, ToastProvider, use_toasts};
pub use logging::init_logging;
pub use session::{
    BrowserTokenStore, SessionContext, SessionProvider, complete_login, complete_logout,
    use_session,
};
