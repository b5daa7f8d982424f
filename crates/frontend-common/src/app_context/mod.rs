//! Application-wide configuration and formatting helpers

mod context;
mod provider;

pub use context::AppContext;
pub use provider::{AppContextProvider, AppContextProviderProps};

use yew::prelude::*;

/// Hook to access the application context
#[hook]
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>()
        .expect("AppContext not found. Make sure to wrap your app with AppContextProvider")
}
