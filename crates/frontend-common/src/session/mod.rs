//! Session module

pub mod context;
pub mod storage;

// Re-export commonly used items
pub use context::{
    SessionAction, SessionContext, SessionProvider, SessionState, complete_login,
    complete_logout, use_session,
};
pub use storage::BrowserTokenStore;
