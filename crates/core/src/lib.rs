//! Prescripto admin core types and utilities

pub mod config;
pub mod dates;
pub mod error;
pub mod login;
pub mod role;
pub mod session;

pub use config::AppConfig;
pub use dates::{DateError, INVALID_DATE, age_label, compute_age, format_slot_date};
pub use error::{CoreError, CoreResult};
pub use login::{
    Credentials, LoginError, LoginForm, LoginOutcome, LoginPhase, Notification, NotificationKind,
};
pub use role::Role;
pub use session::{MemoryTokenStore, SessionTokens, TokenStore};
