//! HTTP layer of the Prescripto admin panel
//!
//! Wire types are always available; the `client` feature adds the
//! `reqwest`-based client used by the browser bundle and by host tools.

pub mod types;

#[cfg(feature = "client")]
pub mod client;

pub use types::{ErrorBody, LoginResponse};
