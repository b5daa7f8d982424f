//! Shared UI components

pub mod spinner;
pub mod toast;

pub use spinner::Spinner;
pub use toast::{ToastAction, ToastContext, ToastProvider, ToastState, use_toasts};
