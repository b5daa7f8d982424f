//! Login form state and the result of a login attempt

use crate::role::Role;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message shown when the backend refuses credentials without saying why
pub const LOGIN_FAILED: &str = "Login failed";

/// Message shown when the request itself failed
pub const LOGIN_ERROR: &str = "An error occurred during login";

/// Message shown when the stored token could not be removed
pub const LOGOUT_ERROR: &str = "Could not log out, please try again";

/// Body of a login request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Where the form is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginPhase {
    #[default]
    EnteringCredentials,
    Submitting,
}

/// Why the form refused an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("A login request is already in progress")]
    Busy,

    #[error("Please fill in your {0}")]
    MissingField(&'static str),
}

/// State owned by the login view
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginForm {
    role: Role,
    email: String,
    password: String,
    phase: LoginPhase,
}

impl LoginForm {
    /// Empty form for `role`
    #[must_use]
    pub fn new(role: Role) -> Self {
        Self {
            role,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    #[must_use]
    pub const fn phase(&self) -> LoginPhase {
        self.phase
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == LoginPhase::Submitting
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    /// Switch to the other role and clear both fields
    pub fn toggle_role(&mut self) -> Result<Role, LoginError> {
        if self.is_submitting() {
            return Err(LoginError::Busy);
        }

        self.role = self.role.toggle();
        self.email.clear();
        self.password.clear();
        Ok(self.role)
    }

    /// Enter the submitting phase and hand out the credentials to send
    pub fn begin_submit(&mut self) -> Result<Credentials, LoginError> {
        if self.is_submitting() {
            return Err(LoginError::Busy);
        }
        if self.email.trim().is_empty() {
            return Err(LoginError::MissingField("email"));
        }
        if self.password.is_empty() {
            return Err(LoginError::MissingField("password"));
        }

        self.phase = LoginPhase::Submitting;
        Ok(Credentials {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }

    /// Leave the submitting phase, whatever the outcome was
    pub fn finish_submit(&mut self) {
        self.phase = LoginPhase::EnteringCredentials;
    }
}

/// Result of one login attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// The backend issued a token for `role`
    SignedIn { role: Role, token: String },
    /// The backend answered but refused the credentials
    Rejected { message: String },
    /// The request failed or the backend answered with an error status
    Failed { message: String },
}

impl LoginOutcome {
    /// Rejection with the server's message, or the generic one
    #[must_use]
    pub fn rejected(message: Option<String>) -> Self {
        Self::Rejected {
            message: non_empty(message).unwrap_or_else(|| LOGIN_FAILED.to_string()),
        }
    }

    /// Failure with the server's message, or the generic one
    #[must_use]
    pub fn failed(message: Option<String>) -> Self {
        Self::Failed {
            message: non_empty(message).unwrap_or_else(|| LOGIN_ERROR.to_string()),
        }
    }

    #[must_use]
    pub const fn is_signed_in(&self) -> bool {
        matches!(self, Self::SignedIn { .. })
    }

    /// Toast to show for this outcome
    #[must_use]
    pub fn notification(&self) -> Notification {
        match self {
            Self::SignedIn { role, .. } => Notification::success(format!("{role} login successful")),
            Self::Rejected { message } | Self::Failed { message } => {
                Notification::error(message.clone())
            }
        }
    }
}

fn non_empty(message: Option<String>) -> Option<String> {
    message.filter(|message| !message.trim().is_empty())
}

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Transient message for the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}
