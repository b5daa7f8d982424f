//! Per-role session tokens and the storage they are persisted to

use crate::error::CoreResult;
use crate::login::{LOGOUT_ERROR, LoginOutcome, Notification};
use crate::role::Role;
use std::cell::RefCell;
use std::collections::HashMap;

/// Key/value storage for raw token strings
///
/// The browser build backs this with `localStorage`; tests and host tools use
/// [`MemoryTokenStore`].
#[cfg_attr(test, mockall::automock)]
pub trait TokenStore {
    /// Read the token stored under `key`
    fn load(&self, key: &str) -> CoreResult<Option<String>>;

    /// Store `token` under `key`, replacing any previous value
    fn save(&self, key: &str, token: &str) -> CoreResult<()>;

    /// Delete the value under `key`
    fn remove(&self, key: &str) -> CoreResult<()>;
}

/// In-memory [`TokenStore`]
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value under `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self, key: &str) -> CoreResult<Option<String>> {
        Ok(self.get(key))
    }

    fn save(&self, key: &str, token: &str) -> CoreResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), token.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> CoreResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Token currently held for each role
///
/// Each role owns exactly one slot and one storage key; writing one never
/// touches the other.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionTokens {
    admin: Option<String>,
    doctor: Option<String>,
}

impl SessionTokens {
    /// Read both roles' tokens back from `store`
    ///
    /// A slot that cannot be read starts out signed out.
    pub fn restore(store: &impl TokenStore) -> Self {
        let mut tokens = Self::default();

        for role in Role::ALL {
            match store.load(role.storage_key()) {
                Ok(token) => *tokens.slot_mut(role) = token.filter(|token| !token.is_empty()),
                Err(err) => tracing::error!(%role, %err, "Failed to restore session token"),
            }
        }

        tokens
    }

    #[must_use]
    pub fn token(&self, role: Role) -> Option<&str> {
        match role {
            Role::Admin => self.admin.as_deref(),
            Role::Doctor => self.doctor.as_deref(),
        }
    }

    #[must_use]
    pub fn is_signed_in(&self, role: Role) -> bool {
        self.token(role).is_some()
    }

    /// Role whose dashboard should be shown, admin first
    #[must_use]
    pub fn active_role(&self) -> Option<Role> {
        Role::ALL.into_iter().find(|role| self.is_signed_in(*role))
    }

    /// Persist `token` for `role` and hold it
    pub fn sign_in(
        &mut self,
        store: &impl TokenStore,
        role: Role,
        token: impl Into<String>,
    ) -> CoreResult<()> {
        let token = token.into();
        store.save(role.storage_key(), &token)?;
        *self.slot_mut(role) = Some(token);
        tracing::info!(%role, "Signed in");
        Ok(())
    }

    /// Drop the token for `role` from `store`, then from memory
    ///
    /// If the store refuses, the role stays signed in so a reload cannot
    /// disagree with what is shown.
    pub fn sign_out(&mut self, store: &impl TokenStore, role: Role) -> CoreResult<()> {
        store.remove(role.storage_key())?;
        *self.slot_mut(role) = None;
        tracing::info!(%role, "Signed out");
        Ok(())
    }

    /// Record a login outcome; returns whether a token was stored
    pub fn apply(&mut self, store: &impl TokenStore, outcome: &LoginOutcome) -> CoreResult<bool> {
        match outcome {
            LoginOutcome::SignedIn { role, token } => {
                self.sign_in(store, *role, token.clone())?;
                Ok(true)
            }
            LoginOutcome::Rejected { .. } | LoginOutcome::Failed { .. } => Ok(false),
        }
    }

    /// Apply `outcome` and pick the toast for it
    ///
    /// A token the store refuses to keep turns a successful login into the
    /// generic login error.
    pub fn complete_login(
        &mut self,
        store: &impl TokenStore,
        outcome: &LoginOutcome,
    ) -> Notification {
        match self.apply(store, outcome) {
            Ok(_) => outcome.notification(),
            Err(err) => {
                tracing::error!(%err, "Failed to persist session token");
                LoginOutcome::failed(None).notification()
            }
        }
    }

    /// Sign `role` out and pick the toast for it
    pub fn complete_logout(&mut self, store: &impl TokenStore, role: Role) -> Notification {
        match self.sign_out(store, role) {
            Ok(()) => Notification::success(format!("{role} logged out")),
            Err(err) => {
                tracing::error!(%role, %err, "Failed to remove session token");
                Notification::error(LOGOUT_ERROR)
            }
        }
    }

    fn slot_mut(&mut self, role: Role) -> &mut Option<String> {
        match role {
            Role::Admin => &mut self.admin,
            Role::Doctor => &mut self.doctor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::login::LOGIN_ERROR;
    use mockall::predicate::eq;

    #[test]
    fn sign_in_writes_only_the_role_key() {
        let store = MemoryTokenStore::new();
        let mut tokens = SessionTokens::default();

        tokens.sign_in(&store, Role::Admin, "admin-token").unwrap();

        assert_eq!(store.get("aToken").as_deref(), Some("admin-token"));
        assert_eq!(store.get("dToken"), None);
        assert_eq!(tokens.token(Role::Admin), Some("admin-token"));
        assert!(!tokens.is_signed_in(Role::Doctor));
    }

    #[test]
    fn restore_reads_both_roles() {
        let store = MemoryTokenStore::new();
        store.save("aToken", "a").unwrap();
        store.save("dToken", "d").unwrap();

        let tokens = SessionTokens::restore(&store);
        assert_eq!(tokens.token(Role::Admin), Some("a"));
        assert_eq!(tokens.token(Role::Doctor), Some("d"));
        assert_eq!(tokens.active_role(), Some(Role::Admin));
    }

    #[test]
    fn empty_stored_token_counts_as_signed_out() {
        let store = MemoryTokenStore::new();
        store.save("dToken", "").unwrap();

        let tokens = SessionTokens::restore(&store);
        assert_eq!(tokens.active_role(), None);
    }

    #[test]
    fn sign_out_keeps_the_other_role() {
        let store = MemoryTokenStore::new();
        let mut tokens = SessionTokens::default();
        tokens.sign_in(&store, Role::Admin, "a").unwrap();
        tokens.sign_in(&store, Role::Doctor, "d").unwrap();

        tokens.sign_out(&store, Role::Admin).unwrap();

        assert_eq!(store.get("aToken"), None);
        assert_eq!(store.get("dToken").as_deref(), Some("d"));
        assert_eq!(tokens.active_role(), Some(Role::Doctor));
    }

    #[test]
    fn only_signed_in_outcomes_are_stored() {
        let store = MemoryTokenStore::new();
        let mut tokens = SessionTokens::default();

        let stored = tokens
            .apply(&store, &LoginOutcome::rejected(Some("Invalid credentials".into())))
            .unwrap();
        assert!(!stored);
        assert!(store.is_empty());

        let outcome = LoginOutcome::SignedIn {
            role: Role::Doctor,
            token: "d".into(),
        };
        assert!(tokens.apply(&store, &outcome).unwrap());
        assert_eq!(store.get("dToken").as_deref(), Some("d"));
    }

    #[test]
    fn storage_failure_leaves_slot_empty() {
        let mut store = MockTokenStore::new();
        store
            .expect_save()
            .with(eq("aToken"), eq("a"))
            .times(1)
            .returning(|_, _| Err(CoreError::storage("quota exceeded")));

        let mut tokens = SessionTokens::default();
        let result = tokens.sign_in(&store, Role::Admin, "a");

        assert!(matches!(result, Err(CoreError::Storage { .. })));
        assert!(!tokens.is_signed_in(Role::Admin));
    }

    #[test]
    fn unreadable_slot_restores_as_signed_out() {
        let mut store = MockTokenStore::new();
        store
            .expect_load()
            .with(eq("aToken"))
            .returning(|_| Err(CoreError::storage("access denied")));
        store
            .expect_load()
            .with(eq("dToken"))
            .returning(|_| Ok(Some("d".to_string())));

        let tokens = SessionTokens::restore(&store);
        assert_eq!(tokens.active_role(), Some(Role::Doctor));
    }

    #[test]
    fn failed_remove_keeps_role_signed_in() {
        let mut store = MockTokenStore::new();
        store.expect_save().returning(|_, _| Ok(()));
        store
            .expect_remove()
            .with(eq("dToken"))
            .times(1)
            .returning(|_| Err(CoreError::storage("denied")));

        let mut tokens = SessionTokens::default();
        tokens.sign_in(&store, Role::Doctor, "d").unwrap();

        let result = tokens.sign_out(&store, Role::Doctor);

        assert!(matches!(result, Err(CoreError::Storage { .. })));
        assert_eq!(tokens.token(Role::Doctor), Some("d"));
    }

    #[test]
    fn login_that_cannot_be_stored_reports_an_error() {
        let mut store = MockTokenStore::new();
        store
            .expect_save()
            .returning(|_, _| Err(CoreError::storage("QuotaExceededError")));

        let outcome = LoginOutcome::SignedIn {
            role: Role::Admin,
            token: "t".into(),
        };
        let mut tokens = SessionTokens::default();
        let notification = tokens.complete_login(&store, &outcome);

        assert_eq!(notification, Notification::error(LOGIN_ERROR));
        assert_eq!(tokens.active_role(), None);
    }

    #[test]
    fn stored_login_reports_success() {
        let store = MemoryTokenStore::new();
        let outcome = LoginOutcome::SignedIn {
            role: Role::Doctor,
            token: "d".into(),
        };
        let mut tokens = SessionTokens::default();

        let notification = tokens.complete_login(&store, &outcome);

        assert_eq!(notification, Notification::success("Doctor login successful"));
        assert_eq!(tokens.active_role(), Some(Role::Doctor));
    }

    #[test]
    fn rejected_login_keeps_its_message() {
        let store = MemoryTokenStore::new();
        let mut tokens = SessionTokens::default();

        let outcome = LoginOutcome::rejected(Some("Invalid credentials".into()));
        let notification = tokens.complete_login(&store, &outcome);

        assert_eq!(notification, Notification::error("Invalid credentials"));
        assert!(store.is_empty());
    }

    #[test]
    fn logout_toast_follows_the_store() {
        let store = MemoryTokenStore::new();
        let mut tokens = SessionTokens::default();
        tokens.sign_in(&store, Role::Admin, "a").unwrap();

        let notification = tokens.complete_logout(&store, Role::Admin);
        assert_eq!(notification, Notification::success("Admin logged out"));
        assert_eq!(store.get("aToken"), None);

        let mut failing = MockTokenStore::new();
        failing.expect_save().returning(|_, _| Ok(()));
        failing
            .expect_remove()
            .returning(|_| Err(CoreError::storage("denied")));
        let mut tokens = SessionTokens::default();
        tokens.sign_in(&failing, Role::Admin, "a").unwrap();

        let notification = tokens.complete_logout(&failing, Role::Admin);
        assert_eq!(notification, Notification::error(LOGOUT_ERROR));
        assert!(tokens.is_signed_in(Role::Admin));
    }
}
