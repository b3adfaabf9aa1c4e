//! Read-only view of the session written by the sign-in flow.
//!
//! # Design
//! - The session document belongs to the authentication collaborator; this
//!   module only reads the signed-in email and deletes the key on sign-out.
//! - Any malformed or unauthenticated document reads as "no session".

use moneymachine_config::{SettingsStorage, StorageResult};
use serde::Deserialize;

/// Storage key of the persisted session document.
pub const SESSION_STORAGE_KEY: &str = "auth-storage";

/// The signed-in user as far as settings care.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionUser {
    /// Account email.
    pub email: String,
}

#[derive(Deserialize)]
struct SessionDocument {
    #[serde(default)]
    state: SessionState,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct SessionState {
    #[serde(default)]
    is_authenticated: bool,
    #[serde(default)]
    user: Option<StoredUser>,
}

#[derive(Deserialize)]
struct StoredUser {
    #[serde(default)]
    email: Option<String>,
}

/// Extract the signed-in user from a raw session document.
#[must_use]
pub fn parse_session(raw: &str) -> Option<SessionUser> {
    let document: SessionDocument = serde_json::from_str(raw).ok()?;
    if !document.state.is_authenticated {
        return None;
    }
    let email = document.state.user?.email?;
    let email = email.trim();
    (!email.is_empty()).then(|| SessionUser {
        email: email.to_string(),
    })
}

/// Read the session from storage; read failures count as signed out.
#[must_use]
pub fn read_session<S: SettingsStorage>(storage: &S) -> Option<SessionUser> {
    storage
        .read(SESSION_STORAGE_KEY)
        .ok()
        .flatten()
        .and_then(|raw| parse_session(&raw))
}

/// Delete the session document.
///
/// # Errors
///
/// Propagates the storage backend failure.
pub fn clear_session<S: SettingsStorage>(storage: &S) -> StorageResult<()> {
    storage.remove(SESSION_STORAGE_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use moneymachine_config::MemoryStorage;
    use moneymachine_test_support::mocks::FailingStorage;

    const SIGNED_IN: &str =
        r#"{"state":{"isAuthenticated":true,"user":{"email":"caja@tienda.mx"}},"version":0}"#;

    #[test]
    fn authenticated_documents_yield_email() {
        assert_eq!(
            parse_session(SIGNED_IN),
            Some(SessionUser {
                email: "caja@tienda.mx".into()
            })
        );
    }

    #[test]
    fn missing_user_or_flag_reads_as_signed_out() {
        assert_eq!(
            parse_session(r#"{"state":{"isAuthenticated":false,"user":{"email":"a@b.c"}}}"#),
            None
        );
        assert_eq!(parse_session(r#"{"state":{"isAuthenticated":true}}"#), None);
        assert_eq!(
            parse_session(r#"{"state":{"isAuthenticated":true,"user":{"email":""}}}"#),
            None
        );
        assert_eq!(parse_session("not json"), None);
    }

    #[test]
    fn sign_out_removes_the_session_key() -> anyhow::Result<()> {
        let storage = MemoryStorage::with_entries([(SESSION_STORAGE_KEY, SIGNED_IN)]);
        assert!(read_session(&storage).is_some());
        clear_session(&storage)?;
        assert_eq!(read_session(&storage), None);
        assert_eq!(storage.read(SESSION_STORAGE_KEY)?, None);
        Ok(())
    }

    #[test]
    fn unreadable_storage_reads_as_signed_out() {
        assert_eq!(read_session(&FailingStorage), None);
        assert!(clear_session(&FailingStorage).is_err());
    }
}
