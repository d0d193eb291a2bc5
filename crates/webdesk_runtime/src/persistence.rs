//! Shell preference persistence.
//!
//! Only [`ShellPrefs`] (wallpaper + language) is persisted, under a single
//! documented localStorage key. Window geometry and stacking deliberately
//! reset each session. On non-WASM targets the load/store functions are
//! no-ops so the native test build compiles.

use thiserror::Error;

use crate::model::ShellPrefs;

/// localStorage key for the serialized [`ShellPrefs`] payload.
pub const PREFS_KEY: &str = "webdesk.prefs.v1";

/// Preference persistence failures. These degrade to warnings; the shell
/// always boots with defaults when storage is unavailable or corrupt.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PrefsError {
    /// localStorage is unavailable (denied, detached, or non-browser host).
    #[error("local storage unavailable")]
    StorageUnavailable,
    /// The stored payload failed to encode/decode.
    #[error("prefs payload invalid: {0}")]
    InvalidPayload(String),
}

/// Serializes prefs to the persisted JSON payload.
pub fn encode_prefs(prefs: &ShellPrefs) -> Result<String, PrefsError> {
    serde_json::to_string(prefs).map_err(|err| PrefsError::InvalidPayload(err.to_string()))
}

/// Parses a persisted payload back into prefs.
pub fn decode_prefs(raw: &str) -> Result<ShellPrefs, PrefsError> {
    serde_json::from_str(raw).map_err(|err| PrefsError::InvalidPayload(err.to_string()))
}

/// Loads persisted prefs, if any.
pub fn load_prefs() -> Result<Option<ShellPrefs>, PrefsError> {
    #[cfg(target_arch = "wasm32")]
    {
        let storage = local_storage().ok_or(PrefsError::StorageUnavailable)?;
        let Some(raw) = storage
            .get_item(PREFS_KEY)
            .map_err(|_| PrefsError::StorageUnavailable)?
        else {
            return Ok(None);
        };
        decode_prefs(&raw).map(Some)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Ok(None)
    }
}

/// Persists the current prefs.
pub fn save_prefs(prefs: &ShellPrefs) -> Result<(), PrefsError> {
    let payload = encode_prefs(prefs)?;

    #[cfg(target_arch = "wasm32")]
    {
        let storage = local_storage().ok_or(PrefsError::StorageUnavailable)?;
        storage
            .set_item(PREFS_KEY, &payload)
            .map_err(|_| PrefsError::StorageUnavailable)?;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = payload;
    }

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn prefs_payload_round_trips() {
        let prefs = ShellPrefs {
            wallpaper_id: "dusk".to_string(),
            language: "de".to_string(),
        };
        let decoded = decode_prefs(&encode_prefs(&prefs).unwrap()).unwrap();
        assert_eq!(decoded, prefs);
    }

    #[test]
    fn corrupt_payload_is_an_error_not_a_panic() {
        assert!(matches!(
            decode_prefs("{not json"),
            Err(PrefsError::InvalidPayload(_))
        ));
    }
}
