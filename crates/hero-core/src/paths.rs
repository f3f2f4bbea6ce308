use crate::error::{HeroError, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const HERO_DIR: &str = ".herofreq";

pub const CONFIG_FILE: &str = ".herofreq/config.yaml";
pub const SESSION_FILE: &str = ".herofreq/session.json";
pub const SESSIONS_DB_FILE: &str = ".herofreq/sessions.redb";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn hero_dir(root: &Path) -> PathBuf {
    root.join(HERO_DIR)
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

pub fn session_path(root: &Path) -> PathBuf {
    root.join(SESSION_FILE)
}

pub fn sessions_db_path(root: &Path) -> PathBuf {
    root.join(SESSIONS_DB_FILE)
}

// ---------------------------------------------------------------------------
// User id validation
// ---------------------------------------------------------------------------

// User ids key remote session records and travel as URL path segments, so
// they follow the same slug rules everywhere.

static USER_ID_RE: OnceLock<Regex> = OnceLock::new();

fn user_id_re() -> &'static Regex {
    USER_ID_RE.get_or_init(|| Regex::new(r"^[a-z0-9][a-z0-9\-]*[a-z0-9]$|^[a-z0-9]$").unwrap())
}

pub fn validate_user_id(user_id: &str) -> Result<()> {
    if user_id.is_empty() || user_id.len() > 64 || !user_id_re().is_match(user_id) {
        return Err(HeroError::InvalidUserId(user_id.to_string()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_user_ids() {
        for id in ["cosmic-wanderer", "a", "hero-42", "x1"] {
            validate_user_id(id).unwrap_or_else(|_| panic!("expected valid: {id}"));
        }
    }

    #[test]
    fn invalid_user_ids() {
        for id in [
            "",
            "-starts-with-dash",
            "ends-with-dash-",
            "has spaces",
            "UPPER",
            "a_b",
            "dots.are.out",
        ] {
            assert!(validate_user_id(id).is_err(), "expected invalid: {id}");
        }
    }

    #[test]
    fn user_id_length_cap() {
        let long = "a".repeat(65);
        assert!(validate_user_id(&long).is_err());
        let ok = "a".repeat(64);
        validate_user_id(&ok).unwrap();
    }

    #[test]
    fn path_helpers() {
        let root = Path::new("/tmp/journey");
        assert_eq!(
            config_path(root),
            PathBuf::from("/tmp/journey/.herofreq/config.yaml")
        );
        assert_eq!(
            session_path(root),
            PathBuf::from("/tmp/journey/.herofreq/session.json")
        );
        assert_eq!(
            sessions_db_path(root),
            PathBuf::from("/tmp/journey/.herofreq/sessions.redb")
        );
    }
}
