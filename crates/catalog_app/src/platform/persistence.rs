use std::fs;
use std::io::{self, Write};
use std::path::Path;

use catalog_logging::{catalog_info, catalog_warn};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use thiserror::Error;

const STATE_FILENAME: &str = ".catalog_session.ron";

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to serialize session: {0}")]
    Serialize(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PersistedSession {
    last_route: String,
}

/// The route open when the app last exited, if one was saved.
pub fn load_last_route(state_dir: &Path) -> Option<String> {
    let path = state_dir.join(STATE_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return None,
        Err(err) => {
            catalog_warn!("Failed to read session from {:?}: {}", path, err);
            return None;
        }
    };

    match ron::from_str::<PersistedSession>(&content) {
        Ok(session) if !session.last_route.trim().is_empty() => {
            catalog_info!("Restoring route {} from {:?}", session.last_route, path);
            Some(session.last_route)
        }
        Ok(_) => None,
        Err(err) => {
            catalog_warn!("Failed to parse session from {:?}: {}", path, err);
            None
        }
    }
}

/// Writes the session file atomically: temp file in the same directory, then rename.
pub fn save_last_route(state_dir: &Path, route: &str) -> Result<(), PersistError> {
    fs::create_dir_all(state_dir)?;
    let session = PersistedSession {
        last_route: route.to_string(),
    };
    let content = ron::ser::to_string_pretty(&session, ron::ser::PrettyConfig::new())
        .map_err(|err| PersistError::Serialize(err.to_string()))?;

    let mut tmp = NamedTempFile::new_in(state_dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;
    tmp.persist(state_dir.join(STATE_FILENAME))
        .map_err(|err| PersistError::Io(err.error))?;
    Ok(())
}
