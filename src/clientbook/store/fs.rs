use super::record::StoredClient;
use super::DataStore;
use crate::error::{ClientError, Result};
use crate::model::Client;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

/// File-backed store bound to a single JSON data file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Vec<Client>> {
        load_clients(&self.path)
    }

    fn save(&mut self, clients: &[Client]) -> Result<()> {
        save_clients(clients, &self.path)
    }
}

/// Read the collection stored at `path`.
///
/// A missing file is an empty collection. So is a file whose content does not
/// parse as a list of clients: the damage is logged and the caller starts over
/// with nothing. Any other read failure is returned.
pub fn load_clients(path: &Path) -> Result<Vec<Client>> {
    if !path.exists() {
        debug!(path = %path.display(), "no data file yet");
        return Ok(Vec::new());
    }

    let bytes = fs::read(path).map_err(ClientError::Io)?;
    match serde_json::from_slice::<Vec<StoredClient>>(&bytes) {
        Ok(records) => {
            debug!(path = %path.display(), count = records.len(), "loaded clients");
            Ok(records.into_iter().map(Client::from).collect())
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                error = %err,
                "data file is not a valid client list, treating it as empty"
            );
            Ok(Vec::new())
        }
    }
}

/// Write the whole collection to `path`, creating parent directories as needed.
pub fn save_clients(clients: &[Client], path: &Path) -> Result<()> {
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    if let Some(dir) = dir {
        fs::create_dir_all(dir).map_err(ClientError::Io)?;
    }

    let records: Vec<StoredClient> = clients.iter().map(StoredClient::from).collect();
    let content = serde_json::to_string_pretty(&records).map_err(ClientError::Serialization)?;

    // Write next to the target so the rename stays on one filesystem.
    let tmp_file = dir
        .unwrap_or_else(|| Path::new("."))
        .join(format!(".clients-{}.tmp", Uuid::new_v4()));
    fs::write(&tmp_file, content).map_err(ClientError::Io)?;
    if let Err(err) = fs::rename(&tmp_file, path) {
        let _ = fs::remove_file(&tmp_file);
        return Err(ClientError::Io(err));
    }

    debug!(path = %path.display(), count = clients.len(), "saved clients");
    Ok(())
}
