//! Signed-in credential kept between runs.
//!
//! File location: `<config_dir>/<session.file>` (default `session.json`).
//! The file holds a bearer token, so it is created owner-only on unix.

use crate::{CliError, CliResult};

use ori_auth::PersistedCredential;

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, warn};

#[derive(Debug, Clone)]
pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored credential.
    ///
    /// A missing file means signed out. A file that no longer parses is
    /// treated the same way and replaced on the next save.
    pub fn load(&self) -> CliResult<Option<PersistedCredential>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| CliError::SessionIo {
            path: self.path.clone(),
            source: e,
        })?;

        match serde_json::from_str::<PersistedCredential>(&content) {
            Ok(credential) => {
                debug!("Restored session for {}", credential.identity.id);
                Ok(Some(credential))
            }
            Err(e) => {
                warn!("Ignoring unreadable session file {}: {e}", self.path.display());
                Ok(None)
            }
        }
    }

    /// Write `credential`, or remove the file when signed out.
    pub fn save(&self, credential: Option<&PersistedCredential>) -> CliResult<()> {
        let Some(credential) = credential else {
            return self.remove();
        };

        let content =
            serde_json::to_string_pretty(credential).map_err(|e| CliError::SessionJson {
                path: self.path.clone(),
                source: e,
            })?;

        self.ensure_parent_dir()?;
        self.open_for_write()
            .and_then(|mut file| file.write_all(content.as_bytes()))
            .map_err(|e| CliError::SessionIo {
                path: self.path.clone(),
                source: e,
            })?;

        debug!("Saved session for {}", credential.identity.id);
        Ok(())
    }

    /// Delete the file. Silently succeeds if it does not exist.
    pub fn remove(&self) -> CliResult<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path).map_err(|e| CliError::SessionIo {
                path: self.path.clone(),
                source: e,
            })?;
        }
        Ok(())
    }

    fn ensure_parent_dir(&self) -> CliResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.exists()
        {
            std::fs::create_dir_all(dir).map_err(|e| CliError::SessionIo {
                path: dir.to_path_buf(),
                source: e,
            })?;
        }
        Ok(())
    }

    /// Opens the file truncated and owner-only. The mode passed to `open` only
    /// applies on creation, so an existing file is tightened before any write.
    fn open_for_write(&self) -> std::io::Result<std::fs::File> {
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let file = options.open(&self.path)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
        }

        Ok(file)
    }
}
