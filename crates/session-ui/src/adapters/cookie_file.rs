//! Session cookie persistence.
//!
//! Stores the client's exported cookie jar (cookies plus their expiry), so a
//! restart behaves like a page reload: the session cookie is still set
//! unless it has lapsed in the meantime.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ClientError;

/// File holding an exported cookie jar.
#[derive(Debug, Clone)]
pub struct CookieFile {
    path: PathBuf,
}

impl CookieFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored jar. A missing or empty file is `None`.
    pub fn load(&self) -> Result<Option<String>, ClientError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        let jar = content.trim();
        if jar.is_empty() {
            return Ok(None);
        }

        debug!(path = %self.path.display(), "Loaded session cookies");
        Ok(Some(jar.to_string()))
    }

    /// Store `jar`, or delete the file when there is nothing to keep.
    pub fn save(&self, jar: Option<&str>) -> Result<(), ClientError> {
        let Some(jar) = jar.filter(|h| !h.trim().is_empty()) else {
            if self.path.exists() {
                fs::remove_file(&self.path)?;
                debug!(path = %self.path.display(), "Removed session cookie file");
            }
            return Ok(());
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.path, jar)?;
        restrict_permissions(&self.path)?;
        debug!(path = %self.path.display(), "Saved session cookies");
        Ok(())
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<(), ClientError> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<(), ClientError> {
    Ok(())
}
