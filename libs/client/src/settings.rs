use std::fs;
use std::io;
use std::path::PathBuf;

/// Persisted client settings.
///
/// Currently just the partition email, stored as a plain string so the user
/// keeps their list across sessions. A missing or empty file means the public
/// partition.
#[derive(Debug, Clone)]
pub struct Settings {
    path: PathBuf,
}

impl Settings {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The saved email, if any. Whitespace is trimmed; an empty file counts
    /// as unset.
    pub fn load_email(&self) -> Option<String> {
        let raw = fs::read_to_string(&self.path).ok()?;
        let email = raw.trim();
        if email.is_empty() {
            None
        } else {
            Some(email.to_string())
        }
    }

    pub fn save_email(&self, email: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, email.trim())
    }

    /// Forget the saved email; clearing an already-clear setting is fine.
    pub fn clear_email(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}
