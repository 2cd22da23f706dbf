//! JSON document storage for the shared ticket data file.
//!
//! The store performs whole-document reads and writes: the consumer
//! application owns no locking protocol, so each run loads the full file,
//! mutates in memory, and rewrites it. Writes go through a temporary
//! sibling file and an atomic rename, so a failure mid-write never leaves a
//! truncated document behind.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Serialize;

use crate::error::{FormatResultExt, IoResultExt, Result};
use crate::models::Dataset;

/// File-backed store for the ticket [`Dataset`].
pub struct TicketStore {
    path: PathBuf,
}

impl TicketStore {
    /// Creates a store for the data file at the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the underlying data file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the full document.
    ///
    /// # Errors
    ///
    /// Returns [`SeederError::Io`](crate::SeederError::Io) when the file is
    /// missing or unreadable, and
    /// [`SeederError::Format`](crate::SeederError::Format) when the content
    /// is not a well-formed document of the expected shape.
    pub fn load(&self) -> Result<Dataset> {
        let content = fs::read_to_string(&self.path).io_context(&self.path)?;
        let dataset: Dataset = serde_json::from_str(&content).format_context(&self.path)?;
        info!(
            "Loaded {} tickets from {}",
            dataset.tickets.len(),
            self.path.display()
        );
        Ok(dataset)
    }

    /// Serializes the document and atomically replaces the data file.
    ///
    /// Output keeps the consumer's formatting: four-space indentation and
    /// raw, unescaped non-ASCII text.
    ///
    /// # Errors
    ///
    /// Returns [`SeederError::Io`](crate::SeederError::Io) when the
    /// temporary file cannot be written or renamed over the target.
    pub fn save(&self, dataset: &Dataset) -> Result<()> {
        let mut buf = Vec::with_capacity(64 * 1024);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        dataset.serialize(&mut serializer)?;
        buf.push(b'\n');

        let tmp_path = tmp_sibling(&self.path);
        debug!("Writing {} bytes to {}", buf.len(), tmp_path.display());
        fs::write(&tmp_path, &buf).io_context(&tmp_path)?;
        fs::rename(&tmp_path, &self.path).io_context(&self.path)?;

        info!(
            "Saved {} tickets to {}",
            dataset.tickets.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// Temporary sibling path for the atomic write: `<file>.tmp` in the same
/// directory, so the final rename never crosses a filesystem boundary.
fn tmp_sibling(path: &Path) -> PathBuf {
    let mut os = path.as_os_str().to_os_string();
    os.push(".tmp");
    PathBuf::from(os)
}

#[cfg(test)]
mod tests {
    use super::tmp_sibling;
    use std::path::Path;

    #[test]
    fn test_tmp_sibling_appends_suffix() {
        let path = Path::new("/data/tickets.json");
        assert_eq!(tmp_sibling(path), Path::new("/data/tickets.json.tmp"));
    }
}
