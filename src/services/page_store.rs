use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, error, warn};

use crate::errors::WikiError;
use crate::types::Page;

/// Service for page persistence: one `<title>.txt` file per page in the
/// data directory. There is no locking; concurrent saves to the same title
/// race at the filesystem level and the last writer wins.
#[derive(Clone)]
pub struct PageStore {
    data_dir: PathBuf,
}

impl PageStore {
    /// Create a new page store
    pub fn new(data_dir: PathBuf) -> Self {
        debug!("Creating PageStore with data directory: {:?}", data_dir);
        Self { data_dir }
    }

    /// Path of the file backing `title`. Callers hand in validated titles;
    /// the route layer guarantees no separators or parent references.
    fn page_path(&self, title: &str) -> PathBuf {
        self.data_dir.join(format!("{}.txt", title))
    }

    /// Load a page body from disk. Any read failure is reported as a
    /// missing page; the title list is populated on every successful load.
    pub fn load(&self, title: &str) -> Result<Page, WikiError> {
        let path = self.page_path(title);
        debug!("Loading page '{}' from {:?}", title, path);

        let body = fs::read(&path).map_err(|e| {
            warn!("Unable to load page '{}': {}", title, e);
            WikiError::PageNotFound {
                title: title.to_string(),
            }
        })?;

        Ok(Page {
            title: title.to_string(),
            body,
            list: self.list_titles(),
        })
    }

    /// Write a page body to disk, creating or truncating its file with
    /// owner-only permissions. Not atomic: a write that fails midway can
    /// leave a truncated file behind.
    pub fn save(&self, page: &Page) -> Result<(), WikiError> {
        let path = self.page_path(&page.title);
        debug!(
            "Saving page '{}' ({} bytes) to {:?}",
            page.title,
            page.body.len(),
            path
        );

        let mut file = open_owner_rw(&path).map_err(|e| {
            error!("Unable to create page file for '{}': {}", page.title, e);
            WikiError::Io(e)
        })?;
        file.write_all(&page.body).map_err(|e| {
            error!("Unable to save page '{}': {}", page.title, e);
            WikiError::Io(e)
        })
    }

    /// Titles of all persisted pages, in directory-iteration order. A
    /// directory read failure degrades to an empty list rather than an
    /// error, so the home screen always renders.
    pub fn list_titles(&self) -> Vec<String> {
        let entries = match fs::read_dir(&self.data_dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Cannot read data directory {:?}: {}", self.data_dir, e);
                return Vec::new();
            }
        };

        let mut titles = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Failed to read data directory entry: {}", e);
                    continue;
                }
            };
            let is_file = entry.file_type().map(|ft| ft.is_file()).unwrap_or(false);
            if !is_file {
                continue;
            }
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if let Some(title) = name.strip_suffix(".txt") {
                titles.push(title.to_string());
            }
        }
        titles
    }
}

#[cfg(unix)]
fn open_owner_rw(path: &Path) -> std::io::Result<fs::File> {
    use std::os::unix::fs::OpenOptionsExt;
    fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)
}

#[cfg(not(unix))]
fn open_owner_rw(path: &Path) -> std::io::Result<fs::File> {
    fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}
