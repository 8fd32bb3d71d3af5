use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::errors::WikiError;
use crate::types::Page;
use crate::utils::valid_title;

/// Filesystem-backed store mapping page titles to flat files
///
/// A page titled `Foo` is backed by `<data_dir>/Foo.txt`. There is no
/// locking; concurrent saves to the same title are last-writer-wins.
#[derive(Clone)]
pub struct PageStore {
    data_dir: PathBuf,
}

impl PageStore {
    /// Create a new page store rooted at `data_dir`
    pub fn new(data_dir: PathBuf) -> Self {
        debug!("Creating PageStore with data directory: {:?}", data_dir);
        Self { data_dir }
    }

    /// Load a page by title
    ///
    /// Every read failure collapses to `NotFound`: callers treat a missing
    /// file, a permission problem, and any other I/O fault identically as
    /// "page does not exist". The underlying cause is logged.
    pub fn load(&self, title: &str) -> Result<Page, WikiError> {
        let path = self.page_path(title)?;
        debug!("Loading page '{}' from {:?}", title, path);

        match fs::read(&path) {
            Ok(body) => {
                info!("Loaded page '{}', {} bytes", title, body.len());
                Ok(Page::new(title, body))
            }
            Err(e) => {
                warn!("Failed to read page '{}' from {:?}: {}", title, path, e);
                Err(WikiError::NotFound)
            }
        }
    }

    /// Persist a page to its backing file with owner-only permissions
    pub fn save(&self, page: &Page) -> Result<(), WikiError> {
        let path = self.page_path(&page.title)?;
        debug!("Saving page '{}' to {:?}", page.title, path);

        write_owner_only(&path, &page.body)?;
        info!("Saved page '{}', {} bytes", page.title, page.body.len());
        Ok(())
    }

    /// Derive the backing file path for a title
    ///
    /// The title is re-validated here so a caller bypassing the route
    /// layer cannot build a path outside the data directory.
    fn page_path(&self, title: &str) -> Result<PathBuf, WikiError> {
        if !valid_title(title) {
            warn!("Rejected invalid page title: '{}'", title);
            return Err(WikiError::InvalidTitle);
        }
        Ok(self.data_dir.join(format!("{title}.txt")))
    }
}

#[cfg(unix)]
fn write_owner_only(path: &Path, body: &[u8]) -> io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::OpenOptionsExt;

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    file.write_all(body)
}

#[cfg(not(unix))]
fn write_owner_only(path: &Path, body: &[u8]) -> io::Result<()> {
    fs::write(path, body)
}
