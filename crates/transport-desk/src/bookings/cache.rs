use super::dataset::Dataset;
use super::loader::{DatasetLoader, LoadError};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info};

/// Process-wide memo of loaded datasets, keyed by source path.
///
/// The map lock is held across a first-time parse, so concurrent callers for
/// a cold source wait for one load instead of parsing twice. Failed loads are
/// never stored.
#[derive(Debug, Default)]
pub struct DatasetCache {
    entries: Mutex<HashMap<PathBuf, Arc<Dataset>>>,
}

impl DatasetCache {
    pub fn get_or_load(&self, path: &Path) -> Result<Arc<Dataset>, LoadError> {
        let mut entries = self.entries();
        if let Some(dataset) = entries.get(path) {
            debug!(source = %path.display(), "bookings cache hit");
            return Ok(Arc::clone(dataset));
        }

        let dataset = Arc::new(DatasetLoader::from_path(path)?);
        entries.insert(path.to_path_buf(), Arc::clone(&dataset));
        Ok(dataset)
    }

    /// Parse the source again and swap it in. The previous entry survives a
    /// failed reload.
    pub fn reload(&self, path: &Path) -> Result<Arc<Dataset>, LoadError> {
        let dataset = Arc::new(DatasetLoader::from_path(path)?);
        self.entries()
            .insert(path.to_path_buf(), Arc::clone(&dataset));
        info!(source = %path.display(), records = dataset.len(), "bookings reloaded");
        Ok(dataset)
    }

    pub fn invalidate(&self, path: &Path) -> bool {
        self.entries().remove(path).is_some()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.entries().contains_key(path)
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<PathBuf, Arc<Dataset>>> {
        // Entries are only ever whole datasets, so a poisoned map is still usable.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
