//! Region catalogue backed by a JSON file.

use camino::{Utf8Path, Utf8PathBuf};
use log::debug;
use suburb_core::{CatalogError, CatalogSnapshot, Region, RegionCatalog};

/// Reads regions from a JSON array on every snapshot.
///
/// Each snapshot is parsed in full before it is returned, so a file
/// rewritten between requests is picked up by the next request while any
/// request in flight keeps its own copy.
///
/// The file holds objects of the form
/// `{"name": "...", "poi_counts": {"recreation": 3, ...}, "latitude": -33.8, "longitude": 151.2}`.
/// Missing categories count as zero; unknown categories are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileCatalog {
    path: Utf8PathBuf,
}

impl JsonFileCatalog {
    /// Serve regions from `path`.
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the catalogue file.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

impl RegionCatalog for JsonFileCatalog {
    fn snapshot(&self) -> Result<CatalogSnapshot, CatalogError> {
        let contents = suburb_fs::read_utf8_file(&self.path)
            .map_err(|source| CatalogError::Source(Box::new(source)))?;
        let regions: Vec<Region> = serde_json::from_str(&contents)
            .map_err(|source| CatalogError::Source(Box::new(source)))?;
        debug!("loaded {} regions from {}", regions.len(), self.path);
        CatalogSnapshot::new(regions)
    }
}
