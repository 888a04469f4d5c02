//! Read-only access to the region catalogue.
//!
//! The [`RegionCatalog`] trait hands out immutable [`CatalogSnapshot`]s. A
//! request takes one snapshot up front and works from it exclusively, so a
//! concurrent refresh can never expose a half-updated region mid-request.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use thiserror::Error;

use crate::{PerCategory, Region};

/// Errors raised while reading or assembling a catalogue.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The backing store could not be read.
    #[error("region catalogue is unavailable: {reason}")]
    Unavailable {
        /// Human-readable cause.
        reason: String,
    },
    /// The backing store failed with an underlying error.
    #[error("failed to read region catalogue: {0}")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
    /// Two regions shared a name.
    #[error("region '{name}' appears more than once")]
    DuplicateRegion {
        /// Name that was repeated.
        name: String,
    },
}

/// An immutable view of every region at one point in time.
///
/// Cloning is cheap; clones share the same region list.
///
/// # Examples
/// ```
/// use suburb_core::{CatalogSnapshot, PoiCounts, Region};
///
/// let region = Region::new("Ryde", PoiCounts::default(), None)?;
/// let snapshot = CatalogSnapshot::new(vec![region])?;
/// assert_eq!(snapshot.len(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    regions: Arc<[Region]>,
}

impl CatalogSnapshot {
    /// Build a snapshot, rejecting duplicate region names.
    ///
    /// # Errors
    /// Returns [`CatalogError::DuplicateRegion`] when two regions share a
    /// name.
    pub fn new(regions: Vec<Region>) -> Result<Self, CatalogError> {
        if let Some(name) = first_duplicate(&regions) {
            return Err(CatalogError::DuplicateRegion { name });
        }
        Ok(Self {
            regions: regions.into(),
        })
    }

    /// All regions in the snapshot.
    #[must_use]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Number of regions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Report whether the snapshot holds no regions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Aggregate POI statistics across the snapshot.
    #[must_use]
    pub fn summary(&self) -> CatalogSummary {
        let mut per_category = PerCategory::<u64>::default();
        for region in self.regions.iter() {
            for (category, count) in region.poi_counts().iter() {
                *per_category.get_mut(category) += u64::from(count);
            }
        }
        CatalogSummary {
            region_count: self.regions.len(),
            total_pois: per_category.iter().map(|(_, count)| count).sum(),
            per_category,
        }
    }
}

fn first_duplicate(regions: &[Region]) -> Option<String> {
    let mut seen = HashSet::with_capacity(regions.len());
    regions
        .iter()
        .find(|region| !seen.insert(region.name()))
        .map(|region| region.name().to_owned())
}

/// Totals describing a [`CatalogSnapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CatalogSummary {
    /// Number of regions.
    pub region_count: usize,
    /// POIs across every region and category.
    pub total_pois: u64,
    /// POIs per category across every region.
    pub per_category: PerCategory<u64>,
}

/// Source of region snapshots.
///
/// Implementations must be `Send + Sync` so one catalogue can serve
/// concurrent requests, and every call must return a self-consistent
/// snapshot.
///
/// # Examples
///
/// ```rust
/// use suburb_core::{CatalogError, CatalogSnapshot, RegionCatalog};
///
/// struct EmptyCatalog;
///
/// impl RegionCatalog for EmptyCatalog {
///     fn snapshot(&self) -> Result<CatalogSnapshot, CatalogError> {
///         Ok(CatalogSnapshot::default())
///     }
/// }
///
/// assert!(EmptyCatalog.snapshot()?.is_empty());
/// # Ok::<(), CatalogError>(())
/// ```
pub trait RegionCatalog: Send + Sync {
    /// Return every region as an immutable snapshot.
    ///
    /// # Errors
    /// Returns [`CatalogError`] when the catalogue cannot be read.
    fn snapshot(&self) -> Result<CatalogSnapshot, CatalogError>;
}

impl<C: RegionCatalog + ?Sized> RegionCatalog for Arc<C> {
    fn snapshot(&self) -> Result<CatalogSnapshot, CatalogError> {
        (**self).snapshot()
    }
}

impl<C: RegionCatalog + ?Sized> RegionCatalog for &C {
    fn snapshot(&self) -> Result<CatalogSnapshot, CatalogError> {
        (**self).snapshot()
    }
}

/// In-memory catalogue that an ingestion job can refresh while requests are
/// being served.
///
/// Refreshes swap the whole snapshot; readers holding an older snapshot keep
/// seeing it unchanged.
#[derive(Debug, Default)]
pub struct SharedCatalog {
    current: RwLock<CatalogSnapshot>,
}

impl SharedCatalog {
    /// Create a catalogue serving `snapshot`.
    #[must_use]
    pub fn new(snapshot: CatalogSnapshot) -> Self {
        Self {
            current: RwLock::new(snapshot),
        }
    }

    /// Replace the served snapshot.
    ///
    /// # Errors
    /// Returns [`CatalogError::Unavailable`] when the lock was poisoned by a
    /// panicking writer.
    pub fn replace(&self, snapshot: CatalogSnapshot) -> Result<(), CatalogError> {
        let mut guard = self.current.write().map_err(|_| CatalogError::Unavailable {
            reason: "catalogue lock poisoned".to_owned(),
        })?;
        *guard = snapshot;
        Ok(())
    }
}

impl RegionCatalog for SharedCatalog {
    fn snapshot(&self) -> Result<CatalogSnapshot, CatalogError> {
        self.current
            .read()
            .map(|guard| guard.clone())
            .map_err(|_| CatalogError::Unavailable {
                reason: "catalogue lock poisoned".to_owned(),
            })
    }
}
