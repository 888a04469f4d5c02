//! Test-only collaborators and fixtures used by unit and behaviour tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use geo::Coord;

use crate::{
    CatalogError, CatalogSnapshot, Interpretation, InterpreterError, PoiCounts,
    PreferenceInterpreter, Region, RegionCatalog,
};

/// Build a region, panicking on invalid input.
///
/// `latitude`/`longitude` are given in that order for readability in tests.
///
/// # Panics
/// Panics when the name is blank or the centroid is out of range.
#[must_use]
#[expect(clippy::expect_used, reason = "fixtures are always valid")]
pub fn region(name: &str, counts: PoiCounts, centroid: Option<(f64, f64)>) -> Region {
    let coord = centroid.map(|(latitude, longitude)| Coord {
        x: longitude,
        y: latitude,
    });
    Region::new(name, counts, coord).expect("test region should be valid")
}

/// Build a snapshot, panicking on duplicate names.
///
/// # Panics
/// Panics when two regions share a name.
#[must_use]
#[expect(clippy::expect_used, reason = "fixtures are always valid")]
pub fn snapshot(regions: Vec<Region>) -> CatalogSnapshot {
    CatalogSnapshot::new(regions).expect("test regions should have unique names")
}

/// Catalogue returning a fixed snapshot and counting reads.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    snapshot: CatalogSnapshot,
    reads: AtomicUsize,
}

impl MemoryCatalog {
    /// Serve `regions`.
    ///
    /// # Panics
    /// Panics when two regions share a name.
    #[must_use]
    pub fn with_regions(regions: Vec<Region>) -> Self {
        Self {
            snapshot: snapshot(regions),
            reads: AtomicUsize::new(0),
        }
    }

    /// Number of snapshots handed out so far.
    #[must_use]
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl RegionCatalog for MemoryCatalog {
    fn snapshot(&self) -> Result<CatalogSnapshot, CatalogError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.snapshot.clone())
    }
}

/// Catalogue that always fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingCatalog;

impl RegionCatalog for FailingCatalog {
    fn snapshot(&self) -> Result<CatalogSnapshot, CatalogError> {
        Err(CatalogError::Unavailable {
            reason: "catalogue offline".to_owned(),
        })
    }
}

/// Interpreter returning a fixed interpretation for every query.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticInterpreter(pub Interpretation);

impl PreferenceInterpreter for StaticInterpreter {
    fn interpret(&self, _query: &str) -> Result<Interpretation, InterpreterError> {
        Ok(self.0)
    }
}

/// Interpreter that always fails with the wrapped error.
#[derive(Debug, Clone)]
pub struct FailingInterpreter(pub InterpreterError);

impl Default for FailingInterpreter {
    fn default() -> Self {
        Self(InterpreterError::Unavailable {
            reason: "interpreter offline".to_owned(),
        })
    }
}

impl PreferenceInterpreter for FailingInterpreter {
    fn interpret(&self, _query: &str) -> Result<Interpretation, InterpreterError> {
        Err(self.0.clone())
    }
}
