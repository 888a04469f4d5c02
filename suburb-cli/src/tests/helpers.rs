//! Fixtures for writing catalogue and request files into a scratch
//! directory.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::json;
use tempfile::TempDir;

/// Scratch directory holding a catalogue and an optional request file.
#[derive(Debug)]
pub(super) struct Workspace {
    _tmp: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        Self { _tmp: tmp, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    /// Write the two-region catalogue and return its path.
    ///
    /// `A` has ten recreation POIs; `B` has five recreation and ten
    /// community POIs. Both sit in the inner city.
    pub(super) fn write_catalog(&self) -> Utf8PathBuf {
        let path = self.path("regions.json");
        let regions = json!([
            {
                "name": "A",
                "poi_counts": { "recreation": 10 },
                "latitude": -33.8688,
                "longitude": 151.2093
            },
            {
                "name": "B",
                "poi_counts": { "recreation": 5, "community": 10 },
                "latitude": -33.8915,
                "longitude": 151.2767
            }
        ]);
        write_utf8(&path, regions.to_string().as_bytes());
        path
    }

    /// Write a request with the given weights and return its path.
    pub(super) fn write_request(&self, request: &serde_json::Value) -> Utf8PathBuf {
        let path = self.path("request.json");
        write_utf8(&path, request.to_string().as_bytes());
        path
    }
}

/// Request body weighting only the named category.
pub(super) fn single_weight_request(category: &str) -> serde_json::Value {
    let mut weights = json!({
        "recreation": 0.0,
        "community": 0.0,
        "transport": 0.0,
        "education": 0.0,
        "utility": 0.0
    });
    if let Some(slot) = weights.get_mut(category) {
        *slot = json!(1.0);
    }
    weights
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write test file");
}

/// Region names in printed order.
pub(super) fn printed_names(recommendations: &serde_json::Value) -> Vec<String> {
    recommendations
        .as_array()
        .expect("recommendations array")
        .iter()
        .map(|entry| {
            entry
                .get("suburb_name")
                .and_then(serde_json::Value::as_str)
                .expect("suburb_name")
                .to_owned()
        })
        .collect()
}
