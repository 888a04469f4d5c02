//! Regions: named statistical areas with per-category POI counts.

use geo::Coord;
use thiserror::Error;

use crate::{CoordinateError, PerCategory, coord_from_lat_lon};

/// Number of points of interest per category.
pub type PoiCounts = PerCategory<u32>;

impl PerCategory<u32> {
    /// Sum of all category counts.
    ///
    /// # Examples
    /// ```
    /// use suburb_core::PoiCounts;
    ///
    /// let counts = PoiCounts { recreation: 4, transport: 2, ..PoiCounts::default() };
    /// assert_eq!(counts.total(), 6);
    /// ```
    #[must_use]
    pub fn total(&self) -> u64 {
        self.iter().map(|(_, count)| u64::from(count)).sum()
    }
}

/// Errors returned by [`Region::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegionError {
    /// The region name was empty or whitespace.
    #[error("region name must not be empty")]
    EmptyName,
    /// The centroid was not a valid WGS84 coordinate.
    #[error("invalid centroid: {0}")]
    InvalidCentroid(#[from] CoordinateError),
    /// Only one of latitude and longitude was supplied.
    #[error("centroid needs both latitude and longitude")]
    PartialCentroid,
}

/// A statistical area that can be recommended.
///
/// Regions are read-only once built; `total_pois` is always derived from the
/// category counts.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use suburb_core::{PoiCounts, Region};
///
/// let counts = PoiCounts { recreation: 10, community: 3, ..PoiCounts::default() };
/// let region = Region::new("Sydney - City and Inner South", counts, None)?;
/// assert_eq!(region.total_pois(), 13);
/// assert!(region.centroid().is_none());
/// # Ok::<(), suburb_core::RegionError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RegionRecord", into = "RegionRecord")
)]
pub struct Region {
    name: String,
    poi_counts: PoiCounts,
    centroid: Option<Coord<f64>>,
}

impl Region {
    /// Validate and construct a [`Region`].
    ///
    /// # Errors
    /// Returns [`RegionError`] when the name is blank or the centroid is not
    /// a valid coordinate.
    pub fn new(
        name: impl Into<String>,
        poi_counts: PoiCounts,
        centroid: Option<Coord<f64>>,
    ) -> Result<Self, RegionError> {
        let region_name = name.into();
        if region_name.trim().is_empty() {
            return Err(RegionError::EmptyName);
        }
        let checked = centroid
            .map(|coord| coord_from_lat_lon(coord.y, coord.x))
            .transpose()?;
        Ok(Self {
            name: region_name,
            poi_counts,
            centroid: checked,
        })
    }

    /// Unique region name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// POI counts per category.
    #[must_use]
    pub const fn poi_counts(&self) -> &PoiCounts {
        &self.poi_counts
    }

    /// Total POIs across all categories.
    #[must_use]
    pub fn total_pois(&self) -> u64 {
        self.poi_counts.total()
    }

    /// Representative location of the region, if known.
    #[must_use]
    pub const fn centroid(&self) -> Option<Coord<f64>> {
        self.centroid
    }
}

/// Wire representation of a [`Region`] using explicit latitude/longitude.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct RegionRecord {
    name: String,
    #[serde(default)]
    poi_counts: PoiCounts,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    longitude: Option<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RegionRecord> for Region {
    type Error = RegionError;

    fn try_from(record: RegionRecord) -> Result<Self, Self::Error> {
        let centroid = match (record.latitude, record.longitude) {
            (Some(latitude), Some(longitude)) => Some(coord_from_lat_lon(latitude, longitude)?),
            (Some(_), None) | (None, Some(_)) => return Err(RegionError::PartialCentroid),
            (None, None) => None,
        };
        Self::new(record.name, record.poi_counts, centroid)
    }
}

#[cfg(feature = "serde")]
impl From<Region> for RegionRecord {
    fn from(region: Region) -> Self {
        Self {
            latitude: region.centroid.map(|coord| coord.y),
            longitude: region.centroid.map(|coord| coord.x),
            name: region.name,
            poi_counts: region.poi_counts,
        }
    }
}
