//! Restrict a set of regions to those whose centroid lies within a radius of
//! a point.
//!
//! Coordinates are WGS84 with `x = longitude` and `y = latitude`. Distances
//! use the haversine formula on a spherical Earth, which is accurate to well
//! within a percent at city scale.

use geo::Coord;
use thiserror::Error;

use crate::Region;

/// Mean Earth radius used for great-circle distances.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Radius applied when a centre is supplied without one.
pub const DEFAULT_RADIUS_KM: f64 = 5.0;

/// Errors raised while validating coordinates or a search radius.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateError {
    /// Latitude was not finite or fell outside `-90..=90`.
    #[error("latitude {0} must be a finite value between -90 and 90")]
    Latitude(f64),
    /// Longitude was not finite or fell outside `-180..=180`.
    #[error("longitude {0} must be a finite value between -180 and 180")]
    Longitude(f64),
    /// Radius was negative or not finite.
    #[error("radius {0} km must be a finite, non-negative number")]
    Radius(f64),
}

/// Validate a latitude/longitude pair and convert it into a [`Coord`].
///
/// # Errors
/// Returns [`CoordinateError`] when either component is out of range or not
/// finite.
///
/// # Examples
/// ```
/// use suburb_core::coord_from_lat_lon;
///
/// let coord = coord_from_lat_lon(-33.87, 151.21)?;
/// assert_eq!(coord.y, -33.87);
/// assert!(coord_from_lat_lon(95.0, 151.21).is_err());
/// # Ok::<(), suburb_core::CoordinateError>(())
/// ```
pub fn coord_from_lat_lon(latitude: f64, longitude: f64) -> Result<Coord<f64>, CoordinateError> {
    if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
        return Err(CoordinateError::Latitude(latitude));
    }
    if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
        return Err(CoordinateError::Longitude(longitude));
    }
    Ok(Coord {
        x: longitude,
        y: latitude,
    })
}

/// Great-circle distance between two WGS84 coordinates in kilometres.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the haversine formula is floating-point trigonometry"
)]
pub fn haversine_km(from: Coord<f64>, to: Coord<f64>) -> f64 {
    let lat_from = from.y.to_radians();
    let lat_to = to.y.to_radians();
    let half_d_lat = (to.y - from.y).to_radians() / 2.0;
    let half_d_lon = (to.x - from.x).to_radians() / 2.0;
    let a = half_d_lat.sin().powi(2) + lat_from.cos() * lat_to.cos() * half_d_lon.sin().powi(2);
    // Rounding can push `a` marginally above one for antipodal points.
    2.0 * EARTH_RADIUS_KM * a.clamp(0.0, 1.0).sqrt().asin()
}

/// A validated centre point and radius.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use suburb_core::GeoFilter;
///
/// let filter = GeoFilter::new(Coord { x: 151.21, y: -33.87 }, Some(10.0))?;
/// assert_eq!(filter.radius_km(), 10.0);
/// # Ok::<(), suburb_core::CoordinateError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoFilter {
    center: Coord<f64>,
    radius_km: f64,
}

impl GeoFilter {
    /// Validate `center` and `radius_km`, falling back to
    /// [`DEFAULT_RADIUS_KM`] when no radius is given.
    ///
    /// # Errors
    /// Returns [`CoordinateError`] when the centre is out of range or the
    /// radius is negative or not finite.
    pub fn new(center: Coord<f64>, radius_km: Option<f64>) -> Result<Self, CoordinateError> {
        let validated = coord_from_lat_lon(center.y, center.x)?;
        let radius = validate_radius(radius_km.unwrap_or(DEFAULT_RADIUS_KM))?;
        Ok(Self {
            center: validated,
            radius_km: radius,
        })
    }

    /// Centre of the search area.
    #[must_use]
    pub const fn center(&self) -> Coord<f64> {
        self.center
    }

    /// Inclusive search radius in kilometres.
    #[must_use]
    pub const fn radius_km(&self) -> f64 {
        self.radius_km
    }

    /// Distance from the centre to the region's centroid, if it has one.
    #[must_use]
    pub fn distance_km(&self, region: &Region) -> Option<f64> {
        region
            .centroid()
            .map(|centroid| haversine_km(self.center, centroid))
    }

    /// Return the distance when `region` lies inside the radius.
    ///
    /// Regions without a centroid cannot be located and are never admitted.
    #[must_use]
    pub fn admit(&self, region: &Region) -> Option<f64> {
        self.distance_km(region)
            .filter(|distance| *distance <= self.radius_km)
    }
}

/// Ensure a radius is finite and non-negative.
///
/// # Errors
/// Returns [`CoordinateError::Radius`] for negative or non-finite values.
pub fn validate_radius(radius_km: f64) -> Result<f64, CoordinateError> {
    if radius_km.is_finite() && radius_km >= 0.0 {
        Ok(radius_km)
    } else {
        Err(CoordinateError::Radius(radius_km))
    }
}

/// A region admitted to the candidate set, with its distance from the
/// filter centre when one was supplied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate<'a> {
    /// The admitted region.
    pub region: &'a Region,
    /// Distance from the filter centre in kilometres.
    pub distance_km: Option<f64>,
}

/// Apply an optional [`GeoFilter`] to `regions`.
///
/// Without a filter every region is returned unchanged. With a filter only
/// regions whose centroid lies within the radius survive; an empty result is
/// valid.
pub fn filter_regions<'a>(
    regions: &'a [Region],
    filter: Option<&GeoFilter>,
) -> Vec<Candidate<'a>> {
    match filter {
        None => regions
            .iter()
            .map(|region| Candidate {
                region,
                distance_km: None,
            })
            .collect(),
        Some(geo) => regions
            .iter()
            .filter_map(|region| {
                geo.admit(region).map(|distance| Candidate {
                    region,
                    distance_km: Some(distance),
                })
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PoiCounts;
    use rstest::rstest;

    const SYDNEY_CBD: Coord<f64> = Coord {
        x: 151.2093,
        y: -33.8688,
    };
    const PARRAMATTA: Coord<f64> = Coord {
        x: 151.0011,
        y: -33.8150,
    };

    fn region(name: &str, centroid: Option<Coord<f64>>) -> Region {
        Region::new(name, PoiCounts::default(), centroid).expect("valid region")
    }

    #[rstest]
    #[expect(clippy::float_arithmetic, reason = "tests compare distances")]
    fn haversine_matches_known_distance() {
        let distance = haversine_km(SYDNEY_CBD, PARRAMATTA);
        assert!((distance - 20.1).abs() < 0.5, "got {distance}");
    }

    #[rstest]
    fn haversine_is_zero_for_identical_points() {
        assert!(haversine_km(SYDNEY_CBD, SYDNEY_CBD).abs() < 1e-9);
    }

    #[rstest]
    #[case(-90.5, 151.0)]
    #[case(f64::NAN, 151.0)]
    #[case(-33.0, 181.0)]
    #[case(-33.0, f64::INFINITY)]
    fn rejects_malformed_coordinates(#[case] latitude: f64, #[case] longitude: f64) {
        assert!(coord_from_lat_lon(latitude, longitude).is_err());
    }

    #[rstest]
    #[case(-1.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn rejects_invalid_radius(#[case] radius: f64) {
        let result = GeoFilter::new(SYDNEY_CBD, Some(radius));
        assert!(matches!(result, Err(CoordinateError::Radius(_))));
    }

    #[rstest]
    fn missing_radius_uses_default() {
        let filter = GeoFilter::new(SYDNEY_CBD, None).expect("valid filter");
        assert_eq!(filter.radius_km(), DEFAULT_RADIUS_KM);
    }

    #[rstest]
    fn no_filter_returns_everything() {
        let regions = vec![region("A", None), region("B", Some(PARRAMATTA))];
        let candidates = filter_regions(&regions, None);
        assert_eq!(candidates.len(), 2);
        assert!(candidates.iter().all(|c| c.distance_km.is_none()));
    }

    #[rstest]
    fn filter_excludes_distant_and_unlocated_regions() {
        let regions = vec![
            region("City", Some(SYDNEY_CBD)),
            region("Parramatta", Some(PARRAMATTA)),
            region("Nowhere", None),
        ];
        let filter = GeoFilter::new(SYDNEY_CBD, Some(5.0)).expect("valid filter");
        let names: Vec<_> = filter_regions(&regions, Some(&filter))
            .into_iter()
            .map(|c| c.region.name())
            .collect();
        assert_eq!(names, vec!["City"]);
    }

    #[rstest]
    fn filter_may_yield_no_candidates() {
        let regions = vec![region("Parramatta", Some(PARRAMATTA))];
        let filter = GeoFilter::new(SYDNEY_CBD, Some(1.0)).expect("valid filter");
        assert!(filter_regions(&regions, Some(&filter)).is_empty());
    }
}
