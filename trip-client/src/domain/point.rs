//! Geographic point and rectangle types.

use std::fmt;

use super::error::DomainError;

/// A WGS84 coordinate.
///
/// Latitude is within [-90, 90] and longitude within [-180, 180]. Both are
/// finite. Points are immutable; replacing a selection replaces the point.
///
/// # Examples
///
/// ```
/// use trip_client::domain::GeoPoint;
///
/// let p = GeoPoint::new(17.385, 78.486).unwrap();
/// assert_eq!(p.to_string(), "17.3850, 78.4860");
///
/// assert!(GeoPoint::new(91.0, 0.0).is_err());
/// assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    lat: f64,
    lon: f64,
}

impl GeoPoint {
    /// City centre the map opens on.
    pub const HYDERABAD: GeoPoint = GeoPoint {
        lat: 17.385,
        lon: 78.486,
    };

    /// Create a point, rejecting non-finite or out-of-range coordinates.
    pub fn new(lat: f64, lon: f64) -> Result<Self, DomainError> {
        let valid = lat.is_finite()
            && lon.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lon);

        if !valid {
            return Err(DomainError::InvalidCoordinate { lat, lon });
        }

        Ok(Self { lat, lon })
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }
}

/// Four decimal places, the label shown for an unnamed selection.
impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lon)
    }
}

impl TryFrom<[f64; 2]> for GeoPoint {
    type Error = DomainError;

    /// Wire coordinates are `[lat, lon]` pairs.
    fn try_from(pair: [f64; 2]) -> Result<Self, Self::Error> {
        GeoPoint::new(pair[0], pair[1])
    }
}

/// An axis-aligned lat/lon rectangle.
///
/// Edges are inclusive: a point on the boundary is contained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBox {
    south: f64,
    west: f64,
    north: f64,
    east: f64,
}

impl GeoBox {
    /// Create a box from its edges.
    pub fn new(south: f64, west: f64, north: f64, east: f64) -> Result<Self, DomainError> {
        if !(south.is_finite() && west.is_finite() && north.is_finite() && east.is_finite()) {
            return Err(DomainError::InvalidBox("edges must be finite"));
        }
        if south > north {
            return Err(DomainError::InvalidBox("south edge is above north edge"));
        }
        if west > east {
            return Err(DomainError::InvalidBox("west edge is east of east edge"));
        }

        Ok(Self {
            south,
            west,
            north,
            east,
        })
    }

    /// A zero-area box at a single point.
    pub fn around(point: GeoPoint) -> Self {
        Self {
            south: point.lat(),
            west: point.lon(),
            north: point.lat(),
            east: point.lon(),
        }
    }

    /// The smallest box covering all points, or `None` for no points.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a GeoPoint>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = GeoBox::around(*iter.next()?);
        Some(iter.fold(first, |acc, p| acc.including(*p)))
    }

    /// Grow the box to include a point.
    pub fn including(self, point: GeoPoint) -> Self {
        Self {
            south: self.south.min(point.lat()),
            west: self.west.min(point.lon()),
            north: self.north.max(point.lat()),
            east: self.east.max(point.lon()),
        }
    }

    /// The smallest box covering both boxes.
    pub fn union(self, other: GeoBox) -> Self {
        Self {
            south: self.south.min(other.south),
            west: self.west.min(other.west),
            north: self.north.max(other.north),
            east: self.east.max(other.east),
        }
    }

    /// Add a uniform margin on all sides, clamped to the valid range.
    pub fn padded(self, margin: f64) -> Self {
        Self {
            south: (self.south - margin).max(-90.0),
            west: (self.west - margin).max(-180.0),
            north: (self.north + margin).min(90.0),
            east: (self.east + margin).min(180.0),
        }
    }

    /// Check whether a point lies inside or on the edge of the box.
    pub fn contains(&self, point: &GeoPoint) -> bool {
        point.lat() >= self.south
            && point.lat() <= self.north
            && point.lon() >= self.west
            && point.lon() <= self.east
    }

    /// Check whether another box lies entirely within this one.
    pub fn covers(&self, other: &GeoBox) -> bool {
        other.south >= self.south
            && other.north <= self.north
            && other.west >= self.west
            && other.east <= self.east
    }

    pub fn south(&self) -> f64 {
        self.south
    }

    pub fn west(&self) -> f64 {
        self.west
    }

    pub fn north(&self) -> f64 {
        self.north
    }

    pub fn east(&self) -> f64 {
        self.east
    }

    /// Corners in ring order: north-east, north-west, south-west, south-east.
    pub fn corners(&self) -> [(f64, f64); 4] {
        [
            (self.north, self.east),
            (self.north, self.west),
            (self.south, self.west),
            (self.south, self.east),
        ]
    }

    /// `west,south,east,north`, the order geocoders expect for a viewbox.
    pub fn to_bbox_string(&self) -> String {
        format!("{},{},{},{}", self.west, self.south, self.east, self.north)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    #[test]
    fn reject_out_of_range() {
        assert!(GeoPoint::new(90.5, 0.0).is_err());
        assert!(GeoPoint::new(-90.5, 0.0).is_err());
        assert!(GeoPoint::new(0.0, 180.5).is_err());
        assert!(GeoPoint::new(0.0, f64::INFINITY).is_err());
        assert!(GeoPoint::new(90.0, -180.0).is_ok());
    }

    #[test]
    fn coordinate_label() {
        assert_eq!(pt(17.38512, 78.48667).to_string(), "17.3851, 78.4867");
        assert_eq!(pt(-1.0, 2.0).to_string(), "-1.0000, 2.0000");
    }

    #[test]
    fn from_wire_pair() {
        let p = GeoPoint::try_from([17.4, 78.5]).unwrap();
        assert_eq!(p.lat(), 17.4);
        assert_eq!(p.lon(), 78.5);
        assert!(GeoPoint::try_from([100.0, 0.0]).is_err());
    }

    #[test]
    fn box_rejects_inverted_edges() {
        assert!(GeoBox::new(10.0, 0.0, 5.0, 1.0).is_err());
        assert!(GeoBox::new(0.0, 10.0, 5.0, 1.0).is_err());
        assert!(GeoBox::new(0.0, 0.0, f64::NAN, 1.0).is_err());
    }

    #[test]
    fn from_points_covers_all() {
        let points = [pt(17.3, 78.4), pt(17.5, 78.3), pt(17.4, 78.6)];
        let b = GeoBox::from_points(&points).unwrap();
        assert_eq!(b.south(), 17.3);
        assert_eq!(b.north(), 17.5);
        assert_eq!(b.west(), 78.3);
        assert_eq!(b.east(), 78.6);
        assert!(points.iter().all(|p| b.contains(p)));

        assert!(GeoBox::from_points(&[] as &[GeoPoint]).is_none());
    }

    #[test]
    fn union_and_covers() {
        let a = GeoBox::new(0.0, 0.0, 1.0, 1.0).unwrap();
        let b = GeoBox::new(2.0, 2.0, 3.0, 3.0).unwrap();
        let u = a.union(b);
        assert!(u.covers(&a));
        assert!(u.covers(&b));
        assert!(!a.covers(&u));
    }

    #[test]
    fn padding_clamps_to_world() {
        let b = GeoBox::new(-89.995, -179.995, 89.995, 179.995)
            .unwrap()
            .padded(0.01);
        assert_eq!(b.south(), -90.0);
        assert_eq!(b.west(), -180.0);
        assert_eq!(b.north(), 90.0);
        assert_eq!(b.east(), 180.0);
    }

    #[test]
    fn bbox_string_order() {
        let b = GeoBox::new(17.2, 78.3, 17.6, 78.7).unwrap();
        assert_eq!(b.to_bbox_string(), "78.3,17.2,78.7,17.6");
    }

    #[test]
    fn edges_are_inclusive() {
        let b = GeoBox::new(0.0, 0.0, 1.0, 1.0).unwrap();
        assert!(b.contains(&pt(0.0, 0.0)));
        assert!(b.contains(&pt(1.0, 1.0)));
        assert!(!b.contains(&pt(1.0000001, 0.5)));
    }
}
