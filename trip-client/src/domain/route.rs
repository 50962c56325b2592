//! Computed route paths.

use super::error::DomainError;
use super::mode::{SegmentMode, TravelMode};
use super::point::{GeoBox, GeoPoint};

/// What the user asked the router for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteQuery {
    pub origin: GeoPoint,
    pub destination: GeoPoint,
    pub mode: TravelMode,
}

/// One contiguous, single-mode leg of a route.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    mode: SegmentMode,
    coords: Vec<GeoPoint>,
}

impl Segment {
    /// Create a segment. Needs at least two points to be drawable.
    pub fn new(mode: SegmentMode, coords: Vec<GeoPoint>) -> Result<Self, DomainError> {
        if coords.len() < 2 {
            return Err(DomainError::DegenerateSegment(coords.len()));
        }
        Ok(Self { mode, coords })
    }

    pub fn mode(&self) -> SegmentMode {
        self.mode
    }

    /// Ordered coordinates, never fewer than two.
    pub fn coords(&self) -> &[GeoPoint] {
        &self.coords
    }

    /// Bounding box of the segment's coordinates.
    pub fn extent(&self) -> GeoBox {
        let first = GeoBox::around(self.coords[0]);
        self.coords[1..]
            .iter()
            .fold(first, |acc, p| acc.including(*p))
    }
}

/// A route as computed by the backend.
///
/// Always has at least one segment and a non-negative cost; the backend's
/// "no route" answer never becomes a `RoutePath`.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePath {
    segments: Vec<Segment>,
    total_cost_secs: f64,
    total_distance_m: f64,
}

impl RoutePath {
    /// Create a path.
    ///
    /// `total_cost_secs` is elapsed time in seconds; `-1` (or any negative or
    /// non-finite value) means the backend found nothing.
    pub fn new(
        segments: Vec<Segment>,
        total_cost_secs: f64,
        total_distance_m: f64,
    ) -> Result<Self, DomainError> {
        if segments.is_empty() {
            return Err(DomainError::EmptyPath);
        }
        if !total_cost_secs.is_finite() || total_cost_secs < 0.0 {
            return Err(DomainError::NoCost(total_cost_secs));
        }

        let total_distance_m = if total_distance_m.is_finite() && total_distance_m > 0.0 {
            total_distance_m
        } else {
            0.0
        };

        Ok(Self {
            segments,
            total_cost_secs,
            total_distance_m,
        })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Elapsed time in seconds.
    pub fn total_cost_secs(&self) -> f64 {
        self.total_cost_secs
    }

    /// Length in metres.
    pub fn total_distance_m(&self) -> f64 {
        self.total_distance_m
    }

    /// Bounding box across every segment.
    pub fn extent(&self) -> GeoBox {
        let first = self.segments[0].extent();
        self.segments[1..]
            .iter()
            .fold(first, |acc, s| acc.union(s.extent()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    fn drive() -> Segment {
        Segment::new(SegmentMode::Drive, vec![pt(17.40, 78.40), pt(17.42, 78.45)]).unwrap()
    }

    fn transit() -> Segment {
        Segment::new(SegmentMode::Transit, vec![pt(17.42, 78.45), pt(17.35, 78.50)]).unwrap()
    }

    #[test]
    fn segment_needs_two_points() {
        assert_eq!(
            Segment::new(SegmentMode::Walk, vec![pt(0.0, 0.0)]),
            Err(DomainError::DegenerateSegment(1))
        );
        assert_eq!(
            Segment::new(SegmentMode::Walk, vec![]),
            Err(DomainError::DegenerateSegment(0))
        );
    }

    #[test]
    fn path_rejects_no_route_sentinel() {
        assert_eq!(
            RoutePath::new(vec![drive()], -1.0, 0.0),
            Err(DomainError::NoCost(-1.0))
        );
        assert_eq!(RoutePath::new(vec![], 10.0, 0.0), Err(DomainError::EmptyPath));
        assert!(RoutePath::new(vec![drive()], f64::INFINITY, 0.0).is_err());
    }

    #[test]
    fn missing_distance_defaults_to_zero() {
        let p = RoutePath::new(vec![drive()], 60.0, f64::NAN).unwrap();
        assert_eq!(p.total_distance_m(), 0.0);
    }

    #[test]
    fn extent_covers_all_segments() {
        let path = RoutePath::new(vec![drive(), transit()], 754.0, 3200.0).unwrap();
        let e = path.extent();
        assert_eq!(e.south(), 17.35);
        assert_eq!(e.north(), 17.42);
        assert_eq!(e.west(), 78.40);
        assert_eq!(e.east(), 78.50);
        for seg in path.segments() {
            assert!(e.covers(&seg.extent()));
        }
    }
}
