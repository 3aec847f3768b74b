//! Unit tests for nav-core primitives.

#[cfg(test)]
mod geo {
    use crate::Coordinate;

    #[test]
    fn zero_distance() {
        let p = Coordinate::new(48.8443, 2.3730); // Gare de Lyon
        assert!(p.distance_m(p) < 1e-9);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Coordinate::new(48.8443, 2.3730);
        let b = Coordinate::new(48.8584, 2.2945); // Eiffel Tower
        assert!((a.distance_m(b) - b.distance_m(a)).abs() < 1e-9);
    }

    #[test]
    fn one_degree_of_latitude() {
        // ~1 degree of latitude ≈ 111 km
        let a = Coordinate::new(48.0, 2.0);
        let b = Coordinate::new(49.0, 2.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 500.0, "got {d}");
    }

    #[test]
    fn bearing_cardinal_directions() {
        let origin = Coordinate::new(0.0, 0.0);
        let north = origin.bearing_deg(Coordinate::new(1.0, 0.0));
        let east  = origin.bearing_deg(Coordinate::new(0.0, 1.0));
        let south = origin.bearing_deg(Coordinate::new(-1.0, 0.0));
        let west  = origin.bearing_deg(Coordinate::new(0.0, -1.0));
        assert!(north.abs() < 0.1, "north: got {north}");
        assert!((east - 90.0).abs() < 0.1, "east: got {east}");
        assert!((south - 180.0).abs() < 0.1, "south: got {south}");
        assert!((west - 270.0).abs() < 0.1, "west: got {west}");
    }

    #[test]
    fn bearing_always_in_range() {
        let center = Coordinate::new(48.85, 2.35);
        // Sweep targets all around the compass.
        for i in 0..36 {
            let angle = (i as f64) * 10.0_f64.to_radians();
            let target = Coordinate::new(
                center.lat + 0.01 * angle.cos(),
                center.lon + 0.01 * angle.sin(),
            );
            let b = center.bearing_deg(target);
            assert!((0.0..360.0).contains(&b), "got {b}");
        }
    }

    #[test]
    fn bearing_identical_points_is_zero() {
        let p = Coordinate::new(48.85, 2.35);
        assert_eq!(p.bearing_deg(p), 0.0);
    }

    #[test]
    fn interpolate_boundary_identity() {
        let a = Coordinate::new(48.8443, 2.3730);
        let b = Coordinate::new(48.8584, 2.2945);
        assert_eq!(a.interpolate(b, 0.0), a);
        assert_eq!(a.interpolate(b, 1.0), b);
    }

    #[test]
    fn interpolate_midpoint() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(2.0, 4.0);
        let mid = a.interpolate(b, 0.5);
        assert!((mid.lat - 1.0).abs() < 1e-12);
        assert!((mid.lon - 2.0).abs() < 1e-12);
    }

    #[test]
    fn display_six_decimals() {
        let p = Coordinate::new(48.8443, 2.373);
        assert_eq!(p.to_string(), "(48.844300, 2.373000)");
    }
}

#[cfg(test)]
mod ids {
    use crate::{ItineraryId, UserId};

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(UserId::INVALID.0, u64::MAX);
        assert_eq!(ItineraryId::INVALID.0, u64::MAX);
        assert_eq!(UserId::default(), UserId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(UserId(7).to_string(), "UserId(7)");
        assert_eq!(ItineraryId(3).to_string(), "ItineraryId(3)");
    }

    #[test]
    fn into_inner() {
        let raw: u64 = UserId(42).into();
        assert_eq!(raw, 42);
    }
}
