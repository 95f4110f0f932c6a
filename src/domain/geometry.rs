use super::entities::Coordinate;

/// Euclidean distance between two points.
pub fn distance(a: Coordinate, b: Coordinate) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    let dz = a.z - b.z;
    (dx * dx + dy * dy + dz * dz).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_symmetric() {
        let points = [
            Coordinate::new(0.0, 0.0, 0.0),
            Coordinate::new(3.0, 4.0, 0.0),
            Coordinate::new(-12.5, 7.25, 19.0),
            Coordinate::new(1e6, -1e6, 0.5),
        ];
        for a in points {
            assert_eq!(distance(a, a), 0.0);
            for b in points {
                assert_eq!(distance(a, b), distance(b, a));
            }
        }
    }

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(distance(Coordinate::new(0.0, 0.0, 0.0), Coordinate::new(3.0, 4.0, 0.0)), 5.0);
        assert_eq!(distance(Coordinate::new(1.0, 2.0, 3.0), Coordinate::new(3.0, 5.0, 9.0)), 7.0);
    }
}
