use super::error::HullError;
use crate::core::geometry::PlanarHull;
use nalgebra::Point2;
use tracing::{debug, instrument};

/// Walks the convex-hull boundary from one elemental endpoint to the other.
///
/// The hull's vertices are obtained in counter-clockwise cyclic order from
/// `hull`; starting at `reference_indices.0`, the walk advances one vertex at
/// a time (wrapping modulo the vertex count) until it reaches
/// `reference_indices.1`, and returns the visited point indices inclusive of
/// both endpoints. With formation energies on the vertical axis and the two
/// elemental references at the composition extremes, the counter-clockwise
/// direction traverses exactly the stable (lower) boundary.
///
/// # Errors
///
/// Returns [`HullError::MissingHullReferenceVertex`] if either endpoint is
/// not among the hull's vertices; the walk never wraps past its start.
#[instrument(skip(points, hull), fields(points = points.len()))]
pub fn extract(
    points: &[Point2<f64>],
    reference_indices: (usize, usize),
    hull: &impl PlanarHull,
) -> Result<Vec<usize>, HullError> {
    let (start, end) = reference_indices;
    let vertices = hull.hull_vertices_ccw(points);

    let Some(mut cursor) = vertices.iter().position(|&v| v == start) else {
        return Err(HullError::MissingHullReferenceVertex {
            record_index: start,
        });
    };
    if !vertices.contains(&end) {
        return Err(HullError::MissingHullReferenceVertex { record_index: end });
    }

    let mut path = vec![start];
    while vertices[cursor] != end {
        cursor = (cursor + 1) % vertices.len();
        path.push(vertices[cursor]);
    }

    debug!(
        hull_vertices = vertices.len(),
        path_vertices = path.len(),
        "lower hull walk complete"
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::MonotoneChain;

    /// Returns a fixed vertex ordering regardless of the points, so the walk
    /// can be exercised independent of any hull implementation.
    struct FixedOrdering(Vec<usize>);

    impl PlanarHull for FixedOrdering {
        fn hull_vertices_ccw(&self, _points: &[Point2<f64>]) -> Vec<usize> {
            self.0.clone()
        }
    }

    fn pts(coords: &[(f64, f64)]) -> Vec<Point2<f64>> {
        coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    #[test]
    fn walk_follows_the_cyclic_order() {
        let points = pts(&[(0.0, 0.0); 4]);
        let path = extract(&points, (3, 2), &FixedOrdering(vec![3, 1, 0, 2])).unwrap();
        assert_eq!(path, vec![3, 1, 0, 2]);
    }

    #[test]
    fn walk_wraps_around_the_cyclic_end() {
        let points = pts(&[(0.0, 0.0); 4]);
        let path = extract(&points, (0, 3), &FixedOrdering(vec![3, 1, 0, 2])).unwrap();
        assert_eq!(path, vec![0, 2, 3]);
    }

    #[test]
    fn missing_start_vertex_fails_instead_of_looping() {
        let points = pts(&[(0.0, 0.0); 4]);
        let err = extract(&points, (2, 1), &FixedOrdering(vec![0, 1, 3])).unwrap_err();
        assert!(matches!(
            err,
            HullError::MissingHullReferenceVertex { record_index: 2 }
        ));
    }

    #[test]
    fn missing_end_vertex_fails_instead_of_looping() {
        let points = pts(&[(0.0, 0.0); 4]);
        let err = extract(&points, (0, 2), &FixedOrdering(vec![0, 1, 3])).unwrap_err();
        assert!(matches!(
            err,
            HullError::MissingHullReferenceVertex { record_index: 2 }
        ));
    }

    #[test]
    fn stable_compound_appears_between_the_endpoints() {
        // The compound at (0.5, -1.0) lies below the elemental baseline.
        let points = pts(&[(0.0, 0.0), (1.0, 0.0), (0.5, -1.0)]);
        let path = extract(&points, (0, 1), &MonotoneChain).unwrap();
        assert_eq!(path, vec![0, 2, 1]);
    }

    #[test]
    fn unstable_compound_is_left_off_the_path() {
        // The compound at (0.5, 0.5) lies above the elemental baseline, so
        // the walk goes straight from one endpoint to the other.
        let points = pts(&[(0.0, 0.0), (1.0, 0.0), (0.5, 0.5)]);
        let path = extract(&points, (0, 1), &MonotoneChain).unwrap();
        assert_eq!(path, vec![0, 1]);
    }

    #[test]
    fn path_has_no_repeated_vertices_on_a_convex_cloud() {
        let points = pts(&[
            (0.0, 0.0),
            (1.0, 0.0),
            (0.25, -0.6),
            (0.5, -0.9),
            (0.75, -0.5),
            (0.5, 0.4),
        ]);
        let path = extract(&points, (0, 1), &MonotoneChain).unwrap();
        assert_eq!(path, vec![0, 2, 3, 4, 1]);
        // The upper-side point never appears on the walked boundary.
        assert!(!path.contains(&5));
    }
}
