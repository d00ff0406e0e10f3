//! Planar convex-hull computation behind a narrow trait.
//!
//! The lower-hull boundary walk depends on the hull's vertex-ordering
//! convention, which is a property of the geometry implementation rather than
//! of the pipeline. Keeping the computation behind [`PlanarHull`] lets the
//! walk be tested against synthetic orderings independent of any concrete
//! algorithm.

use nalgebra::Point2;
use std::cmp::Ordering;

/// Computes the convex hull of a planar point set.
///
/// Implementations must return the hull's vertex indices in counter-clockwise
/// cyclic order; the lower-hull walk relies on that direction to traverse the
/// stable boundary from one elemental endpoint to the other.
pub trait PlanarHull {
    fn hull_vertices_ccw(&self, points: &[Point2<f64>]) -> Vec<usize>;
}

/// Andrew's monotone-chain convex hull.
#[derive(Debug, Default, Clone, Copy)]
pub struct MonotoneChain;

impl PlanarHull for MonotoneChain {
    fn hull_vertices_ccw(&self, points: &[Point2<f64>]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..points.len()).collect();
        order.sort_by(|&a, &b| lexicographic(&points[a], &points[b]));

        if points.len() < 3 {
            order.dedup_by(|&mut a, &mut b| points[a] == points[b]);
            return order;
        }

        let mut lower = half_hull(points, order.iter().copied());
        let mut upper = half_hull(points, order.iter().rev().copied());

        // Each chain's last point is the other chain's first.
        lower.pop();
        upper.pop();
        lower.append(&mut upper);
        lower
    }
}

fn half_hull(points: &[Point2<f64>], order: impl Iterator<Item = usize>) -> Vec<usize> {
    let mut chain: Vec<usize> = Vec::new();
    for i in order {
        while chain.len() >= 2
            && cross(
                &points[chain[chain.len() - 2]],
                &points[chain[chain.len() - 1]],
                &points[i],
            ) <= 0.0
        {
            chain.pop();
        }
        chain.push(i);
    }
    chain
}

/// Z-component of (a - origin) x (b - origin); positive for a
/// counter-clockwise turn.
#[inline]
fn cross(origin: &Point2<f64>, a: &Point2<f64>, b: &Point2<f64>) -> f64 {
    (a.x - origin.x) * (b.y - origin.y) - (a.y - origin.y) * (b.x - origin.x)
}

fn lexicographic(a: &Point2<f64>, b: &Point2<f64>) -> Ordering {
    (a.x, a.y)
        .partial_cmp(&(b.x, b.y))
        .unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point2<f64>> {
        coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    #[test]
    fn square_with_interior_point_is_ccw() {
        let points = pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.5, 0.5)]);
        let vertices = MonotoneChain.hull_vertices_ccw(&points);
        assert_eq!(vertices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn triangle_below_the_baseline_is_ccw() {
        let points = pts(&[(0.0, 0.0), (1.0, 0.0), (0.5, -1.0)]);
        let vertices = MonotoneChain.hull_vertices_ccw(&points);
        assert_eq!(vertices, vec![0, 2, 1]);
    }

    #[test]
    fn collinear_interior_points_are_not_vertices() {
        let points = pts(&[(0.0, 0.0), (0.5, 0.0), (1.0, 0.0), (0.5, 1.0)]);
        let vertices = MonotoneChain.hull_vertices_ccw(&points);
        assert_eq!(vertices, vec![0, 2, 3]);
    }

    #[test]
    fn two_points_form_a_degenerate_hull() {
        let points = pts(&[(1.0, 0.0), (0.0, 0.0)]);
        let vertices = MonotoneChain.hull_vertices_ccw(&points);
        assert_eq!(vertices, vec![1, 0]);
    }

    #[test]
    fn coincident_points_keep_a_single_index() {
        let points = pts(&[(0.0, 0.0), (0.0, 0.0)]);
        let vertices = MonotoneChain.hull_vertices_ccw(&points);
        assert_eq!(vertices, vec![0]);
    }
}
