// Copyright 2025 the Honeycomb Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hexagon outlines.
//!
//! Cells are point-up regular hexagons. Vertex `k` sits at angle
//! `60° * k - 90°` from the center, so the first vertex is straight up and
//! the rest follow clockwise in screen space (y grows downward).

use core::f64::consts::PI;

use kurbo::{BezPath, Point, Vec2};

/// Angle between consecutive hexagon vertices, in radians.
pub const VERTEX_STEP: f64 = PI / 3.0;

/// The six vertices of a point-up hexagon.
pub fn hexagon_vertices(center: Point, circumradius: f64) -> [Point; 6] {
    core::array::from_fn(|k| {
        let angle = VERTEX_STEP * k as f64 - PI / 2.0;
        center + Vec2::from_angle(angle) * circumradius
    })
}

/// A closed point-up hexagon path.
///
/// Intended to be filled with the even-odd rule; for a convex hexagon this is
/// the same as non-zero, but strokes drawn over overlapping paths rely on it.
pub fn hexagon_path(center: Point, circumradius: f64) -> BezPath {
    let vertices = hexagon_vertices(center, circumradius);
    let mut path = BezPath::new();
    path.move_to(vertices[0]);
    for v in &vertices[1..] {
        path.line_to(*v);
    }
    path.close_path();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Shape;

    const EPS: f64 = 1e-9;

    #[test]
    fn vertices_are_on_the_circumcircle() {
        let c = Point::new(40.0, -3.0);
        for v in hexagon_vertices(c, 12.5) {
            assert!(((v - c).hypot() - 12.5).abs() < EPS, "vertex {v:?} off circle");
        }
    }

    #[test]
    fn vertices_are_sixty_degrees_apart() {
        let c = Point::new(1.0, 2.0);
        let vs = hexagon_vertices(c, 3.0);
        for k in 0..6 {
            let a = (vs[k] - c).atan2();
            let b = (vs[(k + 1) % 6] - c).atan2();
            let mut delta = b - a;
            while delta < 0.0 {
                delta += 2.0 * PI;
            }
            assert!((delta - VERTEX_STEP).abs() < EPS, "step {k} is {delta}");
        }
    }

    #[test]
    fn first_vertex_points_up() {
        let vs = hexagon_vertices(Point::new(10.0, 10.0), 4.0);
        assert!((vs[0].x - 10.0).abs() < EPS);
        assert!((vs[0].y - 6.0).abs() < EPS);
        assert!((vs[3].y - 14.0).abs() < EPS);
    }

    #[test]
    fn path_is_closed_and_contains_center() {
        let c = Point::new(5.0, 5.0);
        let path = hexagon_path(c, 2.0);
        assert_eq!(path.elements().len(), 7, "move + 5 lines + close");
        assert!(path.contains(c));
        assert!(!path.contains(Point::new(5.0, 7.5)));
        // Corner regions of the bounding box lie outside a point-up hexagon.
        let bbox = path.bounding_box();
        assert!(!path.contains(Point::new(bbox.x0 + 0.01, bbox.y0 + 0.01)));
    }
}
