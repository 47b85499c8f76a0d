use std::f64::consts::PI;

use rand::RngCore;

use crate::model::{Position, Ring};
use crate::procgen::draw;

/// Largest urban block rotation either way, in radians (15 degrees).
const MAX_BLOCK_ROTATION: f64 = PI / 12.0;

/// Axis-aligned square of side `size` centered on `(lng, lat)`, counter-clockwise
/// from the south-west corner.
pub fn square(lng: f64, lat: f64, size: f64) -> Ring {
    let half = size / 2.0;
    Ring::close(vec![
        [lng - half, lat - half],
        [lng + half, lat - half],
        [lng + half, lat + half],
        [lng - half, lat + half],
    ])
}

/// A square block of random size (0.01..0.05 degrees) rotated by a random angle in
/// `[-15°, +15°)` about its center.
///
/// The rotated ring repeats its first vertex twice at the end (6 positions). The extra
/// vertex is weighted into the vertex-average centroid and so into the hectare scale.
pub fn urban_block(lng: f64, lat: f64, rng: &mut dyn RngCore) -> Ring {
    let size = 0.01 + draw(rng) * 0.04;
    let angle = (draw(rng) - 0.5) * (2.0 * MAX_BLOCK_ROTATION);
    let mut points = rotate(&square(lng, lat, size), lng, lat, angle)
        .positions()
        .to_vec();
    points.push(points[0]);
    Ring::from_closed(points)
}

/// Rotate every vertex of a ring about `(lng, lat)` by `angle` radians.
pub fn rotate(ring: &Ring, lng: f64, lat: f64, angle: f64) -> Ring {
    let (sin, cos) = angle.sin_cos();
    let rotated: Vec<Position> = ring
        .positions()
        .iter()
        .map(|&[x, y]| {
            let dlng = x - lng;
            let dlat = y - lat;
            [lng + (dlng * cos - dlat * sin), lat + (dlng * sin + dlat * cos)]
        })
        .collect();
    Ring::from_closed(rotated)
}

/// Irregular closed outline of 12 to 19 vertices at even angular steps. Each vertex
/// radius is `base_radius` scaled by 0.7..1.3, and its latitude offset is squished by a
/// further 0.6..1.4 so the result never comes out as a clean circle.
pub fn blobby(lng: f64, lat: f64, base_radius: f64, rng: &mut dyn RngCore) -> Ring {
    let vertex_count = 12 + (draw(rng) * 8.0).floor() as usize;
    let mut points: Vec<Position> = Vec::with_capacity(vertex_count + 1);
    for i in 0..vertex_count {
        let angle = (i as f64 / vertex_count as f64) * PI * 2.0;
        let radius = base_radius * (0.7 + draw(rng) * 0.6);
        let squish = 0.6 + draw(rng) * 0.8;
        points.push([
            lng + angle.cos() * radius,
            lat + angle.sin() * radius * squish,
        ]);
    }
    Ring::close(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::procgen::Mulberry32;
    use approx::assert_relative_eq;

    #[test]
    fn square_is_centered() {
        let ring = square(10.0, 20.0, 2.0);
        assert_eq!(
            ring.positions(),
            &[[9.0, 19.0], [11.0, 19.0], [11.0, 21.0], [9.0, 21.0], [9.0, 19.0]]
        );
    }

    #[test]
    fn urban_block_keeps_center_and_closure() {
        let mut rng = Mulberry32::new(3);
        for _ in 0..50 {
            let ring = urban_block(5.0, -5.0, &mut rng);
            assert_eq!(ring.len(), 6);
            assert!(ring.is_closed());
            assert_eq!(ring.positions()[4], ring.positions()[0]);
            let pts = &ring.positions()[..4];
            let cx = pts.iter().map(|p| p[0]).sum::<f64>() / 4.0;
            let cy = pts.iter().map(|p| p[1]).sum::<f64>() / 4.0;
            assert_relative_eq!(cx, 5.0, epsilon = 1e-12);
            assert_relative_eq!(cy, -5.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn urban_block_rotation_is_bounded() {
        let mut rng = Mulberry32::new(11);
        for _ in 0..50 {
            let ring = urban_block(0.0, 0.0, &mut rng);
            let [x0, y0] = ring.positions()[0];
            let [x1, y1] = ring.positions()[1];
            // Bottom edge direction of the rotated square.
            let angle = (y1 - y0).atan2(x1 - x0);
            assert!(angle.abs() <= MAX_BLOCK_ROTATION + 1e-12, "{angle}");
        }
    }

    #[test]
    fn urban_block_centroid_counts_repeated_corner() {
        let mut rng = Mulberry32::new(3);
        let ring = urban_block(0.0, 0.0, &mut rng);
        let pts = ring.positions();
        let c = crate::geometry::centroid(pts);
        // Three copies of the first corner pull the vertex average towards it.
        assert_relative_eq!(c.lng, pts[0][0] / 3.0, epsilon = 1e-12);
        assert_relative_eq!(c.lat, pts[0][1] / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn rotate_by_zero_is_identity() {
        let ring = square(1.0, 1.0, 0.5);
        assert_eq!(rotate(&ring, 1.0, 1.0, 0.0), ring);
    }

    #[test]
    fn blobby_vertex_count_in_range() {
        let mut rng = Mulberry32::new(21);
        for _ in 0..100 {
            let ring = blobby(0.0, 0.0, 0.05, &mut rng);
            assert!((13..=20).contains(&ring.len()), "len {}", ring.len());
            assert!(ring.is_closed());
        }
    }

    #[test]
    fn blobby_vertices_stay_within_radius_bounds() {
        let mut rng = Mulberry32::new(8);
        let ring = blobby(0.0, 0.0, 1.0, &mut rng);
        for &[x, y] in ring.positions() {
            // Longitude offset is at most 1.3 r; latitude at most 1.3 * 1.4 r.
            assert!(x.abs() <= 1.3);
            assert!(y.abs() <= 1.3 * 1.4);
        }
        // First vertex sits on the positive longitude axis.
        let [x0, y0] = ring.positions()[0];
        assert!(x0 >= 0.7);
        assert_eq!(y0, 0.0);
    }

    #[test]
    fn blobby_consumes_two_draws_per_vertex() {
        let mut a = Mulberry32::new(77);
        let ring = blobby(0.0, 0.0, 1.0, &mut a);
        let vertices = ring.len() - 1;

        let mut b = Mulberry32::new(77);
        for _ in 0..(1 + 2 * vertices) {
            b.draw();
        }
        assert_eq!(a.draw(), b.draw());
    }
}
