use crate::model::{Position, Ring};

/// Chaikin corner cutting, `iterations` times.
///
/// Every edge of the closed ring (including the closing edge back to the first vertex)
/// is replaced by the points at 1/4 and 3/4 along it, so a ring of N edges becomes 2N
/// points. The result is then closed on the first new point, which leaves a short
/// extra edge between the last 3/4 point and the first 1/4 point.
pub fn chaikin(ring: &Ring, iterations: usize) -> Ring {
    let mut current = ring.clone();
    for _ in 0..iterations {
        current = chaikin_pass(current.positions());
    }
    current
}

fn chaikin_pass(points: &[Position]) -> Ring {
    let mut smoothed: Vec<Position> = Vec::with_capacity(points.len().saturating_sub(1) * 2 + 1);
    for edge in points.windows(2) {
        let [x0, y0] = edge[0];
        let [x1, y1] = edge[1];
        smoothed.push([x0 * 0.75 + x1 * 0.25, y0 * 0.75 + y1 * 0.25]);
        smoothed.push([x0 * 0.25 + x1 * 0.75, y0 * 0.25 + y1 * 0.75]);
    }
    Ring::close(smoothed)
}
