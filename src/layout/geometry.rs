//! Scalar geometry shared by placement, edge routing, and the editor's
//! handle math. Everything works on plain `(f32, f32)` points.

/// Unit vector for `(dx, dy)`. A zero-length input returns the zero vector
/// instead of dividing by zero; callers treat that as "no direction".
pub fn normalize(dx: f32, dy: f32) -> (f32, f32) {
    let len = (dx * dx + dy * dy).sqrt();
    if len == 0.0 {
        return (0.0, 0.0);
    }
    (dx / len, dy / len)
}

/// Left-hand normal of a direction vector.
pub fn perpendicular(dir: (f32, f32)) -> (f32, f32) {
    (-dir.1, dir.0)
}

/// Point where the ray from `center` toward `towards` exits a circle of
/// `radius` around `center`. Anchors edges on the visual rim of a node body
/// so arrowheads meet the boundary regardless of approach direction.
/// Coincident inputs collapse to `center` via the `normalize` zero policy.
pub fn point_on_circle(center: (f32, f32), towards: (f32, f32), radius: f32) -> (f32, f32) {
    let (dx, dy) = normalize(towards.0 - center.0, towards.1 - center.1);
    (center.0 + dx * radius, center.1 + dy * radius)
}

/// Signed fan offset for transition `index` of `count` sharing an endpoint
/// pair, centered on zero: count=3 yields -spacing, 0, +spacing.
pub fn parallel_edge_offset(index: usize, count: usize, spacing: f32) -> f32 {
    (index as f32 - (count.saturating_sub(1)) as f32 / 2.0) * spacing
}

pub fn quad_point(p0: (f32, f32), ctrl: (f32, f32), p1: (f32, f32), t: f32) -> (f32, f32) {
    let u = 1.0 - t;
    (
        u * u * p0.0 + 2.0 * u * t * ctrl.0 + t * t * p1.0,
        u * u * p0.1 + 2.0 * u * t * ctrl.1 + t * t * p1.1,
    )
}

pub fn cubic_point(
    p0: (f32, f32),
    ctrl1: (f32, f32),
    ctrl2: (f32, f32),
    p1: (f32, f32),
    t: f32,
) -> (f32, f32) {
    let u = 1.0 - t;
    let b0 = u * u * u;
    let b1 = 3.0 * u * u * t;
    let b2 = 3.0 * u * t * t;
    let b3 = t * t * t;
    (
        b0 * p0.0 + b1 * ctrl1.0 + b2 * ctrl2.0 + b3 * p1.0,
        b0 * p0.1 + b1 * ctrl1.1 + b2 * ctrl2.1 + b3 * p1.1,
    )
}

/// Parametric midpoint (t = 0.5); label anchors sit here, on the rendered
/// curve rather than the straight chord.
pub fn quad_midpoint(p0: (f32, f32), ctrl: (f32, f32), p1: (f32, f32)) -> (f32, f32) {
    quad_point(p0, ctrl, p1, 0.5)
}

pub fn cubic_midpoint(
    p0: (f32, f32),
    ctrl1: (f32, f32),
    ctrl2: (f32, f32),
    p1: (f32, f32),
) -> (f32, f32) {
    cubic_point(p0, ctrl1, ctrl2, p1, 0.5)
}
