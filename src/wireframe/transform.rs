use glamx::{Mat2, Vec2, Vec3};

/// Rotates `points` by `angle` radians about the vertical axis through `center`.
///
/// Only `x` and `z` change; the rotation is the 2D matrix `[cos -sin; sin cos]`
/// applied to `(x - cx, z - cz)`.
pub fn rotate_about_y(points: &mut [Vec3], angle: f32, center: Vec3) {
    let rot = Mat2::from_angle(angle);

    for p in points.iter_mut() {
        let xz = rot * Vec2::new(p.x - center.x, p.z - center.z);
        p.x = xz.x + center.x;
        p.z = xz.y + center.z;
    }
}

/// Scales the `x` and `y` coordinates of `points` about `center`.
///
/// `z` is kept as is since the orthographic projection drops it anyway.
pub fn scale_about(points: &mut [Vec3], scale: f32, center: Vec3) {
    for p in points.iter_mut() {
        p.x = center.x + (p.x - center.x) * scale;
        p.y = center.y + (p.y - center.y) * scale;
    }
}

/// Orthographic projection onto the screen: truncates `x` and `y` toward zero.
#[inline]
pub fn project(p: Vec3) -> (i32, i32) {
    (p.x as i32, p.y as i32)
}

/// The mean of `points`, or the origin when there are none.
pub fn centroid(points: &[Vec3]) -> Vec3 {
    if points.is_empty() {
        return Vec3::ZERO;
    }

    points.iter().copied().sum::<Vec3>() / points.len() as f32
}
