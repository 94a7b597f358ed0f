use bevy::math::Vec2;

pub type Real = f32;

pub type Vector = Vec2;

#[inline(always)]
pub fn zero_vector() -> Vector {
    Vec2::ZERO
}

/// Specular reflection of `velocity` about the unit normal `normal`:
/// `v' = v - 2(v.n)n`.
#[inline(always)]
pub fn reflect(velocity: Vector, normal: Vector) -> Vector {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Normalize `offset`, substituting `+Y` when the vector is too short to
/// yield a meaningful direction (a particle sitting exactly on an obstacle
/// center).
#[inline(always)]
pub fn unit_normal_or_default(offset: Vector) -> Vector {
    let length = offset.length();
    if length > 1.0e-6 {
        offset / length
    } else {
        Vec2::Y
    }
}
