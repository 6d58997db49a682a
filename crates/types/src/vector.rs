//! Small 3D vector math used by the ray caster.
//!
//! Everything here is `Copy` and pure. The only in-place operation is
//! [`Vector3::normalize_mut`].

use std::ops::{Add, Mul, Neg, Sub};

/// A point or direction in world space.
///
/// When used as a direction the vector is expected to have unit length.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Unit vector for an elevation `theta` and azimuth `phi` (radians).
    ///
    /// `theta = 0, phi = 0` points along +x; `theta = π/2` points along +z.
    ///
    /// ```
    /// use tui_voxel_types::Vector3;
    ///
    /// let up = Vector3::from_spherical(std::f32::consts::FRAC_PI_2, 0.0);
    /// assert!((up.z - 1.0).abs() < 1e-6);
    /// ```
    pub fn from_spherical(theta: f32, phi: f32) -> Self {
        let (sin_t, cos_t) = theta.sin_cos();
        let (sin_p, cos_p) = phi.sin_cos();
        Self::new(cos_t * cos_p, cos_t * sin_p, sin_t)
    }

    pub fn add(self, other: Vector3) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    pub fn sub(self, other: Vector3) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    pub fn scale(s: f32, v: Vector3) -> Self {
        Self::new(s * v.x, s * v.y, s * v.z)
    }

    pub fn dot(self, other: Vector3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction, or `None` for a zero-length
    /// (or non-finite) vector.
    pub fn try_normalize(self) -> Option<Self> {
        let len = self.length();
        if len == 0.0 || !len.is_finite() {
            return None;
        }
        Some(Self::scale(1.0 / len, self))
    }

    /// Unit vector in the same direction. A zero-length vector stays zero.
    pub fn normalize(self) -> Self {
        self.try_normalize().unwrap_or(Self::ZERO)
    }

    /// In-place [`Vector3::normalize`].
    pub fn normalize_mut(&mut self) {
        *self = self.normalize();
    }

    /// Component by axis index (0 = x, 1 = y, 2 = z).
    #[inline(always)]
    pub fn axis(self, i: usize) -> f32 {
        match i {
            0 => self.x,
            1 => self.y,
            _ => self.z,
        }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from(v: [f32; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<Vector3> for f32 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self * rhs.x, self * rhs.y, self * rhs.z)
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}
