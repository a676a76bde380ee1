//! Vectors.

use bytemuck::{Pod, Zeroable};
use core::fmt;
use std::ops::{Index, IndexMut, Mul};

/// A 2-dimensional vector.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Default, PartialEq, Zeroable, Pod)]
pub struct Vector2 {
    inner: glam::Vec2,
}

/// A 3-dimensional vector.
///
/// The components are stored in a 128-bit SIMD register for efficient
/// computation. That leads to an extra 4 bytes in size and 16-byte alignment.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Default, PartialEq, Zeroable, Pod)]
pub struct Vector3 {
    inner: glam::Vec3A,
}

/// A 4-dimensional vector.
///
/// The components are stored in a 128-bit SIMD register for efficient
/// computation. That leads to an alignment of 16 bytes.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Default, PartialEq, Zeroable, Pod)]
pub struct Vector4 {
    inner: glam::Vec4,
}

impl Vector2 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self::wrap(glam::Vec2::new(x, y))
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::wrap(glam::Vec2::ZERO)
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: f32) -> Self {
        Self::wrap(glam::Vec2::splat(value))
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::wrap(glam::Vec2::X)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::wrap(glam::Vec2::Y)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.inner.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.inner.y
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut f32 {
        &mut self.inner.x
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut f32 {
        &mut self.inner.y
    }

    /// Converts the vector to 3D by appending the given z-component.
    #[inline]
    pub const fn extended(&self, z: f32) -> Vector3 {
        Vector3::new(self.x(), self.y(), z)
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.inner.dot(other.inner)
    }

    /// Computes the square of the norm of the vector.
    #[inline]
    pub fn norm_squared(&self) -> f32 {
        self.inner.length_squared()
    }

    /// Computes the norm (length) of the vector.
    #[inline]
    pub fn norm(&self) -> f32 {
        self.inner.length()
    }

    /// Computes the normalized version of the vector. If the vector has zero
    /// length, the result will be non-finite.
    #[inline]
    pub fn normalized(&self) -> Self {
        Self::wrap(self.inner.normalize())
    }

    /// Computes the normalized version of the vector if its norm exceeds the
    /// given threshold. Otherwise, returns [`None`].
    #[inline]
    pub fn normalized_if_above(&self, min_norm: f32) -> Option<Self> {
        let norm_squared = self.norm_squared();
        (norm_squared > min_norm.powi(2)).then(|| Self::wrap(self.inner / norm_squared.sqrt()))
    }

    #[inline]
    const fn wrap(inner: glam::Vec2) -> Self {
        Self { inner }
    }
}

impl From<[f32; 2]> for Vector2 {
    #[inline]
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2> for [f32; 2] {
    #[inline]
    fn from(vector: Vector2) -> Self {
        [vector.x(), vector.y()]
    }
}

impl_binop!(Add, add, Vector2, Vector2, Vector2, |a, b| {
    Vector2::wrap(a.inner.add(b.inner))
});

impl_binop!(Sub, sub, Vector2, Vector2, Vector2, |a, b| {
    Vector2::wrap(a.inner.sub(b.inner))
});

impl_binop!(Mul, mul, Vector2, f32, Vector2, |a, b| {
    Vector2::wrap(a.inner.mul(*b))
});

impl_binop!(Mul, mul, f32, Vector2, Vector2, |a, b| { b.mul(*a) });

impl_binop!(Div, div, Vector2, f32, Vector2, |a, b| { a.mul(b.recip()) });

impl_binop_assign!(AddAssign, add_assign, Vector2, Vector2, |a, b| {
    a.inner += b.inner;
});

impl_binop_assign!(SubAssign, sub_assign, Vector2, Vector2, |a, b| {
    a.inner -= b.inner;
});

impl_binop_assign!(MulAssign, mul_assign, Vector2, f32, |a, b| {
    a.inner *= *b;
});

impl_binop_assign!(DivAssign, div_assign, Vector2, f32, |a, b| {
    a.inner *= b.recip();
});

impl_unary_op!(Neg, neg, Vector2, Vector2, |val| {
    Vector2::wrap(val.inner.neg())
});

impl Index<usize> for Vector2 {
    type Output = f32;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        self.inner.index(index)
    }
}

impl IndexMut<usize> for Vector2 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.inner.index_mut(index)
    }
}

impl_approx_eq_componentwise!(Vector2, [x, y]);

impl_display_componentwise!(Vector2, [x, y]);

impl fmt::Debug for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector2")
            .field("x", &self.inner.x)
            .field("y", &self.inner.y)
            .finish()
    }
}

impl Vector3 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self::wrap(glam::Vec3A::new(x, y, z))
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::wrap(glam::Vec3A::ZERO)
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: f32) -> Self {
        Self::wrap(glam::Vec3A::splat(value))
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::wrap(glam::Vec3A::X)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::wrap(glam::Vec3A::Y)
    }

    /// The z-axis unit vector.
    #[inline]
    pub const fn unit_z() -> Self {
        Self::wrap(glam::Vec3A::Z)
    }

    /// The x-component.
    #[inline]
    pub fn x(&self) -> f32 {
        self.inner.x
    }

    /// The y-component.
    #[inline]
    pub fn y(&self) -> f32 {
        self.inner.y
    }

    /// The z-component.
    #[inline]
    pub fn z(&self) -> f32 {
        self.inner.z
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub fn x_mut(&mut self) -> &mut f32 {
        &mut self.inner.x
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub fn y_mut(&mut self) -> &mut f32 {
        &mut self.inner.y
    }

    /// A mutable reference to the z-component.
    #[inline]
    pub fn z_mut(&mut self) -> &mut f32 {
        &mut self.inner.z
    }

    /// The x- and y-components.
    #[inline]
    pub fn xy(&self) -> Vector2 {
        Vector2::new(self.x(), self.y())
    }

    /// Converts the vector to 4D by appending the given w-component.
    #[inline]
    pub fn extended(&self, w: f32) -> Vector4 {
        Vector4::wrap(self.inner.extend(w))
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.inner.dot(other.inner)
    }

    /// Computes the cross product of this vector with another.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::wrap(self.inner.cross(other.inner))
    }

    /// Computes the square of the norm of the vector.
    #[inline]
    pub fn norm_squared(&self) -> f32 {
        self.inner.length_squared()
    }

    /// Computes the norm (length) of the vector.
    #[inline]
    pub fn norm(&self) -> f32 {
        self.inner.length()
    }

    /// Computes the normalized version of the vector. If the vector has zero
    /// length, the result will be non-finite.
    #[inline]
    pub fn normalized(&self) -> Self {
        Self::wrap(self.inner.normalize())
    }

    /// Computes the normalized version of the vector if its norm exceeds the
    /// given threshold. Otherwise, returns [`None`].
    #[inline]
    pub fn normalized_if_above(&self, min_norm: f32) -> Option<Self> {
        let norm_squared = self.norm_squared();
        (norm_squared > min_norm.powi(2)).then(|| Self::wrap(self.inner / norm_squared.sqrt()))
    }

    #[inline]
    const fn wrap(inner: glam::Vec3A) -> Self {
        Self { inner }
    }
}

impl From<[f32; 3]> for Vector3 {
    #[inline]
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for [f32; 3] {
    #[inline]
    fn from(vector: Vector3) -> Self {
        [vector.x(), vector.y(), vector.z()]
    }
}

impl_binop!(Add, add, Vector3, Vector3, Vector3, |a, b| {
    Vector3::wrap(a.inner.add(b.inner))
});

impl_binop!(Sub, sub, Vector3, Vector3, Vector3, |a, b| {
    Vector3::wrap(a.inner.sub(b.inner))
});

impl_binop!(Mul, mul, Vector3, f32, Vector3, |a, b| {
    Vector3::wrap(a.inner.mul(*b))
});

impl_binop!(Mul, mul, f32, Vector3, Vector3, |a, b| { b.mul(*a) });

impl_binop!(Div, div, Vector3, f32, Vector3, |a, b| { a.mul(b.recip()) });

impl_binop_assign!(AddAssign, add_assign, Vector3, Vector3, |a, b| {
    a.inner += b.inner;
});

impl_binop_assign!(SubAssign, sub_assign, Vector3, Vector3, |a, b| {
    a.inner -= b.inner;
});

impl_binop_assign!(MulAssign, mul_assign, Vector3, f32, |a, b| {
    a.inner *= *b;
});

impl_binop_assign!(DivAssign, div_assign, Vector3, f32, |a, b| {
    a.inner *= b.recip();
});

impl_unary_op!(Neg, neg, Vector3, Vector3, |val| {
    Vector3::wrap(val.inner.neg())
});

impl Index<usize> for Vector3 {
    type Output = f32;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        self.inner.index(index)
    }
}

impl IndexMut<usize> for Vector3 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.inner.index_mut(index)
    }
}

impl_approx_eq_componentwise!(Vector3, [x, y, z]);

impl_display_componentwise!(Vector3, [x, y, z]);

impl fmt::Debug for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector3")
            .field("x", &self.inner.x)
            .field("y", &self.inner.y)
            .field("z", &self.inner.z)
            .finish()
    }
}

impl Vector4 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self::wrap(glam::Vec4::new(x, y, z, w))
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::wrap(glam::Vec4::ZERO)
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: f32) -> Self {
        Self::wrap(glam::Vec4::splat(value))
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::wrap(glam::Vec4::X)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::wrap(glam::Vec4::Y)
    }

    /// The z-axis unit vector.
    #[inline]
    pub const fn unit_z() -> Self {
        Self::wrap(glam::Vec4::Z)
    }

    /// The w-axis unit vector.
    #[inline]
    pub const fn unit_w() -> Self {
        Self::wrap(glam::Vec4::W)
    }

    /// The x-component.
    #[inline]
    pub fn x(&self) -> f32 {
        self.inner.x
    }

    /// The y-component.
    #[inline]
    pub fn y(&self) -> f32 {
        self.inner.y
    }

    /// The z-component.
    #[inline]
    pub fn z(&self) -> f32 {
        self.inner.z
    }

    /// The w-component.
    #[inline]
    pub fn w(&self) -> f32 {
        self.inner.w
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub fn x_mut(&mut self) -> &mut f32 {
        &mut self.inner.x
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub fn y_mut(&mut self) -> &mut f32 {
        &mut self.inner.y
    }

    /// A mutable reference to the z-component.
    #[inline]
    pub fn z_mut(&mut self) -> &mut f32 {
        &mut self.inner.z
    }

    /// A mutable reference to the w-component.
    #[inline]
    pub fn w_mut(&mut self) -> &mut f32 {
        &mut self.inner.w
    }

    /// The x-, y- and z-components.
    #[inline]
    pub fn xyz(&self) -> Vector3 {
        Vector3::new(self.x(), self.y(), self.z())
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.inner.dot(other.inner)
    }

    /// Computes the square of the norm of the vector.
    #[inline]
    pub fn norm_squared(&self) -> f32 {
        self.inner.length_squared()
    }

    /// Computes the norm (length) of the vector.
    #[inline]
    pub fn norm(&self) -> f32 {
        self.inner.length()
    }

    /// Computes the normalized version of the vector. If the vector has zero
    /// length, the result will be non-finite.
    #[inline]
    pub fn normalized(&self) -> Self {
        Self::wrap(self.inner.normalize())
    }

    /// Computes the normalized version of the vector if its norm exceeds the
    /// given threshold. Otherwise, returns [`None`].
    #[inline]
    pub fn normalized_if_above(&self, min_norm: f32) -> Option<Self> {
        let norm_squared = self.norm_squared();
        (norm_squared > min_norm.powi(2)).then(|| Self::wrap(self.inner / norm_squared.sqrt()))
    }

    #[inline]
    const fn wrap(inner: glam::Vec4) -> Self {
        Self { inner }
    }
}

impl From<[f32; 4]> for Vector4 {
    #[inline]
    fn from([x, y, z, w]: [f32; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl From<Vector4> for [f32; 4] {
    #[inline]
    fn from(vector: Vector4) -> Self {
        [vector.x(), vector.y(), vector.z(), vector.w()]
    }
}

impl_binop!(Add, add, Vector4, Vector4, Vector4, |a, b| {
    Vector4::wrap(a.inner.add(b.inner))
});

impl_binop!(Sub, sub, Vector4, Vector4, Vector4, |a, b| {
    Vector4::wrap(a.inner.sub(b.inner))
});

impl_binop!(Mul, mul, Vector4, f32, Vector4, |a, b| {
    Vector4::wrap(a.inner.mul(*b))
});

impl_binop!(Mul, mul, f32, Vector4, Vector4, |a, b| { b.mul(*a) });

impl_binop!(Div, div, Vector4, f32, Vector4, |a, b| { a.mul(b.recip()) });

impl_binop_assign!(AddAssign, add_assign, Vector4, Vector4, |a, b| {
    a.inner += b.inner;
});

impl_binop_assign!(SubAssign, sub_assign, Vector4, Vector4, |a, b| {
    a.inner -= b.inner;
});

impl_binop_assign!(MulAssign, mul_assign, Vector4, f32, |a, b| {
    a.inner *= *b;
});

impl_binop_assign!(DivAssign, div_assign, Vector4, f32, |a, b| {
    a.inner *= b.recip();
});

impl_unary_op!(Neg, neg, Vector4, Vector4, |val| {
    Vector4::wrap(val.inner.neg())
});

impl Index<usize> for Vector4 {
    type Output = f32;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        self.inner.index(index)
    }
}

impl IndexMut<usize> for Vector4 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.inner.index_mut(index)
    }
}

impl_approx_eq_componentwise!(Vector4, [x, y, z, w]);

impl_display_componentwise!(Vector4, [x, y, z, w]);

impl fmt::Debug for Vector4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector4")
            .field("x", &self.inner.x)
            .field("y", &self.inner.y)
            .field("z", &self.inner.z)
            .field("w", &self.inner.w)
            .finish()
    }
}
