//! Projection and rejection of vectors.
//!
//! Given vectors `a` and `b`, the projection of `a` onto `b` is the multiple
//! of `b` whose signed length equals the component of `a` along `b`:
//!
//! ```text
//! proj_b(a) = (a · b / b · b) b
//! ```
//!
//! The rejection of `a` from `b` is what remains of `a` after removing that
//! part, so `a = proj_b(a) + rej_b(a)` with `rej_b(a)` perpendicular to `b`.
//!
//! Projecting onto or rejecting from a zero vector divides by zero, and the
//! result has non-finite components.

use crate::vector::{Vector2, Vector3, Vector4};
use std::ops::{Add, Mul, Sub};

/// A vector type with an inner (dot) product, for which projection and
/// rejection are defined.
pub trait InnerProductSpace: Copy + Sub<Self, Output = Self> + Mul<f32, Output = Self> {
    /// Computes the dot product of this vector with another.
    fn dot(&self, other: &Self) -> f32;

    /// Computes the projection of this vector onto `axis`.
    ///
    /// Note that projection is not commutative: `a.project_onto(&b)` is
    /// parallel to `b`, while `b.project_onto(&a)` is parallel to `a`.
    ///
    /// If `axis` is the zero vector, the result will be non-finite.
    #[inline]
    fn project_onto(&self, axis: &Self) -> Self {
        *axis * (self.dot(axis) / axis.dot(axis))
    }

    /// Computes the projection of this vector onto the given axis, which is
    /// assumed to have unit length.
    #[inline]
    fn project_onto_normalized(&self, unit_axis: &Self) -> Self {
        *unit_axis * self.dot(unit_axis)
    }

    /// Computes the rejection of this vector from `axis`, which is the part of
    /// the vector perpendicular to `axis`.
    ///
    /// If `axis` is the zero vector, the result will be non-finite.
    #[inline]
    fn reject_from(&self, axis: &Self) -> Self {
        *self - self.project_onto(axis)
    }

    /// Computes the rejection of this vector from the given axis, which is
    /// assumed to have unit length.
    #[inline]
    fn reject_from_normalized(&self, unit_axis: &Self) -> Self {
        *self - self.project_onto_normalized(unit_axis)
    }
}

macro_rules! impl_inner_product_space {
    ($($t:ident),+) => {
        $(
            impl InnerProductSpace for $t {
                #[inline]
                fn dot(&self, other: &Self) -> f32 {
                    $t::dot(self, other)
                }
            }
        )+
    };
}

impl_inner_product_space!(Vector2, Vector3, Vector4);

/// A vector split into the part parallel to some axis and the part
/// perpendicular to it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Decomposition<V> {
    pub parallel: V,
    pub perpendicular: V,
}

impl<V: InnerProductSpace> Decomposition<V> {
    /// Decomposes `vector` into its projection onto `axis` and its rejection
    /// from `axis`.
    #[inline]
    pub fn of(vector: &V, axis: &V) -> Self {
        let parallel = vector.project_onto(axis);
        Self {
            parallel,
            perpendicular: *vector - parallel,
        }
    }
}

impl<V: InnerProductSpace + Add<V, Output = V>> Decomposition<V> {
    /// Adds the parallel and perpendicular parts back together. Due to
    /// rounding, the result is not guaranteed to equal the decomposed vector
    /// exactly.
    #[inline]
    pub fn recombined(&self) -> V {
        self.parallel + self.perpendicular
    }
}

/// Computes the projection of `a` onto `b`.
#[inline]
pub fn project<V: InnerProductSpace>(a: &V, b: &V) -> V {
    a.project_onto(b)
}

/// Computes the rejection of `a` from `b`.
#[inline]
pub fn reject<V: InnerProductSpace>(a: &V, b: &V) -> V {
    a.reject_from(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{abs_diff_eq, assert_abs_diff_eq, relative_eq};
    use proptest::prelude::*;

    const EPSILON: f32 = 1e-6;

    prop_compose! {
        fn vector2_strategy(max_component: f32)(
            x in -max_component..max_component,
            y in -max_component..max_component,
        ) -> Vector2 {
            Vector2::new(x, y)
        }
    }

    prop_compose! {
        fn vector3_strategy(max_component: f32)(
            x in -max_component..max_component,
            y in -max_component..max_component,
            z in -max_component..max_component,
        ) -> Vector3 {
            Vector3::new(x, y, z)
        }
    }

    prop_compose! {
        fn vector4_strategy(max_component: f32)(
            x in -max_component..max_component,
            y in -max_component..max_component,
            z in -max_component..max_component,
            w in -max_component..max_component,
        ) -> Vector4 {
            Vector4::new(x, y, z, w)
        }
    }

    fn rejection_is_perpendicular<V: InnerProductSpace>(a: &V, b: &V) -> bool {
        let rejection = reject(a, b);
        let scale = a.dot(a).sqrt() * b.dot(b).sqrt();
        abs_diff_eq!(rejection.dot(b), 0.0, epsilon = 1e-5 * scale)
    }

    #[test]
    fn projecting_onto_axis_keeps_parallel_component() {
        let a = Vector3::new(2.0, 2.0, 0.0);
        let b = Vector3::unit_x();
        assert_eq!(project(&a, &b), Vector3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn projection_is_not_commutative() {
        let a = Vector3::new(2.0, 2.0, 0.0);
        let b = Vector3::new(1.0, 0.0, 0.0);
        let a_onto_b = project(&a, &b);
        let b_onto_a = project(&b, &a);
        assert_eq!(a_onto_b, Vector3::new(2.0, 0.0, 0.0));
        assert_eq!(b_onto_a, Vector3::new(0.5, 0.5, 0.0));
        assert_ne!(a_onto_b, b_onto_a);
    }

    #[test]
    fn projecting_orthogonal_vectors_gives_zero() {
        let a = Vector3::unit_x();
        let b = Vector3::unit_y();
        assert_eq!(project(&a, &b), Vector3::zeros());
        assert_eq!(project(&b, &a), Vector3::zeros());
    }

    #[test]
    fn projection_does_not_depend_on_axis_length() {
        let a = Vector2::new(3.0, -1.0);
        let b = Vector2::new(1.0, 1.0);
        assert_abs_diff_eq!(project(&a, &b), project(&a, &(b * 7.5)), epsilon = EPSILON);
        assert_abs_diff_eq!(project(&a, &b), project(&a, &-b), epsilon = EPSILON);
    }

    #[test]
    fn projecting_onto_normalized_axis_matches_general_projection() {
        let a = Vector4::new(1.0, -2.0, 3.0, 0.5);
        let b = Vector4::new(0.0, 2.0, 2.0, 1.0);
        let unit_b = b.normalized();
        assert_abs_diff_eq!(
            a.project_onto_normalized(&unit_b),
            a.project_onto(&b),
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(
            a.reject_from_normalized(&unit_b),
            a.reject_from(&b),
            epsilon = EPSILON
        );
    }

    #[test]
    fn rejecting_from_axis_removes_parallel_component() {
        let a = Vector3::new(2.0, 2.0, 0.0);
        let b = Vector3::unit_x();
        assert_eq!(reject(&a, &b), Vector3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn rejecting_parallel_vector_gives_zero() {
        let a = Vector2::new(3.0, 6.0);
        let b = Vector2::new(1.0, 2.0);
        assert_eq!(reject(&a, &b), Vector2::zeros());
    }

    #[test]
    fn projecting_onto_zero_vector_gives_nan() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let projection = project(&a, &Vector3::zeros());
        assert!(projection.x().is_nan() && projection.y().is_nan() && projection.z().is_nan());

        let rejection = reject(&a, &Vector3::zeros());
        assert!(rejection.x().is_nan());
    }

    #[test]
    fn projection_and_rejection_do_not_modify_operands() {
        let a = Vector4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vector4::new(0.0, 1.0, 0.0, 1.0);
        let _ = project(&a, &b);
        let _ = reject(&a, &b);
        assert_eq!(a, Vector4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(b, Vector4::new(0.0, 1.0, 0.0, 1.0));
    }

    #[test]
    fn decomposition_parts_match_projection_and_rejection() {
        let a = Vector3::new(0.3, 0.7, 0.2);
        let b = Vector3::new(0.9, 0.1, 0.4);
        let decomposition = Decomposition::of(&a, &b);
        assert_eq!(decomposition.parallel, project(&a, &b));
        assert_eq!(decomposition.perpendicular, reject(&a, &b));
        assert_abs_diff_eq!(decomposition.recombined(), a, epsilon = EPSILON);
    }

    #[test]
    fn decomposing_along_coordinate_axis_is_exact() {
        let a = Vector4::new(1.0, 2.0, 3.0, 4.0);
        let decomposition = Decomposition::of(&a, &Vector4::unit_z());
        assert_eq!(decomposition.parallel, Vector4::new(0.0, 0.0, 3.0, 0.0));
        assert_eq!(decomposition.perpendicular, Vector4::new(1.0, 2.0, 0.0, 4.0));
        assert_eq!(decomposition.recombined(), a);
    }

    proptest! {
        #[test]
        fn dot_product_of_vector2_is_commutative(a in vector2_strategy(1e3), b in vector2_strategy(1e3)) {
            prop_assert_eq!(a.dot(&b), b.dot(&a));
        }
    }

    proptest! {
        #[test]
        fn dot_product_of_vector3_is_commutative(a in vector3_strategy(1e3), b in vector3_strategy(1e3)) {
            prop_assert_eq!(a.dot(&b), b.dot(&a));
        }
    }

    proptest! {
        #[test]
        fn dot_product_of_vector4_is_commutative(a in vector4_strategy(1e3), b in vector4_strategy(1e3)) {
            prop_assert_eq!(a.dot(&b), b.dot(&a));
        }
    }

    proptest! {
        #[test]
        fn rejection_of_vector2_is_perpendicular_to_axis(
            a in vector2_strategy(10.0),
            b in vector2_strategy(10.0),
        ) {
            prop_assume!(b.norm() > 1e-2);
            prop_assert!(rejection_is_perpendicular(&a, &b));
        }
    }

    proptest! {
        #[test]
        fn rejection_of_vector3_is_perpendicular_to_axis(
            a in vector3_strategy(10.0),
            b in vector3_strategy(10.0),
        ) {
            prop_assume!(b.norm() > 1e-2);
            prop_assert!(rejection_is_perpendicular(&a, &b));
        }
    }

    proptest! {
        #[test]
        fn rejection_of_vector4_is_perpendicular_to_axis(
            a in vector4_strategy(10.0),
            b in vector4_strategy(10.0),
        ) {
            prop_assume!(b.norm() > 1e-2);
            prop_assert!(rejection_is_perpendicular(&a, &b));
        }
    }

    proptest! {
        #[test]
        fn projection_and_rejection_of_vector2_sum_to_input(
            a in vector2_strategy(10.0),
            b in vector2_strategy(10.0),
        ) {
            prop_assume!(b.norm() > 1e-2);
            let sum = project(&a, &b) + reject(&a, &b);
            prop_assert!(abs_diff_eq!(sum, a, epsilon = 1e-5 * a.norm().max(1.0)));
        }
    }

    proptest! {
        #[test]
        fn projection_and_rejection_of_vector3_sum_to_input(
            a in vector3_strategy(10.0),
            b in vector3_strategy(10.0),
        ) {
            prop_assume!(b.norm() > 1e-2);
            let sum = project(&a, &b) + reject(&a, &b);
            prop_assert!(abs_diff_eq!(sum, a, epsilon = 1e-5 * a.norm().max(1.0)));
        }
    }

    proptest! {
        #[test]
        fn projection_and_rejection_of_vector4_sum_to_input(
            a in vector4_strategy(10.0),
            b in vector4_strategy(10.0),
        ) {
            prop_assume!(b.norm() > 1e-2);
            let sum = project(&a, &b) + reject(&a, &b);
            prop_assert!(abs_diff_eq!(sum, a, epsilon = 1e-5 * a.norm().max(1.0)));
        }
    }

    proptest! {
        #[test]
        fn normalized_vector2_has_unit_norm(v in vector2_strategy(1e3)) {
            prop_assume!(v.norm() > 1e-3);
            prop_assert!(relative_eq!(v.normalized().norm(), 1.0, epsilon = 1e-5));
        }
    }

    proptest! {
        #[test]
        fn normalized_vector3_has_unit_norm(v in vector3_strategy(1e3)) {
            prop_assume!(v.norm() > 1e-3);
            prop_assert!(relative_eq!(v.normalized().norm(), 1.0, epsilon = 1e-5));
        }
    }

    proptest! {
        #[test]
        fn normalized_vector4_has_unit_norm(v in vector4_strategy(1e3)) {
            prop_assume!(v.norm() > 1e-3);
            prop_assert!(relative_eq!(v.normalized().norm(), 1.0, epsilon = 1e-5));
        }
    }

    proptest! {
        #[test]
        fn scalar_multiplication_distributes_over_vector2_addition(
            a in vector2_strategy(1e2),
            b in vector2_strategy(1e2),
            s in -10.0_f32..10.0,
        ) {
            let lhs = (a + b) * s;
            let rhs = a * s + b * s;
            prop_assert!(relative_eq!(lhs, rhs, epsilon = 1e-3, max_relative = 1e-5));
        }
    }

    proptest! {
        #[test]
        fn scalar_multiplication_distributes_over_vector3_addition(
            a in vector3_strategy(1e2),
            b in vector3_strategy(1e2),
            s in -10.0_f32..10.0,
        ) {
            let lhs = (a + b) * s;
            let rhs = a * s + b * s;
            prop_assert!(relative_eq!(lhs, rhs, epsilon = 1e-3, max_relative = 1e-5));
        }
    }

    proptest! {
        #[test]
        fn scalar_multiplication_distributes_over_vector4_addition(
            a in vector4_strategy(1e2),
            b in vector4_strategy(1e2),
            s in -10.0_f32..10.0,
        ) {
            let lhs = (a + b) * s;
            let rhs = a * s + b * s;
            prop_assert!(relative_eq!(lhs, rhs, epsilon = 1e-3, max_relative = 1e-5));
        }
    }

    proptest! {
        #[test]
        fn vector2_equality_is_reflexive_and_symmetric(a in vector2_strategy(1e3), b in vector2_strategy(1e3)) {
            prop_assert_eq!(a, a);
            prop_assert_eq!(a == b, b == a);
        }
    }

    proptest! {
        #[test]
        fn vector3_equality_is_reflexive_and_symmetric(a in vector3_strategy(1e3), b in vector3_strategy(1e3)) {
            prop_assert_eq!(a, a);
            prop_assert_eq!(a == b, b == a);
        }
    }

    proptest! {
        #[test]
        fn vector4_equality_is_reflexive_and_symmetric(a in vector4_strategy(1e3), b in vector4_strategy(1e3)) {
            prop_assert_eq!(a, a);
            prop_assert_eq!(a == b, b == a);
        }
    }
}
