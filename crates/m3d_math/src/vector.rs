use std::fmt::{Display, Formatter};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::number_traits::{Float, Zero};

pub type Vec2 = Vector2<f32>;
pub type Vec3 = Vector3<f32>;
pub type Vec4 = Vector4<f32>;

/// Builds a [`Vec2`] from its components.
pub fn vec2(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

/// Builds a [`Vec3`] from its components.
pub fn vec3(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(x, y, z)
}

/// Builds a [`Vec4`] from its components.
pub fn vec4(x: f32, y: f32, z: f32, w: f32) -> Vec4 {
    Vec4::new(x, y, z, w)
}

// Each slot has one stored field (the positional name) and any number of
// alias accessors reading that same field.
macro_rules! struct_vec {
    (@aliases $dim:ident; $($alias:ident),*) => {
        $(
            #[doc = concat!("Reads the `", stringify!($dim), "` component.")]
            pub fn $alias(&self) -> T {
                self.$dim
            }
        )*
    };
    (@scalar_lhs $name:ident, ($($dim:ident),*), $scalar:ty) => {
        impl Mul<$name<$scalar>> for $scalar {
            type Output = $name<$scalar>;

            fn mul(self, rhs: $name<$scalar>) -> Self::Output {
                $name {
                    $($dim: self * rhs.$dim),*
                }
            }
        }
    };
    ($name:ident : $display_fmt:literal, ($($dim:ident $(| $alias:ident)* : $TY:ty => $idx:tt,)*)) => {
        #[must_use]
        #[derive(Clone, Copy, PartialEq, Eq, Debug)]
        pub struct $name<T = f32> {
            $(pub $dim: T,)*
        }

        impl<T> $name<T> {
            pub const fn new($($dim: T),*) -> Self {
                Self {
                    $($dim),*
                }
            }
        }

        impl<T> $name<T>
        where T: Copy {
            $(struct_vec!(@aliases $dim; $($alias),*);)*
        }

        impl<T> $name<T>
        where T: Copy + Zero + Add<Output = T> + Mul<Output = T> {
            pub fn dot(&self, other: &Self) -> T {
                T::zero() $(+ self.$dim * other.$dim)*
            }

            pub fn hadamard(&self, other: &Self) -> Self {
                Self {
                    $($dim: self.$dim * other.$dim),*
                }
            }

            pub fn length_squared(&self) -> T {
                self.dot(self)
            }
        }

        impl<T> $name<T>
        where T: Float {
            pub fn length(&self) -> T {
                self.length_squared().sqrt()
            }

            pub fn normalize(&mut self) {
                let length = self.length();
                $(self.$dim /= length;)*
            }

            pub fn normalized(&self) -> Self {
                let mut normalized = *self;
                normalized.normalize();
                normalized
            }
        }

        impl<T> Default for $name<T>
        where T: Zero {
            fn default() -> Self {
                Self {
                    $($dim: T::zero(),)*
                }
            }
        }

        impl<T> Index<usize> for $name<T> {
            type Output = T;

            fn index(&self, index: usize) -> &Self::Output {
                match index {
                    $($idx => &self.$dim,)*
                    _ => panic!("{} has no component {index}", stringify!($name)),
                }
            }
        }

        impl<T> IndexMut<usize> for $name<T> {
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                match index {
                    $($idx => &mut self.$dim,)*
                    _ => panic!("{} has no component {index}", stringify!($name)),
                }
            }
        }

        impl<T> Add for $name<T>
        where
            T: Copy + Add<Output = T>, {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                Self {
                    $($dim: self.$dim + rhs.$dim),*
                }
            }
        }

        impl<T> AddAssign for $name<T>
        where
            T: Copy + Add<Output = T>, {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl<T> Sub for $name<T>
        where
            T: Copy + Sub<Output = T>, {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self::Output {
                Self {
                    $($dim: self.$dim - rhs.$dim),*
                }
            }
        }

        impl<T> SubAssign for $name<T>
        where
            T: Copy + Sub<Output = T>, {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl<T> Mul<T> for $name<T>
        where
            T: Copy + Mul<Output = T>, {
            type Output = Self;

            fn mul(self, rhs: T) -> Self::Output {
                Self {
                    $($dim: self.$dim * rhs),*
                }
            }
        }

        impl<T> MulAssign<T> for $name<T>
        where
            T: Copy + Mul<Output = T>, {
            fn mul_assign(&mut self, rhs: T) {
                *self = *self * rhs;
            }
        }

        struct_vec!(@scalar_lhs $name, ($($dim),*), i32);
        struct_vec!(@scalar_lhs $name, ($($dim),*), f32);
        struct_vec!(@scalar_lhs $name, ($($dim),*), f64);

        impl<T> Div<T> for $name<T>
        where
            T: Copy + Div<Output = T>, {
            type Output = Self;

            fn div(self, rhs: T) -> Self::Output {
                Self {
                    $($dim: self.$dim / rhs),*
                }
            }
        }

        impl<T> DivAssign<T> for $name<T>
        where
            T: Copy + Div<Output = T>, {
            fn div_assign(&mut self, rhs: T) {
                *self = *self / rhs;
            }
        }

        impl<T> Neg for $name<T>
        where
            T: Copy + Neg<Output = T>,
        {
            type Output = Self;

            fn neg(self) -> Self::Output {
                Self {
                    $($dim: -self.$dim),*
                }
            }
        }

        impl<T> Display for $name<T>
        where
            T: Display,
        {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, $display_fmt, $(self.$dim),*)
            }
        }

        impl<T> From<($($TY),*)> for $name<T>
        where
            T: Copy {
            fn from(tuple: ($($TY),*)) -> Self {
                Self {
                    $($dim: tuple.$idx),*
                }
            }
        }

        impl<T> From<$name<T>> for ($($TY),*)
        where
            T: Copy,
        {
            fn from(vector: $name<T>) -> Self {
                ($(vector.$dim),*)
            }
        }
    };
}

struct_vec!(Vector2: "({}, {})", (x | s | r: T => 0, y | t | g: T => 1,));
struct_vec!(Vector3: "({}, {}, {})", (x | s | r: T => 0, y | t | g: T => 1, z | u | b: T => 2,));
struct_vec!(Vector4: "({}, {}, {}, {})", (x | s | r: T => 0, y | t | g: T => 1, z | u | b: T => 2, w | v | a: T => 3,));

// Swizzles are read-only copies of a contiguous run of components. Every view
// listed on one line reads the same slots.
macro_rules! swizzle {
    (@view $out:ident, ($($dim:ident),+), $view:ident) => {
        #[doc = concat!("Copies (", stringify!($($dim),+), ") into a new vector.")]
        pub fn $view(&self) -> $out<T> {
            $out::new($(self.$dim),+)
        }
    };
    (@views $out:ident, $dims:tt, $($view:ident)|+) => {
        $(swizzle!(@view $out, $dims, $view);)+
    };
    ($name:ident { $($($view:ident)|+ => $out:ident $dims:tt;)+ }) => {
        impl<T> $name<T>
        where T: Copy {
            $(swizzle!(@views $out, $dims, $($view)|+);)+
        }
    };
}

swizzle!(Vector3 {
    xy | st | rg => Vector2 (x, y);
    yz | tu | gb => Vector2 (y, z);
});

swizzle!(Vector4 {
    xy | st | rg => Vector2 (x, y);
    yz | tu | gb => Vector2 (y, z);
    zw | uv | ba => Vector2 (z, w);
    xyz | stu | rgb => Vector3 (x, y, z);
    yzw | tuv | gba => Vector3 (y, z, w);
});

impl<T> Vector2<T> {
    pub fn extend(self, z: T) -> Vector3<T> {
        Vector3::new(self.x, self.y, z)
    }
}

impl<T> Vector3<T> {
    pub fn extend(self, w: T) -> Vector4<T> {
        Vector4::new(self.x, self.y, self.z, w)
    }
}

impl<T> Vector3<T>
where
    T: Copy + Sub<Output = T> + Mul<Output = T>,
{
    /// Right-handed cross product.
    pub fn cross(&self, other: &Vector3<T>) -> Vector3<T> {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }
}

impl<T> From<Vector2<T>> for Vector3<T>
where
    T: Zero,
{
    fn from(value: Vector2<T>) -> Self {
        value.extend(T::zero())
    }
}

impl<T> From<Vector2<T>> for Vector4<T>
where
    T: Zero,
{
    fn from(value: Vector2<T>) -> Self {
        value.extend(T::zero()).extend(T::zero())
    }
}

impl<T> From<Vector3<T>> for Vector4<T>
where
    T: Zero,
{
    fn from(value: Vector3<T>) -> Self {
        value.extend(T::zero())
    }
}

impl<T> From<[T; 3]> for Vector3<T>
where
    T: Copy,
{
    fn from(value: [T; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl<T> From<Vector3<T>> for [T; 3] {
    fn from(value: Vector3<T>) -> Self {
        [value.x, value.y, value.z]
    }
}

impl<T> From<[T; 4]> for Vector4<T>
where
    T: Copy,
{
    fn from(value: [T; 4]) -> Self {
        Self::new(value[0], value[1], value[2], value[3])
    }
}

impl<T> From<Vector4<T>> for [T; 4] {
    fn from(value: Vector4<T>) -> Self {
        [value.x, value.y, value.z, value.w]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::*;

    #[test]
    fn vector3_new() {
        let v = Vector3::new(1, 2, 3);

        assert_eq!(v.x, 1);
        assert_eq!(v.y, 2);
        assert_eq!(v.z, 3);
    }

    #[test]
    fn vec2_construction() {
        let v = vec2(2.0, 3.5);

        assert_eq!(v.x, 2.0);
        assert_eq!(v.y, 3.5);
    }

    #[test]
    fn vec3_from_vec2() {
        let v = Vec3::from(vec2(4.0, 3.6));

        assert_eq!(v, vec3(4.0, 3.6, 0.0));
    }

    #[test]
    fn vec3_from_vec2_and_z() {
        let v = vec2(7.0, 1.0).extend(8.2);

        assert_eq!(v, vec3(7.0, 1.0, 8.2));
    }

    #[test]
    fn vec4_from_vec2() {
        let v = Vec4::from(vec2(4.0, 3.6));

        assert_eq!(v, vec4(4.0, 3.6, 0.0, 0.0));
    }

    #[test]
    fn vec4_from_vec2_and_z() {
        let v = Vec4::from(vec2(7.0, 1.0).extend(8.2));

        assert_eq!(v, vec4(7.0, 1.0, 8.2, 0.0));
    }

    #[test]
    fn vec4_from_vec2_z_and_w() {
        let v = vec2(7.0, 1.0).extend(8.2).extend(9.0);

        assert_eq!(v, vec4(7.0, 1.0, 8.2, 9.0));
    }

    #[test]
    fn vec4_from_vec3() {
        let v = Vec4::from(vec3(4.0, 3.6, 7.5));

        assert_eq!(v, vec4(4.0, 3.6, 7.5, 0.0));
    }

    #[test]
    fn vec4_from_vec3_and_w() {
        let v = vec3(4.0, 3.6, 7.5).extend(2.3);

        assert_eq!(v, vec4(4.0, 3.6, 7.5, 2.3));
    }

    #[test]
    fn aliases_read_the_same_slot() {
        let v = vec4(1.0, 2.0, 3.0, 4.0);

        assert_eq!((v.s(), v.t(), v.u(), v.v()), (v.x, v.y, v.z, v.w));
        assert_eq!((v.r(), v.g(), v.b(), v.a()), (v.x, v.y, v.z, v.w));
        assert_eq!((v[0], v[1], v[2], v[3]), (v.x, v.y, v.z, v.w));
    }

    #[test]
    fn alias_follows_field_writes() {
        let mut v = vec3(1.0, 2.0, 3.0);

        v.y = 8.0;
        v[2] = 9.0;

        assert_eq!(v.t(), 8.0);
        assert_eq!(v.g(), 8.0);
        assert_eq!(v.u(), 9.0);
        assert_eq!(v.b(), 9.0);
    }

    #[test]
    #[should_panic(expected = "Vector2 has no component 2")]
    fn index_out_of_range() {
        let v = vec2(1.0, 2.0);
        let _component = v[2];
    }

    #[test]
    fn vec4_xyzw_swizzling() {
        let v = vec4(1.0, 2.0, 3.0, 4.0);

        assert_eq!(v.xyz(), vec3(1.0, 2.0, 3.0));
        assert_eq!(v.yzw(), vec3(2.0, 3.0, 4.0));
        assert_eq!(v.xy(), vec2(1.0, 2.0));
        assert_eq!(v.yz(), vec2(2.0, 3.0));
        assert_eq!(v.zw(), vec2(3.0, 4.0));
    }

    #[test]
    fn vec4_stuv_swizzling() {
        let v = vec4(1.0, 2.0, 3.0, 4.0);

        let a = v.stu();
        let b = v.tuv();
        assert_eq!((a.s(), a.t(), a.u()), (1.0, 2.0, 3.0));
        assert_eq!((b.s(), b.t(), b.u()), (2.0, 3.0, 4.0));
        assert_eq!(v.st(), vec2(1.0, 2.0));
        assert_eq!(v.tu(), vec2(2.0, 3.0));
        assert_eq!(v.uv(), vec2(3.0, 4.0));
        assert_eq!(v.stu(), v.xyz());
    }

    #[test]
    fn vec4_rgba_swizzling() {
        let v = vec4(1.0, 2.0, 3.0, 4.0);

        let a = v.rgb();
        let b = v.gba();
        assert_eq!((a.r(), a.g(), a.b()), (1.0, 2.0, 3.0));
        assert_eq!((b.r(), b.g(), b.b()), (2.0, 3.0, 4.0));
        assert_eq!(v.rg(), vec2(1.0, 2.0));
        assert_eq!(v.gb(), vec2(2.0, 3.0));
        assert_eq!(v.ba(), vec2(3.0, 4.0));
    }

    #[test]
    fn vec3_swizzling() {
        let v = vec3(1.0, 2.0, 3.0);

        assert_eq!(v.xy(), vec2(1.0, 2.0));
        assert_eq!(v.tu(), vec2(2.0, 3.0));
        assert_eq!(v.rg(), v.st());
    }

    #[test]
    fn swizzle_is_a_copy() {
        let v = vec4(1.0, 2.0, 3.0, 4.0);

        let mut xyz = v.xyz();
        xyz.x = 10.0;

        assert_eq!(v.x, 1.0);
    }

    #[test]
    fn add() {
        let a = Vector3::new(1, 2, 3);
        let b = Vector3::new(4, 5, 6);

        let result = a + b;

        assert_eq!(result.x, 5);
        assert_eq!(result.y, 7);
        assert_eq!(result.z, 9);
    }

    #[test]
    fn add_is_commutative() {
        let a = vec4(1.0, 2.0, 3.0, 4.0);
        let b = vec4(3.0, 4.0, 11.0, 3.0);

        assert_eq!(a + b, b + a);
        assert_eq!(a + b, vec4(4.0, 6.0, 14.0, 7.0));
    }

    #[test]
    fn add_assign() {
        let mut a = Vector3::new(1, 2, 3);
        let b = Vector3::new(4, 5, 6);
        let expected = a + b;

        a += b;

        assert_eq!(a, expected);
        assert_eq!(a, Vector3::new(5, 7, 9));
    }

    #[test]
    fn sub() {
        let a = Vector3::new(1, 2, 3);
        let b = Vector3::new(4, 3, 2);

        let result = a - b;

        assert_eq!(result.x, -3);
        assert_eq!(result.y, -1);
        assert_eq!(result.z, 1);
    }

    #[test]
    fn sub_assign() {
        let mut a = Vector3::new(1, 2, 3);
        let b = Vector3::new(4, 3, 2);

        a -= b;

        assert_eq!(a.x, -3);
        assert_eq!(a.y, -1);
        assert_eq!(a.z, 1);
    }

    #[test]
    fn mul_scalar() {
        let a = Vector3::new(1, 2, 3);
        let b = 5;

        let result = a * b;

        assert_eq!(result.x, 5);
        assert_eq!(result.y, 10);
        assert_eq!(result.z, 15);
    }

    #[test]
    fn scalar_mul_is_commutative() {
        assert_eq!(5.0_f32 * vec2(1.0, 2.0), vec2(1.0, 2.0) * 5.0);
        assert_eq!(5.0_f32 * vec3(1.0, 2.0, 6.0), vec3(5.0, 10.0, 30.0));
        assert_eq!(5.0_f32 * vec4(1.0, 2.0, 6.0, 4.0), vec4(5.0, 10.0, 30.0, 20.0));
        assert_eq!(2.0_f64 * Vector3::new(1.0_f64, 2.0, 3.0), Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(3_i32 * Vector2::new(1, 2), Vector2::new(3, 6));
    }

    #[test]
    fn mul_assign_scalar() {
        let mut vec = Vector3::new(1, 2, 3);
        let scalar = 5;

        vec *= scalar;

        assert_eq!(vec.x, 5);
        assert_eq!(vec.y, 10);
        assert_eq!(vec.z, 15);
    }

    #[test]
    fn div_scalar() {
        let a = vec4(1.0, 2.0, 12.0, 10.0);

        let result = a / 2.0;

        assert_float_absolute_eq!(result.x, 0.5, 1e-7);
        assert_eq!(result.y, 1.0);
        assert_eq!(result.z, 6.0);
        assert_eq!(result.w, 5.0);
    }

    #[test]
    fn div_by_zero_follows_float_rules() {
        let result = vec2(1.0, -1.0) / 0.0;

        assert!(result.x.is_infinite() && result.x > 0.0);
        assert!(result.y.is_infinite() && result.y < 0.0);
    }

    #[test]
    fn div_assign_scalar() {
        let mut vec = Vector3::new(5, 10, 15);
        let scalar = 5;

        vec /= scalar;

        assert_eq!(vec.x, 1);
        assert_eq!(vec.y, 2);
        assert_eq!(vec.z, 3);
    }

    #[test]
    fn neg() {
        let a = Vector3::new(1, 2, 3);

        let result = -a;

        assert_eq!(result.x, -1);
        assert_eq!(result.y, -2);
        assert_eq!(result.z, -3);
    }

    #[test]
    fn hadamard() {
        assert_eq!(vec2(3.0, 6.0).hadamard(&vec2(2.0, 7.0)), vec2(6.0, 42.0));
        assert_eq!(
            vec3(3.0, 6.0, 2.0).hadamard(&vec3(2.0, 7.0, 5.0)),
            vec3(6.0, 42.0, 10.0)
        );
        assert_eq!(
            vec4(3.0, 6.0, 2.0, 4.0).hadamard(&vec4(2.0, 7.0, 5.0, 5.0)),
            vec4(6.0, 42.0, 10.0, 20.0)
        );
    }

    #[test]
    fn dot() {
        assert_eq!(vec2(3.0, 4.0).dot(&vec2(10.0, 5.0)), 50.0);
        assert_eq!(vec3(3.0, 4.0, 2.0).dot(&vec3(10.0, 5.0, 3.0)), 56.0);
        assert_eq!(vec4(3.0, 4.0, 2.0, 5.0).dot(&vec4(10.0, 5.0, 3.0, 4.0)), 76.0);
    }

    #[test]
    fn dot_is_commutative() {
        let a = vec4(0.3, -1.7, 2.5, 9.1);
        let b = vec4(4.2, 0.01, -3.3, 1.5);

        assert_eq!(a.dot(&b), b.dot(&a));
    }

    #[test]
    fn length_squared() {
        assert_eq!(vec2(6.0, 2.0).length_squared(), 40.0);
        assert_eq!(vec3(6.0, 2.0, 4.0).length_squared(), 56.0);
        assert_eq!(vec4(6.0, 2.0, 4.0, 7.0).length_squared(), 105.0);
    }

    #[test]
    fn length() {
        assert_float_absolute_eq!(vec2(3.0, 2.0).length(), 3.605_551_3, 1e-6);
        assert_float_absolute_eq!(vec3(3.0, 2.0, 6.0).length(), 7.0, 1e-7);
        assert_float_absolute_eq!(vec4(3.0, 2.0, 6.0, 4.0).length(), 8.062_258, 1e-6);
    }

    #[test]
    fn length_is_root_of_self_dot() {
        let v = vec3(1.5, -2.25, 0.75);

        assert_eq!(v.length(), v.dot(&v).sqrt());
    }

    #[test]
    fn normalize() {
        let mut vector = Vector3::new(1.0, 2.0, 3.0);

        vector.normalize();

        assert_float_absolute_eq!(vector.x, 0.26, 0.01);
        assert_float_absolute_eq!(vector.y, 0.53, 0.01);
        assert_float_absolute_eq!(vector.z, 0.80, 0.01);
    }

    #[test]
    fn normalized() {
        let a = vec2(5.0, 4.0).normalized();
        let b = vec3(5.0, 4.0, 2.0).normalized();
        let c = vec4(5.0, 4.0, 2.0, 6.0).normalized();

        assert_float_absolute_eq!(a.x, 0.780_868_8, 1e-6);
        assert_float_absolute_eq!(a.y, 0.624_695_05, 1e-6);
        assert_float_absolute_eq!(a.length(), 1.0, 1e-6);
        assert_float_absolute_eq!(b.x, 0.745_356, 1e-6);
        assert_float_absolute_eq!(b.y, 0.596_284_8, 1e-6);
        assert_float_absolute_eq!(b.z, 0.298_142_4, 1e-6);
        assert_float_absolute_eq!(b.length(), 1.0, 1e-6);
        assert_float_absolute_eq!(c.x, 0.555_555_6, 1e-6);
        assert_float_absolute_eq!(c.y, 0.444_444_45, 1e-6);
        assert_float_absolute_eq!(c.z, 0.222_222_22, 1e-6);
        assert_float_absolute_eq!(c.w, 0.666_666_7, 1e-6);
        assert_float_absolute_eq!(c.length(), 1.0, 1e-6);
    }

    #[test]
    fn normalize_zero_is_nan() {
        let v = Vec3::default().normalized();

        assert!(v.x.is_nan());
    }

    #[test]
    fn cross_vec3() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);

        let result = a.cross(&b);

        assert_float_absolute_eq!(result.x, -3.0, 0.01);
        assert_float_absolute_eq!(result.y, 6.0, 0.01);
        assert_float_absolute_eq!(result.z, -3.0, 0.01);
    }

    #[test]
    fn cross_is_right_handed() {
        let x = vec3(1.0, 0.0, 0.0);
        let y = vec3(0.0, 1.0, 0.0);

        assert_eq!(x.cross(&y), vec3(0.0, 0.0, 1.0));
        assert_eq!(y.cross(&x), vec3(0.0, 0.0, -1.0));
    }

    #[test]
    fn display() {
        let result = format!("{}", Vector3::new(1, 2, 3));
        assert_eq!("(1, 2, 3)", &result);
    }

    #[test]
    fn default() {
        let vector = Vector4::<f32>::default();

        assert_float_absolute_eq!(vector.x, 0.0, 0.0);
        assert_float_absolute_eq!(vector.y, 0.0, 0.0);
        assert_float_absolute_eq!(vector.z, 0.0, 0.0);
        assert_float_absolute_eq!(vector.w, 0.0, 0.0);
    }

    #[test]
    fn from_tuple() {
        let tuple = (0, 1, 2, 3);
        let v = Vector4::from(tuple);

        assert_eq!(v.x, 0);
        assert_eq!(v.y, 1);
        assert_eq!(v.z, 2);
        assert_eq!(v.w, 3);
    }

    #[test]
    fn into_array() {
        let array: [f32; 4] = vec4(0.0, 1.0, 2.0, 3.0).into();

        assert_eq!(array, [0.0, 1.0, 2.0, 3.0]);
    }
}
