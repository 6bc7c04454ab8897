use std::fmt::Display;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

pub trait Zero {
    fn zero() -> Self;
}

pub trait One {
    fn one() -> Self;
}

macro_rules! impl_identities {
    ($($ty:ty: $zero:literal, $one:literal;)*) => {
        $(
            impl Zero for $ty {
                fn zero() -> Self {
                    $zero
                }
            }

            impl One for $ty {
                fn one() -> Self {
                    $one
                }
            }
        )*
    };
}

impl_identities! {
    i32: 0, 1;
    f32: 0.0, 1.0;
    f64: 0.0, 1.0;
}

/// Component type of anything that takes square roots, angles or reciprocals:
/// lengths, projections, rotations and inversion.
pub trait Float:
    Copy
    + Display
    + PartialOrd
    + Zero
    + One
    + Add<Output = Self>
    + AddAssign
    + Sub<Output = Self>
    + SubAssign
    + Mul<Output = Self>
    + MulAssign
    + Div<Output = Self>
    + DivAssign
    + Neg<Output = Self>
{
    const TWO: Self;
    const HALF: Self;

    fn sqrt(self) -> Self;
    fn tan(self) -> Self;
    /// Returns `(sin, cos)` of an angle in radians.
    fn sin_cos(self) -> (Self, Self);
    fn degrees_to_radians(self) -> Self;

    /// Whether `1 / self` loses the value: zero, subnormal, infinite or NaN.
    fn is_degenerate(self) -> bool;
}

macro_rules! impl_float {
    ($($ty:ty),*) => {
        $(
            impl Float for $ty {
                const TWO: Self = 2.0;
                const HALF: Self = 0.5;

                fn sqrt(self) -> Self {
                    <$ty>::sqrt(self)
                }

                fn tan(self) -> Self {
                    <$ty>::tan(self)
                }

                fn sin_cos(self) -> (Self, Self) {
                    <$ty>::sin_cos(self)
                }

                fn degrees_to_radians(self) -> Self {
                    <$ty>::to_radians(self)
                }

                fn is_degenerate(self) -> bool {
                    !self.is_normal()
                }
            }
        )*
    };
}

impl_float!(f32, f64);
