use std::fmt::{Debug, Display, Formatter};
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign};

use log::trace;

use crate::number_traits::{Float, One, Zero};
use crate::vector::{Vector3, Vector4};
use crate::{MatrixError, Result};

pub type Matrix4f = Matrix4<f32>;
pub type Mat4 = Matrix4<f32>;

/// 4x4 matrix acting on column vectors.
///
/// Values are stored column-major: indexing yields a column, so
/// `m[col][row] == m.at(row, col)`. Translations live in column 3.
#[derive(Clone, Copy, PartialEq)]
pub struct Matrix4<T = f32> {
    values: [T; 16],
}

impl<T> Debug for Matrix4<T>
where
    T: Display + Copy,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "[")?;
        for row in 0..Self::ROWS {
            write!(f, "\t")?;
            for col in 0..Self::COLS {
                write!(f, "{}, ", self.at(row, col))?;
            }
            writeln!(f)?;
        }
        writeln!(f, "]")
    }
}

impl<T> Matrix4<T> {
    const COLS: usize = 4;
    const ROWS: usize = 4;

    /// Builds a matrix from 16 column-major values.
    pub const fn with_values(values: [T; 16]) -> Self {
        Self { values }
    }
}

impl<T> Matrix4<T>
where
    T: Copy,
{
    pub fn from_columns(columns: [[T; 4]; 4]) -> Self {
        let mut values = [columns[0][0]; 16];
        for (col, column) in columns.iter().enumerate() {
            values[col * Self::ROWS..(col + 1) * Self::ROWS].copy_from_slice(column);
        }

        Self { values }
    }

    pub fn from_rows(rows: [[T; 4]; 4]) -> Self {
        Self::from_columns(rows).transpose()
    }

    #[must_use]
    pub fn at(&self, row: usize, col: usize) -> T {
        self.values[col * Self::ROWS + row]
    }

    pub fn at_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.values[col * Self::ROWS + row]
    }

    pub fn column(&self, col: usize) -> Vector4<T> {
        Vector4::new(
            self.at(0, col),
            self.at(1, col),
            self.at(2, col),
            self.at(3, col),
        )
    }

    pub fn row(&self, row: usize) -> Vector4<T> {
        Vector4::new(
            self.at(row, 0),
            self.at(row, 1),
            self.at(row, 2),
            self.at(row, 3),
        )
    }

    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut values = self.values;
        for row in 0..Self::ROWS {
            for col in 0..Self::COLS {
                values[row * Self::ROWS + col] = self.at(row, col);
            }
        }

        Self { values }
    }
}

impl<T> Matrix4<T>
where
    T: Copy + Zero + One,
{
    #[rustfmt::skip]
    pub fn new_translation(translation: &Vector3<T>) -> Self {
        Self::from_rows([
            [T::one(), T::zero(), T::zero(), translation.x],
            [T::zero(), T::one(), T::zero(), translation.y],
            [T::zero(), T::zero(), T::one(), translation.z],
            [T::zero(), T::zero(), T::zero(), T::one()],
        ])
    }

    pub fn new_scale_uniform(scale: T) -> Self {
        Self::new_scale(&Vector3::new(scale, scale, scale))
    }

    #[rustfmt::skip]
    pub fn new_scale(scale: &Vector3<T>) -> Self {
        Self::from_rows([
            [scale.x, T::zero(), T::zero(), T::zero()],
            [T::zero(), scale.y, T::zero(), T::zero()],
            [T::zero(), T::zero(), scale.z, T::zero()],
            [T::zero(), T::zero(), T::zero(), T::one()],
        ])
    }
}

impl<T> Matrix4<T>
where
    T: Float,
{
    /// OpenGL orthographic projection of the given box onto the clip cube.
    #[rustfmt::skip]
    pub fn new_orthographic(left: T, right: T, top: T, bottom: T, near: T, far: T) -> Self {
        Self::from_rows([
            [T::TWO / (right - left), T::zero(), T::zero(), -((right + left) / (right - left))],
            [T::zero(), T::TWO / (top - bottom), T::zero(), -((top + bottom) / (top - bottom))],
            [T::zero(), T::zero(), -T::TWO / (far - near), -((far + near) / (far - near))],
            [T::zero(), T::zero(), T::zero(), T::one()],
        ])
    }

    /// Symmetric perspective projection, `fov_y` in degrees.
    pub fn new_perspective(fov_y: T, aspect: T, near: T, far: T) -> Self {
        let top = near * (fov_y.degrees_to_radians() * T::HALF).tan();
        let bottom = -top;
        let right = top * aspect;
        let left = -right;
        Self::new_frustum(left, right, top, bottom, near, far)
    }

    /// Off-axis OpenGL frustum. Row 3 copies `-z` into `w` for the perspective divide.
    #[rustfmt::skip]
    pub fn new_frustum(left: T, right: T, top: T, bottom: T, near: T, far: T) -> Self {
        Self::from_rows([
            [(T::TWO * near) / (right - left), T::zero(), (right + left) / (right - left), T::zero()],
            [T::zero(), (T::TWO * near) / (top - bottom), (top + bottom) / (top - bottom), T::zero()],
            [T::zero(), T::zero(), -(far + near) / (far - near), T::TWO * far * near / (near - far)],
            [T::zero(), T::zero(), -T::one(), T::zero()],
        ])
    }

    /// Rotation of `angle` degrees around `axis`. The axis is normalized first.
    #[rustfmt::skip]
    #[allow(clippy::many_single_char_names)]
    pub fn new_rotation(angle: T, axis: &Vector3<T>) -> Self {
        let axis = axis.normalized();
        let (x, y, z) = (axis.x, axis.y, axis.z);
        let (sin, cos) = angle.degrees_to_radians().sin_cos();
        let t = T::one() - cos;

        Self::from_rows([
            [t * x * x + cos, t * x * y - sin * z, t * x * z + sin * y, T::zero()],
            [t * x * y + sin * z, t * y * y + cos, t * y * z - sin * x, T::zero()],
            [t * x * z - sin * y, t * y * z + sin * x, t * z * z + cos, T::zero()],
            [T::zero(), T::zero(), T::zero(), T::one()],
        ])
    }
}

impl<T> Matrix4<T>
where
    T: Float,
{
    // 2x2 minors of columns 2 and 3, shared by the determinant and the inverse.
    fn lower_minors(&self) -> [T; 6] {
        [
            self[2][2] * self[3][3] - self[2][3] * self[3][2],
            self[2][1] * self[3][3] - self[2][3] * self[3][1],
            self[2][1] * self[3][2] - self[2][2] * self[3][1],
            self[2][0] * self[3][3] - self[2][3] * self[3][0],
            self[2][0] * self[3][2] - self[2][2] * self[3][0],
            self[2][0] * self[3][1] - self[2][1] * self[3][0],
        ]
    }

    fn expand_determinant(&self, [a2323, a1323, a1223, a0323, a0223, a0123]: [T; 6]) -> T {
        self[0][0] * (self[1][1] * a2323 - self[1][2] * a1323 + self[1][3] * a1223)
            - self[0][1] * (self[1][0] * a2323 - self[1][2] * a0323 + self[1][3] * a0223)
            + self[0][2] * (self[1][0] * a1323 - self[1][1] * a0323 + self[1][3] * a0123)
            - self[0][3] * (self[1][0] * a1223 - self[1][1] * a0223 + self[1][2] * a0123)
    }

    pub fn determinant(&self) -> T {
        self.expand_determinant(self.lower_minors())
    }

    /// Inverse by cofactor expansion.
    ///
    /// The expansion runs over the column slices, which computes the inverse of
    /// the transpose laid out row by row. Stored back column-major, that is
    /// exactly the inverse.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotInvertible`] when the determinant is zero,
    /// subnormal or not finite, so that its reciprocal cannot be formed.
    #[rustfmt::skip]
    pub fn try_inverse(&self) -> Result<Matrix4<T>> {
        let minors = self.lower_minors();
        let det = self.expand_determinant(minors);
        if det.is_degenerate() {
            trace!("Matrix has a degenerate determinant ({det}), no inverse");
            return Err(MatrixError::NotInvertible);
        }

        let [a2323, a1323, a1223, a0323, a0223, a0123] = minors;
        let a2313 = self[1][2] * self[3][3] - self[1][3] * self[3][2];
        let a1313 = self[1][1] * self[3][3] - self[1][3] * self[3][1];
        let a1213 = self[1][1] * self[3][2] - self[1][2] * self[3][1];
        let a2312 = self[1][2] * self[2][3] - self[1][3] * self[2][2];
        let a1312 = self[1][1] * self[2][3] - self[1][3] * self[2][1];
        let a1212 = self[1][1] * self[2][2] - self[1][2] * self[2][1];
        let a0313 = self[1][0] * self[3][3] - self[1][3] * self[3][0];
        let a0213 = self[1][0] * self[3][2] - self[1][2] * self[3][0];
        let a0312 = self[1][0] * self[2][3] - self[1][3] * self[2][0];
        let a0212 = self[1][0] * self[2][2] - self[1][2] * self[2][0];
        let a0113 = self[1][0] * self[3][1] - self[1][1] * self[3][0];
        let a0112 = self[1][0] * self[2][1] - self[1][1] * self[2][0];

        let inv_det = T::one() / det;

        Ok(Matrix4 {
            values: [
                inv_det * (self[1][1] * a2323 - self[1][2] * a1323 + self[1][3] * a1223),
                inv_det * -(self[0][1] * a2323 - self[0][2] * a1323 + self[0][3] * a1223),
                inv_det * (self[0][1] * a2313 - self[0][2] * a1313 + self[0][3] * a1213),
                inv_det * -(self[0][1] * a2312 - self[0][2] * a1312 + self[0][3] * a1212),
                inv_det * -(self[1][0] * a2323 - self[1][2] * a0323 + self[1][3] * a0223),
                inv_det * (self[0][0] * a2323 - self[0][2] * a0323 + self[0][3] * a0223),
                inv_det * -(self[0][0] * a2313 - self[0][2] * a0313 + self[0][3] * a0213),
                inv_det * (self[0][0] * a2312 - self[0][2] * a0312 + self[0][3] * a0212),
                inv_det * (self[1][0] * a1323 - self[1][1] * a0323 + self[1][3] * a0123),
                inv_det * -(self[0][0] * a1323 - self[0][1] * a0323 + self[0][3] * a0123),
                inv_det * (self[0][0] * a1313 - self[0][1] * a0313 + self[0][3] * a0113),
                inv_det * -(self[0][0] * a1312 - self[0][1] * a0312 + self[0][3] * a0112),
                inv_det * -(self[1][0] * a1223 - self[1][1] * a0223 + self[1][2] * a0123),
                inv_det * (self[0][0] * a1223 - self[0][1] * a0223 + self[0][2] * a0123),
                inv_det * -(self[0][0] * a1213 - self[0][1] * a0213 + self[0][2] * a0113),
                inv_det * (self[0][0] * a1212 - self[0][1] * a0212 + self[0][2] * a0112),
            ]
        })
    }
}

impl<T> Matrix4<T>
where
    T: Copy + One + Add<Output = T> + Mul<Output = T>,
{
    pub fn transform_vec(&self, vec: &Vector4<T>) -> Vector4<T> {
        *self * *vec
    }

    /// Transforms the point `(x, y, z, 1)` and drops `w`.
    pub fn transform_point(&self, point: &Vector3<T>) -> Vector3<T> {
        self.transform_vec(&point.extend(T::one())).xyz()
    }
}

impl<T> Add<Self> for Matrix4<T>
where
    T: Copy + Add<Output = T>,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let mut values = self.values;
        for (value, rhs) in values.iter_mut().zip(rhs.values) {
            *value = *value + rhs;
        }

        Self { values }
    }
}

impl<T> AddAssign<Self> for Matrix4<T>
where
    T: Copy + Add<Output = T>,
{
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T> Mul<Self> for Matrix4<T>
where
    T: Copy + Zero + Add<Output = T> + Mul<Output = T>,
{
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut values = [T::zero(); 16];

        for col in 0..Self::COLS {
            for row in 0..Self::ROWS {
                values[col * Self::ROWS + row] = self.at(row, 0) * rhs.at(0, col)
                    + self.at(row, 1) * rhs.at(1, col)
                    + self.at(row, 2) * rhs.at(2, col)
                    + self.at(row, 3) * rhs.at(3, col);
            }
        }

        Self { values }
    }
}

impl<T> MulAssign<Self> for Matrix4<T>
where
    T: Copy + Zero + Add<Output = T> + Mul<Output = T>,
{
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T> Mul<Vector4<T>> for Matrix4<T>
where
    T: Copy + Add<Output = T> + Mul<Output = T>,
{
    type Output = Vector4<T>;

    fn mul(self, rhs: Vector4<T>) -> Self::Output {
        let x = self[0][0] * rhs.x + self[1][0] * rhs.y + self[2][0] * rhs.z + self[3][0] * rhs.w;
        let y = self[0][1] * rhs.x + self[1][1] * rhs.y + self[2][1] * rhs.z + self[3][1] * rhs.w;
        let z = self[0][2] * rhs.x + self[1][2] * rhs.y + self[2][2] * rhs.z + self[3][2] * rhs.w;
        let w = self[0][3] * rhs.x + self[1][3] * rhs.y + self[2][3] * rhs.z + self[3][3] * rhs.w;
        Vector4::new(x, y, z, w)
    }
}

impl<T> Index<usize> for Matrix4<T> {
    type Output = [T];

    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index * Self::ROWS..(index + 1) * Self::ROWS]
    }
}

impl<T> IndexMut<usize> for Matrix4<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.values[index * Self::ROWS..(index + 1) * Self::ROWS]
    }
}

impl<T> From<Matrix4<T>> for [[T; 4]; 4]
where
    T: Copy,
{
    fn from(matrix: Matrix4<T>) -> Self {
        [
            [matrix[0][0], matrix[0][1], matrix[0][2], matrix[0][3]],
            [matrix[1][0], matrix[1][1], matrix[1][2], matrix[1][3]],
            [matrix[2][0], matrix[2][1], matrix[2][2], matrix[2][3]],
            [matrix[3][0], matrix[3][1], matrix[3][2], matrix[3][3]],
        ]
    }
}

pub trait Identity {
    fn identity() -> Self;
}

#[rustfmt::skip]
impl<T> Identity for Matrix4<T>
    where T: Copy + One + Zero {
    fn identity() -> Self {
        Self::new_scale(&Vector3::new(T::one(), T::one(), T::one()))
    }
}
