//! Lane buffers.
//!
//! A lane buffer is the memory side of a vector register: a fixed-size array
//! that a kernel loads from and stores into. The 128-bit float path works on
//! plain arrays; the 256-bit paths work on [`Aligned32`], whose address is
//! always a multiple of 32 bytes.
//!
//! ```text
//! Aligned32<f32, 8>   (one __m256, 32 bytes, align 32)
//!        │
//!        ├── lane[0]: f32
//!        ├── ...
//!        └── lane[7]: f32
//! ```

use core::fmt;
use core::ops::{Index, IndexMut};

/// Alignment in bytes required by `vmovaps`/`vmovdqa` on 256-bit operands.
pub const AVX_ALIGNMENT: usize = 32;

/// N lanes of T at a 32-byte-aligned address.
///
/// The alignment is part of the type, so a reference to an `Aligned32`
/// always satisfies the precondition of the aligned 256-bit load and store.
/// This holds wherever the value lives: on the stack, inside an array or
/// struct, or behind a `Box`.
#[derive(Clone, Copy, PartialEq)]
#[repr(C, align(32))]
pub struct Aligned32<T, const N: usize>(pub [T; N]);

/// 4 × f32 = 128 bits, the SSE operand. No alignment requirement.
pub type F32x4 = [f32; 4];

/// 8 × f32 = 256 bits, the AVX float operand.
pub type F32x8 = Aligned32<f32, 8>;

/// 8 × i32 = 256 bits, the AVX2 integer operand.
pub type I32x8 = Aligned32<i32, 8>;

impl<T: Copy + Default, const N: usize> Aligned32<T, N> {
    /// The number of lanes in this buffer.
    pub const LANES: usize = N;

    /// Create a buffer with every lane set to `T::default()`.
    #[inline]
    #[must_use]
    pub fn zeroed() -> Self {
        Self([T::default(); N])
    }

    /// Create a buffer with every lane set to `value`.
    #[inline]
    #[must_use]
    pub fn splat(value: T) -> Self {
        Self([value; N])
    }
}

impl<T, const N: usize> Aligned32<T, N> {
    /// Wrap an array.
    #[inline]
    pub const fn from_array(values: [T; N]) -> Self {
        Self(values)
    }

    /// Borrow the lanes as an array.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Unwrap into the lane array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Pointer to lane 0. Always a multiple of 32.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.0.as_ptr()
    }

    /// Mutable pointer to lane 0. Always a multiple of 32.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.0.as_mut_ptr()
    }
}

impl<T: Copy + Default, const N: usize> Default for Aligned32<T, N> {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl<T, const N: usize> From<[T; N]> for Aligned32<T, N> {
    fn from(values: [T; N]) -> Self {
        Self(values)
    }
}

impl<T, const N: usize> AsRef<[T]> for Aligned32<T, N> {
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> Index<usize> for Aligned32<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, lane: usize) -> &T {
        &self.0[lane]
    }
}

impl<T, const N: usize> IndexMut<usize> for Aligned32<T, N> {
    #[inline]
    fn index_mut(&mut self, lane: usize) -> &mut T {
        &mut self.0[lane]
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Aligned32<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Aligned32").field(&self.0).finish()
    }
}

/// The seed data every demonstration uses: lane i holds `i as f32`.
///
/// ```
/// let a: [f32; 4] = vecadd::ramp();
/// assert_eq!(a, [0.0, 1.0, 2.0, 3.0]);
/// ```
#[must_use]
pub fn ramp<const N: usize>() -> [f32; N] {
    core::array::from_fn(|i| i as f32)
}
