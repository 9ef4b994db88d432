//! Portable scalar kernels.
//!
//! Each kernel adds lanes one at a time with the `+` operator and uses the
//! same buffer type as its SIMD counterpart, so the two can be compared on
//! identical inputs.

use crate::kernel::VectorAdd;
use crate::lanes::{Aligned32, F32x4, F32x8, I32x8};

/// Lane-wise `a[i] + b[i]` over arrays of any width.
#[inline]
fn add_lanes<T, const N: usize>(a: &[T; N], b: &[T; N]) -> [T; N]
where
    T: Copy + core::ops::Add<Output = T>,
{
    core::array::from_fn(|i| a[i] + b[i])
}

/// Scalar reference for the 4 × f32 kernel.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarF32x4;

impl VectorAdd for ScalarF32x4 {
    type Lane = f32;
    type Buffer = F32x4;
    const LANES: usize = 4;
    const NAME: &'static str = "ScalarF32x4";

    #[inline]
    fn add(&self, a: &F32x4, b: &F32x4) -> F32x4 {
        add_lanes(a, b)
    }
}

/// Scalar reference for the 8 × f32 kernel.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarF32x8;

impl VectorAdd for ScalarF32x8 {
    type Lane = f32;
    type Buffer = F32x8;
    const LANES: usize = 8;
    const NAME: &'static str = "ScalarF32x8";

    #[inline]
    fn add(&self, a: &F32x8, b: &F32x8) -> F32x8 {
        Aligned32(add_lanes(a.as_array(), b.as_array()))
    }
}

/// Scalar reference for the 8 × i32 kernel.
///
/// Lanes wrap on overflow, matching `vpaddd`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarI32x8;

impl VectorAdd for ScalarI32x8 {
    type Lane = i32;
    type Buffer = I32x8;
    const LANES: usize = 8;
    const NAME: &'static str = "ScalarI32x8";

    #[inline]
    fn add(&self, a: &I32x8, b: &I32x8) -> I32x8 {
        Aligned32(core::array::from_fn(|i| a[i].wrapping_add(b[i])))
    }
}
