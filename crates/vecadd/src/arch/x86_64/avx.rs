//! 256-bit float addition with AVX, aligned memory access.
//!
//! Executes: out[i] = a[i] + b[i] for i in 0..8
//!
//! Uses `vmovaps` for loads and stores. Unlike `vmovups`, the aligned form
//! demands that every operand address be a multiple of 32 bytes.

use core::arch::x86_64::{_mm256_add_ps, _mm256_load_ps, _mm256_store_ps};

use log::debug;

use super::CpuFeatures;
use crate::error::Result;
use crate::kernel::VectorAdd;
use crate::lanes::F32x8;

/// Add eight packed f32 lanes from 32-byte-aligned memory.
///
/// # Execution
///
/// - 2 × `vmovaps` load
/// - 1 × `vaddps`
/// - 1 × `vmovaps` store
///
/// # Safety
///
/// - The CPU must support AVX
/// - `a`, `b` and `out` must each be a multiple of 32
/// - `a` and `b` must be valid for reads of 8 `f32`
/// - `out` must be valid for writes of 8 `f32`
///
/// Alignment is not checked. A misaligned operand is undefined behavior;
/// on current hardware it raises a general-protection fault, but nothing
/// guarantees that. Use [`AvxF32x8::add`] with [`F32x8`] buffers to have
/// the type system carry the alignment instead.
#[inline]
#[target_feature(enable = "avx")]
pub unsafe fn add_ps_aligned(a: *const f32, b: *const f32, out: *mut f32) {
    let va = _mm256_load_ps(a);
    let vb = _mm256_load_ps(b);
    let vresult = _mm256_add_ps(va, vb);
    _mm256_store_ps(out, vresult);
}

/// AVX kernel: 8 × f32 in one `__m256`.
///
/// Holding an `AvxF32x8` proves AVX is available, and [`F32x8`] proves
/// 32-byte alignment, so [`VectorAdd::add`] is safe to call.
///
/// # Example
///
/// ```
/// use vecadd::{ramp, AvxF32x8, F32x8, VectorAdd};
///
/// if let Ok(kernel) = AvxF32x8::new() {
///     let a = F32x8::from(ramp::<8>());
///     let sum = kernel.add(&a, &a);
///     assert_eq!(sum[7], 14.0);
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AvxF32x8 {
    _private: (),
}

impl AvxF32x8 {
    /// Create the AVX kernel after checking the CPU.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingFeature`](crate::Error::MissingFeature) if
    /// the CPU lacks AVX.
    pub fn new() -> Result<Self> {
        CpuFeatures::detect().require_avx(Self::NAME)?;
        debug!("{} kernel ready", Self::NAME);
        Ok(Self { _private: () })
    }

    /// Create the AVX kernel without checking the CPU.
    ///
    /// # Safety
    ///
    /// The CPU must support AVX. Running the kernel without it executes an
    /// illegal instruction.
    #[inline]
    #[must_use]
    pub const unsafe fn new_unchecked() -> Self {
        Self { _private: () }
    }
}

impl VectorAdd for AvxF32x8 {
    type Lane = f32;
    type Buffer = F32x8;
    const LANES: usize = 8;
    const NAME: &'static str = "AvxF32x8";

    #[inline]
    fn add(&self, a: &F32x8, b: &F32x8) -> F32x8 {
        let mut out = F32x8::zeroed();
        // SAFETY: `self` exists only if AVX is present; F32x8 is
        // repr(align(32)) and holds exactly 8 f32.
        unsafe { add_ps_aligned(a.as_ptr(), b.as_ptr(), out.as_mut_ptr()) };
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lanes::ramp;

    fn kernel() -> Option<AvxF32x8> {
        AvxF32x8::new().ok()
    }

    #[test]
    fn test_ramp_sum() {
        let Some(k) = kernel() else { return };
        let a = F32x8::from(ramp::<8>());
        let b = F32x8::from(ramp::<8>());
        assert_eq!(
            k.add(&a, &b).into_array(),
            [0.0, 2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0]
        );
    }

    #[test]
    fn test_raw_primitive_on_aligned_buffers() {
        if !CpuFeatures::detect().avx {
            return;
        }
        let a = F32x8::splat(0.25);
        let b = F32x8::from([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        let mut out = F32x8::zeroed();
        unsafe { add_ps_aligned(a.as_ptr(), b.as_ptr(), out.as_mut_ptr()) };
        assert_eq!(
            out.into_array(),
            [1.25, 2.25, 3.25, 4.25, 5.25, 6.25, 7.25, 8.25]
        );
    }

    #[test]
    fn test_unchecked_matches_checked() {
        if !CpuFeatures::detect().avx {
            assert!(AvxF32x8::new().is_err());
            return;
        }
        let checked = AvxF32x8::new().unwrap();
        // SAFETY: AVX was detected above.
        let unchecked = unsafe { AvxF32x8::new_unchecked() };
        let a = F32x8::from(ramp::<8>());
        let b = F32x8::splat(-0.5);
        assert_eq!(unchecked.add(&a, &b), checked.add(&a, &b));
    }

    #[test]
    fn test_output_may_alias_input() {
        let Some(k) = kernel() else { return };
        let mut a = F32x8::splat(1.0);
        let b = F32x8::splat(2.0);
        let ptr = a.as_mut_ptr();
        // Both loads complete before the store
        unsafe { add_ps_aligned(ptr, b.as_ptr(), ptr) };
        assert_eq!(a, F32x8::splat(3.0));
        assert_eq!(k.add(&a, &a), F32x8::splat(6.0));
    }
}
