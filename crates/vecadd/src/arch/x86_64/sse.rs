//! 128-bit float addition with SSE.
//!
//! Executes: out[i] = a[i] + b[i] for i in 0..4
//!
//! Uses `movups` for loads and stores, so the buffers may sit at any
//! address. SSE is part of the x86_64 baseline; no feature check is needed.

use core::arch::x86_64::{_mm_add_ps, _mm_loadu_ps, _mm_storeu_ps};

use crate::kernel::VectorAdd;
use crate::lanes::F32x4;

/// Add four packed f32 lanes from unaligned memory.
///
/// # Execution
///
/// - 2 × `movups` load
/// - 1 × `addps`
/// - 1 × `movups` store
///
/// # Safety
///
/// - `a` and `b` must be valid for reads of 4 `f32`
/// - `out` must be valid for writes of 4 `f32`
///
/// No alignment is required.
#[inline]
pub unsafe fn add_ps_unaligned(a: *const f32, b: *const f32, out: *mut f32) {
    let va = _mm_loadu_ps(a);
    let vb = _mm_loadu_ps(b);
    let vresult = _mm_add_ps(va, vb);
    _mm_storeu_ps(out, vresult);
}

/// SSE kernel: 4 × f32 in one `__m128`.
///
/// # Example
///
/// ```
/// use vecadd::{ramp, SseF32x4, VectorAdd};
///
/// let a: [f32; 4] = ramp();
/// assert_eq!(SseF32x4::new().add(&a, &a), [0.0, 2.0, 4.0, 6.0]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SseF32x4;

impl SseF32x4 {
    /// Create the SSE kernel. Always available on x86_64.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl VectorAdd for SseF32x4 {
    type Lane = f32;
    type Buffer = F32x4;
    const LANES: usize = 4;
    const NAME: &'static str = "SseF32x4";

    #[inline]
    fn add(&self, a: &F32x4, b: &F32x4) -> F32x4 {
        let mut out = [0.0f32; 4];
        // SAFETY: all three arrays hold exactly 4 f32; movups has no
        // alignment requirement.
        unsafe { add_ps_unaligned(a.as_ptr(), b.as_ptr(), out.as_mut_ptr()) };
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lanes::ramp;

    #[test]
    fn test_ramp_sum() {
        let a: F32x4 = ramp();
        let b: F32x4 = ramp();
        assert_eq!(SseF32x4::new().add(&a, &b), [0.0, 2.0, 4.0, 6.0]);
    }

    #[test]
    fn test_offset_buffers() {
        // Slices starting one f32 past an aligned base are 4 bytes off any
        // 16-byte boundary that movaps would demand.
        #[repr(C, align(16))]
        struct Backing([f32; 13]);

        let a = Backing(core::array::from_fn(|i| i as f32));
        let b = Backing([0.5; 13]);
        let mut out = Backing([0.0; 13]);

        unsafe {
            add_ps_unaligned(
                a.0.as_ptr().add(1),
                b.0.as_ptr().add(1),
                out.0.as_mut_ptr().add(1),
            );
        }
        assert_eq!(&out.0[1..5], &[1.5, 2.5, 3.5, 4.5]);
        // Neighbouring lanes are untouched
        assert_eq!(out.0[0], 0.0);
        assert_eq!(out.0[5], 0.0);
    }

    #[test]
    fn test_signed_and_fractional() {
        let a = [-1.25f32, 0.0, 3.5, -0.0];
        let b = [1.25f32, -0.0, -7.0, -0.0];
        let sum = SseF32x4::new().add(&a, &b);
        assert_eq!(sum, [0.0, 0.0, -3.5, -0.0]);
        assert!(sum[3].is_sign_negative());
    }
}
