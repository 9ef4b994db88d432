//! 256-bit integer addition with AVX2.
//!
//! Executes: out[i] = a[i] + b[i] for i in 0..8 (32-bit lanes, wrapping)
//!
//! Uses `vpaddd`. The memory-to-memory form loads and stores with `vmovdqa`
//! on [`I32x8`] buffers; the benchmark form builds its operands from
//! immediates and never touches memory inside the loop.

use core::arch::x86_64::{
    __m256i, _mm256_add_epi32, _mm256_load_si256, _mm256_set_epi32, _mm256_setzero_si256,
    _mm256_store_si256,
};
use std::hint::black_box;
use std::io::Write;
use std::time::Instant;

use log::{debug, info};

use super::CpuFeatures;
use crate::bench::{AddLoop, LoopOutcome, Sink};
use crate::error::Result;
use crate::kernel::VectorAdd;
use crate::lanes::I32x8;
use crate::report::write_dump_line;

/// Add eight packed i32 lanes from 32-byte-aligned memory.
///
/// # Safety
///
/// - The CPU must support AVX2
/// - `a`, `b` and `out` must each be a multiple of 32
/// - `a` and `b` must be valid for reads of 8 `i32`
/// - `out` must be valid for writes of 8 `i32`
#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn add_epi32_aligned(a: *const i32, b: *const i32, out: *mut i32) {
    let va = _mm256_load_si256(a as *const __m256i);
    let vb = _mm256_load_si256(b as *const __m256i);
    _mm256_store_si256(out as *mut __m256i, _mm256_add_epi32(va, vb));
}

/// The two benchmark operands. `_mm256_set_epi32` takes lane 7 first, so
/// memory order is `FIRST` and `SECOND` from [`crate::bench`].
#[inline]
#[target_feature(enable = "avx2")]
unsafe fn constant_operands() -> (__m256i, __m256i) {
    let first = _mm256_set_epi32(1, 2, 3, 4, 5, 6, 7, 8);
    let second = _mm256_set_epi32(1, 1, 1, 1, 1, 1, 1, 1);
    (first, second)
}

#[target_feature(enable = "avx2")]
unsafe fn spin_opaque(iterations: u64) -> I32x8 {
    let mut result = _mm256_setzero_si256();
    for _ in 0..iterations {
        let (first, second) = constant_operands();
        result = black_box(_mm256_add_epi32(black_box(first), black_box(second)));
    }
    let mut last = I32x8::zeroed();
    _mm256_store_si256(last.as_mut_ptr() as *mut __m256i, result);
    last
}

#[target_feature(enable = "avx2")]
unsafe fn spin_dump<W: Write>(iterations: u64, out: &mut W) -> Result<I32x8> {
    let mut last = I32x8::zeroed();
    for _ in 0..iterations {
        let (first, second) = constant_operands();
        _mm256_store_si256(
            last.as_mut_ptr() as *mut __m256i,
            _mm256_add_epi32(first, second),
        );
        write_dump_line(&mut *out, last.as_array())?;
    }
    Ok(last)
}

/// AVX2 kernel: 8 × i32 in one `__m256i`.
///
/// # Example
///
/// ```
/// use vecadd::bench::{AddLoop, EXPECTED};
/// use vecadd::Avx2I32x8;
///
/// if let Ok(kernel) = Avx2I32x8::new() {
///     let outcome = kernel.run(&AddLoop::new(1000), &mut std::io::sink()).unwrap();
///     assert_eq!(outcome.last.into_array(), EXPECTED);
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Avx2I32x8 {
    _private: (),
}

impl Avx2I32x8 {
    /// Create the AVX2 kernel after checking the CPU.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingFeature`](crate::Error::MissingFeature) if
    /// the CPU lacks AVX2.
    pub fn new() -> Result<Self> {
        CpuFeatures::detect().require_avx2(Self::NAME)?;
        debug!("{} kernel ready", Self::NAME);
        Ok(Self { _private: () })
    }

    /// Create the AVX2 kernel without checking the CPU.
    ///
    /// # Safety
    ///
    /// The CPU must support AVX2.
    #[inline]
    #[must_use]
    pub const unsafe fn new_unchecked() -> Self {
        Self { _private: () }
    }

    /// Run the repeated-add loop.
    ///
    /// With [`Sink::Opaque`] nothing is written to `out`. With
    /// [`Sink::Dump`] every iteration writes one line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if a dump line cannot be
    /// written.
    pub fn run<W: Write>(&self, plan: &AddLoop, out: &mut W) -> Result<LoopOutcome> {
        debug!(
            "{}: {} iterations, sink {:?}",
            Self::NAME,
            plan.iterations,
            plan.sink
        );
        let start = Instant::now();
        // SAFETY: `self` exists only if AVX2 is present.
        let last = match plan.sink {
            Sink::Opaque => unsafe { spin_opaque(plan.iterations) },
            Sink::Dump => unsafe { spin_dump(plan.iterations, out)? },
        };
        let elapsed = start.elapsed();
        info!(
            "{}: {} iterations in {:?}",
            Self::NAME,
            plan.iterations,
            elapsed
        );
        Ok(LoopOutcome {
            iterations: plan.iterations,
            elapsed,
            last,
        })
    }
}

impl VectorAdd for Avx2I32x8 {
    type Lane = i32;
    type Buffer = I32x8;
    const LANES: usize = 8;
    const NAME: &'static str = "Avx2I32x8";

    #[inline]
    fn add(&self, a: &I32x8, b: &I32x8) -> I32x8 {
        let mut out = I32x8::zeroed();
        // SAFETY: `self` exists only if AVX2 is present; I32x8 is
        // repr(align(32)) and holds exactly 8 i32.
        unsafe { add_epi32_aligned(a.as_ptr(), b.as_ptr(), out.as_mut_ptr()) };
        out
    }
}
