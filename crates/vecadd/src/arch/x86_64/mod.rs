//! x86_64 kernels.
//!
//! # Register Widths
//!
//! ```text
//! XMM (128-bit): __m128   4 × f32    SSE   movups / addps
//! YMM (256-bit): __m256   8 × f32    AVX   vmovaps / vaddps
//! YMM (256-bit): __m256i  8 × i32    AVX2  vmovdqa / vpaddd
//! ```
//!
//! # CPU Feature Requirements
//!
//! - SSE: x86_64 baseline, always present
//! - AVX: `AvxF32x8`
//! - AVX2: `Avx2I32x8`
//!
//! The AVX and AVX2 kernels check the CPU in `new()` and return an error
//! when the extension is missing. `new_unchecked()` skips the check.

mod avx;
mod avx2;
mod features;
mod sse;

pub use avx::{add_ps_aligned, AvxF32x8};
pub use avx2::{add_epi32_aligned, Avx2I32x8};
pub use features::CpuFeatures;
pub use sse::{add_ps_unaligned, SseF32x4};
