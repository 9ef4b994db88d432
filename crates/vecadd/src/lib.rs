//! vecadd - element-wise vector addition on the x86 vector units.
//!
//! Two fixed-length sequences go in, their lane-wise sum comes out, and the
//! sum is computed by a single SIMD add rather than a scalar loop.
//!
//! # Kernels
//!
//! | Kernel | Register | Lanes | Load/store | Required feature |
//! |--------|----------|-------|------------|------------------|
//! | `SseF32x4` | `__m128` | 4 x f32 | unaligned (`movups`) | SSE (baseline) |
//! | `AvxF32x8` | `__m256` | 8 x f32 | 32-byte aligned (`vmovaps`) | AVX |
//! | `Avx2I32x8` | `__m256i` | 8 x i32 | 32-byte aligned (`vmovdqa`) | AVX2 |
//!
//! Each kernel implements [`VectorAdd`]. The portable `Scalar*` kernels
//! implement the same trait with plain `+` and act as the reference when
//! cross-checking the SIMD paths.
//!
//! # Alignment
//!
//! The 256-bit paths use aligned loads and stores. [`Aligned32`] carries the
//! 32-byte alignment in its type, so the safe kernel methods cannot be handed
//! a misaligned buffer. The raw primitive
//! [`add_ps_aligned`](arch::x86_64::add_ps_aligned) takes pointers instead and
//! leaves the alignment to the caller; violating it is undefined behavior.
//!
//! # Example
//!
//! ```
//! use vecadd::{ramp, ScalarF32x4, VectorAdd};
//!
//! let a: [f32; 4] = ramp();
//! let sum = ScalarF32x4.add(&a, &a);
//! assert_eq!(sum, [0.0, 2.0, 4.0, 6.0]);
//! ```

// Error type
mod error;

// Lane buffers (alignment wrapper, seed data)
mod lanes;

// The VectorAdd trait
mod kernel;

// Benchmark loop configuration
pub mod bench;

// Output formatting
pub mod report;

// Architecture-specific implementations
pub mod arch;

pub use error::{Error, Result};
pub use kernel::VectorAdd;
pub use lanes::{ramp, Aligned32, F32x4, F32x8, I32x8, AVX_ALIGNMENT};

pub use arch::{ScalarF32x4, ScalarF32x8, ScalarI32x8};

#[cfg(target_arch = "x86_64")]
pub use arch::x86_64::{Avx2I32x8, AvxF32x8, CpuFeatures, SseF32x4};
