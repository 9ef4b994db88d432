//! Architecture-specific kernels.
//!
//! # Supported Architectures
//!
//! - `x86_64`: SSE (128-bit float), AVX (256-bit float), AVX2 (256-bit integer)
//! - `portable`: plain Rust scalar kernels (all architectures)
//!
//! The portable kernels are a reference for testing, not a fallback. No code
//! in this workspace switches between kernels at runtime.

// Portable scalar kernels (available on all architectures)
pub mod portable;

// x86_64-specific kernels
#[cfg(target_arch = "x86_64")]
pub mod x86_64;

pub use portable::{ScalarF32x4, ScalarF32x8, ScalarI32x8};
