//! The VectorAdd trait.
//!
//! A kernel is one fixed code path: one register width, one element type,
//! one load/store flavor. Binaries name the kernel they want directly; the
//! trait exists so the SIMD kernels and the scalar reference kernels can be
//! driven by the same tests and benches.

/// Element-wise addition of two lane buffers.
///
/// Implementations must satisfy `add(a, b)[i] == a[i] + b[i]` for every
/// lane. For floats this is one IEEE-754 addition per lane, so SIMD and
/// scalar kernels agree bit for bit.
pub trait VectorAdd {
    /// Scalar type held in each lane.
    type Lane: Copy;

    /// Buffer type the kernel loads from and stores to.
    type Buffer: AsRef<[Self::Lane]>;

    /// Number of lanes processed per call.
    const LANES: usize;

    /// Short name used in logs and error messages.
    const NAME: &'static str;

    /// Add `a` and `b` lane by lane.
    fn add(&self, a: &Self::Buffer, b: &Self::Buffer) -> Self::Buffer;
}
