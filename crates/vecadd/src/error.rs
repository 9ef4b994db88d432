//! Error types for vecadd

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// vecadd error types
///
/// The additive kernels themselves never fail. These cover the process
/// around them: a host without the needed extension, and output that could
/// not be written.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The host CPU lacks an instruction set extension the kernel needs
    #[error("{feature} not detected: the {kernel} kernel requires it")]
    MissingFeature {
        /// Extension name as reported by the CPU (e.g. "avx2")
        feature: &'static str,
        /// Kernel that was being constructed
        kernel: &'static str,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
