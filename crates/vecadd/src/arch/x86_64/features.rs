//! CPU feature detection for the x86_64 kernels.
//!
//! SSE is part of the x86_64 baseline and is always present. AVX and AVX2
//! are optional extensions; executing one of their instructions on a CPU
//! without them raises SIGILL. The kernels that need them are constructed
//! through [`CpuFeatures::require_avx`] and [`CpuFeatures::require_avx2`].
//!
//! There is no fallback. A missing extension is reported as an error and
//! the caller decides what to do with it.

use log::debug;

use crate::error::{Error, Result};

/// Detected CPU features relevant to the vector-add kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuFeatures {
    /// SSE support (128-bit float operations).
    pub sse: bool,
    /// AVX support (256-bit float operations).
    pub avx: bool,
    /// AVX2 support (256-bit integer operations).
    pub avx2: bool,
}

impl CpuFeatures {
    /// Detect CPU features at runtime using CPUID.
    ///
    /// # Example
    ///
    /// ```
    /// use vecadd::CpuFeatures;
    ///
    /// let features = CpuFeatures::detect();
    /// assert!(features.sse);
    /// println!("AVX: {}", features.avx);
    /// println!("AVX2: {}", features.avx2);
    /// ```
    #[must_use]
    pub fn detect() -> Self {
        let features = Self {
            sse: std::is_x86_feature_detected!("sse"),
            avx: std::is_x86_feature_detected!("avx"),
            avx2: std::is_x86_feature_detected!("avx2"),
        };
        debug!("detected {}", features);
        features
    }

    /// Check that AVX is present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingFeature`] naming `kernel` if AVX is absent.
    pub fn require_avx(&self, kernel: &'static str) -> Result<()> {
        if self.avx {
            Ok(())
        } else {
            Err(Error::MissingFeature {
                feature: "avx",
                kernel,
            })
        }
    }

    /// Check that AVX2 is present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingFeature`] naming `kernel` if AVX2 is absent.
    pub fn require_avx2(&self, kernel: &'static str) -> Result<()> {
        if self.avx2 {
            Ok(())
        } else {
            Err(Error::MissingFeature {
                feature: "avx2",
                kernel,
            })
        }
    }

    /// Returns the missing optional extensions as a human-readable list.
    #[must_use]
    pub fn missing_features(&self) -> Option<String> {
        let mut missing = Vec::new();
        if !self.avx {
            missing.push("AVX");
        }
        if !self.avx2 {
            missing.push("AVX2");
        }
        if missing.is_empty() {
            None
        } else {
            Some(missing.join(", "))
        }
    }
}

impl core::fmt::Display for CpuFeatures {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "CpuFeatures {{ sse: {}, avx: {}, avx2: {} }}",
            self.sse, self.avx, self.avx2
        )
    }
}
