//! Repeated-add benchmark loop.
//!
//! The loop builds two constant 8 × i32 vectors and adds them, over and
//! over, to time the integer add path. Vectors are built from register
//! immediates, so no buffer is loaded from memory.
//!
//! # Constants (memory order)
//!
//! ```text
//! FIRST   = [8, 7, 6, 5, 4, 3, 2, 1]
//! SECOND  = [1, 1, 1, 1, 1, 1, 1, 1]
//! EXPECTED= [9, 8, 7, 6, 5, 4, 3, 2]
//! ```
//!
//! The x86_64 runner lives in
//! [`Avx2I32x8::run`](crate::arch::x86_64::Avx2I32x8::run).

use std::time::Duration;

use crate::lanes::I32x8;

/// Iterations in the reference benchmark.
pub const DEFAULT_ITERATIONS: u64 = 10_000_000;

/// First operand, lane 0 first.
pub const FIRST: [i32; 8] = [8, 7, 6, 5, 4, 3, 2, 1];

/// Second operand, lane 0 first.
pub const SECOND: [i32; 8] = [1; 8];

/// Sum every iteration produces.
pub const EXPECTED: [i32; 8] = [9, 8, 7, 6, 5, 4, 3, 2];

/// What the loop does with each iteration's result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Sink {
    /// Pass operands and result through `black_box`; print nothing.
    #[default]
    Opaque,
    /// Store each result and write it as one line of space-separated lanes.
    ///
    /// Lines are `9 8 7 6 5 4 3 2\n`. There is no space after the last lane,
    /// unlike a loop of `printf("%d ", lane)`.
    Dump,
}

/// Benchmark loop configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddLoop {
    /// Number of add iterations.
    pub iterations: u64,
    /// Result handling.
    pub sink: Sink,
}

impl AddLoop {
    /// Loop of `iterations` with the default sink.
    #[must_use]
    pub const fn new(iterations: u64) -> Self {
        Self {
            iterations,
            sink: Sink::Opaque,
        }
    }

    /// Replace the sink.
    #[must_use]
    pub const fn with_sink(mut self, sink: Sink) -> Self {
        self.sink = sink;
        self
    }
}

impl Default for AddLoop {
    fn default() -> Self {
        Self::new(DEFAULT_ITERATIONS)
    }
}

/// Result of one benchmark run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopOutcome {
    /// Iterations executed.
    pub iterations: u64,
    /// Wall-clock time of the loop.
    pub elapsed: Duration,
    /// Result of the final iteration, or all zeros if none ran.
    pub last: I32x8,
}
