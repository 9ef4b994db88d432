//! `add-avx256` - Adds two 8-lane f32 vectors with one AVX `vaddps`.
//!
//! Inputs and output live in 32-byte-aligned buffers and move through the
//! aligned `vmovaps` load and store. Prints each lane of the sum:
//!
//! ```text
//! 0.000000
//! 2.000000
//! ...
//! 14.000000
//! ```
//!
//! Exits non-zero if the CPU lacks AVX. Every argument is ignored, `--help`
//! and `--version` included.
//!
//! **Usage:**
//! ```text
//! add-avx256
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use anyhow::Result;
use clap::Parser;

/// Add two 8 × f32 vectors with AVX and print the result.
#[derive(Parser)]
#[command(
    name = "add-avx256",
    about = "Add two 8 x f32 vectors with AVX (32-byte-aligned loads) and print the lanes",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Args {}

#[cfg(target_arch = "x86_64")]
fn run() -> Result<()> {
    use std::io::{self, Write};

    use anyhow::Context;
    use log::debug;
    use vecadd::report::write_lanes;
    use vecadd::{ramp, AvxF32x8, F32x8, VectorAdd};

    let kernel = AvxF32x8::new()?;
    debug!("kernel {}", AvxF32x8::NAME);

    let a = F32x8::from(ramp::<8>());
    let b = F32x8::from(ramp::<8>());
    let result = kernel.add(&a, &b);

    let mut out = io::stdout().lock();
    write_lanes(&mut out, result.as_ref()).context("Failed to write result")?;
    out.flush().context("Failed to flush stdout")?;
    Ok(())
}

#[cfg(not(target_arch = "x86_64"))]
fn run() -> Result<()> {
    anyhow::bail!("add-avx256 requires an x86_64 CPU with AVX")
}

fn main() -> Result<()> {
    vecadd_clients::init_logging();
    let _args: Args = vecadd_clients::parse_lenient();
    run()
}
