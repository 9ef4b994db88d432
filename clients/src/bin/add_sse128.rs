//! `add-sse128` - Adds two 4-lane f32 vectors with one SSE `addps`.
//!
//! Both inputs are the ramp `[0, 1, 2, 3]`, loaded with unaligned loads.
//! Prints each lane of the sum on its own line:
//!
//! ```text
//! 0.000000
//! 2.000000
//! 4.000000
//! 6.000000
//! ```
//!
//! Every argument is ignored, `--help` and `--version` included.
//!
//! **Usage:**
//! ```text
//! add-sse128
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

/// Add two 4 × f32 vectors with SSE and print the result.
#[derive(Parser)]
#[command(
    name = "add-sse128",
    about = "Add two 4 x f32 vectors with SSE (unaligned loads) and print the lanes",
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
    use vecadd::{ramp, F32x4, SseF32x4, VectorAdd};

    let a: F32x4 = ramp();
    let b: F32x4 = ramp();

    let kernel = SseF32x4::new();
    debug!("kernel {}", SseF32x4::NAME);
    let result = kernel.add(&a, &b);

    let mut out = io::stdout().lock();
    write_lanes(&mut out, &result).context("Failed to write result")?;
    out.flush().context("Failed to flush stdout")?;
    Ok(())
}

#[cfg(not(target_arch = "x86_64"))]
fn run() -> Result<()> {
    anyhow::bail!("add-sse128 requires an x86_64 CPU")
}

fn main() -> Result<()> {
    vecadd_clients::init_logging();
    let _args: Args = vecadd_clients::parse_lenient();
    run()
}
