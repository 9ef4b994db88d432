//! `bench-avx2` - Repeats an 8-lane i32 AVX2 `vpaddd` ten million times.
//!
//! Each iteration builds the constant vectors `[8,7,6,5,4,3,2,1]` and
//! `[1,1,1,1,1,1,1,1]` from immediates and adds them. Results pass through
//! `black_box` so the loop survives optimization. Prints nothing unless
//! `--dump` is given; the elapsed time is logged at info level.
//!
//! Exits non-zero if the CPU lacks AVX2.
//!
//! **Usage:**
//! ```text
//! bench-avx2 [--iterations <n>] [--dump]
//! RUST_LOG=info bench-avx2
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
use vecadd::bench::DEFAULT_ITERATIONS;

/// Time repeated AVX2 integer vector adds.
#[derive(Parser)]
#[command(
    name = "bench-avx2",
    version,
    about = "Repeat an 8 x i32 AVX2 vector add and discard the results"
)]
struct Args {
    /// Number of add iterations.
    #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
    iterations: u64,

    /// Print every iteration's result as a line of lanes.
    #[arg(long)]
    dump: bool,
}

#[cfg(target_arch = "x86_64")]
fn run(args: &Args) -> Result<()> {
    use std::io::{self, BufWriter, Write};

    use anyhow::Context;
    use vecadd::bench::{AddLoop, Sink};
    use vecadd::Avx2I32x8;

    let kernel = Avx2I32x8::new()?;
    let sink = if args.dump { Sink::Dump } else { Sink::Opaque };
    let plan = AddLoop::new(args.iterations).with_sink(sink);

    let mut out = BufWriter::new(io::stdout().lock());
    kernel.run(&plan, &mut out).context("Benchmark loop failed")?;
    out.flush().context("Failed to flush stdout")?;
    Ok(())
}

#[cfg(not(target_arch = "x86_64"))]
fn run(_args: &Args) -> Result<()> {
    anyhow::bail!("bench-avx2 requires an x86_64 CPU with AVX2")
}

fn main() -> Result<()> {
    vecadd_clients::init_logging();
    let args: Args = vecadd_clients::parse_lenient();
    run(&args)
}
