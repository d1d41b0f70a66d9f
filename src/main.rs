use anyhow::Result;
use std::{env, io::Write};

use gran_bench::{ChildOutput, SweepParams, TimedInvoker, run_sweep, setup_logging};

/// Relative path of the policy compiler under measurement.
const COMPILER_PATH: &str = "../gran";
/// The one argument handed to the compiler: the name of the policy file to compile.
const COMPILER_ARG: &str = "policy";
/// The reusable fixture slot in the current working directory, matching the
/// file name the compiler is asked to compile.
const FIXTURE_PATH: &str = "policy";

fn main() -> Result<()> {
    setup_logging()?;

    let params = get_params()?;
    let invoker = TimedInvoker::new(COMPILER_PATH, COMPILER_ARG, ChildOutput::Discard);

    let mut out = std::io::stdout().lock();
    run_sweep(&params, FIXTURE_PATH, &invoker, &mut out)?;
    out.flush()?;

    Ok(())
}

fn get_params() -> Result<SweepParams> {
    let raw = env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("Usage: gran-bench <max-roles>"))?;
    Ok(raw.parse()?)
}
