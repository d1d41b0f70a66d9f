mod domain;
mod error;
mod fixture;
mod invoker;
mod sweep;
mod telemetry;

use std::io::Write;
use std::path::PathBuf;

pub use domain::{RoleCount, Sample, SweepParams};
pub use error::Error;
pub use fixture::{FixtureFile, render_policy};
pub use invoker::{ChildOutput, TimedInvoker};
pub use telemetry::setup_logging;

/// Runs a benchmark sweep against the external program configured in
/// `invoker` and streams the results to `out`.
///
/// This is the single public entry point of the crate. For every step of the
/// ascending size sequence `0, 10, 20, …` below the sweep limit, it writes a
/// synthetic policy fixture to `fixture_path`, runs the measured program once,
/// and writes one `<label> <seconds>` line to `out` — where `<label>` is the
/// 1-based step counter and `<seconds>` the wall-clock duration of that single
/// invocation.
///
/// # Error handling
///
/// A fixture write failure or a failure to launch the measured program aborts
/// the sweep immediately — there is no retry logic anywhere in this harness,
/// since a benchmark must reflect a single honest measurement. A non-zero exit
/// status of the measured program is deliberately *not* an error; the sample
/// is reported regardless. The fixture slot is removed on every exit path,
/// aborts included.
///
/// # Example
///
/// ```no_run
/// use gran_bench::{ChildOutput, SweepParams, TimedInvoker, run_sweep};
///
/// let params: SweepParams = "50".parse().unwrap();
/// let invoker = TimedInvoker::new("../gran", "policy", ChildOutput::Discard);
///
/// let out = std::io::stdout().lock();
/// run_sweep(&params, "policy", &invoker, out).unwrap();
/// ```
pub fn run_sweep(
    params: &SweepParams,
    fixture_path: impl Into<PathBuf>,
    invoker: &TimedInvoker,
    out: impl Write,
) -> Result<(), Error> {
    let fixture = FixtureFile::acquire(fixture_path);
    sweep::execute(params, fixture, invoker, out)
}
