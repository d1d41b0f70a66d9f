//! Module for the sweep loop composing fixture generation and timed
//! invocation.

use std::io::Write;

use crate::{
    domain::{RoleCount, Sample, SweepParams},
    error::Error,
    fixture::FixtureFile,
    invoker::TimedInvoker,
};

/// Drives the sweep: for every step, overwrite the fixture slot, run the
/// measured program once, and write the resulting sample to `out`.
///
/// Steps execute strictly sequentially and in ascending order; no step is
/// retried or skipped. Samples are written as they are produced, never
/// buffered. The fixture handle is consumed here so the slot is removed on
/// every exit path, early errors included.
pub(crate) fn execute(
    params: &SweepParams,
    fixture: FixtureFile,
    invoker: &TimedInvoker,
    mut out: impl Write,
) -> Result<(), Error> {
    for roles in params.steps() {
        fixture.write_policy(RoleCount::new(roles))?;

        let elapsed = invoker.invoke_once()?;
        let sample = Sample::new(roles + 1, elapsed);
        tracing::debug!(label = sample.label, seconds = sample.seconds, "step completed");

        writeln!(out, "{sample}")?;
    }

    Ok(())
}
