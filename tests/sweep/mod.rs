//! Integration tests for the sweep loop: step coverage, ordering, and
//! non-interference with the measured program's exit status.

use claims::{assert_err, assert_matches};
use proptest::prelude::*;
use rstest::rstest;

use gran_bench::{ChildOutput, Error, SweepParams, TimedInvoker, run_sweep};

use crate::support::{scratch_dir, write_stub_compiler};

/// Runs a sweep against a stub compiler and returns the emitted samples as
/// (label, seconds) pairs.
fn run_stub_sweep(limit: u32, stub_exit_code: i32) -> Vec<(u32, f64)> {
    let dir = scratch_dir();
    let stub = write_stub_compiler(dir.path(), "gran", stub_exit_code);

    let params = SweepParams::new(limit).expect("positive limit");
    let invoker = TimedInvoker::new(&stub, "policy", ChildOutput::Discard);

    let mut out = Vec::new();
    run_sweep(&params, dir.path().join("policy"), &invoker, &mut out)
        .expect("sweep should succeed");

    parse_report(&out)
}

fn parse_report(raw: &[u8]) -> Vec<(u32, f64)> {
    let report = String::from_utf8(raw.to_vec()).expect("report is UTF-8");
    report
        .lines()
        .map(|line| {
            let mut fields = line.split_whitespace();
            let label = fields
                .next()
                .expect("label field")
                .parse()
                .expect("numeric label");
            let seconds = fields
                .next()
                .expect("seconds field")
                .parse()
                .expect("numeric seconds");
            assert_eq!(fields.next(), None, "unexpected extra field in {line:?}");
            (label, seconds)
        })
        .collect()
}

#[rstest]
#[case(1, vec![1])]
#[case(10, vec![1])]
#[case(11, vec![1, 11])]
#[case(25, vec![1, 11, 21])]
#[case(30, vec![1, 11, 21])]
#[case(31, vec![1, 11, 21, 31])]
fn labels_cover_every_step_in_order(#[case] limit: u32, #[case] expected: Vec<u32>) {
    let samples = run_stub_sweep(limit, 0);

    let labels: Vec<u32> = samples.iter().map(|(label, _)| *label).collect();
    assert_eq!(labels, expected);
}

#[test]
fn durations_are_non_negative() {
    for (label, seconds) in run_stub_sweep(25, 0) {
        assert!(seconds >= 0.0, "negative duration {seconds} at label {label}");
    }
}

#[test]
fn failing_compiler_still_yields_one_sample_per_step() {
    let samples = run_stub_sweep(25, 3);
    assert_eq!(samples.len(), 3);
}

#[test]
fn missing_compiler_aborts_the_sweep() {
    let dir = scratch_dir();

    let params = SweepParams::new(25).unwrap();
    let invoker = TimedInvoker::new(dir.path().join("not-there"), "policy", ChildOutput::Discard);

    let mut out = Vec::new();
    let err = assert_err!(run_sweep(
        &params,
        dir.path().join("policy"),
        &invoker,
        &mut out
    ));
    assert_matches!(err, Error::Launch { .. });
    assert!(out.is_empty(), "no samples expected before the first launch");
}

proptest! {
    #[test]
    fn steps_cover_every_decade_below_the_limit(limit in 1u32..10_000) {
        let params = SweepParams::new(limit).unwrap();
        let steps: Vec<u32> = params.steps().collect();

        prop_assert_eq!(steps.len(), limit.div_ceil(10) as usize);
        prop_assert_eq!(steps.first().copied(), Some(0));
        prop_assert!(steps.windows(2).all(|w| w[1] == w[0] + 10));
        prop_assert!(steps.last().copied().unwrap() < limit);
    }
}
