//! Demo scenarios exercising the harness the way a test script would

use attest_harness::asserts::{
    assert_approx, assert_array_approx, assert_equal, assert_false, assert_true,
};
use attest_harness::{test_fn, Runner};
use attest_term::{write_line, Style};

/// Two full batches: a passing suite with a deliberately long name to
/// exercise column alignment, then a rebuilt registry that registers and
/// removes the same handle before running the survivors.
pub fn suite() {
    let mut runner = Runner::new();
    runner
        .register("module_1", test_fn(|| assert_equal(5, 5, None)))
        .register(
            "module_2_with_a_much_longer_name_to_exercise_alignment",
            test_fn(|| assert_true("str".len() == 3, None)),
        )
        .register("module_3", test_fn(|| assert_false(6 == 5, None)));
    runner.run_all();

    write_line("Registering a second batch...\n", &[Style::Dim]);

    runner.clear();
    let removable = test_fn(|| assert_true(false, Some("second batch body, never executed")));
    runner
        .register("kept", test_fn(|| assert_approx(0.1 + 0.2, 0.3, None)))
        .register("dropped", removable.clone())
        .remove("dropped", &removable)
        .register(
            "sorted",
            test_fn(|| assert_array_approx(&[3.0, 1.0, 2.0], &[1.0, 2.0, 3.0], None)),
        );
    runner.run_all();
}

/// Single tests outside the registry: no banner, no indentation, plus an
/// inverted test whose body fails as expected.
pub fn adhoc() {
    let runner = Runner::new();
    runner.run_one("standalone", &test_fn(|| assert_true(1 < 2, None)));
    runner.run_throwing(
        "expected_failure",
        test_fn(|| assert_true(false, Some("meant to fail"))),
    );
}

/// Fail-fast demonstration. The sentinel line must never appear in the
/// output: the second test fails and takes the process down first.
pub fn failing() {
    let mut runner = Runner::new();
    runner
        .register("first_passes", test_fn(|| assert_true(true, None)))
        .register(
            "second_fails",
            test_fn(|| assert_equal(5, 6, Some("five is not six"))),
        )
        .register(
            "third_never_runs",
            test_fn(|| {
                println!("SENTINEL: third test executed");
                Ok(())
            }),
        );
    runner.run_all();
}

/// An inverted test registered over a body that completes normally.
pub fn no_throw() {
    let mut runner = Runner::new();
    runner.register_throwing("well_behaved", test_fn(|| Ok(())));
    runner.run_all();
}

/// Clearing leaves nothing to run; `run_all` prints nothing.
pub fn empty() {
    let mut runner = Runner::new();
    runner.register("short_lived", test_fn(|| Ok(())));
    runner.clear();
    runner.run_all();
}
