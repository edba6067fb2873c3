mod common;

use common::TestEnv;

#[test]
fn test_bare_command_without_tty_prints_hint() {
    let env = TestEnv::new();
    let result = env.run(&[]);

    assert!(result.success, "bare run should exit cleanly:\n{}", result.stderr);
    assert!(
        result.stdout.contains("No command provided."),
        "expected the non-tty hint; got:\n{}",
        result.stdout
    );
    assert!(result.stdout.contains("waypoint --help"));
}

#[test]
fn test_onboard_without_tty_points_at_sample() {
    let env = TestEnv::new();
    let result = env.run(&["onboard"]);

    assert!(result.success);
    assert!(
        result.stdout.contains("Onboarding is interactive"),
        "expected the interactive-only notice; got:\n{}",
        result.stdout
    );
    assert!(result.stdout.contains("waypoint sample"));
}
