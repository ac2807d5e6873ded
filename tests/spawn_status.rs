//! Exercises the spawn path against real processes: the delegated
//! program's exit status must pass through unchanged, and a missing
//! launcher binary must be diagnosed as such.

use ditlaunch::Error;
use ditlaunch::LaunchCommand;
use ditlaunch::core::launch::spawn::execute;

#[cfg(unix)]
#[test]
fn child_exit_status_propagates_unchanged() {
    let command = LaunchCommand {
        program: "sh".to_string(),
        args: vec!["-c".to_string(), "exit 7".to_string()],
    };
    assert_eq!(execute(&command).unwrap(), 7);
}

#[cfg(unix)]
#[test]
fn clean_exit_maps_to_zero() {
    let command = LaunchCommand {
        program: "sh".to_string(),
        args: vec!["-c".to_string(), "true".to_string()],
    };
    assert_eq!(execute(&command).unwrap(), 0);
}

#[test]
fn missing_launcher_is_a_distinct_error() {
    let command = LaunchCommand {
        program: "ditlaunch-test-no-such-binary".to_string(),
        args: Vec::new(),
    };
    let err = execute(&command).unwrap_err();
    assert!(matches!(err, Error::LauncherNotFound { .. }));
}
