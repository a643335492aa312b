// Unit tests for logger module initialization logic
// Tests idempotence and error handling

use crate::logger::initialize;

use std::path::PathBuf;

/// **VALUE**: Verifies that calling initialize() multiple times doesn't panic or fail.
///
/// **WHY THIS MATTERS**: fern refuses to install a second global logger; the guard
/// turns that into a logged warning.
///
/// **BUG THIS CATCHES**: Would catch if the Once or AtomicBool guards are removed.
///
/// Both the invalid-dir case and the repeat case live in one test because the
/// guard is process-wide: whichever test ran first would mask the other.
#[test]
fn given_logger_when_initialized_then_invalid_dir_errors_and_repeat_is_ok() {
    // GIVEN: A path that can never hold a file
    let invalid_dir = PathBuf::from("/dev/null/invalid-path");

    // WHEN: Initializing there first
    let first = initialize(&invalid_dir, false);

    // THEN: Clear error, not a panic
    assert!(first.is_err(), "Should return error for invalid log directory");
    assert!(format!("{:?}", first.unwrap_err()).contains("News"));

    // WHEN: Calling again with a valid directory
    let temp_dir = tempfile::TempDir::new().unwrap();
    let second = initialize(temp_dir.path(), false);
    let third = initialize(temp_dir.path(), true);

    // THEN: Later calls are idempotent no-ops
    assert!(second.is_ok(), "Second initialization should succeed (idempotent)");
    assert!(third.is_ok(), "Third initialization should succeed (idempotent)");
}
