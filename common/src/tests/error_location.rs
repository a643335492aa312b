use crate::ErrorLocation;
use std::panic::Location;

/// **VALUE**: Verifies that `ErrorLocation::from()` captures file, line, and column.
///
/// **WHY THIS MATTERS**: Every error in the workspace carries an ErrorLocation. If it
/// captures the wrong position, every logged failure points somewhere useless.
///
/// **BUG THIS CATCHES**: Would catch if file path or line capture breaks.
#[test]
fn given_location_caller_when_error_location_created_then_captures_file_line_column() {
    // GIVEN/WHEN: Capturing the current position
    let (location, line) = (ErrorLocation::from(Location::caller()), line!());

    // THEN: Should point at this file and line
    assert!(
        location.file.contains("error_location.rs"),
        "Should capture file path"
    );
    assert_eq!(location.line, line, "Should capture correct line number");
    assert!(location.column > 0, "Should capture column number");
}

/// **VALUE**: Verifies the "[file:line:column]" Display format.
///
/// **WHY THIS MATTERS**: Error Display strings embed this format; log readers grep for it.
///
/// **BUG THIS CATCHES**: Would catch if brackets or separators change.
#[test]
fn given_error_location_when_formatted_then_produces_bracketed_format() {
    // GIVEN: A known location
    let location = ErrorLocation {
        file: "src/page.rs",
        line: 12,
        column: 5,
    };

    // WHEN: Formatting
    let formatted = location.to_string();

    // THEN: Bracketed, colon separated
    assert_eq!(formatted, "[src/page.rs:12:5]");
}

/// **VALUE**: Verifies that `ErrorLocation::here()` reports the caller of a
/// `#[track_caller]` function rather than its own body.
///
/// **WHY THIS MATTERS**: Error constructors use `here()`; without propagation all
/// errors would report the constructor's line.
///
/// **BUG THIS CATCHES**: Would catch if `#[track_caller]` is dropped from `here()`.
#[test]
fn given_multiple_call_sites_when_capturing_location_then_each_has_unique_line() {
    // GIVEN: A tracked helper
    #[track_caller]
    fn capture_location() -> ErrorLocation {
        ErrorLocation::here()
    }

    // WHEN: Capturing from two consecutive lines
    let first = capture_location();
    let second = capture_location();

    // THEN: Same file, sequential lines
    assert_eq!(first.file, second.file);
    assert_eq!(first.line + 1, second.line, "Lines should be sequential");
}
