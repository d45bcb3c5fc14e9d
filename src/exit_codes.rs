/// Exit codes for mdcheck
///
/// These exit codes allow users and CI systems to tell violations apart from
/// failures of the tool itself.
/// Success - No violations found
pub const SUCCESS: i32 = 0;

/// Linting issues found - One or more Markdown violations detected
pub const VIOLATIONS_FOUND: i32 = 1;

/// Tool error - Configuration error, unreadable input, or invalid arguments
pub const TOOL_ERROR: i32 = 2;

/// Exit code for a finished run
pub fn for_report(has_violations: bool) -> i32 {
    if has_violations { VIOLATIONS_FOUND } else { SUCCESS }
}
