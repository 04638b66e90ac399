//! Macros for common CLI error handling patterns.

/// Write a line to a stream and return the error exit code if writing fails.
///
/// ```ignore
/// write_or_exit!(err, "Error: {}", message);
/// ```
macro_rules! write_or_exit {
    ($dest:expr, $($arg:tt)*) => {
        if writeln!($dest, $($arg)*).is_err() {
            return $crate::exit_code::ERROR;
        }
    };
}
