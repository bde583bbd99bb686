//! Macros for common CLI error handling patterns.

/// Write to a stream and exit with error code if writing fails.
///
/// This macro handles the common pattern of attempting to write to stderr/stdout
/// and returning an error exit code if the write operation fails.
///
/// # Examples
///
/// ```ignore
/// write_or_exit!(err, "Error: {}", message);
/// ```
#[macro_export]
macro_rules! write_or_exit {
    ($dest:expr, $($arg:tt)*) => {
        if writeln!($dest, $($arg)*).is_err() {
            return $crate::exit_code::ERROR;
        }
    };
}

/// Map a handler result to an exit code, reporting the error on `err`.
///
/// # Examples
///
/// ```ignore
/// exit_with!(handle_cfg_command(out, err), err)
/// ```
#[macro_export]
macro_rules! exit_with {
    ($result:expr, $err:expr) => {
        match $result {
            Ok(()) => $crate::exit_code::SUCCESS,
            Err(e) => {
                tracing::debug!(error = %e, "command failed");
                $crate::write_or_exit!($err, "Error: {}", e);
                $crate::exit_code::ERROR
            }
        }
    };
}
