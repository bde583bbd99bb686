//! UI helper functions for terminal output formatting.
//!
//! Section headers shared by the `deal` and `rank` reports.

use std::io::Write;

/// Section header in the analyzer's `*** ...` style.
pub fn write_section(out: &mut dyn Write, title: &str) -> std::io::Result<()> {
    writeln!(out, "*** {}", title)
}
