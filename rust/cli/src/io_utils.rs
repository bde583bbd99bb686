//! File I/O utilities for reading test-deck input.
//!
//! ## Error Handling
//!
//! Functions return `Result` types with appropriate error messages. I/O errors
//! are converted to `String` for easy integration with command error handling.
//!
//! ## Standard Input
//!
//! The path `-` reads the whole of standard input instead of a file.

use std::io::Read;

/// Path that selects standard input.
pub const STDIN_PATH: &str = "-";

/// Read a text file, or stdin for `-`, stripping a UTF-8 BOM.
///
/// # Arguments
///
/// * `path` - File path to read, or `-`
///
/// # Returns
///
/// * `Ok(String)` - File contents as UTF-8 string
/// * `Err(String)` - I/O error naming the path
///
/// # Example
///
/// ```rust,no_run
/// # use stud_cli::io_utils::read_text_auto;
/// let content = read_text_auto("decks/royal.txt").unwrap();
/// ```
pub fn read_text_auto(path: &str) -> Result<String, String> {
    if path == STDIN_PATH {
        return read_text_from(&mut std::io::stdin().lock());
    }
    let mut content = std::fs::read_to_string(path)
        .map_err(|e| format!("Could not open file {}: {}", path, e))?;
    strip_utf8_bom(&mut content);
    Ok(content)
}

/// Read everything from `reader` as UTF-8, stripping a BOM.
pub fn read_text_from(reader: &mut dyn Read) -> Result<String, String> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(|e| format!("Could not read input: {}", e))?;
    strip_utf8_bom(&mut content);
    Ok(content)
}

/// Strip UTF-8 BOM (Byte Order Mark) from the beginning of a string if present.
///
/// UTF-8 BOM is the character U+FEFF at the start of a file. Some text editors
/// add this marker, and it would otherwise stick to the first card token.
fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}
