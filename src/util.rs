use std::fs::File;
use std::io;
use std::path::Path;

pub fn open_file(path: &Path) -> io::Result<File> {
    File::open(path)
}

/// Create or truncate `path` for writing.
pub fn create_file(path: &Path) -> io::Result<File> {
    File::create(path)
}

// ASCII whitespace plus vertical tab and the \x1c..=\x1f separators.
#[inline]
fn is_line_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t'..=b'\r' | 0x1c..=0x1f)
}

/// Bounds of `line` with surrounding whitespace removed, as `(start, end)`.
pub fn trim_bounds(line: &[u8]) -> (usize, usize) {
    let end = line
        .iter()
        .rposition(|&b| !is_line_space(b))
        .map_or(0, |i| i + 1);
    let start = line[..end]
        .iter()
        .position(|&b| !is_line_space(b))
        .unwrap_or(end);
    (start, end)
}
