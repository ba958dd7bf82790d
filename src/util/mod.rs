//! File and stdin loading helpers shared by the command-line entry point.

use std::fs;
use std::io;
use std::io::Read;
use std::path::Path;

/// True if `path` names an existing file, or is `-` (standard input).
pub(crate) fn file_exists(path: &str) -> bool {
    path == "-" || Path::new(path).exists()
}

/// Reads the full contents of a file, or of standard input if `path` is `-`.
pub(crate) fn read_file(path: &str) -> io::Result<String> {
    if path == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        fs::read_to_string(path)
    }
}
