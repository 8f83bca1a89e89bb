use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum CompareError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not UTF-8 text", path.display())]
    InvalidUtf8 { path: PathBuf },
}

/// Splits text into lines, dropping a trailing newline and a `\r` before
/// each `\n`. Empty text has no lines.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(|s| s.to_string()).collect()
}

/// Reads a whole file into memory as an ordered list of lines.
pub fn read_lines(path: &Path) -> Result<Vec<String>, CompareError> {
    let bytes = std::fs::read(path).map_err(|source| CompareError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|_| CompareError::InvalidUtf8 {
        path: path.to_path_buf(),
    })?;

    Ok(split_lines(&text))
}
