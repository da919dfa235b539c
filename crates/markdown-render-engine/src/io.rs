use relative_path::RelativePathBuf;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid source directory: {0}")]
    InvalidSourceDir(String),
    #[error("{0} is not inside the source directory")]
    OutsideSourceDir(PathBuf),
}

/// Extension of files picked up by [`scan_markdown_files`].
pub const MARKDOWN_EXTENSION: &str = "md";
/// Extension given to rendered pages by [`output_path_for`].
pub const HTML_EXTENSION: &str = "html";

/// Read a markdown file and return its content
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write rendered output, creating parent directories as needed
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, content).map_err(IoError::Io)
}

/// Scan for markdown files below the source directory, sorted by path
pub fn scan_markdown_files(source_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    validate_source_dir(source_root)?;

    let mut files = Vec::new();
    scan_directory_recursive(source_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == MARKDOWN_EXTENSION
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_source_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidSourceDir(format!(
            "{} does not exist or is not a directory",
            path.display()
        )));
    }

    Ok(())
}

/// Maps `source_root/a/b.md` to `output_root/a/b.html`.
pub fn output_path_for(
    source_root: &Path,
    source: &Path,
    output_root: &Path,
) -> Result<PathBuf, IoError> {
    let relative = source
        .strip_prefix(source_root)
        .ok()
        .and_then(|rel| RelativePathBuf::from_path(rel).ok())
        .ok_or_else(|| IoError::OutsideSourceDir(source.to_path_buf()))?;

    Ok(relative.with_extension(HTML_EXTENSION).to_path(output_root))
}
