// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::{
    config::consts::{CASE_PDF_PREFIX, RESULT_FILE},
    core::sanitize::sanitize_file_stem,
    data::ScrapeResult,
    error::Result,
};

/// Indented JSON (4 spaces), non-ASCII left as-is.
pub fn to_json_string(result: &ScrapeResult) -> Result<String> {
    let mut buf = Vec::new();
    write_pretty(&mut buf, result)?;
    // serde_json only ever emits UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Create/truncate `path` and write the result. No temp-file dance: a crash
/// mid-write can leave a partial file behind.
pub fn write_result(path: &Path, result: &ScrapeResult) -> Result<PathBuf> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        ensure_directory(parent)?;
    }
    let mut out = BufWriter::new(File::create(path)?);
    write_pretty(&mut out, result)?;
    out.flush()?;
    Ok(path.to_path_buf())
}

fn write_pretty<W: Write, T: Serialize>(writer: W, value: &T) -> Result<()> {
    let mut ser = Serializer::with_formatter(writer, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser)?;
    Ok(())
}

pub fn result_path(dir: &Path) -> PathBuf {
    dir.join(RESULT_FILE)
}

/// `case_<identifier>.pdf` inside `dir`.
pub fn case_pdf_path(dir: &Path, identifier: &str) -> PathBuf {
    dir.join(format!("{CASE_PDF_PREFIX}{}.pdf", sanitize_file_stem(identifier)))
}

pub fn ensure_directory(dir: &Path) -> std::io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
