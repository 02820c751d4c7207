// crates/restcountries-core/src/loader/common_io.rs
use crate::error::{CatalogError, Result};
use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Open a dataset file for reading.
///
/// Files ending in `.gz` are decompressed on the fly when the `compact`
/// feature is enabled; everything else is read as-is.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        CatalogError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);
    let gzipped = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"));

    #[cfg(feature = "compact")]
    if gzipped {
        return Ok(Box::new(GzDecoder::new(reader)));
    }

    #[cfg(not(feature = "compact"))]
    if gzipped {
        return Err(CatalogError::Io(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            format!("{} is gzip-compressed; enable the `compact` feature", path.display()),
        )));
    }

    Ok(Box::new(reader))
}

/// `<dir>/<file>.<suffix>` next to the source file.
pub fn get_cache_path(source: &Path, suffix: &str) -> PathBuf {
    let mut name = source
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".");
    name.push(suffix);
    source.with_file_name(name)
}

/// A cache is fresh when it exists and is not older than its source.
pub fn is_cache_fresh(source: &Path, cache: &Path) -> bool {
    let cache_time = match fs::metadata(cache).and_then(|m| m.modified()) {
        Ok(t) => t,
        Err(_) => return false,
    };
    match fs::metadata(source).and_then(|m| m.modified()) {
        Ok(source_time) => source_time <= cache_time,
        Err(_) => false,
    }
}
