//! Sample data download and caching.
//!
//! Mirrors the known sample CNV files from the upstream archive into the
//! local support directory so demos and manual testing can run against real
//! instrument exports. Files already present are not downloaded again.

use crate::config::support_dir;
use crate::constants::{DOWNLOAD_TIMEOUT_SECS, SAMPLE_DATA_BASE_URL, SAMPLE_DATA_DIR_NAME};
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// A known sample file in the upstream archive.
#[derive(Debug, Clone, Copy)]
pub struct SampleFile {
    pub name: &'static str,
    pub dtype: &'static str,
}

/// Known sample files, mirrored from the upstream archive index.
pub const SAMPLE_FILES: &[SampleFile] = &[
    SampleFile { name: "PIRA001.cnv", dtype: "CTD" },
    SampleFile { name: "dPIRX003.cnv", dtype: "CTD" },
    SampleFile { name: "dPIRX010.cnv", dtype: "CTD" },
    SampleFile { name: "Hotin.cnv", dtype: "CTD" },
    SampleFile { name: "missing_whitespace.cnv", dtype: "CTD" },
    SampleFile { name: "SK287_CTD05.cnv", dtype: "CTD" },
    SampleFile { name: "sta0860.cnv", dtype: "CTD" },
];

/// Directory where sample files are cached locally.
pub fn sampledata_dir() -> PathBuf {
    support_dir().join(SAMPLE_DATA_DIR_NAME)
}

/// Fetch sample files into the local cache, returning their paths.
///
/// With `filename` set, only that file is fetched and it must be a known
/// sample. Otherwise every known file is fetched, optionally narrowed to one
/// `dtype`. Files already cached are returned without a download.
pub async fn fetch(filename: Option<&str>, dtype: Option<&str>) -> Result<Vec<PathBuf>> {
    let selected: Vec<&SampleFile> = match filename {
        Some(name) => {
            let Some(file) = SAMPLE_FILES.iter().find(|f| f.name == name) else {
                return Err(Error::configuration(format!(
                    "'{name}' is not a known sample file"
                )));
            };
            vec![file]
        }
        None => SAMPLE_FILES
            .iter()
            .filter(|f| dtype.map_or(true, |d| f.dtype == d))
            .collect(),
    };

    let output_dir = sampledata_dir();
    tokio::fs::create_dir_all(&output_dir).await.map_err(|e| {
        Error::io(
            format!("failed to create sample data directory {}", output_dir.display()),
            e,
        )
    })?;

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(DOWNLOAD_TIMEOUT_SECS))
        .build()
        .map_err(|e| Error::download(SAMPLE_DATA_BASE_URL, e.to_string()))?;

    let mut paths = Vec::with_capacity(selected.len());
    for file in selected {
        let target = output_dir.join(file.name);
        if is_cached(&target).await? {
            debug!("sample file {} already cached", file.name);
            paths.push(target);
            continue;
        }

        let url = format!("{SAMPLE_DATA_BASE_URL}/{}/{}", file.dtype, file.name);
        info!("downloading {}", url);

        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::download(&url, e.to_string()))?;
        if !response.status().is_success() {
            return Err(Error::download(&url, format!("status {}", response.status())));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::download(&url, e.to_string()))?;
        tokio::fs::write(&target, &bytes)
            .await
            .map_err(|e| Error::io(format!("failed to write {}", target.display()), e))?;

        debug!("cached {} ({} bytes)", target.display(), bytes.len());
        paths.push(target);
    }

    Ok(paths)
}

/// Check whether a sample file is already present in the cache.
///
/// A probe failure (for example a permission problem) is a real error, not a
/// cache miss; only a clean "does not exist" answer triggers a download.
async fn is_cached(path: &Path) -> Result<bool> {
    tokio::fs::try_exists(path)
        .await
        .map_err(|e| Error::io(format!("failed to probe {}", path.display()), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_sampledata_dir_is_under_support_dir() {
        let dir = sampledata_dir();
        assert!(dir.ends_with(SAMPLE_DATA_DIR_NAME));
    }

    #[test]
    fn test_known_files_are_unique() {
        let mut names: Vec<&str> = SAMPLE_FILES.iter().map(|f| f.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), SAMPLE_FILES.len());
    }

    #[tokio::test]
    async fn test_cache_probe_failure_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let plain = temp_dir.path().join("plain.txt");
        tokio::fs::write(&plain, "x").await.unwrap();

        // Probing through a regular file fails with ENOTDIR, which must
        // surface instead of being treated as "not cached"
        let result = is_cached(&plain.join("child.cnv")).await;
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[tokio::test]
    async fn test_cached_and_missing_files_are_distinguished() {
        let temp_dir = TempDir::new().unwrap();
        let present = temp_dir.path().join("sta0860.cnv");
        tokio::fs::write(&present, "x").await.unwrap();

        assert!(is_cached(&present).await.unwrap());
        assert!(!is_cached(&temp_dir.path().join("absent.cnv")).await.unwrap());
    }

    #[tokio::test]
    async fn test_unknown_sample_file_is_rejected() {
        let result = fetch(Some("nonexistent.cnv"), None).await;
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }
}
