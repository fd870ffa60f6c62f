use std::path::Path;

use walkdir::WalkDir;

use super::probe::{probe_file, ProbeReport};
use super::record::{ImageRecord, ScanFailure, ScanReport};

pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "gif", "tif", "tiff", "bmp", "png"];

fn is_supported(path: &Path) -> bool {
    path.extension()
        .map(|extension| {
            let extension = extension.to_string_lossy().to_lowercase();
            SUPPORTED_EXTENSIONS.contains(&extension.as_str())
        })
        .unwrap_or(false)
}

/// Walk `root` recursively and probe every file with a supported extension.
/// A file that fails to decode is recorded as a failure and never stops the
/// scan. Visit order is unspecified.
pub fn scan_folder(root: &Path) -> ScanReport {
    log::info!("Scanning folder: {}", root.display());
    let mut report = ScanReport::default();

    for entry in WalkDir::new(root).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                log::warn!("Skipping unreadable entry: {err}");
                continue;
            }
        };

        let path = entry.path();
        if !path.is_file() || !is_supported(path) {
            continue;
        }

        match probe_file(path) {
            Ok(probe) => report.records.push(build_record(path, probe)),
            Err(err) => {
                log::error!("Error processing {}: {err}", path.display());
                report.failures.push(ScanFailure {
                    path: path.to_path_buf(),
                    reason: err.to_string(),
                });
            }
        }
    }

    log::info!(
        "Scan finished: {} images, {} failures",
        report.records.len(),
        report.failures.len()
    );
    report
}

fn build_record(path: &Path, probe: ProbeReport) -> ImageRecord {
    ImageRecord {
        filename: path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string(),
        dimensions: (probe.width, probe.height),
        resolution: probe.dpi.unwrap_or((0.0, 0.0)),
        color_depth: probe.pixel_mode.bits_per_pixel(),
        compression: probe.compression,
        source_path: path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_image(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        image::RgbImage::new(width, height).save(&path).unwrap();
        path
    }

    fn record_paths(report: &ScanReport) -> Vec<PathBuf> {
        let mut paths: Vec<_> = report
            .records
            .iter()
            .map(|record| record.source_path.clone())
            .collect();
        paths.sort();
        paths
    }

    #[test]
    fn matches_supported_suffixes_case_insensitively() {
        let dir = TempDir::new().unwrap();
        write_image(dir.path(), "a.png", 4, 4);
        write_image(dir.path(), "B.JPG", 4, 4);
        write_image(dir.path(), "c.bmp", 4, 4);
        std::fs::write(dir.path().join("notes.txt"), "not an image").unwrap();

        let report = scan_folder(dir.path());
        assert_eq!(report.records.len(), 3);
        assert!(report.failures.is_empty());
    }

    #[test]
    fn descends_into_subdirectories() {
        let dir = TempDir::new().unwrap();
        write_image(dir.path(), "top.png", 4, 4);
        write_image(dir.path(), "sub/nested/deep.tiff", 4, 4);

        let report = scan_folder(dir.path());
        assert_eq!(report.records.len(), 2);
    }

    #[test]
    fn corrupt_file_does_not_abort_scan() {
        let dir = TempDir::new().unwrap();
        write_image(dir.path(), "good.png", 4, 4);
        std::fs::write(dir.path().join("bad.jpg"), b"garbage bytes").unwrap();
        write_image(dir.path(), "also_good.bmp", 4, 4);

        let report = scan_folder(dir.path());
        assert_eq!(report.records.len(), 2);
        assert_eq!(report.failures.len(), 1);
        assert!(report.failures[0].path.ends_with("bad.jpg"));
    }

    #[test]
    fn empty_folder_reports_no_matches() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("readme.txt"), "hello").unwrap();

        let report = scan_folder(dir.path());
        assert_eq!(report.matched(), 0);
        assert!(report.records.is_empty());
    }

    #[test]
    fn rescanning_an_unchanged_folder_yields_the_same_set() {
        let dir = TempDir::new().unwrap();
        write_image(dir.path(), "one.png", 4, 4);
        write_image(dir.path(), "sub/two.jpeg", 4, 4);

        let first = scan_folder(dir.path());
        let second = scan_folder(dir.path());
        assert_eq!(record_paths(&first), record_paths(&second));
    }

    #[test]
    fn record_fields_for_a_plain_png() {
        let dir = TempDir::new().unwrap();
        let path = write_image(dir.path(), "a.png", 100, 50);
        std::fs::write(dir.path().join("b.txt"), "ignored").unwrap();

        let report = scan_folder(dir.path());
        assert_eq!(report.records.len(), 1);

        let record = &report.records[0];
        assert_eq!(record.filename, "a.png");
        assert_eq!(record.dimensions, (100, 50));
        assert_eq!(record.resolution, (0.0, 0.0));
        assert_eq!(record.color_depth, Some(24));
        assert_eq!(record.compression, None);
        assert_eq!(record.source_path, path);
    }

    #[test]
    fn files_without_extensions_are_ignored() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("noext"), "data").unwrap();

        let report = scan_folder(dir.path());
        assert_eq!(report.matched(), 0);
    }
}
