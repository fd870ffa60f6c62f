use std::fmt;
use std::path::PathBuf;

/// Metadata extracted from one successfully decoded image file.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRecord {
    pub filename: String,
    pub dimensions: (u32, u32),
    /// Horizontal and vertical DPI; (0, 0) when the file carries none.
    pub resolution: (f64, f64),
    /// Bits per pixel; `None` when the pixel mode has no entry in the depth table.
    pub color_depth: Option<u16>,
    pub compression: Option<String>,
    pub source_path: PathBuf,
}

/// A file that matched a supported extension but could not be decoded.
#[derive(Debug, Clone)]
pub struct ScanFailure {
    pub path: PathBuf,
    pub reason: String,
}

impl fmt::Display for ScanFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.reason)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    pub records: Vec<ImageRecord>,
    pub failures: Vec<ScanFailure>,
}

impl ScanReport {
    /// Number of files that matched a supported extension, decodable or not.
    /// Zero means the folder held no supported images at all.
    pub fn matched(&self) -> usize {
        self.records.len() + self.failures.len()
    }
}
