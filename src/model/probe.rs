use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use exif::{In, Tag, Value};
use image::{ColorType, GenericImageView, ImageReader};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("failed to read file ({0})")]
    Io(#[from] std::io::Error),
    #[error("failed to decode image ({0})")]
    Decode(#[from] image::ImageError),
}

/// What the decoder reports about a single file. DPI and compression are
/// optional because most formats carry neither.
#[derive(Debug, Clone)]
pub struct ProbeReport {
    pub width: u32,
    pub height: u32,
    pub pixel_mode: PixelMode,
    pub dpi: Option<(f64, f64)>,
    pub compression: Option<String>,
}

/// Color/channel representation of decoded pixel data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelMode {
    Bilevel,
    Grayscale,
    GrayscaleAlpha,
    Indexed,
    Rgb,
    Rgba,
    Cmyk,
    YCbCr,
    Lab,
    Hsv,
    Int32,
    Float32,
    Other(String),
}

impl PixelMode {
    /// Bits per pixel for the modes in the depth table; `None` otherwise.
    pub fn bits_per_pixel(&self) -> Option<u16> {
        match self {
            PixelMode::Bilevel => Some(1),
            PixelMode::Grayscale => Some(8),
            PixelMode::Indexed => Some(8),
            PixelMode::Rgb => Some(24),
            PixelMode::Rgba => Some(32),
            PixelMode::Cmyk => Some(32),
            PixelMode::YCbCr => Some(24),
            PixelMode::Lab => Some(24),
            PixelMode::Hsv => Some(24),
            PixelMode::Int32 => Some(32),
            PixelMode::Float32 => Some(32),
            PixelMode::GrayscaleAlpha | PixelMode::Other(_) => None,
        }
    }
}

impl fmt::Display for PixelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PixelMode::Bilevel => "1-bit",
            PixelMode::Grayscale => "grayscale",
            PixelMode::GrayscaleAlpha => "grayscale-alpha",
            PixelMode::Indexed => "indexed-palette",
            PixelMode::Rgb => "RGB",
            PixelMode::Rgba => "RGBA",
            PixelMode::Cmyk => "CMYK",
            PixelMode::YCbCr => "YCbCr",
            PixelMode::Lab => "LAB",
            PixelMode::Hsv => "HSV",
            PixelMode::Int32 => "32-bit-int",
            PixelMode::Float32 => "32-bit-float",
            PixelMode::Other(other) => other,
        };
        f.write_str(label)
    }
}

impl From<ColorType> for PixelMode {
    fn from(color: ColorType) -> Self {
        match color {
            ColorType::L8 => PixelMode::Grayscale,
            ColorType::La8 => PixelMode::GrayscaleAlpha,
            ColorType::Rgb8 => PixelMode::Rgb,
            ColorType::Rgba8 => PixelMode::Rgba,
            other => PixelMode::Other(format!("{other:?}")),
        }
    }
}

/// Decode a single image file and gather its metadata. The decoded pixels are
/// dropped before this returns; nothing keeps the file open afterwards.
pub fn probe_file(path: &Path) -> Result<ProbeReport, ProbeError> {
    let image = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    let (width, height) = image.dimensions();
    let (dpi, compression) = read_exif_info(path);

    Ok(ProbeReport {
        width,
        height,
        pixel_mode: PixelMode::from(image.color()),
        dpi,
        compression,
    })
}

/// DPI and compression live in the EXIF block when they exist at all.
/// A file without EXIF is the normal case, not a failure.
fn read_exif_info(path: &Path) -> (Option<(f64, f64)>, Option<String>) {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(_) => return (None, None),
    };

    let mut reader = BufReader::new(file);
    let exif = match exif::Reader::new().read_from_container(&mut reader) {
        Ok(exif) => exif,
        Err(_) => return (None, None),
    };

    let dpi = match (
        rational_value(&exif, Tag::XResolution),
        rational_value(&exif, Tag::YResolution),
    ) {
        (Some(x), Some(y)) => Some((x, y)),
        _ => None,
    };

    let compression = exif
        .get_field(Tag::Compression, In::PRIMARY)
        .map(|field| field.display_value().to_string());

    (dpi, compression)
}

fn rational_value(exif: &exif::Exif, tag: Tag) -> Option<f64> {
    match exif.get_field(tag, In::PRIMARY)?.value {
        Value::Rational(ref values) => values.first().map(|rational| rational.to_f64()),
        _ => None,
    }
}
