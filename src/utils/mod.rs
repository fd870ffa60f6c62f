pub mod formatting;

pub use formatting::{
    format_color_depth, format_compression, format_dimensions, format_resolution,
};
