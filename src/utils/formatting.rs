pub fn format_dimensions((width, height): (u32, u32)) -> String {
    format!("{width} x {height}")
}

pub fn format_resolution((x, y): (f64, f64)) -> String {
    format!("{} x {}", format_dpi(x), format_dpi(y))
}

fn format_dpi(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

pub fn format_color_depth(bits: Option<u16>) -> String {
    match bits {
        Some(bits) => format!("{bits} bits"),
        None => String::from("Unknown bits"),
    }
}

pub fn format_compression(compression: Option<&str>) -> &str {
    compression.unwrap_or("None")
}
