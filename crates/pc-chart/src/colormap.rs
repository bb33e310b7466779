//! Named color maps for isoline families drawn with a gradient.
//!
//! Each map is a handful of RGB stops interpolated linearly; a `_r` suffix
//! reverses the map. Colors are returned as `#rrggbb`.

type Rgb = [u8; 3];

const VIRIDIS: &[Rgb] = &[
    [0x44, 0x01, 0x54],
    [0x3b, 0x52, 0x8b],
    [0x21, 0x91, 0x8c],
    [0x5e, 0xc9, 0x62],
    [0xfd, 0xe7, 0x25],
];

const PLASMA: &[Rgb] = &[
    [0x0d, 0x08, 0x87],
    [0x7e, 0x03, 0xa8],
    [0xcc, 0x47, 0x78],
    [0xf8, 0x95, 0x40],
    [0xf0, 0xf9, 0x21],
];

const COOLWARM: &[Rgb] = &[[0x3b, 0x4c, 0xc0], [0xdd, 0xdd, 0xdd], [0xb4, 0x04, 0x26]];

const BLUES: &[Rgb] = &[[0xf7, 0xfb, 0xff], [0x6b, 0xae, 0xd6], [0x08, 0x30, 0x6b]];

const GREYS: &[Rgb] = &[[0xff, 0xff, 0xff], [0x00, 0x00, 0x00]];

fn stops(name: &str) -> Option<&'static [Rgb]> {
    match name.to_ascii_lowercase().as_str() {
        "viridis" => Some(VIRIDIS),
        "plasma" => Some(PLASMA),
        "coolwarm" => Some(COOLWARM),
        "blues" => Some(BLUES),
        "greys" | "grays" => Some(GREYS),
        _ => None,
    }
}

/// Whether `name` refers to a known map.
pub fn is_known(name: &str) -> bool {
    stops(name.strip_suffix("_r").unwrap_or(name)).is_some()
}

/// Color of map `name` at position `x`, clamped to [0, 1].
pub fn sample(name: &str, x: f64) -> Option<String> {
    let (base, reversed) = match name.strip_suffix("_r") {
        Some(base) => (base, true),
        None => (name, false),
    };
    let stops = stops(base)?;

    let mut x = if x.is_finite() { x.clamp(0.0, 1.0) } else { 0.0 };
    if reversed {
        x = 1.0 - x;
    }

    let scaled = x * (stops.len() - 1) as f64;
    let i = (scaled.floor() as usize).min(stops.len() - 2);
    let frac = scaled - i as f64;
    let (a, b) = (stops[i], stops[i + 1]);

    let channel = |k: usize| -> u8 {
        let v = a[k] as f64 + (b[k] as f64 - a[k] as f64) * frac;
        v.round().clamp(0.0, 255.0) as u8
    };
    Some(format!(
        "#{:02x}{:02x}{:02x}",
        channel(0),
        channel(1),
        channel(2)
    ))
}
