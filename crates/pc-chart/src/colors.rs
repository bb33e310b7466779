//! Color names used in configuration files.

/// Parse a `#rrggbb` string or a common matplotlib color name into RGB.
pub fn parse_rgb(name: &str) -> Option<[u8; 3]> {
    if let Some(hex) = name.strip_prefix('#') {
        return parse_hex(hex);
    }
    let rgb = match name.to_ascii_lowercase().as_str() {
        "k" | "black" => [0x00, 0x00, 0x00],
        "w" | "white" => [0xff, 0xff, 0xff],
        "r" | "red" => [0xd6, 0x27, 0x28],
        "g" | "green" => [0x2c, 0xa0, 0x2c],
        "b" | "blue" => [0x1f, 0x77, 0xb4],
        "c" | "cyan" => [0x17, 0xbe, 0xcf],
        "m" | "magenta" => [0xbf, 0x00, 0xbf],
        "y" | "yellow" => [0xbf, 0xbf, 0x00],
        "gray" | "grey" => [0x80, 0x80, 0x80],
        "orange" => [0xff, 0x7f, 0x0e],
        "purple" => [0x94, 0x67, 0xbd],
        "steelblue" => [0x46, 0x82, 0xb4],
        "lightgreen" => [0x90, 0xee, 0x90],
        "salmon" => [0xfa, 0x80, 0x72],
        "lightblue" => [0xad, 0xd8, 0xe6],
        _ => return None,
    };
    Some(rgb)
}

fn parse_hex(hex: &str) -> Option<[u8; 3]> {
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}
