//! Colour parsing for the `--fg`/`--bg` options.

use colornames::Color;
use image::Rgba;

/// Parse a CSS colour name or a hex colour into an `Rgba` value.
///
/// Hex colours may be written as `RGB`, `RGBA`, `RRGGBB` or `RRGGBBAA`, with
/// or without a leading `#`. Alpha defaults to opaque.
pub fn parse_rgba_color(input: &str) -> Result<Rgba<u8>, String> {
    let trimmed = input.trim();
    if let Some(rgba) = parse_hex(trimmed) {
        return Ok(rgba);
    }

    let color: Color = trimmed.try_into().map_err(|_| {
        format!(
            "invalid color '{input}': use a named color or hex (RGB/RRGGBB with optional alpha, leading '#' optional)"
        )
    })?;
    let (red, green, blue) = color.rgb();
    Ok(Rgba([red, green, blue, 0xff]))
}

/// Decode a hex colour, returning `None` for anything that is not one.
fn parse_hex(input: &str) -> Option<Rgba<u8>> {
    let raw = input.strip_prefix('#').unwrap_or(input);
    let digits: Vec<u8> = raw
        .chars()
        .map(|c| c.to_digit(16).map(|d| d as u8))
        .collect::<Option<_>>()?;

    // Short forms repeat each nibble: "f" -> 0xff.
    let channels: Vec<u8> = match digits.len() {
        3 | 4 => digits.iter().map(|d| d * 17).collect(),
        6 | 8 => digits.chunks_exact(2).map(|p| (p[0] << 4) | p[1]).collect(),
        _ => return None,
    };

    let alpha = channels.get(3).copied().unwrap_or(0xff);
    Some(Rgba([channels[0], channels[1], channels[2], alpha]))
}
