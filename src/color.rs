use crate::error::InputError;

/// Linear RGBA in the unit range, laid out the way `uniform4fv` wants it.
pub type Rgba = [f32; 4];

pub const WHITE: Rgba = [1.0, 1.0, 1.0, 1.0];

/// Parse a colour picker value (`#RRGGBB`) into unit-range channels.
///
/// Each two-digit byte is divided by 255. Alpha is always 1.0.
pub fn parse_hex_color(raw: &str) -> Result<Rgba, InputError> {
    let bad = || InputError::BadHexColor(raw.to_string());

    let digits = raw.strip_prefix('#').ok_or_else(bad)?;
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(bad());
    }

    let channel = |i: usize| -> Result<f32, InputError> {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .map(|byte| f32::from(byte) / 255.0)
            .map_err(|_| bad())
    };

    Ok([channel(0)?, channel(2)?, channel(4)?, 1.0])
}
