use crate::error::Error;

/// An 8 bit per channel RGB color, as configured on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    /// Parses a color from exactly six hex digits, most significant byte red.
    pub fn from_hex(hex: &str) -> crate::Result<Self> {
        if hex.len() != 6 {
            return Err(Error::HexColorWrongLength(hex.to_owned()));
        }
        if !hex.chars().all(|character| character.is_ascii_hexdigit()) {
            return Err(Error::HexColorInvalidDigit(hex.to_owned()));
        }
        let number = u32::from_str_radix(hex, 16)
            .map_err(|_| Error::HexColorInvalidDigit(hex.to_owned()))?;
        Ok(Color {
            red: (number >> 16) as u8,
            green: (number >> 8) as u8,
            blue: number as u8,
        })
    }
}
