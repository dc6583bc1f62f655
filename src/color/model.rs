//! Colour data models.

use std::fmt;

/// A colour picked in the dialog, one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// CSS-style `rgb(R, G, B)` form with decimal channels.
    pub fn to_rgb_string(&self) -> String {
        format!("rgb({}, {}, {})", self.red, self.green, self.blue)
    }

    /// Channels as an array, in the layout egui's colour widgets edit.
    pub fn to_array(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    pub fn from_array([red, green, blue]: [u8; 3]) -> Self {
        Self { red, green, blue }
    }

    /// Render this colour in the requested clipboard format.
    pub fn format(&self, format: ColorFormat) -> String {
        match format {
            ColorFormat::Hex => self.to_hex(),
            ColorFormat::Rgb => self.to_rgb_string(),
        }
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Text representation written to the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorFormat {
    /// `#rrggbb`
    Hex,
    /// `rgb(R, G, B)`
    Rgb,
}

impl ColorFormat {
    /// Menu label for this format.
    pub fn label(&self) -> &'static str {
        match self {
            ColorFormat::Hex => "Hex",
            ColorFormat::Rgb => "RGB",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_hex_form(s: &str) -> bool {
        s.len() == 7
            && s.starts_with('#')
            && s[1..]
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
    }

    #[test]
    fn test_hex_is_lowercase_and_padded() {
        assert_eq!(Rgb::new(0, 0, 0).to_hex(), "#000000");
        assert_eq!(Rgb::new(255, 171, 1).to_hex(), "#ffab01");
        assert_eq!(Rgb::new(10, 11, 12).to_hex(), "#0a0b0c");
    }

    #[test]
    fn test_hex_round_trips_channels() {
        for (r, g, b) in [(0u8, 0u8, 0u8), (255, 255, 255), (18, 52, 86), (200, 7, 99)] {
            let hex = Rgb::new(r, g, b).to_hex();
            assert!(is_hex_form(&hex), "{hex}");
            assert_eq!(u8::from_str_radix(&hex[1..3], 16).unwrap(), r);
            assert_eq!(u8::from_str_radix(&hex[3..5], 16).unwrap(), g);
            assert_eq!(u8::from_str_radix(&hex[5..7], 16).unwrap(), b);
        }
    }

    #[test]
    fn test_rgb_string() {
        assert_eq!(Rgb::new(255, 0, 128).to_rgb_string(), "rgb(255, 0, 128)");
        assert_eq!(Rgb::new(0, 0, 0).to_rgb_string(), "rgb(0, 0, 0)");
    }

    #[test]
    fn test_format_dispatch() {
        let color = Rgb::new(1, 2, 3);
        assert_eq!(color.format(ColorFormat::Hex), "#010203");
        assert_eq!(color.format(ColorFormat::Rgb), "rgb(1, 2, 3)");
    }

    #[test]
    fn test_default_is_white() {
        assert_eq!(Rgb::default().to_hex(), "#ffffff");
        assert_eq!(Rgb::from_array(Rgb::WHITE.to_array()), Rgb::WHITE);
    }
}
