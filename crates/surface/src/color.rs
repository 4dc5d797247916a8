/// Normalised RGBA colour (each channel in `[0.0, 1.0]`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK:       Self = Self { r: 0.0,   g: 0.0,   b: 0.0,   a: 1.0 };
    pub const WHITE:       Self = Self { r: 1.0,   g: 1.0,   b: 1.0,   a: 1.0 };
    pub const TRANSPARENT: Self = Self { r: 0.0,   g: 0.0,   b: 0.0,   a: 0.0 };

    pub const STEEL_BLUE: Self = Self { r: 0.275, g: 0.510, b: 0.706, a: 1.0 }; // #4682b4
    pub const ORANGE:     Self = Self { r: 1.0,   g: 0.498, b: 0.055, a: 1.0 }; // #ff7f0e
    pub const GREEN:      Self = Self { r: 0.173, g: 0.627, b: 0.173, a: 1.0 }; // #2ca02c
    pub const RED:        Self = Self { r: 0.839, g: 0.153, b: 0.157, a: 1.0 }; // #d62728
    pub const VIOLET:     Self = Self { r: 0.580, g: 0.404, b: 0.741, a: 1.0 }; // #9467bd
    pub const CYAN:       Self = Self { r: 0.090, g: 0.745, b: 0.812, a: 1.0 }; // #17becf

    /// Fallback fills for series that arrive without a colour of their own.
    pub const SERIES_PALETTE: [Self; 6] = [
        Self::STEEL_BLUE,
        Self::ORANGE,
        Self::GREEN,
        Self::RED,
        Self::VIOLET,
        Self::CYAN,
    ];

    /// Palette colour for the `index`-th series (wraps around).
    #[inline]
    pub fn palette(index: usize) -> Self {
        Self::SERIES_PALETTE[index % Self::SERIES_PALETTE.len()]
    }

    /// Parse a CSS-style hex color string (`#RRGGBB` or `#RRGGBBAA`).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');

        let byte = |s: &str| -> Option<u8> { u8::from_str_radix(s, 16).ok() };

        match hex.len() {
            6 => Some(Self {
                r: byte(&hex[0..2])? as f32 / 255.0,
                g: byte(&hex[2..4])? as f32 / 255.0,
                b: byte(&hex[4..6])? as f32 / 255.0,
                a: 1.0,
            }),
            8 => Some(Self {
                r: byte(&hex[0..2])? as f32 / 255.0,
                g: byte(&hex[2..4])? as f32 / 255.0,
                b: byte(&hex[4..6])? as f32 / 255.0,
                a: byte(&hex[6..8])? as f32 / 255.0,
            }),
            _ => None,
        }
    }

    /// CSS representation: `#rrggbb` for opaque colours, `rgba(...)` otherwise.
    pub fn to_css(self) -> String {
        let chan = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", chan(self.r), chan(self.g), chan(self.b))
        } else {
            format!(
                "rgba({}, {}, {}, {})",
                chan(self.r),
                chan(self.g),
                chan(self.b),
                self.a.clamp(0.0, 1.0)
            )
        }
    }
}
