//! Colors and the palettes used by the default widget styles.

/// Linear RGBA color, each channel in [0, 1]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    pub const fn transparent() -> Self {
        Self::TRANSPARENT
    }

    /// Color from 8-bit sRGB channels and an 8-bit alpha
    pub const fn srgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::rgba(
            srgb_channel_to_linear(r),
            srgb_channel_to_linear(g),
            srgb_channel_to_linear(b),
            a as f32 / 255.0,
        )
    }

    /// Opaque color from 8-bit sRGB channels
    pub const fn srgb(r: u8, g: u8, b: u8) -> Self {
        Self::srgba(r, g, b, u8::MAX)
    }

    /// Replace alpha, clamped to [0, 1]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha.clamp(0.0, 1.0);
        self
    }

    pub fn with_alpha_u8(self, alpha: u8) -> Self {
        self.with_alpha(alpha as f32 / 255.0)
    }
}

/// Cubic fit of the sRGB transfer curve; `powf` is not available in const fns
const fn srgb_channel_to_linear(channel: u8) -> f32 {
    let x = channel as f32 / 255.0;
    x * (x * (x * 0.305_306_01 + 0.682_171_1) + 0.012_522_878)
}

/// A few CSS named colors
pub mod css {
    use super::Color;

    pub const BLACK: Color = Color::srgb(0, 0, 0);
    pub const WHITE: Color = Color::srgb(255, 255, 255);
    pub const RED: Color = Color::srgb(255, 0, 0);
    pub const BLUE: Color = Color::srgb(0, 0, 255);
}

/// Catppuccin palettes
pub mod catppuccin {
    /// The dark Mocha flavour
    pub mod mocha {
        use crate::Color;

        pub const ROSEWATER: Color = Color::srgb(245, 224, 220);
        pub const MAUVE: Color = Color::srgb(203, 166, 247);
        pub const RED: Color = Color::srgb(243, 139, 168);
        pub const LAVENDER: Color = Color::srgb(180, 190, 254);
        pub const TEXT: Color = Color::srgb(205, 214, 244);
        pub const SUBTEXT1: Color = Color::srgb(186, 194, 222);
        pub const SUBTEXT0: Color = Color::srgb(166, 173, 200);
        pub const OVERLAY1: Color = Color::srgb(127, 132, 156);
        pub const OVERLAY0: Color = Color::srgb(108, 112, 134);
        pub const SURFACE2: Color = Color::srgb(88, 91, 112);
        pub const SURFACE1: Color = Color::srgb(69, 71, 90);
        pub const SURFACE0: Color = Color::srgb(49, 50, 68);
        pub const BASE: Color = Color::srgb(30, 30, 46);
        pub const MANTLE: Color = Color::srgb(24, 24, 37);
    }
}
