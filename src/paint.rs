//! Colors, gradients and shadow effects.

use palette::{Hsl, IntoColor, Srgb};

use crate::geometry::Point;

// ============================================================================
// Color
// ============================================================================

/// A straight-alpha sRGB color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in 0.0-1.0.
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0.0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from a `0xRRGGBB` literal.
    pub const fn hex(rgb: u32) -> Self {
        Self::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Returns the same color with a different opacity.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Formats the RGB channels as `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Rotates the hue by `degrees`, preserving saturation, lightness and alpha.
    pub fn rotate_hue(self, degrees: f32) -> Self {
        if self.a == 0.0 {
            return self;
        }

        let rgb = Srgb::new(
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        );
        let mut hsl: Hsl = rgb.into_color();
        hsl.hue += degrees;
        let rotated: Srgb = hsl.into_color();

        Self {
            r: (rotated.red.clamp(0.0, 1.0) * 255.0).round() as u8,
            g: (rotated.green.clamp(0.0, 1.0) * 255.0).round() as u8,
            b: (rotated.blue.clamp(0.0, 1.0) * 255.0).round() as u8,
            a: self.a,
        }
    }
}

// ============================================================================
// Gradients
// ============================================================================

/// A color at a normalized offset along a gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Color,
}

impl GradientStop {
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// A fill or stroke style.
///
/// Gradient coordinates are in user space, matching a 2D canvas
/// `createLinearGradient` / `createRadialGradient` call.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient {
        start: Point,
        end: Point,
        stops: Vec<GradientStop>,
    },
    /// Two-circle radial gradient: from the focal circle to the outer circle.
    RadialGradient {
        focal: Point,
        focal_radius: f32,
        center: Point,
        radius: f32,
        stops: Vec<GradientStop>,
    },
}

impl Paint {
    pub fn linear(start: Point, end: Point, stops: &[GradientStop]) -> Self {
        Self::LinearGradient {
            start,
            end,
            stops: stops.to_vec(),
        }
    }

    pub fn radial(
        focal: Point,
        focal_radius: f32,
        center: Point,
        radius: f32,
        stops: &[GradientStop],
    ) -> Self {
        Self::RadialGradient {
            focal,
            focal_radius,
            center,
            radius,
            stops: stops.to_vec(),
        }
    }

    /// A radial gradient whose focal and outer circles share `center`,
    /// with the focal circle collapsed to a point.
    pub fn glow(center: Point, radius: f32, stops: &[GradientStop]) -> Self {
        Self::radial(center, 0.0, center, radius, stops)
    }

    /// Applies `f` to every color in this paint.
    pub fn map_colors(&mut self, f: impl Fn(Color) -> Color) {
        match self {
            Self::Solid(color) => *color = f(*color),
            Self::LinearGradient { stops, .. } | Self::RadialGradient { stops, .. } => {
                for stop in stops {
                    stop.color = f(stop.color);
                }
            }
        }
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

// ============================================================================
// Shadow
// ============================================================================

/// A blurred, offset copy of a shape painted beneath it.
///
/// `blur` follows canvas `shadowBlur` semantics: the Gaussian standard
/// deviation is half of it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub color: Color,
    pub blur: f32,
    pub offset_y: f32,
}

impl Shadow {
    pub const fn glow(color: Color, blur: f32) -> Self {
        Self {
            color,
            blur,
            offset_y: 0.0,
        }
    }

    pub const fn dropped(color: Color, blur: f32, offset_y: f32) -> Self {
        Self {
            color,
            blur,
            offset_y,
        }
    }

    pub fn std_deviation(&self) -> f32 {
        self.blur / 2.0
    }
}
