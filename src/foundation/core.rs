use crate::foundation::error::{SpotCheckError, SpotCheckResult};

pub use kurbo::Point;

/// Zero-based frame index into a video.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct FrameIndex(pub u64);

impl FrameIndex {
    /// Parse a decimal frame-index key such as `"120"`.
    pub fn parse_key(key: &str) -> SpotCheckResult<Self> {
        key.trim().parse::<u64>().map(Self).map_err(|_| {
            SpotCheckError::validation(format!("frame index '{key}' is not a non-negative integer"))
        })
    }
}

impl std::fmt::Display for FrameIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fps {
    pub num: u32,
    pub den: u32, // must be > 0
}

impl Fps {
    /// Frame rate assumed for every annotated rendition.
    pub const ANNOTATED_DEFAULT: Fps = Fps { num: 30, den: 1 };

    pub fn new(num: u32, den: u32) -> SpotCheckResult<Self> {
        if den == 0 {
            return Err(SpotCheckError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(SpotCheckError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    pub fn frames_to_secs(self, frame: FrameIndex) -> f64 {
        (frame.0 as f64) / self.as_f64()
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self::ANNOTATED_DEFAULT
    }
}

/// Straight (opaque) RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const WHITE: Rgb8 = Rgb8::new(255, 255, 255);
    pub const BLACK: Rgb8 = Rgb8::new(0, 0, 0);
    pub const MAGENTA: Rgb8 = Rgb8::new(255, 0, 255);
    pub const CYAN: Rgb8 = Rgb8::new(0, 255, 255);
    pub const GREEN: Rgb8 = Rgb8::new(0, 255, 0);
    pub const RED: Rgb8 = Rgb8::new(255, 0, 0);
    pub const CAPTION_GREY: Rgb8 = Rgb8::new(200, 200, 200);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_pixel(self) -> image::Rgb<u8> {
        image::Rgb([self.r, self.g, self.b])
    }

    /// `rgb(r,g,b)` form for SVG paint attributes.
    pub fn to_svg_paint(self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
