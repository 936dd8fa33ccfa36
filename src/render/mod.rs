pub(crate) mod annotate;
pub(crate) mod composite;
pub(crate) mod draw;
pub(crate) mod legend;
pub(crate) mod text;

/// A decoded video frame: height × width × RGB, mutated in place by the renderers.
pub type Frame = image::RgbImage;
