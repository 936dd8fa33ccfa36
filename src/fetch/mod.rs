pub(crate) mod decode;
pub(crate) mod ffmpeg;
pub(crate) mod locator;
