/// Output providers — encode the lazy frame stream into an animated
/// container and write it out.  The simulation core never knows the final
/// format; this is the only module that does.

use std::fs;
use std::path::{Path, PathBuf};

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, RgbaImage};

use crate::error::{Error, Result};

/// Boundary between the frame stream and a container format.
pub trait OutputProvider: std::fmt::Debug {
    /// Encode frames, each displayed for `frame_duration_ms` milliseconds.
    fn encode(
        &self,
        frames: &mut dyn Iterator<Item = RgbaImage>,
        frame_duration_ms: u32,
    ) -> Result<Vec<u8>>;

    /// Write encoded bytes to the provider's destination.
    fn write(&self, data: &[u8]) -> Result<()>;

    fn path(&self) -> &Path;
}

/// Animated-GIF provider (infinite loop).
#[derive(Debug)]
pub struct GifOutput {
    path: PathBuf,
}

impl GifOutput {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        GifOutput { path: path.into() }
    }
}

impl OutputProvider for GifOutput {
    fn encode(
        &self,
        frames: &mut dyn Iterator<Item = RgbaImage>,
        frame_duration_ms: u32,
    ) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        {
            let mut encoder = GifEncoder::new_with_speed(&mut buffer, 10);
            encoder.set_repeat(Repeat::Infinite)?;
            for img in frames {
                let delay = Delay::from_numer_denom_ms(frame_duration_ms, 1);
                encoder.encode_frame(Frame::from_parts(img, 0, 0, delay))?;
            }
        }
        Ok(buffer)
    }

    fn write(&self, data: &[u8]) -> Result<()> {
        fs::write(&self.path, data)?;
        Ok(())
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

/// Pick a provider from the output path's extension.
pub fn resolve_output(path: &Path) -> Result<Box<dyn OutputProvider>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("gif") => Ok(Box::new(GifOutput::new(path))),
        Some(ext) => Err(Error::UnsupportedFormat(ext.to_string())),
        None => Err(Error::UnsupportedFormat(path.display().to_string())),
    }
}
