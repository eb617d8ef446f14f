use std::io::Write;
use std::path::Path;

use png::{BitDepth, ColorType};

use super::RgbaBitmap;
use crate::error::Error;

pub struct Encoder<'a, T> {
    writer: &'a mut T,
}

impl<'a, T: Write> Encoder<'a, T> {
    pub fn new(writer: &'a mut T) -> Self {
        Encoder { writer }
    }

    /// Encodes the bitmap as an 8 bit RGBA PNG. The header dimensions come
    /// straight from the bitmap.
    pub fn encode(&mut self, image: &RgbaBitmap, file_path: &Path) -> crate::Result<()> {
        let mut png_encoder = png::Encoder::new(&mut *self.writer, image.width(), image.height());
        png_encoder.set_color(ColorType::Rgba);
        png_encoder.set_depth(BitDepth::Eight);
        let mut png_writer = png_encoder
            .write_header()
            .map_err(|e| Error::EncodingOfOutputImageFailed(file_path.display().to_string(), e))?;
        png_writer
            .write_image_data(image.data())
            .map_err(|e| Error::EncodingOfOutputImageFailed(file_path.display().to_string(), e))?;
        png_writer
            .finish()
            .map_err(|e| Error::EncodingOfOutputImageFailed(file_path.display().to_string(), e))?;
        // BufWriter drops silently; flush here so late write errors still
        // surface as encode failures.
        self.writer.flush().map_err(|e| {
            Error::EncodingOfOutputImageFailed(
                file_path.display().to_string(),
                png::EncodingError::from(e),
            )
        })
    }
}
