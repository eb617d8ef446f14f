use std::io::Read;
use std::path::Path;

use png::{BitDepth, ColorType, Transformations};

use super::RgbaBitmap;
use crate::error::Error;

pub struct PngDecoder;

impl PngDecoder {
    /// Decodes a PNG stream into an 8 bit RGBA bitmap. Palette and sub-byte
    /// images are expanded and 16 bit samples are stripped, so any valid PNG
    /// normalizes to the RGBA data model.
    pub fn decode<R: Read>(reader: R, file_path: &Path) -> crate::Result<RgbaBitmap> {
        let mut decoder = png::Decoder::new(reader);
        decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
        let mut png_reader = decoder
            .read_info()
            .map_err(|e| Error::DecodingOfInputImageFailed(file_path.display().to_string(), e))?;
        let mut buffer = vec![0_u8; png_reader.output_buffer_size()];
        let frame_info = png_reader
            .next_frame(&mut buffer)
            .map_err(|e| Error::DecodingOfInputImageFailed(file_path.display().to_string(), e))?;
        let samples = &buffer[..frame_info.buffer_size()];
        let rgba = expand_to_rgba(samples, frame_info.color_type, frame_info.bit_depth)?;
        Ok(RgbaBitmap::new(frame_info.width, frame_info.height, rgba))
    }
}

fn expand_to_rgba(
    samples: &[u8],
    color_type: ColorType,
    bit_depth: BitDepth,
) -> crate::Result<Vec<u8>> {
    match (color_type, bit_depth) {
        (ColorType::Rgba, BitDepth::Eight) => Ok(samples.to_vec()),
        (ColorType::Rgb, BitDepth::Eight) => {
            let mut rgba = Vec::with_capacity(samples.len() / 3 * 4);
            for pixel in samples.chunks_exact(3) {
                rgba.extend_from_slice(&[pixel[0], pixel[1], pixel[2], 255]);
            }
            Ok(rgba)
        }
        (ColorType::GrayscaleAlpha, BitDepth::Eight) => {
            let mut rgba = Vec::with_capacity(samples.len() * 2);
            for pixel in samples.chunks_exact(2) {
                rgba.extend_from_slice(&[pixel[0], pixel[0], pixel[0], pixel[1]]);
            }
            Ok(rgba)
        }
        (ColorType::Grayscale, BitDepth::Eight) => {
            let mut rgba = Vec::with_capacity(samples.len() * 4);
            for &gray in samples {
                rgba.extend_from_slice(&[gray, gray, gray, 255]);
            }
            Ok(rgba)
        }
        (color_type, bit_depth) => Err(Error::UnsupportedColorLayout(format!(
            "{:?}/{:?}",
            color_type, bit_depth
        ))),
    }
}
