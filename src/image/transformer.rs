use super::RgbaBitmap;
use crate::color::Color;
use crate::Arguments;

pub struct TransformationOptions {
    pub background_color: Color,
    pub foreground_color: Color,
    pub output_color: Color,
}

impl From<&Arguments> for TransformationOptions {
    fn from(value: &Arguments) -> Self {
        Self {
            background_color: value.background_color,
            foreground_color: value.foreground_color,
            output_color: value.output_color,
        }
    }
}

pub struct AlphaTransformer<'a> {
    options: &'a TransformationOptions,
}

impl<'a> AlphaTransformer<'a> {
    pub fn new(options: &'a TransformationOptions) -> Self {
        AlphaTransformer { options }
    }

    /// Rebuilds the image as the configured output color with a recovered
    /// alpha channel. A pixel is as opaque as its most opaque looking
    /// channel, which keeps pixels that only graze the background color in a
    /// single channel from reading as transparent.
    pub fn transform(&self, image: &RgbaBitmap) -> RgbaBitmap {
        let mut output = RgbaBitmap::blank(image.width(), image.height());
        let Color { red, green, blue } = self.options.output_color;
        for (input_pixel, output_pixel) in image.pixels().zip(output.pixels_mut()) {
            output_pixel[0] = red;
            output_pixel[1] = green;
            output_pixel[2] = blue;
            output_pixel[3] = self.max_alpha(input_pixel);
        }
        output
    }

    fn max_alpha(&self, input_pixel: &[u8]) -> u8 {
        let background = self.options.background_color;
        let foreground = self.options.foreground_color;
        let alpha = channel_alpha(background.red, foreground.red, input_pixel[0]);
        let alpha = alpha.max(channel_alpha(
            background.green,
            foreground.green,
            input_pixel[1],
        ));
        alpha.max(channel_alpha(
            background.blue,
            foreground.blue,
            input_pixel[2],
        ))
    }
}

/// Alpha estimate for one channel: how far the observed value sits along the
/// segment from background to foreground, scaled to 0..=255. A channel with
/// equal background and foreground carries no information and counts as fully
/// opaque. The result is narrowed without clamping: inputs outside the
/// segment wrap in 8 bits, and existing consumers rely on that exact output.
fn channel_alpha(background: u8, foreground: u8, input: u8) -> u8 {
    if foreground == background {
        return 255;
    }
    let numerator = 255 * (i32::from(input) - i32::from(background));
    let denominator = i32::from(foreground) - i32::from(background);
    (numerator / denominator) as u8
}
