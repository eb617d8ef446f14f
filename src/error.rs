use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    HexColorWrongLength(String),
    HexColorInvalidDigit(String),
    UnableToOpenInputFileForReading(String, std::io::Error),
    UnableToOpenOutputFileForWriting(String, std::io::Error),
    DecodingOfInputImageFailed(String, png::DecodingError),
    EncodingOfOutputImageFailed(String, png::EncodingError),
    UnsupportedColorLayout(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HexColorWrongLength(value) => {
                write!(f, "\"{}\" is not a 6-digit hex color", value)
            }
            Self::HexColorInvalidDigit(value) => {
                write!(f, "\"{}\" is not a valid hex color", value)
            }
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::UnableToOpenOutputFileForWriting(path, error) => {
                write!(
                    f,
                    "Unable to open output file '{}' for writing: {}",
                    path, error
                )
            }
            Self::DecodingOfInputImageFailed(path, error) => {
                write!(f, "Decoding of input image '{}' failed: {}", path, error)
            }
            Self::EncodingOfOutputImageFailed(path, error) => {
                write!(f, "Encoding of output image '{}' failed: {}", path, error)
            }
            Self::UnsupportedColorLayout(layout) => {
                write!(f, "Decoded image has unsupported color layout {}", layout)
            }
        }
    }
}

impl std::error::Error for Error {}
