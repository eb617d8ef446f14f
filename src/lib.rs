use std::{
    fs::{File, OpenOptions},
    io::{BufReader, BufWriter},
    path::{Path, PathBuf},
};

pub use cli::CLIParser;
use color::Color;
use error::Error;
use image::{
    decoder::PngDecoder,
    encoder::Encoder,
    transformer::{AlphaTransformer, TransformationOptions},
};

mod cli;
mod color;
mod error;
mod image;
mod logger;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    input_file: PathBuf,
    output_file: PathBuf,
    background_color: Color,
    foreground_color: Color,
    output_color: Color,
}

impl Arguments {
    pub fn output_file(&self) -> &Path {
        &self.output_file
    }
}

fn open_input_file(file_path: &Path) -> Result<File> {
    File::open(file_path)
        .map_err(|e| Error::UnableToOpenInputFileForReading(file_path.display().to_string(), e))
}

fn open_output_file(file_path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(file_path)
        .map_err(|e| Error::UnableToOpenOutputFileForWriting(file_path.display().to_string(), e))
}

pub fn recover_transparency(arguments: &Arguments) -> Result<()> {
    let input_file = open_input_file(&arguments.input_file)?;
    let input_image = PngDecoder::decode(BufReader::new(&input_file), &arguments.input_file)?;
    log::info!(
        "decoded {}x{} pixel image from '{}'",
        input_image.width(),
        input_image.height(),
        arguments.input_file.display()
    );
    let transformation_options = TransformationOptions::from(arguments);
    let transformer = AlphaTransformer::new(&transformation_options);
    let output_image = transformer.transform(&input_image);
    let output_file = open_output_file(&arguments.output_file)?;
    let mut output_file_writer = BufWriter::new(&output_file);
    let mut encoder = Encoder::new(&mut output_file_writer);
    encoder.encode(&output_image, &arguments.output_file)?;
    log::info!(
        "encoded output image to '{}'",
        arguments.output_file.display()
    );
    Ok(())
}
