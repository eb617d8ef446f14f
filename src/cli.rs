use crate::color::Color;
use crate::Arguments;
use clap::{
    crate_authors, crate_description, crate_name, crate_version, value_parser, Arg, ArgMatches,
    Command,
};
use std::ffi::OsString;
use std::path::PathBuf;

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_background_color_argument(command);
        let command = Self::register_foreground_color_argument(command);
        let command = Self::register_input_file_argument(command);
        let command = Self::register_output_file_argument(command);
        Self::register_output_color_argument(command)
    }

    fn register_background_color_argument(command: Command) -> Command {
        command.arg(Self::create_background_color_argument())
    }

    fn register_foreground_color_argument(command: Command) -> Command {
        command.arg(Self::create_foreground_color_argument())
    }

    fn register_input_file_argument(command: Command) -> Command {
        command.arg(Self::create_input_file_argument())
    }

    fn register_output_file_argument(command: Command) -> Command {
        command.arg(Self::create_output_file_argument())
    }

    fn register_output_color_argument(command: Command) -> Command {
        command.arg(Self::create_output_color_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_background_color_argument() -> Arg {
        Arg::new("background_color")
            .short('b')
            .value_name("HEX")
            .help("Background color as six hex digits")
            .value_parser(Color::from_hex)
            .required(true)
    }

    fn create_foreground_color_argument() -> Arg {
        Arg::new("foreground_color")
            .short('f')
            .value_name("HEX")
            .help("Foreground color as six hex digits")
            .value_parser(Color::from_hex)
            .required(true)
    }

    fn create_input_file_argument() -> Arg {
        Arg::new("input_file")
            .short('i')
            .value_name("FILE")
            .help("Path to PNG input file")
            .value_parser(value_parser!(PathBuf))
            .required(false)
    }

    fn create_output_file_argument() -> Arg {
        Arg::new("output_file")
            .short('o')
            .value_name("FILE")
            .help("Path to PNG output file")
            .value_parser(value_parser!(PathBuf))
            .required(false)
    }

    fn create_output_color_argument() -> Arg {
        Arg::new("output_color")
            .short('c')
            .value_name("HEX")
            .help("Output color as six hex digits; defaults to the foreground color")
            .value_parser(Color::from_hex)
            .required(false)
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        let foreground_color = Self::extract_foreground_color_argument(matches);
        Arguments {
            input_file: Self::extract_input_file_argument(matches),
            output_file: Self::extract_output_file_argument(matches),
            background_color: Self::extract_background_color_argument(matches),
            foreground_color,
            output_color: Self::extract_output_color_argument(matches, foreground_color),
        }
    }

    fn extract_background_color_argument(matches: &ArgMatches) -> Color {
        matches
            .get_one::<Color>("background_color")
            .copied()
            .expect("Required argument background color not provided")
    }

    fn extract_foreground_color_argument(matches: &ArgMatches) -> Color {
        matches
            .get_one::<Color>("foreground_color")
            .copied()
            .expect("Required argument foreground color not provided")
    }

    // Absence of the input or output file is only surfaced once the codec
    // tries to open the path, so both fall back to the empty path here.
    fn extract_input_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("input_file")
            .cloned()
            .unwrap_or_default()
    }

    fn extract_output_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("output_file")
            .cloned()
            .unwrap_or_default()
    }

    fn extract_output_color_argument(matches: &ArgMatches, foreground_color: Color) -> Color {
        matches
            .get_one::<Color>("output_color")
            .copied()
            .unwrap_or(foreground_color)
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use clap::{error::ErrorKind, Command};

    use super::{CLIParser, Color};

    const PROGRAM_NAME_ARGUMENT: &str = "test_program_name";

    #[test]
    fn parse_background_color_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_background_color_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "-b", "102030"]);
        let background_color = CLIParser::extract_background_color_argument(&matches);
        assert_eq!(
            background_color,
            Color {
                red: 0x10,
                green: 0x20,
                blue: 0x30
            }
        );
    }

    #[test]
    fn parse_background_color_illegal_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_background_color_argument(command);
        let result = command.try_get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "-b", "bogus!"]);
        if let Err(error) = result {
            assert_eq!(error.kind(), ErrorKind::ValueValidation);
        } else {
            panic!("Illegal value for background color not detected");
        }
    }

    #[test]
    fn parse_background_color_wrong_length_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_background_color_argument(command);
        let result = command.try_get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "-b", "fff"]);
        if let Err(error) = result {
            assert_eq!(error.kind(), ErrorKind::ValueValidation);
        } else {
            panic!("Hex color of wrong length not detected");
        }
    }

    #[test]
    fn parse_input_file_argument() {
        let input_file_name = "testfile.png";
        let command = Command::new("test");
        let command = CLIParser::register_input_file_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "-i", input_file_name]);
        let input_file = CLIParser::extract_input_file_argument(&matches);
        assert_eq!(input_file.file_name().unwrap(), input_file_name);
    }

    #[test]
    fn parse_missing_input_file_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_input_file_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT]);
        let input_file = CLIParser::extract_input_file_argument(&matches);
        assert_eq!(
            input_file.as_os_str().len(),
            0,
            "missing input file must fall back to the empty path"
        );
    }

    #[test]
    fn parse_missing_background_color_argument() {
        let mut cli_parser = CLIParser::default();
        let result = cli_parser.command.try_get_matches_from_mut(vec![
            PROGRAM_NAME_ARGUMENT,
            "-f",
            "ffffff",
        ]);
        if let Err(error) = result {
            assert_eq!(error.kind(), ErrorKind::MissingRequiredArgument);
        } else {
            panic!("Missing background color not detected");
        }
    }

    #[test]
    fn parse_output_color_defaults_to_foreground() {
        let mut cli_parser = CLIParser::default();
        let arguments = cli_parser.parse(vec![
            PROGRAM_NAME_ARGUMENT,
            "-b",
            "000000",
            "-f",
            "ffffff",
        ]);
        assert_eq!(
            arguments.output_color, arguments.foreground_color,
            "output color does not fall back to foreground color"
        );
    }

    #[test]
    fn parse_all_arguments() {
        let input_file_name = "inputfile.png";
        let input_file_path = format!("/input_directory/{}", input_file_name);
        let output_file_name = "outputfile.png";
        let output_file_path = format!("/output_directory/{}", output_file_name);
        let mut cli_parser = CLIParser::default();
        let arguments = cli_parser.parse(vec![
            PROGRAM_NAME_ARGUMENT,
            "-b",
            "ff0000",
            "-f",
            "ff00ff",
            "-i",
            &input_file_path,
            "-o",
            &output_file_path,
            "-c",
            "00ff00",
        ]);
        assert_eq!(
            arguments.input_file.file_name().unwrap(),
            input_file_name,
            "input file does not match"
        );
        assert_eq!(
            arguments.output_file.file_name().unwrap(),
            output_file_name,
            "output file does not match"
        );
        assert_eq!(
            arguments.background_color,
            Color {
                red: 0xff,
                green: 0x00,
                blue: 0x00
            },
            "background color does not match"
        );
        assert_eq!(
            arguments.foreground_color,
            Color {
                red: 0xff,
                green: 0x00,
                blue: 0xff
            },
            "foreground color does not match"
        );
        assert_eq!(
            arguments.output_color,
            Color {
                red: 0x00,
                green: 0xff,
                blue: 0x00
            },
            "output color does not match"
        );
    }
}
