use std::{fs, path::PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use monopng::{generate_with_config, read_png, CompressionLevel, EncoderConfig, WIDTH_CEILING};

pub mod logger;

/// Packs raw monochrome bit streams into narrow 1-bit PNG files
#[derive(Parser, Debug)]
#[command(name = "monopng", version, about, long_about = None)]
pub struct Cli {
    /// Log every pipeline step
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode a raw bit stream file as a png
    Encode {
        input_file: PathBuf,
        output_file: PathBuf,

        #[arg(short, long, value_enum, default_value_t = Level::Best)]
        level: Level,

        /// Rows are kept narrower than this many bytes (8 pixels each)
        #[arg(short = 'w', long, default_value_t = WIDTH_CEILING)]
        max_width: usize,
    },
    /// Verify a png written by `encode` and print its layout
    Inspect { file: PathBuf },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Level {
    None,
    Fast,
    Default,
    Best,
}

impl From<Level> for CompressionLevel {
    fn from(value: Level) -> Self {
        match value {
            Level::None => CompressionLevel::None,
            Level::Fast => CompressionLevel::Fast,
            Level::Default => CompressionLevel::Default,
            Level::Best => CompressionLevel::Best,
        }
    }
}

#[derive(Debug)]
pub struct CliError(String);

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<monopng::PngError> for CliError {
    fn from(err: monopng::PngError) -> Self {
        Self(err.to_string())
    }
}

pub fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Encode {
            input_file,
            output_file,
            level,
            max_width,
        } => {
            let config = EncoderConfig::builder()
                .compression_level(level.into())
                .width_ceiling(max_width)
                .build()?;
            let data = fs::read(&input_file).map_err(|e| {
                CliError(format!("error reading input file {}: {e}", input_file.display()))
            })?;
            let png = generate_with_config(&data, &config)?;

            fs::write(&output_file, &png).map_err(|e| {
                CliError(format!("error writing output file {}: {e}", output_file.display()))
            })?;
            log::info!(
                "wrote {} ({} bytes from {} input bytes)",
                output_file.display(),
                png.len(),
                data.len()
            );
        }
        Command::Inspect { file } => {
            let bytes = fs::read(&file)
                .map_err(|e| CliError(format!("error reading {}: {e}", file.display())))?;
            let decoded = read_png(&bytes)?;
            let dimensions = decoded.scanlines.dimensions();

            println!("file:       {}", file.display());
            println!("pixels:     {}x{}", decoded.header.width, decoded.header.height);
            println!("row bytes:  {}", dimensions.width);
            println!("content:    {} bytes", dimensions.width * dimensions.height);
            println!("chunks:     {}", decoded.chunk_types.join(" "));
        }
    }

    Ok(())
}
