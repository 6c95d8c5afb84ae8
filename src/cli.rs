use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;

/// AST to WAV converter
#[derive(Parser, Debug)]
#[command(name = "astwav")]
#[command(version)]
#[command(about = "Converts AST streaming-audio containers to WAV", long_about = None)]
pub struct Cli {
    /// Input .ast file, or a directory of .ast files
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output .wav file or directory (defaults next to the input)
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// How many times to repeat the loop region
    #[arg(value_name = "LOOPS", default_value_t = 1)]
    pub loops: u32,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve the output file path for single-file mode.
    ///
    /// Defaults to the input path with a `.wav` extension; an explicit
    /// output given without an extension gets `.wav` appended.
    pub fn resolve_output_file(&self) -> Result<PathBuf> {
        if self.input.extension().map_or(true, |ext| ext != "ast") {
            anyhow::bail!("{} is not an .ast file", self.input.display());
        }
        let path = match &self.output {
            Some(out) if out.extension().is_some() => out.clone(),
            Some(out) => out.with_extension("wav"),
            None => self.input.with_extension("wav"),
        };
        Ok(path)
    }

    /// Resolve the output directory for batch mode.
    ///
    /// Defaults to a sibling of the input directory named
    /// `<input>_converted`.
    pub fn resolve_output_dir(&self) -> PathBuf {
        match &self.output {
            Some(out) => out.clone(),
            None => default_converted_dir(&self.input),
        }
    }
}

fn default_converted_dir(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Converted".to_string());
    input.with_file_name(format!("{}_converted", name))
}
