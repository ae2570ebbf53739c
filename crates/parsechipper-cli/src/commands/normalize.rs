use std::io::{BufRead, Write};

use parsechipper::NormalizationVersion;

use crate::input_output::{InputArgs, OutputArgs};

/// Args for the normalize command.
#[derive(clap::Args, Debug)]
pub struct NormalizeArgs {
    /// Normalization version; "1" or "2".
    #[arg(long, default_value_t = NormalizationVersion::V1)]
    version: NormalizationVersion,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl NormalizeArgs {
    /// Run the normalize command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        normalize_lines(self.version, &mut reader, &mut writer)
    }
}

fn normalize_lines(
    version: NormalizationVersion,
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    for line in reader.lines() {
        writeln!(writer, "{}", version.preprocess_word(&line?))?;
    }
    writer.flush()?;
    Ok(())
}
