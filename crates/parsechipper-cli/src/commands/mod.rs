mod dump;
mod inspect;
mod lookup;
mod normalize;

/// Subcommands for pchipper
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Summarize the categories and id ranges of a vocabulary.
    Inspect(inspect::InspectArgs),

    /// Write the id table of a vocabulary.
    Dump(dump::DumpArgs),

    /// Look up token ids, or id spellings.
    Lookup(lookup::LookupArgs),

    /// Normalize words, one per line.
    Normalize(normalize::NormalizeArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Inspect(cmd) => cmd.run(),
            Commands::Dump(cmd) => cmd.run(),
            Commands::Lookup(cmd) => cmd.run(),
            Commands::Normalize(cmd) => cmd.run(),
        }
    }
}
