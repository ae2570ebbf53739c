use std::io::Write;

use parsechipper::{
    SubtokenVocab,
    vocab::{IdSegment, TokenCategory},
};

use crate::vocab_args::VocabArgs;

/// Args for the inspect command.
#[derive(clap::Args, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    vocab: VocabArgs,
}

impl InspectArgs {
    /// Run the inspect command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let vocab = self.vocab.load_vocab()?;
        write_summary(&vocab, &mut std::io::stdout().lock())
    }
}

fn write_summary(
    vocab: &SubtokenVocab,
    writer: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    writeln!(writer, "version: {}", vocab.version())?;

    for segment in [IdSegment::Full, IdSegment::Head, IdSegment::Tail] {
        let range = vocab.segment_range(segment);
        writeln!(
            writer,
            "{segment}: {} tokens, ids [{}, {})",
            range.len(),
            range.start,
            range.end
        )?;
    }
    writeln!(writer, "oov_id: {}", vocab.oov_id())?;

    writeln!(writer, "nonterminals: {}", vocab.nonterminals().len())?;
    for category in [TokenCategory::NontermLeft, TokenCategory::NontermRight] {
        writeln!(
            writer,
            "  {category}: {}",
            vocab.category_tokens(category).len()
        )?;
    }
    writeln!(writer, "terminals: {}", vocab.terminals().len())?;

    Ok(())
}
