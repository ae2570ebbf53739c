use std::io::Write;

use parsechipper::{SubtokenVocab, vocab::IdSegment};

use crate::vocab_args::VocabArgs;

/// Args for the lookup command.
#[derive(clap::Args, Debug)]
pub struct LookupArgs {
    #[command(flatten)]
    vocab: VocabArgs,

    /// Id segment of the looked up tokens; "full", "head", or "tail".
    #[arg(long, default_value_t = IdSegment::Full)]
    segment: IdSegment,

    /// Tokens to look up; each is normalized first.
    #[arg(long = "token")]
    tokens: Vec<String>,

    /// Ids to spell.
    #[arg(long = "id")]
    ids: Vec<u32>,
}

impl LookupArgs {
    /// Run the lookup command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        if self.tokens.is_empty() && self.ids.is_empty() {
            return Err("nothing to look up; pass --token or --id".into());
        }

        let vocab = self.vocab.load_vocab()?;
        let mut writer = std::io::stdout().lock();

        write_token_ids(&vocab, self.segment, &self.tokens, &mut writer)?;
        write_id_spellings(&vocab, &self.ids, &mut writer)?;

        Ok(())
    }
}

fn write_token_ids(
    vocab: &SubtokenVocab,
    segment: IdSegment,
    tokens: &[String],
    writer: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    for token in tokens {
        let word = vocab.preprocess_word(token);
        let id = vocab.token_id_or_oov(segment, &word);
        writeln!(writer, "{word}\t{id}")?;
    }
    Ok(())
}

fn write_id_spellings(
    vocab: &SubtokenVocab,
    ids: &[u32],
    writer: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    for &id in ids {
        match vocab.token_str(id) {
            Some(spelling) => writeln!(writer, "{id}\t{spelling}")?,
            None => {
                log::warn!("id {id} is past the oov id {}", vocab.oov_id());
                writeln!(writer, "{id}\t")?;
            }
        }
    }
    Ok(())
}
