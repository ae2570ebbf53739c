use std::io::Write;

use parsechipper::vocab::io::write_id_table;

use crate::{input_output::OutputArgs, vocab_args::VocabArgs};

/// Args for the dump command.
#[derive(clap::Args, Debug)]
pub struct DumpArgs {
    #[command(flatten)]
    vocab: VocabArgs,

    #[command(flatten)]
    output: OutputArgs,

    /// Prefix each spelling with its id, tab separated.
    #[arg(long)]
    with_ids: bool,
}

impl DumpArgs {
    /// Run the dump command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let vocab = self.vocab.load_vocab()?;
        let mut writer = self.output.open_writer()?;

        if self.with_ids {
            write_numbered(vocab.id_table(), &mut writer)?;
        } else {
            write_id_table(vocab.id_table(), &mut writer)?;
        }

        Ok(())
    }
}

fn write_numbered(
    id_table: &[String],
    writer: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    for (id, spelling) in id_table.iter().enumerate() {
        writeln!(writer, "{id}\t{spelling}")?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_numbered() {
        let table = ["NP", "VP", "_þt", "<UNK>"].map(String::from);

        let mut buf: Vec<u8> = Vec::new();
        write_numbered(&table, &mut buf).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "0\tNP\n1\tVP\n2\t_þt\n3\t<UNK>\n"
        );
    }
}
