//! # Vocabulary IO
//!
//! Vocabulary sources are UTF-8 text, one token per line.
//! The compiled id table is written in the same format, one spelling per id.

use std::{
    fs::File,
    io::{BufRead, BufWriter, Read, Write},
    path::Path,
};

use crate::errors::{PCResult, ParsechipperError};

/// Split text into lines.
///
/// `"\n"`, `"\r\n"` and a lone `"\r"` all end a line; a final terminator
/// does not start a new, empty line.
pub fn split_vocab_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        match rest.find(['\r', '\n']) {
            Some(idx) => {
                lines.push(rest[..idx].to_string());
                let width = if rest[idx..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[idx + width..];
            }
            None => {
                lines.push(rest.to_string());
                break;
            }
        }
    }
    lines
}

/// Read the lines of a vocabulary source.
///
/// Line terminators are removed; no other processing is done.
///
/// ## Arguments
/// * `reader` - the source reader.
pub fn read_vocab_lines<R: BufRead>(mut reader: R) -> PCResult<Vec<String>> {
    let mut text = String::new();
    Read::read_to_string(&mut reader, &mut text)?;
    Ok(split_vocab_lines(&text))
}

/// Read the lines of a vocabulary file.
///
/// ## Arguments
/// * `path` - the path to the vocabulary file.
///
/// ## Returns
/// [`ParsechipperError::VocabRead`] if the file can't be opened or read.
pub fn load_vocab_lines_path<P: AsRef<Path>>(path: P) -> PCResult<Vec<String>> {
    let path = path.as_ref();
    let read_err = |source| ParsechipperError::VocabRead {
        path: path.to_path_buf(),
        source,
    };

    let text = std::fs::read_to_string(path).map_err(read_err)?;
    Ok(split_vocab_lines(&text))
}

/// Write an id table to a [`Write`] writer; one spelling per line, in id order.
///
/// ## Arguments
/// * `id_table` - the spellings, indexed by id.
/// * `writer` - the target.
pub fn write_id_table<S, W>(
    id_table: &[S],
    writer: &mut W,
) -> PCResult<()>
where
    S: AsRef<str>,
    W: Write,
{
    for spelling in id_table {
        writeln!(writer, "{}", spelling.as_ref())?;
    }
    writer.flush()?;
    Ok(())
}

/// Save an id table to a file.
///
/// ## Arguments
/// * `id_table` - the spellings, indexed by id.
/// * `path` - the path to save the table to.
pub fn save_id_table_path<S: AsRef<str>, P: AsRef<Path>>(
    id_table: &[S],
    path: P,
) -> PCResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    write_id_table(id_table, &mut writer)
}
