use super::traits::WordListFile;
use serde::Deserialize;
use std::io::{self, BufRead};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WordListError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid JSON word list: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
    #[error("Word list contains no words")]
    Empty,
}

/// One word per line. Blank lines and lines starting with `#` are skipped.
pub struct PlainWordList;

impl WordListFile for PlainWordList {
    type Error = WordListError;

    fn read_from(reader: &mut impl BufRead) -> Result<Vec<String>, Self::Error> {
        let mut words = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            words.push(trimmed.to_string());
        }

        if words.is_empty() {
            return Err(WordListError::Empty);
        }
        Ok(words)
    }
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum JsonEntry {
    Word(String),
    Record {
        #[serde(alias = "nome")]
        word: String,
    },
}

impl JsonEntry {
    fn into_word(self) -> String {
        match self {
            JsonEntry::Word(word) | JsonEntry::Record { word } => word,
        }
    }
}

/// A JSON array of either bare strings or `{ "word": ... }` records.
///
/// The `nome` key is accepted as an alias for `word`; any other keys, such as a `desc`
/// list of clues, are ignored.
pub struct JsonWordList;

impl WordListFile for JsonWordList {
    type Error = WordListError;

    fn read_from(reader: &mut impl BufRead) -> Result<Vec<String>, Self::Error> {
        let entries: Vec<JsonEntry> = serde_json::from_reader(reader)?;
        let words: Vec<String> = entries
            .into_iter()
            .map(JsonEntry::into_word)
            .map(|word| word.trim().to_string())
            .filter(|word| !word.is_empty())
            .collect();

        if words.is_empty() {
            return Err(WordListError::Empty);
        }
        Ok(words)
    }
}

/// Reads a word list, picking the format from the file extension (`.json` or plain text).
pub fn read_word_list(path: &Path) -> Result<Vec<String>, WordListError> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        JsonWordList::read_from_path(path)
    } else {
        PlainWordList::read_from_path(path)
    }
}
