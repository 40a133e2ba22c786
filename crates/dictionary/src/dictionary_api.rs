// https://dictionaryapi.dev/ - free, no key, english entries only

use std::collections::HashSet;

use serde::Deserialize;

use crate::word::{Word, NOT_AVAILABLE};
use crate::{LookupError, NetworkError};

pub(crate) const DICTIONARY_API_URL: &'static str =
    "https://api.dictionaryapi.dev/api/v2/entries/en";

/// The primary API answers with either an array of entry candidates or a
/// single error document carrying a `title` (its "no definitions" shape).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawDocument {
    Entries(Vec<RawEntry>),
    Failure(RawFailure),
}

#[derive(Debug, Deserialize)]
pub struct RawFailure {
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub resolution: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawEntry {
    pub word: Option<String>,
    #[serde(default)]
    pub phonetics: Vec<RawPhonetic>,
    #[serde(default)]
    pub meanings: Vec<RawMeaning>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawPhonetic {
    pub text: Option<String>,
    pub audio: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMeaning {
    pub part_of_speech: Option<String>,
    #[serde(default)]
    pub definitions: Vec<RawDefinition>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawDefinition {
    pub definition: Option<String>,
    pub example: Option<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

pub(crate) async fn get_entries(
    client: &reqwest::Client,
    endpoint: &str,
    word: &str,
) -> Result<RawDocument, NetworkError> {
    let res = client
        .get(format!("{endpoint}/{word}"))
        .send()
        .await
        .map_err(NetworkError::Fetch)?;
    res.json::<RawDocument>().await.map_err(NetworkError::Decode)
}

/// Flattens the first entry candidate into a display-ready [`Word`].
///
/// The definition and the example are picked independently: the scan
/// takes the first non-empty definition text and the first non-empty
/// example text anywhere in the entry, which may come from different
/// definitions. Multiple entry candidates are not disambiguated, the
/// first one wins.
pub fn normalize(document: RawDocument, query: &str) -> Result<Word, LookupError> {
    let entries = match document {
        RawDocument::Entries(entries) => entries,
        RawDocument::Failure(_) => return Err(LookupError::not_found(query)),
    };
    let Some(entry) = entries.into_iter().next() else {
        return Err(LookupError::not_found(query));
    };

    let phonetic_text = entry
        .phonetics
        .iter()
        .find_map(|phonetic| non_empty(phonetic.text.as_deref()))
        .unwrap_or_default();
    let audio_ref = entry
        .phonetics
        .iter()
        .find_map(|phonetic| non_empty(phonetic.audio.as_deref()))
        .unwrap_or_default();
    let part_of_speech = entry
        .meanings
        .first()
        .and_then(|meaning| non_empty(meaning.part_of_speech.as_deref()))
        .unwrap_or_default();

    let mut definition = None;
    let mut example = None;
    let mut synonyms = HashSet::new();
    let mut antonyms = HashSet::new();
    for meaning in &entry.meanings {
        synonyms.extend(meaning.synonyms.iter().cloned());
        antonyms.extend(meaning.antonyms.iter().cloned());
        for candidate in &meaning.definitions {
            if definition.is_none() {
                definition = non_empty(candidate.definition.as_deref());
            }
            if example.is_none() {
                example = non_empty(candidate.example.as_deref());
            }
            synonyms.extend(candidate.synonyms.iter().cloned());
            antonyms.extend(candidate.antonyms.iter().cloned());
        }
    }

    Ok(Word {
        word: non_empty(entry.word.as_deref()).unwrap_or_else(|| query.to_owned()),
        phonetic_text,
        part_of_speech,
        audio_ref,
        definition: definition.unwrap_or_else(|| NOT_AVAILABLE.to_owned()),
        example: example.unwrap_or_else(|| NOT_AVAILABLE.to_owned()),
        synonyms,
        antonyms,
    })
}

fn non_empty(text: Option<&str>) -> Option<String> {
    text.filter(|text| !text.is_empty()).map(str::to_owned)
}
