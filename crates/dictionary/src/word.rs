use std::collections::HashSet;

/// Placeholder for a definition or example the entry never supplied.
/// Empty strings coming from the API are skipped, not stored, so this
/// value is distinguishable from "present but empty".
pub const NOT_AVAILABLE: &str = "Not available";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub word: String,
    pub phonetic_text: String,
    pub part_of_speech: String,
    /// Pronunciation audio reference exactly as the API sent it. It may
    /// be protocol-relative; prefixing it with `https:` is up to the
    /// presentation side.
    pub audio_ref: String,
    pub definition: String,
    pub example: String,
    pub synonyms: HashSet<String>,
    pub antonyms: HashSet<String>,
}
