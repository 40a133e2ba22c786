use std::collections::HashSet;

mod dictionary_api;
mod related_words_api;
mod word;

pub use dictionary_api::{
    normalize, RawDefinition, RawDocument, RawEntry, RawFailure, RawMeaning, RawPhonetic,
};
pub use related_words_api::Relation;
pub use word::{Word, NOT_AVAILABLE};

/// Transport or decode failure while talking to one of the upstream APIs.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("failed to reach the service: {0}")]
    Fetch(#[source] reqwest::Error),
    #[error("failed to decode the response: {0}")]
    Decode(#[source] reqwest::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The primary source had no usable entry for this word. Transport
    /// failures on the primary collapse into this as well, the caller
    /// only ever has one failure to present.
    #[error("can't find the meaning of {word:?}")]
    NotFound { word: String },
}

impl LookupError {
    pub(crate) fn not_found(word: &str) -> Self {
        LookupError::NotFound {
            word: word.to_owned(),
        }
    }
}

pub struct Dictionary {
    client: reqwest::Client,
    entries_endpoint: String,
    relations_endpoint: String,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::with_endpoints(
            dictionary_api::DICTIONARY_API_URL,
            related_words_api::RELATED_WORDS_API_URL,
        )
    }

    /// Points the client at different base URLs, mostly useful for tests
    /// and self-hosted mirrors.
    pub fn with_endpoints(
        entries_endpoint: impl Into<String>,
        relations_endpoint: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            entries_endpoint: entries_endpoint.into(),
            relations_endpoint: relations_endpoint.into(),
        }
    }

    /// Looks a word up and returns its normalized card.
    ///
    /// Every failure on the primary source maps to [`LookupError::NotFound`].
    /// The relation fallbacks only run for sets the entry left empty, and a
    /// failed fallback leaves its set empty instead of failing the lookup.
    pub async fn lookup(&self, word: &str) -> Result<Word, LookupError> {
        let document = self.fetch_entry(word).await.map_err(|error| {
            tracing::debug!("primary lookup for {word:?} failed: {error}");
            LookupError::not_found(word)
        })?;
        let mut normalized = normalize(document, word)?;

        let (synonyms, antonyms) = futures::join!(
            self.fallback_words(word, Relation::Synonym, normalized.synonyms.is_empty()),
            self.fallback_words(word, Relation::Antonym, normalized.antonyms.is_empty()),
        );
        normalized.synonyms.extend(synonyms);
        normalized.antonyms.extend(antonyms);
        Ok(normalized)
    }

    /// Raw primary-source document for a word, before normalization.
    pub async fn fetch_entry(&self, word: &str) -> Result<RawDocument, NetworkError> {
        dictionary_api::get_entries(&self.client, &self.entries_endpoint, word).await
    }

    /// Words related to `word` according to the fallback source.
    pub async fn related_words(
        &self,
        word: &str,
        relation: Relation,
    ) -> Result<HashSet<String>, NetworkError> {
        related_words_api::get_related_words(&self.client, &self.relations_endpoint, word, relation)
            .await
    }

    async fn fallback_words(
        &self,
        word: &str,
        relation: Relation,
        wanted: bool,
    ) -> HashSet<String> {
        if !wanted {
            return HashSet::new();
        }
        match self.related_words(word, relation).await {
            Ok(words) => words,
            Err(error) => {
                tracing::debug!("{relation:?} fallback for {word:?} failed: {error}");
                HashSet::new()
            }
        }
    }
}
