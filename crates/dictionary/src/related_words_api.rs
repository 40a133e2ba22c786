// https://www.datamuse.com/api/ - rel_syn/rel_ant lookups, no key needed

use std::collections::HashSet;

use serde::Deserialize;

use crate::NetworkError;

pub(crate) const RELATED_WORDS_API_URL: &'static str = "https://api.datamuse.com/words";

/// Relation code understood by the related-words API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Synonym,
    Antonym,
}

impl Relation {
    pub(crate) fn query_key(self) -> &'static str {
        match self {
            Relation::Synonym => "rel_syn",
            Relation::Antonym => "rel_ant",
        }
    }
}

#[derive(Debug, Deserialize)]
struct RelatedWord {
    word: String,
}

pub(crate) async fn get_related_words(
    client: &reqwest::Client,
    endpoint: &str,
    word: &str,
    relation: Relation,
) -> Result<HashSet<String>, NetworkError> {
    let res = client
        .get(endpoint)
        .query(&[(relation.query_key(), word)])
        .send()
        .await
        .map_err(NetworkError::Fetch)?;
    let related = res
        .json::<Vec<RelatedWord>>()
        .await
        .map_err(NetworkError::Decode)?;
    Ok(related.into_iter().map(|related| related.word).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relation_query_keys() {
        assert_eq!(Relation::Synonym.query_key(), "rel_syn");
        assert_eq!(Relation::Antonym.query_key(), "rel_ant");
    }
}
