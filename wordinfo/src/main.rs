use std::collections::HashSet;

use dictionary::{Dictionary, LookupError, Word};
use utilities::input;

mod utilities;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("Type any existing word to get meaning, example, synonyms, and antonyms.");
    let dict = Dictionary::new();
    loop {
        let line = input(">> ")?;
        let line = line.trim();
        let mut command_parts = line.split_ascii_whitespace();
        let Some(command) = command_parts.next() else {
            continue;
        };
        match command {
            "exit" | "quit" | "q" => {
                break;
            }
            "define" | "find" => {
                let word = command_parts.collect::<Vec<&str>>().join(" ");
                if word.is_empty() {
                    println!("Usage: define <word>");
                } else {
                    define_word(&dict, &word).await;
                }
            }
            _ => {
                define_word(&dict, line).await;
            }
        }
    }
    Ok(())
}

async fn define_word(dict: &Dictionary, word: &str) {
    println!("Searching the meaning of \"{word}\"...");
    match dict.lookup(word).await {
        Ok(card) => print_card(&card),
        Err(LookupError::NotFound { word }) => {
            println!("Can't find the meaning of \"{word}\". Please try another word.");
        }
    }
}

const DISPLAYED_RELATION_LIMIT: usize = 5;

fn print_card(card: &Word) {
    println!("{}", card.word);
    println!("    {} /{}/", card.part_of_speech, card.phonetic_text);
    println!("    Meaning: {}", card.definition);
    println!("    Example: {}", card.example);
    if !card.synonyms.is_empty() {
        println!("    Synonyms: {}", capped_list(&card.synonyms));
    }
    if !card.antonyms.is_empty() {
        println!("    Antonyms: {}", capped_list(&card.antonyms));
    }
    if let Some(url) = playable_audio_url(&card.audio_ref) {
        println!("    Pronunciation: {url}");
    }
}

fn capped_list(words: &HashSet<String>) -> String {
    let mut words = words.iter().map(String::as_str).collect::<Vec<&str>>();
    words.sort_unstable();
    words.truncate(DISPLAYED_RELATION_LIMIT);
    words.join(", ")
}

/// Audio refs can come protocol-relative from the dictionary, a player
/// only accepts them with the https prefix attached.
fn playable_audio_url(audio_ref: &str) -> Option<String> {
    if audio_ref.is_empty() {
        None
    } else if audio_ref.starts_with("http") {
        Some(audio_ref.to_owned())
    } else {
        Some(format!("https:{audio_ref}"))
    }
}
