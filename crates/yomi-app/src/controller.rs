use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use yomi_config::Config;
use yomi_core::{LanguageProcessor, lookup_at, render_tooltip};
use yomi_highlight::{Markup, TierTable, clear_buffer, highlight_buffer};
use yomi_vocab::{Storage, VocabStore, export_csv, export_flashcards, extract_sentence, find_line};

use crate::cli::{Command, ExportFormat};
use crate::download::ReqwestFetcher;
use crate::state::{Session, build_markup, build_processor, open_tiers, open_vocab};

/// Run one CLI command and print its result
pub async fn run(command: Command, config: Config) -> anyhow::Result<()> {
    let output = match command {
        Command::Transliterate { reading } => transliterate(&*build_processor(&config)?, &reading),
        Command::Clear { file } => {
            let changed = clear_file(&file, &build_markup(&config)?)?;
            file_status(&file, changed)
        }
        Command::Vocab { note } => {
            let note = match note {
                Some(path) => Some(read_note(&path)?),
                None => None,
            };
            list_vocab(&open_vocab(&config), note.as_deref())
        }
        Command::Export { format, out } => {
            let tags = config.vocab.flashcard_tags.clone();
            let count = export(&open_vocab(&config), format, &out, &tags)?;
            format!("Exported {} words to {}", count, out.display())
        }
        Command::Lookup { text, offset } => lookup(&open_session(config).await?, &text, offset),
        Command::Save { text, offset } => save(&open_session(config).await?, &text, offset)?,
        Command::Highlight { file, tier } => {
            let markup = build_markup(&config)?;
            let tiers = open_tiers(&config, &fetcher(&config)?).await;
            let changed = highlight_file(&file, &tiers, &markup, tier)?;
            file_status(&file, changed)
        }
    };

    println!("{output}");
    Ok(())
}

fn fetcher(config: &Config) -> anyhow::Result<ReqwestFetcher> {
    ReqwestFetcher::new(Duration::from_secs(config.network.timeout_seconds))
}

async fn open_session(config: Config) -> anyhow::Result<Session> {
    let fetcher = fetcher(&config)?;
    Session::open(config, &fetcher).await
}

fn read_note(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn file_status(path: &Path, changed: bool) -> String {
    if changed {
        format!("Updated {}", path.display())
    } else {
        format!("{} unchanged", path.display())
    }
}

/// Tooltip for the word at `offset`, or a notice when nothing matches
pub fn lookup(session: &Session, text: &str, offset: usize) -> String {
    let processor = session.processor.as_ref();
    let max_len = session.config.dictionary.max_word_length;

    match lookup_at(&*session.dictionary, text, offset, max_len, |c| processor.is_lookup_char(c)) {
        Some(result) => render_tooltip(&result, processor),
        None => "No match".to_string(),
    }
}

pub fn transliterate(processor: &dyn LanguageProcessor, reading: &str) -> String {
    let display = processor.transliterate(reading);
    format!("{}\n{}", display.reading, display.transliteration)
}

/// Highlight a note file in place; returns whether it changed
pub fn highlight_file(path: &Path, tiers: &TierTable, markup: &Markup, tier: Option<u32>) -> anyhow::Result<bool> {
    let mut text = read_note(path)?;
    if !highlight_buffer(&mut text, tiers, markup, tier) {
        return Ok(false);
    }
    fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(true)
}

/// Strip highlight spans from a note file in place; returns whether it changed
pub fn clear_file(path: &Path, markup: &Markup) -> anyhow::Result<bool> {
    let mut text = read_note(path)?;
    if !clear_buffer(&mut text, markup) {
        return Ok(false);
    }
    fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(true)
}

/// Save the word at `offset`, with its sentence when sentence saving is on
pub fn save(session: &Session, text: &str, offset: usize) -> anyhow::Result<String> {
    let processor = session.processor.as_ref();
    let max_len = session.config.dictionary.max_word_length;

    let Some(result) = lookup_at(&*session.dictionary, text, offset, max_len, |c| processor.is_lookup_char(c))
    else {
        return Ok("No match".to_string());
    };

    let sentence = session
        .config
        .vocab
        .save_sentences
        .then(|| extract_sentence(text, offset, &result.word));

    let outcome = session
        .vocab
        .upsert(&result.word, &result.entries, sentence.as_deref())
        .context("Failed to save word")?;

    let message = if outcome.created {
        format!("Added {} to vocab list!", result.word)
    } else if outcome.sentence_added {
        format!("Added new sentence to {}.", result.word)
    } else {
        format!("{} is already in your vocab list.", result.word)
    };
    Ok(message)
}

/// One line per saved word; with a note, only words in it and where they first occur
pub fn list_vocab<S: Storage>(store: &VocabStore<S>, note: Option<&str>) -> String {
    let entries = match note {
        Some(text) => store.entries_in_text(text),
        None => store.load(),
    };

    if entries.is_empty() {
        return "No vocab yet.".to_string();
    }

    entries
        .iter()
        .map(|entry| {
            let mut line = format!("{} [{}] {}", entry.headword, entry.reading, entry.definitions.join("; "));
            let position = note.and_then(|text| {
                find_line(text, &entry.headword).or_else(|| find_line(text, &entry.alt_headword))
            });
            if let Some(index) = position {
                line.push_str(&format!(" (line {})", index + 1));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write an export of the vocab list; returns the number of exported words
pub fn export<S: Storage>(
    store: &VocabStore<S>,
    format: ExportFormat,
    out: &Path,
    tags: &[String],
) -> anyhow::Result<usize> {
    let entries = store.load();
    if entries.is_empty() {
        tracing::warn!("Vocab list is empty, exporting an empty deck");
    }

    let content = match format {
        ExportFormat::Flashcards => export_flashcards(&entries, tags),
        ExportFormat::Csv => export_csv(&entries),
    };
    fs::write(out, content).with_context(|| format!("Failed to write {}", out.display()))?;

    Ok(entries.len())
}
