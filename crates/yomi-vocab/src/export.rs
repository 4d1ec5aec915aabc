use crate::entry::VocabEntry;

/// Flashcard deck note: one `#tag` line per tag, a blank line, then
/// `headword::definitions` cards separated by blank lines
pub fn export_flashcards(entries: &[VocabEntry], tags: &[String]) -> String {
    let cards: Vec<String> = entries
        .iter()
        .map(|e| format!("{}::{}", e.headword, e.definitions.join("; ")))
        .collect();

    if tags.is_empty() {
        return cards.join("\n\n");
    }

    let header: String = tags.iter().map(|tag| format!("#{tag}\n")).collect();
    format!("{header}\n{}", cards.join("\n\n"))
}

/// Anki-importable `headword;"definitions"` records separated by blank lines
pub fn export_csv(entries: &[VocabEntry]) -> String {
    entries
        .iter()
        .map(|e| {
            let defs = e.definitions.join("; ").replace('"', "\"\"");
            format!("{};\"{}\"", e.headword, defs)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
