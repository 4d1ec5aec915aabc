const SENTENCE_TERMINALS: [char; 5] = ['。', '！', '？', '!', '?'];

fn is_terminal(c: char) -> bool {
    SENTENCE_TERMINALS.contains(&c)
}

/// Sentence around the character `offset` of `text` that contains `word`.
///
/// The sentence runs from the previous terminal punctuation mark to the next
/// one, inclusive. If that span is empty or misses the word, the first line
/// containing the word is used instead. A line holding nothing but the word
/// yields an empty string.
pub fn extract_sentence(text: &str, offset: usize, word: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let offset = offset.min(chars.len());

    let mut start = offset;
    while start > 0 && !is_terminal(chars[start - 1]) {
        start -= 1;
    }

    let mut end = offset;
    while end < chars.len() && !is_terminal(chars[end]) {
        end += 1;
    }
    if end < chars.len() {
        end += 1;
    }

    let span: String = chars[start..end].iter().collect();
    let sentence = span.trim();
    if !sentence.is_empty() && sentence.contains(word) {
        return sentence.to_string();
    }

    let line = text.lines().find(|l| l.contains(word)).unwrap_or(text).trim();
    if line == word {
        String::new()
    } else {
        line.to_string()
    }
}

/// Index of the first line of `text` mentioning `word`
pub fn find_line(text: &str, word: &str) -> Option<usize> {
    if word.is_empty() {
        return None;
    }
    text.lines().position(|l| l.contains(word))
}
