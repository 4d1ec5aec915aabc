use crate::highlighter::apply_tiers;
use crate::markup::Markup;
use crate::tiers::TierTable;

/// Editable document the highlighter rewrites in place
pub trait TextBuffer {
    fn text(&self) -> String;
    fn set_text(&mut self, text: String);
}

impl TextBuffer for String {
    fn text(&self) -> String {
        self.clone()
    }

    fn set_text(&mut self, text: String) {
        *self = text;
    }
}

/// Highlight the buffer contents; returns whether the buffer changed
pub fn highlight_buffer<B: TextBuffer + ?Sized>(
    buffer: &mut B,
    tiers: &TierTable,
    markup: &Markup,
    target_tier: Option<u32>,
) -> bool {
    let current = buffer.text();
    let updated = apply_tiers(&current, tiers, markup, target_tier);
    replace_if_changed(buffer, current, updated)
}

/// Remove every highlight span from the buffer; returns whether the buffer changed
pub fn clear_buffer<B: TextBuffer + ?Sized>(buffer: &mut B, markup: &Markup) -> bool {
    let current = buffer.text();
    let updated = markup.clear(&current);
    replace_if_changed(buffer, current, updated)
}

fn replace_if_changed<B: TextBuffer + ?Sized>(buffer: &mut B, current: String, updated: String) -> bool {
    if updated == current {
        return false;
    }
    buffer.set_text(updated);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Buffer that counts writes, like an editor document would see them
    #[derive(Default)]
    struct Document {
        body: String,
        writes: usize,
    }

    impl TextBuffer for Document {
        fn text(&self) -> String {
            self.body.clone()
        }

        fn set_text(&mut self, text: String) {
            self.body = text;
            self.writes += 1;
        }
    }

    #[test]
    fn test_highlight_then_clear_restores_document() {
        let markup = Markup::new("hsk").unwrap();
        let tiers = TierTable::from_pairs([("中国", 1), ("人", 2)]);
        let mut doc = Document {
            body: "我是中国人".to_string(),
            writes: 0,
        };

        assert!(highlight_buffer(&mut doc, &tiers, &markup, None));
        assert!(doc.body.contains("hsk-level-1"));
        assert!(clear_buffer(&mut doc, &markup));
        assert_eq!(doc.body, "我是中国人");
        assert_eq!(doc.writes, 2);
    }

    #[test]
    fn test_unchanged_buffer_is_not_written() {
        let markup = Markup::new("hsk").unwrap();
        let mut doc = Document {
            body: "没有".to_string(),
            writes: 0,
        };

        assert!(!highlight_buffer(&mut doc, &TierTable::new(), &markup, None));
        assert!(!clear_buffer(&mut doc, &markup));
        assert_eq!(doc.writes, 0);
    }

    #[test]
    fn test_string_buffer() {
        let markup = Markup::new("jlpt").unwrap();
        let tiers = TierTable::from_pairs([("日本", 5)]);
        let mut text = String::from("日本語");
        highlight_buffer(&mut text, &tiers, &markup, Some(5));
        assert_eq!(text, format!("{}語", markup.wrap("日本", 5)));
    }
}
