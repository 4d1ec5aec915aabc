use std::collections::HashSet;

use regex::Regex;

#[derive(Debug, thiserror::Error)]
pub enum MarkupError {
    #[error("Invalid class prefix '{0}': use ASCII letters, digits, '-' or '_'")]
    InvalidPrefix(String),
}

/// Inline span shape `<span class="P-highlight P-level-N">word</span>` for a class prefix `P`
#[derive(Debug, Clone)]
pub struct Markup {
    prefix: String,
    span: Regex,
}

impl Markup {
    pub fn new(prefix: &str) -> Result<Self, MarkupError> {
        let valid = !prefix.is_empty()
            && prefix
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(MarkupError::InvalidPrefix(prefix.to_string()));
        }

        let p = regex::escape(prefix);
        let span = Regex::new(&format!(
            r#"<span class="{p}-highlight {p}-level-(\d+)">([^<>]*)</span>"#
        ))
        .expect("escaped prefix always compiles");

        Ok(Self {
            prefix: prefix.to_string(),
            span,
        })
    }

    pub fn wrap(&self, word: &str, tier: u32) -> String {
        format!(
            r#"<span class="{p}-highlight {p}-level-{tier}">{word}</span>"#,
            p = self.prefix
        )
    }

    /// Innermost highlight spans; group 1 is the tier, group 2 the content
    pub(crate) fn span_pattern(&self) -> &Regex {
        &self.span
    }

    /// Strip highlight spans until none are left.
    ///
    /// One pass only removes innermost spans, so nested wrappers left behind
    /// by earlier runs need repeated passes.
    pub fn clear(&self, text: &str) -> String {
        let mut current = text.to_string();
        loop {
            let next = self.span.replace_all(&current, "$2").into_owned();
            if next == current {
                return current;
            }
            current = next;
        }
    }

    /// Contents of the highlight spans already present in `text`
    pub fn marked_words(&self, text: &str) -> HashSet<String> {
        self.span
            .captures_iter(text)
            .filter_map(|caps| caps.get(2))
            .map(|m| m.as_str().to_string())
            .filter(|w| !w.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_and_clear() {
        let markup = Markup::new("hsk").unwrap();
        let wrapped = markup.wrap("语言", 2);
        assert_eq!(wrapped, r#"<span class="hsk-highlight hsk-level-2">语言</span>"#);
        assert_eq!(markup.clear(&format!("学{wrapped}。")), "学语言。");
    }

    #[test]
    fn test_clear_unwraps_nested_spans() {
        let markup = Markup::new("hsk").unwrap();
        let nested = format!("a{}b", markup.wrap(&markup.wrap(&markup.wrap("词", 1), 2), 3));
        assert_eq!(markup.clear(&nested), "a词b");
    }

    #[test]
    fn test_clear_is_idempotent_and_leaves_other_markup() {
        let markup = Markup::new("jlpt").unwrap();
        let text = format!(
            "{} <span class=\"note\">x</span> {}",
            markup.wrap("日本", 1),
            Markup::new("hsk").unwrap().wrap("中", 1)
        );
        let once = markup.clear(&text);
        assert_eq!(once, markup.clear(&once));
        assert!(once.starts_with("日本 <span class=\"note\">x</span>"));
        assert!(once.contains("hsk-level-1"));
    }

    #[test]
    fn test_marked_words() {
        let markup = Markup::new("hsk").unwrap();
        let text = format!("{}和{}", markup.wrap("我", 1), markup.wrap("你", 2));
        let words = markup.marked_words(&text);
        assert_eq!(words.len(), 2);
        assert!(words.contains("我") && words.contains("你"));
    }

    #[test]
    fn test_rejects_bad_prefix() {
        assert!(Markup::new("").is_err());
        assert!(Markup::new("a b").is_err());
        assert!(Markup::new("x\"y").is_err());
        assert!(Markup::new("my-tier_1").is_ok());
    }
}
