use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Ordered substring rewrite table.
///
/// Rules are applied longest pattern first, each one globally, so multi-letter
/// initials and finals are consumed before the single letters inside them.
/// When a pattern is registered twice the first replacement is kept.
#[derive(Debug, Clone)]
pub struct ReplacementTable {
    rules: Vec<(&'static str, &'static str)>,
}

impl ReplacementTable {
    pub fn new(pairs: &[(&'static str, &'static str)]) -> Self {
        let mut seen = HashSet::new();
        let mut rules: Vec<_> = pairs
            .iter()
            .copied()
            .filter(|(pattern, _)| !pattern.is_empty() && seen.insert(*pattern))
            .collect();

        // stable: equal lengths keep registration order
        rules.sort_by(|a, b| b.0.chars().count().cmp(&a.0.chars().count()));

        Self { rules }
    }

    pub fn apply(&self, input: &str) -> String {
        self.rules
            .iter()
            .fold(input.to_lowercase(), |acc, (pattern, replacement)| {
                acc.replace(pattern, replacement)
            })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Pinyin → zhuyin (bopomofo)
const ZHUYIN_RULES: &[(&str, &str)] = &[
    // apical vowel syllables: the initial alone spells the syllable
    ("zhi", "ㄓ"),
    ("chi", "ㄔ"),
    ("shi", "ㄕ"),
    ("ri", "ㄖ"),
    ("zi", "ㄗ"),
    ("ci", "ㄘ"),
    ("si", "ㄙ"),
    // y- and w- spellings
    ("yi", "ㄧ"),
    ("ya", "ㄧㄚ"),
    ("ye", "ㄧㄝ"),
    ("yao", "ㄧㄠ"),
    ("you", "ㄧㄡ"),
    ("yan", "ㄧㄢ"),
    ("yin", "ㄧㄣ"),
    ("yang", "ㄧㄤ"),
    ("ying", "ㄧㄥ"),
    ("yong", "ㄩㄥ"),
    ("yu", "ㄩ"),
    ("yue", "ㄩㄝ"),
    ("yuan", "ㄩㄢ"),
    ("yun", "ㄩㄣ"),
    ("wu", "ㄨ"),
    ("wa", "ㄨㄚ"),
    ("wo", "ㄨㄛ"),
    ("wai", "ㄨㄞ"),
    ("wei", "ㄨㄟ"),
    ("wan", "ㄨㄢ"),
    ("wen", "ㄨㄣ"),
    ("wang", "ㄨㄤ"),
    ("weng", "ㄨㄥ"),
    // j/q/x write ü as u
    ("ju", "ㄐㄩ"),
    ("qu", "ㄑㄩ"),
    ("xu", "ㄒㄩ"),
    ("jue", "ㄐㄩㄝ"),
    ("que", "ㄑㄩㄝ"),
    ("xue", "ㄒㄩㄝ"),
    ("juan", "ㄐㄩㄢ"),
    ("quan", "ㄑㄩㄢ"),
    ("xuan", "ㄒㄩㄢ"),
    ("jun", "ㄐㄩㄣ"),
    ("qun", "ㄑㄩㄣ"),
    ("xun", "ㄒㄩㄣ"),
    // initials
    ("zh", "ㄓ"),
    ("ch", "ㄔ"),
    ("sh", "ㄕ"),
    ("b", "ㄅ"),
    ("p", "ㄆ"),
    ("m", "ㄇ"),
    ("f", "ㄈ"),
    ("d", "ㄉ"),
    ("t", "ㄊ"),
    ("n", "ㄋ"),
    ("l", "ㄌ"),
    ("g", "ㄍ"),
    ("k", "ㄎ"),
    ("h", "ㄏ"),
    ("j", "ㄐ"),
    ("q", "ㄑ"),
    ("x", "ㄒ"),
    ("r", "ㄖ"),
    ("z", "ㄗ"),
    ("c", "ㄘ"),
    ("s", "ㄙ"),
    // finals
    ("iang", "ㄧㄤ"),
    ("iong", "ㄩㄥ"),
    ("uang", "ㄨㄤ"),
    ("ueng", "ㄨㄥ"),
    ("iao", "ㄧㄠ"),
    ("ian", "ㄧㄢ"),
    ("ing", "ㄧㄥ"),
    ("uai", "ㄨㄞ"),
    ("uan", "ㄨㄢ"),
    ("u:an", "ㄩㄢ"),
    ("üan", "ㄩㄢ"),
    ("u:e", "ㄩㄝ"),
    ("u:n", "ㄩㄣ"),
    ("ang", "ㄤ"),
    ("eng", "ㄥ"),
    ("ong", "ㄨㄥ"),
    ("ai", "ㄞ"),
    ("ei", "ㄟ"),
    ("ao", "ㄠ"),
    ("ou", "ㄡ"),
    ("an", "ㄢ"),
    ("en", "ㄣ"),
    ("er", "ㄦ"),
    ("ia", "ㄧㄚ"),
    ("ie", "ㄧㄝ"),
    ("iu", "ㄧㄡ"),
    ("in", "ㄧㄣ"),
    ("ua", "ㄨㄚ"),
    ("uo", "ㄨㄛ"),
    ("ui", "ㄨㄟ"),
    ("un", "ㄨㄣ"),
    ("üe", "ㄩㄝ"),
    ("ün", "ㄩㄣ"),
    ("u:", "ㄩ"),
    ("a", "ㄚ"),
    ("o", "ㄛ"),
    ("e", "ㄜ"),
    ("ê", "ㄝ"),
    ("i", "ㄧ"),
    ("u", "ㄨ"),
    ("ü", "ㄩ"),
    // erhua suffix syllable; after `er` so `er5` is not split
    ("r5", "ㄦ˙"),
    // tones: first tone is unmarked
    ("1", ""),
    ("2", "ˊ"),
    ("3", "ˇ"),
    ("4", "ˋ"),
    ("5", "˙"),
];

static ZHUYIN: Lazy<ReplacementTable> = Lazy::new(|| ReplacementTable::new(ZHUYIN_RULES));

/// `zhong1` → `ㄓㄨㄥ`, `shi4` → `ㄕˋ`
pub fn to_zhuyin(syllable: &str) -> String {
    ZHUYIN.apply(syllable)
}
