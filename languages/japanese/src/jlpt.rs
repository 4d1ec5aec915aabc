use std::collections::HashSet;

/// JLPT word lists, in file order
pub struct JlptLevels {
    words: Vec<(String, JlptLevel)>,
    seen: HashSet<String>,
}

impl JlptLevels {
    /// Create empty JLPT database
    pub fn new() -> Self {
        Self {
            words: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Small built-in list used when no level file is available
    pub fn with_defaults() -> Self {
        // N5 (beginner)
        let n5_words = [
            "日本", "人", "本", "先生", "学生", "学校", "時間", "今", "明日", "昨日", "一", "二", "三",
            "四", "五", "六", "七", "八", "九", "十",
        ];

        // N4 (elementary)
        let n4_words = [
            "勉強", "仕事", "会社", "時計", "電話", "手紙", "映画", "便利", "不便",
        ];

        // N3 (intermediate)
        let n3_words = [
            "経験", "研究", "発見", "意見", "説明", "計画", "準備", "確認", "複雑", "簡単", "重要",
        ];

        let mut levels = Self::new();
        for word in n5_words {
            levels.insert(word, JlptLevel::N5);
        }
        for word in n4_words {
            levels.insert(word, JlptLevel::N4);
        }
        for word in n3_words {
            levels.insert(word, JlptLevel::N3);
        }
        levels
    }

    /// Parse a `word<TAB>level` list. Lines without a recognizable level are skipped.
    pub fn from_tsv(content: &str) -> Self {
        let mut levels = Self::new();
        let mut skipped = 0usize;

        for line in content.lines().map(str::trim).filter(|l| !l.is_empty() && !l.starts_with('#')) {
            let mut parts = line.split('\t');
            let (Some(word), Some(level)) = (parts.next(), parts.next()) else {
                skipped += 1;
                continue;
            };
            match level.parse::<JlptLevel>() {
                Ok(level) if !word.trim().is_empty() => levels.insert(word.trim(), level),
                _ => skipped += 1,
            }
        }

        if skipped > 0 {
            tracing::debug!("Skipped {} unrecognized JLPT lines", skipped);
        }
        levels
    }

    /// Record a word; the first level seen for a word is kept
    pub fn insert(&mut self, word: &str, level: JlptLevel) {
        if !self.seen.insert(word.to_string()) {
            return;
        }
        self.words.push((word.to_string(), level));
    }

    /// `(word, tier)` pairs for a tier table, N5 being tier 1
    pub fn tier_pairs(&self) -> impl Iterator<Item = (String, u32)> + '_ {
        self.words.iter().map(|(word, level)| (word.clone(), level.tier()))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for JlptLevels {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum JlptLevel {
    N5, // Beginner
    N4, // Elementary
    N3, // Intermediate
    N2, // Upper intermediate
    N1, // Advanced
}

impl std::str::FromStr for JlptLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "N5" | "5" => Ok(JlptLevel::N5),
            "N4" | "4" => Ok(JlptLevel::N4),
            "N3" | "3" => Ok(JlptLevel::N3),
            "N2" | "2" => Ok(JlptLevel::N2),
            "N1" | "1" => Ok(JlptLevel::N1),
            other => Err(format!("unknown JLPT level '{other}'")),
        }
    }
}

impl JlptLevel {
    /// Highlight tier; easier levels get lower tiers so they win ties
    pub fn tier(&self) -> u32 {
        match self {
            JlptLevel::N5 => 1,
            JlptLevel::N4 => 2,
            JlptLevel::N3 => 3,
            JlptLevel::N2 => 4,
            JlptLevel::N1 => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tsv() {
        let levels = JlptLevels::from_tsv("# word\tlevel\n日本\tN5\n経験\tn3\n壊れた行\n重要\tN9\n日本\tN1\n");

        assert_eq!(levels.len(), 2);
        let pairs: Vec<(String, u32)> = levels.tier_pairs().collect();
        assert_eq!(pairs, vec![("日本".to_string(), 1), ("経験".to_string(), 3)]);
    }

    #[test]
    fn test_tier_pairs_keep_file_order() {
        let levels = JlptLevels::from_tsv("研究\tN3\n人\tN5\n");
        let pairs: Vec<(String, u32)> = levels.tier_pairs().collect();
        assert_eq!(pairs, vec![("研究".to_string(), 3), ("人".to_string(), 1)]);
    }

    #[test]
    fn test_defaults() {
        let levels = JlptLevels::with_defaults();
        assert!(levels.tier_pairs().any(|(word, tier)| word == "先生" && tier == 1));
        assert!(levels.tier_pairs().any(|(word, tier)| word == "経験" && tier == 3));
        assert_eq!(JlptLevel::N1.tier(), 5);
        assert_eq!("n2".parse::<JlptLevel>(), Ok(JlptLevel::N2));
    }
}
