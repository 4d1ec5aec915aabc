use std::sync::Arc;

use anyhow::Context;
use yomi_config::{Config, Language};
use yomi_core::{DictionaryTable, FieldLayout, LanguageProcessor, LineGrammar};
use yomi_highlight::{Markup, TierTable};
use yomi_lang_chinese::ChineseProcessor;
use yomi_lang_japanese::JapaneseProcessor;
use yomi_vocab::{FsStorage, VocabStore};

use crate::download::{Fetcher, ensure_file};
use crate::loader::{load_dictionary, load_tiers};

/// Everything a lookup or save needs: the read-only dictionary plus the vocab store
pub struct Session {
    pub config: Config,
    pub processor: Box<dyn LanguageProcessor>,
    pub dictionary: Arc<DictionaryTable>,
    pub vocab: VocabStore<FsStorage>,
}

impl Session {
    /// Fetch the dictionary if it is missing, then load it and the vocab list.
    ///
    /// An unreadable dictionary aborts; a vocab list that cannot be created only warns.
    pub async fn open(config: Config, fetcher: &dyn Fetcher) -> anyhow::Result<Self> {
        let processor = build_processor(&config)?;

        let dictionary_path = config.dictionary_path();
        ensure_file(fetcher, &dictionary_path, config.dictionary.download_url(config.language)).await;

        let dictionary = load_dictionary(
            &dictionary_path,
            &config.additional_dictionary_paths(),
            processor.line_grammar(),
        )
        .context("Failed to load dictionary")?;

        let vocab = open_vocab(&config);

        Ok(Self {
            config,
            processor,
            dictionary: Arc::new(dictionary),
            vocab,
        })
    }
}

/// Language processor for the configured language, honoring a custom line pattern
pub fn build_processor(config: &Config) -> anyhow::Result<Box<dyn LanguageProcessor>> {
    let custom = config.dictionary.line_pattern.as_deref();

    let processor: Box<dyn LanguageProcessor> = match (config.language, custom) {
        (Language::Zh, None) => Box::new(ChineseProcessor::new()),
        (Language::Ja, None) => Box::new(JapaneseProcessor::new()),
        (Language::Zh, Some(pattern)) => {
            let grammar = LineGrammar::new(pattern, FieldLayout::HeadwordVariants)
                .context("Invalid dictionary line pattern")?;
            Box::new(ChineseProcessor::with_grammar(grammar))
        }
        (Language::Ja, Some(pattern)) => {
            let grammar = LineGrammar::new(pattern, FieldLayout::ReadingBlocks)
                .context("Invalid dictionary line pattern")?;
            Box::new(JapaneseProcessor::with_grammar(grammar))
        }
    };

    Ok(processor)
}

/// Tier list for the configured language, downloaded first if it is missing
pub async fn open_tiers(config: &Config, fetcher: &dyn Fetcher) -> TierTable {
    let tier_path = config.tier_path();
    ensure_file(fetcher, &tier_path, config.highlight.download_url(config.language)).await;
    load_tiers(&tier_path)
}

pub fn build_markup(config: &Config) -> anyhow::Result<Markup> {
    Markup::new(config.highlight.class_prefix(config.language)).context("Invalid highlight class prefix")
}

/// Vocab store in the data directory; the list file is created on first use
pub fn open_vocab(config: &Config) -> VocabStore<FsStorage> {
    let vocab = VocabStore::new(FsStorage, config.vocab_path());
    if let Err(e) = vocab.ensure_exists() {
        tracing::warn!("Failed to create vocab list: {}", e);
    }
    vocab
}
