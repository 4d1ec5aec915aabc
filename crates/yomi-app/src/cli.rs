use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use yomi_config::Language;

#[derive(Parser, Debug)]
#[command(name = "yomi", about = "Dictionary lookups, tier highlighting and vocab lists for Chinese and Japanese text", version)]
pub struct Cli {
    /// JSON profile to use instead of environment defaults.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Reading language: zh or ja.
    #[arg(long, global = true)]
    pub language: Option<Language>,

    /// Directory holding the dictionary, tier list and vocab list.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show dictionary entries for the word starting at a character offset.
    Lookup {
        text: String,
        /// Character offset of the hovered character.
        #[arg(short, long, default_value_t = 0)]
        offset: usize,
    },
    /// Print the display forms of a raw reading.
    Transliterate { reading: String },
    /// Wrap tier words of a note in highlight spans.
    Highlight {
        file: PathBuf,
        /// Only apply this tier and keep existing highlights.
        #[arg(long)]
        tier: Option<u32>,
    },
    /// Remove all highlight spans from a note.
    Clear { file: PathBuf },
    /// Save the word at a character offset to the vocab list.
    Save {
        text: String,
        #[arg(short, long, default_value_t = 0)]
        offset: usize,
    },
    /// List saved words.
    Vocab {
        /// Only list words that occur in this note.
        #[arg(long)]
        note: Option<PathBuf>,
    },
    /// Export the vocab list.
    Export {
        #[arg(value_enum)]
        format: ExportFormat,
        out: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Flashcard deck note (`word::definitions`).
    Flashcards,
    /// Anki-importable CSV.
    Csv,
}
