//! Word list sources: the bundled list and JSON files on disk.
//!
//! Structure:
//! - Constants: the bundled list and the default file location
//! - Pure functions: parsing
//! - Effect functions: reading files, resolving which source to use

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::WordListError;
use crate::types::{Word, WordList};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Directory under the platform config dir holding user word lists.
pub const APP_DIR: &str = "lingo-drill";

/// File name of the default user word list.
pub const WORDS_FILE: &str = "words.json";

/// The bundled practice list: (term, translation).
const BUILTIN_WORDS: &[(&str, &str)] = &[
    ("hello", "hola"),
    ("goodbye", "adiós"),
    ("house", "casa"),
    ("dog", "perro"),
    ("cat", "gato"),
    ("water", "agua"),
    ("bread", "pan"),
    ("book", "libro"),
    ("friend", "amigo"),
    ("thank you", "gracias"),
    ("please", "por favor"),
    ("good morning", "buenos días"),
    ("tree", "árbol"),
    ("city", "ciudad"),
    ("school", "escuela"),
    ("to eat", "comer"),
    ("to drink", "beber"),
    ("to speak", "hablar"),
    ("red", "rojo"),
    ("tomorrow", "mañana"),
];

impl WordList {
    /// The bundled list, used when no word file is configured.
    pub fn builtin() -> Self {
        WordList::from_trusted(
            BUILTIN_WORDS
                .iter()
                .map(|&(word, translation)| Word::new(word, translation))
                .collect(),
        )
    }
}

// ============================================================================
// PATHS
// ============================================================================

/// Default word list location: `<config dir>/lingo-drill/words.json`.
///
/// None when the platform has no config directory (rare; headless setups).
pub fn default_words_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(WORDS_FILE))
}

// ============================================================================
// PARSING
// ============================================================================

/// Parse a JSON array of `{"word", "wordTranslation"}` records.
///
/// `path` is only used to label errors.
pub fn parse_words(json: &str, path: &Path) -> Result<WordList, WordListError> {
    let words: Vec<Word> = serde_json::from_str(json).map_err(|source| WordListError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    WordList::new(words)
}

// ============================================================================
// LOADING
// ============================================================================

/// Read and parse a word list file.
pub fn load_words(path: &Path) -> Result<WordList, WordListError> {
    let contents = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_words(&contents, path)
}

/// Pick the word list for a session.
///
/// An explicit path must load. Without one, the default file is used if
/// present, else the bundled list.
pub fn resolve_words(explicit: Option<&Path>) -> Result<WordList, WordListError> {
    if let Some(path) = explicit {
        let words = load_words(path)?;
        log::info!("loaded {} words from {}", words.len(), path.display());
        return Ok(words);
    }

    resolve_from_default(default_words_path().as_deref())
}

fn resolve_from_default(default: Option<&Path>) -> Result<WordList, WordListError> {
    match default {
        Some(path) if path.is_file() => {
            let words = load_words(path)?;
            log::info!("loaded {} words from {}", words.len(), path.display());
            Ok(words)
        }
        _ => {
            log::debug!("no word file found, using bundled list");
            Ok(WordList::builtin())
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        let mut f = fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn builtin_list_is_usable() {
        let words = WordList::builtin();
        assert_eq!(words.len(), BUILTIN_WORDS.len());
        assert_eq!(words.get(0), Some(&Word::new("hello", "hola")));
    }

    #[test]
    fn builtin_list_passes_validation() {
        let words = WordList::builtin().as_slice().to_vec();
        assert_eq!(WordList::new(words).unwrap(), WordList::builtin());
    }

    #[test]
    fn default_path_ends_with_app_dir_and_file() {
        if let Some(path) = default_words_path() {
            assert!(path.ends_with(Path::new(APP_DIR).join(WORDS_FILE)));
        }
    }

    #[test]
    fn load_words_reads_camel_case_records() {
        let temp = TempDir::new().unwrap();
        let path = write_file(
            temp.path(),
            "words.json",
            r#"[{"word": "house", "wordTranslation": "Casa"},
                {"word": "dog", "wordTranslation": "perro"}]"#,
        );

        let words = load_words(&path).unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words.get(0).unwrap().word_translation, "Casa");
    }

    #[test]
    fn load_words_reports_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nope.json");
        match load_words(&path) {
            Err(WordListError::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn load_words_reports_malformed_json() {
        let temp = TempDir::new().unwrap();
        let path = write_file(temp.path(), "bad.json", r#"[{"word": "house"}]"#);
        assert!(matches!(load_words(&path), Err(WordListError::Parse { .. })));
    }

    #[test]
    fn load_words_rejects_empty_array() {
        let temp = TempDir::new().unwrap();
        let path = write_file(temp.path(), "empty.json", "[]");
        assert!(matches!(load_words(&path), Err(WordListError::Empty)));
    }

    #[test]
    fn explicit_path_errors_propagate() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.json");
        assert!(resolve_words(Some(&path)).is_err());
    }

    #[test]
    fn missing_default_falls_back_to_builtin() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(WORDS_FILE);
        let words = resolve_from_default(Some(&path)).unwrap();
        assert_eq!(words, WordList::builtin());
    }

    #[test]
    fn present_default_is_loaded() {
        let temp = TempDir::new().unwrap();
        let path = write_file(
            temp.path(),
            WORDS_FILE,
            r#"[{"word": "sun", "wordTranslation": "sol"}]"#,
        );
        let words = resolve_from_default(Some(&path)).unwrap();
        assert_eq!(words.len(), 1);
    }

    #[test]
    fn no_config_dir_falls_back_to_builtin() {
        assert_eq!(resolve_from_default(None).unwrap(), WordList::builtin());
    }
}
