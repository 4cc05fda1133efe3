// ═══════════════════════════════════════════════════════════════════════
// Catalog — loads the monster and explore decks from a JSON document
// ═══════════════════════════════════════════════════════════════════════

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::types::Card;

/// Catalog file looked up in the working directory when none is given.
pub const DEFAULT_CATALOG_PATH: &str = "cards.json";

#[derive(Debug, Error)]
pub enum LoadError {
    /// Opening or reading failed. `path` is `None` when reading from a bare reader.
    #[error("reading {}: {source}", origin(path.as_deref()))]
    SourceUnavailable {
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing catalog: {0}")]
    DecodeError(#[from] serde_json::Error),
}

fn origin(path: Option<&Path>) -> String {
    match path {
        Some(p) => p.display().to_string(),
        None => "catalog reader".to_string(),
    }
}

/// Top-level layout of the catalog document. Both decks are optional.
#[derive(Debug, Default, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    monsters: Vec<Card>,
    #[serde(default, alias = "explorables")]
    explore: Vec<Card>,
}

/// Every card in the catalog, monsters first, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    cards: Vec<Card>,
}

impl Catalog {
    /// Read and decode the catalog file at `path`. The file is closed before returning.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::SourceUnavailable {
            path: Some(path.to_path_buf()),
            source,
        })?;
        Self::read_source(BufReader::new(file), Some(path))
    }

    /// Decode a catalog from any reader. Read failures surface as `SourceUnavailable`.
    pub fn from_reader(reader: impl Read) -> Result<Self, LoadError> {
        Self::read_source(reader, None)
    }

    // Read fully first so I/O failures are not reported as decode failures.
    fn read_source(mut reader: impl Read, path: Option<&Path>) -> Result<Self, LoadError> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|source| LoadError::SourceUnavailable {
                path: path.map(Path::to_path_buf),
                source,
            })?;
        drop(reader);

        log::debug!("read {} bytes from {}", bytes.len(), origin(path));
        let doc: CatalogDocument = serde_json::from_slice(&bytes)?;
        Ok(Self::from_document(doc))
    }

    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let doc: CatalogDocument = serde_json::from_str(json)?;
        Ok(Self::from_document(doc))
    }

    fn from_document(doc: CatalogDocument) -> Self {
        log::debug!(
            "catalog decoded: {} monsters, {} explore cards",
            doc.monsters.len(),
            doc.explore.len()
        );
        let mut cards = doc.monsters;
        cards.extend(doc.explore);
        Catalog { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl From<Vec<Card>> for Catalog {
    fn from(cards: Vec<Card>) -> Self {
        Catalog { cards }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
