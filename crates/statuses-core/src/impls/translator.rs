//! Translator 実装
//!
//! - IdentityTranslator: テストや翻訳不要な環境向け
//! - CatalogTranslator: メモリ上の翻訳テーブル（JSON から読み込み可能）

use std::collections::HashMap;

use crate::domain::StatusError;
use crate::ports::Translator;

/// Returns the source text unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

impl Translator for IdentityTranslator {
    fn translate(&self, text: &str, _domain: &str) -> String {
        text.to_string()
    }
}

/// In-memory message catalog keyed by text domain and source text.
///
/// Unknown entries fall back to the source text.
#[derive(Debug, Clone, Default)]
pub struct CatalogTranslator {
    entries: HashMap<String, HashMap<String, String>>,
}

impl CatalogTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_translation(
        mut self,
        domain: impl Into<String>,
        source: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        self.insert(domain, source, translation);
        self
    }

    pub fn insert(
        &mut self,
        domain: impl Into<String>,
        source: impl Into<String>,
        translation: impl Into<String>,
    ) {
        self.entries
            .entry(domain.into())
            .or_default()
            .insert(source.into(), translation.into());
    }

    /// Loads `{ "<source>": "<translation>", ... }` into `domain`.
    pub fn from_json_str(domain: &str, json: &str) -> Result<Self, StatusError> {
        let messages: HashMap<String, String> = serde_json::from_str(json)?;
        let mut catalog = Self::new();
        catalog.entries.insert(domain.to_string(), messages);
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Translator for CatalogTranslator {
    fn translate(&self, text: &str, domain: &str) -> String {
        self.entries
            .get(domain)
            .and_then(|messages| messages.get(text))
            .cloned()
            .unwrap_or_else(|| text.to_string())
    }
}
