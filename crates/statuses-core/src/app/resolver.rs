//! StatusResolver - ports を保持して descriptor を組み立てる
//!
//! # 使用例
//! ```ignore
//! let resolver = ResolverBuilder::new()
//!     .post_types(StaticPostTypes::new(["post", "page"]))
//!     .translator(IdentityTranslator)
//!     .build();
//!
//! let statuses = resolver.resolve_all(&definitions)?;
//! ```

use std::collections::BTreeMap;

use crate::domain::{StatusDefinition, StatusDescriptor, StatusError};
use crate::impls::{IdentityTranslator, StaticPostTypes};
use crate::ports::{PostTypeRegistry, Translator};

/// ResolverBuilder は StatusResolver を構築
///
/// # デフォルト
/// - post types: 空（登録なし）
/// - translator: IdentityTranslator
pub struct ResolverBuilder {
    post_types: Box<dyn PostTypeRegistry>,
    translator: Box<dyn Translator>,
}

impl ResolverBuilder {
    pub fn new() -> Self {
        Self {
            post_types: Box::new(StaticPostTypes::default()),
            translator: Box::new(IdentityTranslator),
        }
    }

    pub fn post_types(mut self, post_types: impl PostTypeRegistry + 'static) -> Self {
        self.post_types = Box::new(post_types);
        self
    }

    pub fn translator(mut self, translator: impl Translator + 'static) -> Self {
        self.translator = Box::new(translator);
        self
    }

    pub fn build(self) -> StatusResolver {
        StatusResolver {
            post_types: self.post_types,
            translator: self.translator,
        }
    }
}

impl Default for ResolverBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// StatusResolver は定義から descriptor を作る
///
/// 呼び出し間で状態を共有しないので、同じ定義からは常に同じ結果になります
/// （post type registry の内容が変わらない限り）。
pub struct StatusResolver {
    post_types: Box<dyn PostTypeRegistry>,
    translator: Box<dyn Translator>,
}

impl StatusResolver {
    pub fn resolve(&self, definition: &StatusDefinition) -> StatusDescriptor {
        StatusDescriptor::from_definition(
            definition,
            self.post_types.as_ref(),
            self.translator.as_ref(),
        )
    }

    /// Resolves a batch, keyed by status name.
    ///
    /// A name appearing twice is rejected instead of silently replacing the first.
    pub fn resolve_all(
        &self,
        definitions: &[StatusDefinition],
    ) -> Result<BTreeMap<String, StatusDescriptor>, StatusError> {
        let mut resolved = BTreeMap::new();
        for definition in definitions {
            if resolved.contains_key(&definition.name) {
                return Err(StatusError::DuplicateStatus(definition.name.clone()));
            }
            resolved.insert(definition.name.clone(), self.resolve(definition));
        }
        tracing::debug!(count = resolved.len(), "resolved post statuses");
        Ok(resolved)
    }
}
