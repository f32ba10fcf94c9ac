//! Impls - ports の実装
//!
//! # 含まれる実装
//! - **StaticPostTypes**: 固定リストの post type registry
//! - **IdentityTranslator**: 翻訳元の文字列をそのまま返す
//! - **CatalogTranslator**: (text domain, 翻訳元) → 翻訳 のテーブル

pub mod post_types;
pub mod translator;

pub use self::post_types::StaticPostTypes;
pub use self::translator::{CatalogTranslator, IdentityTranslator};
