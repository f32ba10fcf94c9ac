//! statuses-core
//!
//! Post status descriptors for the admin layer of a content-management system.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（labels, definition, builtin, status, errors）
//! - **ports**: 抽象化レイヤー（PostTypeRegistry, Translator）
//! - **impls**: ports の実装（StaticPostTypes, IdentityTranslator, CatalogTranslator）
//! - **app**: アプリケーション層（ResolverBuilder, StatusResolver）

pub mod app;
pub mod domain;
pub mod impls;
pub mod ports;

pub use app::{ResolverBuilder, StatusResolver};
pub use domain::{
    BuiltinStatus, StatusDefinition, StatusDescriptor, StatusError, StatusLabels,
    definitions_from_json_str,
};
