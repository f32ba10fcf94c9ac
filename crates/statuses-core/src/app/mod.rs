//! App - アプリケーション層
//!
//! ports を組み合わせて、定義の一覧から descriptor を組み立てます。
//!
//! # 主要コンポーネント
//! - **ResolverBuilder**: ports のワイヤリング
//! - **StatusResolver**: 定義 → descriptor の解決

pub mod resolver;

pub use self::resolver::{ResolverBuilder, StatusResolver};
