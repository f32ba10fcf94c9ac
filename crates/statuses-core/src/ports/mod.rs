//! Ports - 外部システムへの抽象化レイヤー
//!
//! descriptor の構築は、ホスト側の 2 つの機能に依存します。
//! - 登録済み post type の一覧
//! - 翻訳済み文字列の取得
//!
//! どちらも trait として定義し、実装は impls に置きます。

pub mod post_types;
pub mod translator;

pub use self::post_types::PostTypeRegistry;
pub use self::translator::Translator;
