//! Translator port - ローカライズ済み文字列の解決

/// Translator は翻訳元の文字列と text domain から表示文字列を返す
///
/// # 契約
/// - 翻訳が無い場合は `text` をそのまま返す
/// - 失敗しない（表示文字列は常に得られる）
pub trait Translator: Send + Sync {
    fn translate(&self, text: &str, domain: &str) -> String;
}
