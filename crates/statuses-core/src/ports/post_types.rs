//! PostTypeRegistry port - 登録済み post type の問い合わせ

/// PostTypeRegistry はホストに登録されている post type を返す
///
/// built-in ステータスが `post_type` を指定しなかった場合の
/// デフォルト値としてのみ使われます。
pub trait PostTypeRegistry: Send + Sync {
    /// 呼び出し時点で登録されている post type の識別子
    fn registered_post_types(&self) -> Vec<String>;
}
