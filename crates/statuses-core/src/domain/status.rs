//! StatusDescriptor - デフォルト適用済みのステータス
//!
//! 生の [`StatusDefinition`] に built-in のデフォルトを重ねた結果を保持します。
//! 構築後は読み取り専用として扱います。
//!
//! # 構築の順序（後のステップが前を上書き）
//! 1. フィールドのコピー
//! 2. built-in テーブルの参照（labels / dashicon の置き換え、未指定項目のデフォルト）
//! 3. `label` / `label_count` スロットの再設定
//! 4. `metabox_dropdown` の fallback
//! 5. `inline_dropdown` の fallback
//!
//! # 注意
//! ステップ 2 は labels を丸ごと置き換えます。built-in 名に対して呼び出し側が
//! 渡した独自スロットは、ここで失われます。

use serde::Serialize;
use serde_json::{Map, Value};

use crate::ports::{PostTypeRegistry, Translator};

use super::builtin::{BuiltinStatus, DEFAULT_DASHICON};
use super::definition::StatusDefinition;
use super::labels::{INLINE_DROPDOWN, LABEL, LABEL_COUNT, METABOX_DROPDOWN, StatusLabels};

/// Serialized names of descriptor attributes. These never pass through `extra`,
/// so the merged value is the only one in the output. `_builtin` is set by the
/// registration layer only.
const DESCRIPTOR_FIELDS: &[&str] = &[
    "label",
    "label_count",
    "labels",
    "exclude_from_search",
    "_builtin",
    "public",
    "internal",
    "protected",
    "private",
    "publicly_queryable",
    "post_type",
    "show_in_admin_status_list",
    "show_in_admin_all_list",
    "show_in_metabox_dropdown",
    "show_in_inline_dropdown",
    "dashicon",
];

/// A post status with defaults applied, ready for the admin UI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusDescriptor {
    pub label: Option<String>,
    pub label_count: Option<String>,
    pub labels: StatusLabels,
    pub exclude_from_search: Option<bool>,

    #[serde(rename = "_builtin")]
    builtin: bool,

    #[serde(rename = "public")]
    pub is_public: Option<bool>,
    #[serde(rename = "internal")]
    pub is_internal: Option<bool>,
    #[serde(rename = "protected")]
    pub is_protected: Option<bool>,
    #[serde(rename = "private")]
    pub is_private: Option<bool>,
    #[serde(rename = "publicly_queryable")]
    pub is_publicly_queryable: Option<bool>,

    #[serde(rename = "post_type")]
    pub post_types: Vec<String>,

    pub show_in_admin_status_list: Option<bool>,
    pub show_in_admin_all_list: Option<bool>,
    pub show_in_metabox_dropdown: Option<bool>,
    pub show_in_inline_dropdown: Option<bool>,

    pub dashicon: String,

    /// Fields of the raw definition this crate has no attribute for.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for StatusDescriptor {
    fn default() -> Self {
        Self {
            label: None,
            label_count: None,
            labels: StatusLabels::new(),
            exclude_from_search: None,
            builtin: false,
            is_public: None,
            is_internal: None,
            is_protected: None,
            is_private: None,
            is_publicly_queryable: None,
            post_types: Vec::new(),
            show_in_admin_status_list: None,
            show_in_admin_all_list: None,
            show_in_metabox_dropdown: None,
            show_in_inline_dropdown: None,
            dashicon: DEFAULT_DASHICON.to_string(),
            extra: Map::new(),
        }
    }
}

impl StatusDescriptor {
    /// Builds a descriptor from a raw definition.
    ///
    /// Never fails: an unknown or empty `name` only skips the built-in defaults.
    pub fn from_definition<P, T>(raw: &StatusDefinition, post_types: &P, translator: &T) -> Self
    where
        P: PostTypeRegistry + ?Sized,
        T: Translator + ?Sized,
    {
        let mut descriptor = Self::copy_fields(raw);

        if let Some(builtin) = BuiltinStatus::from_name(&raw.name) {
            tracing::debug!(status = %builtin, "applying built-in status defaults");
            descriptor.labels = builtin.labels(translator);
            descriptor.dashicon = builtin.dashicon().to_string();

            if raw.post_types.is_none() {
                descriptor.post_types = post_types.registered_post_types();
            }
            if raw.show_in_metabox_dropdown.is_none() {
                descriptor.show_in_metabox_dropdown = Some(true);
            }
            if raw.show_in_inline_dropdown.is_none() {
                descriptor.show_in_inline_dropdown = Some(true);
            }
        }

        descriptor.labels.set(LABEL, descriptor.label.clone());
        descriptor.labels.set(LABEL_COUNT, descriptor.label_count.clone());

        let label = descriptor.labels.slot(LABEL).cloned().flatten();
        descriptor.labels.set_if_empty(METABOX_DROPDOWN, label.clone());
        if descriptor.show_in_inline_dropdown == Some(true) {
            descriptor.labels.set_if_empty(INLINE_DROPDOWN, label);
        }

        descriptor
    }

    fn copy_fields(raw: &StatusDefinition) -> Self {
        let extra = raw
            .extra
            .iter()
            .filter(|(key, _)| !DESCRIPTOR_FIELDS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Self {
            label: raw.label.clone(),
            label_count: raw.label_count.clone(),
            labels: raw.labels.clone().unwrap_or_default(),
            exclude_from_search: raw.exclude_from_search,
            builtin: false,
            is_public: raw.is_public,
            is_internal: raw.is_internal,
            is_protected: raw.is_protected,
            is_private: raw.is_private,
            is_publicly_queryable: raw.is_publicly_queryable,
            post_types: raw.post_types.clone().unwrap_or_default(),
            show_in_admin_status_list: raw.show_in_admin_status_list,
            show_in_admin_all_list: raw.show_in_admin_all_list,
            show_in_metabox_dropdown: raw.show_in_metabox_dropdown,
            show_in_inline_dropdown: raw.show_in_inline_dropdown,
            dashicon: raw
                .dashicon
                .clone()
                .unwrap_or_else(|| DEFAULT_DASHICON.to_string()),
            extra,
        }
    }

    /// Whether the host flagged this status as one of its own.
    /// The merge never sets it.
    pub fn is_builtin(&self) -> bool {
        self.builtin
    }
}
