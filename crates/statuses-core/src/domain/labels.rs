//! StatusLabels - ラベルスロットのマッピング
//!
//! Dropdown / metabox / list-table など UI ごとの表示文字列を保持します。
//! 既知のスロット以外にも、呼び出し側が定義したスロットをそのまま保持します。

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Singular label slot (mirrors `StatusDescriptor::label`).
pub const LABEL: &str = "label";

/// Counted label slot (mirrors `StatusDescriptor::label_count`).
pub const LABEL_COUNT: &str = "label_count";

/// Publishing metabox dropdown slot.
pub const METABOX_DROPDOWN: &str = "metabox_dropdown";

/// List-table inline/bulk edit dropdown slot.
pub const INLINE_DROPDOWN: &str = "inline_dropdown";

/// StatusLabels は slot 名 → 表示文字列のマッピング
///
/// # スロットの「存在」と「値」
/// - key が存在すれば、そのスロットは設定済み
/// - 値は `None` になりうる（`label` 未指定のステータスなど）
///
/// fallback 判定では、値が `None` のスロットは未設定として扱います。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusLabels(BTreeMap<String, Option<String>>);

impl StatusLabels {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Whether the slot exists, regardless of its value.
    pub fn is_set(&self, slot: &str) -> bool {
        self.0.contains_key(slot)
    }

    /// Text of a slot. `None` both when the slot is missing and when it holds no text.
    pub fn get(&self, slot: &str) -> Option<&str> {
        self.0.get(slot).and_then(|value| value.as_deref())
    }

    /// Raw slot lookup, keeping "missing" and "present without text" apart.
    pub fn slot(&self, slot: &str) -> Option<&Option<String>> {
        self.0.get(slot)
    }

    pub fn set(&mut self, slot: impl Into<String>, value: Option<String>) {
        self.0.insert(slot.into(), value);
    }

    /// Sets the slot unless it already holds text.
    /// A slot that exists with no text is overwritten.
    pub fn set_if_empty(&mut self, slot: &str, value: Option<String>) {
        if self.get(slot).is_none() {
            self.0.insert(slot.to_string(), value);
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn slots(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StatusLabels {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(slot, text)| (slot.into(), Some(text.into())))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_without_text_is_still_set() {
        let mut labels = StatusLabels::new();
        labels.set(LABEL, None);

        assert!(labels.is_set(LABEL));
        assert_eq!(labels.get(LABEL), None);
        assert_eq!(labels.slot(LABEL), Some(&None));
        assert_eq!(labels.slot(LABEL_COUNT), None);
    }

    #[test]
    fn set_if_empty_keeps_existing_text() {
        let mut labels: StatusLabels = [(METABOX_DROPDOWN, "Custom")].into_iter().collect();
        labels.set_if_empty(METABOX_DROPDOWN, Some("Other".to_string()));
        labels.set_if_empty(INLINE_DROPDOWN, Some("Inline".to_string()));

        assert_eq!(labels.get(METABOX_DROPDOWN), Some("Custom"));
        assert_eq!(labels.get(INLINE_DROPDOWN), Some("Inline"));
    }

    #[test]
    fn set_if_empty_fills_slot_without_text() {
        let mut labels = StatusLabels::new();
        labels.set(METABOX_DROPDOWN, None);
        labels.set_if_empty(METABOX_DROPDOWN, Some("Archived".to_string()));

        assert_eq!(labels.get(METABOX_DROPDOWN), Some("Archived"));
    }

    #[test]
    fn custom_slots_survive_json() {
        let json = r#"{ "label": "Archived", "tooltip": "Old posts", "label_count": null }"#;
        let labels: StatusLabels = serde_json::from_str(json).expect("deserialize");

        assert_eq!(labels.len(), 3);
        assert_eq!(labels.get("tooltip"), Some("Old posts"));
        assert!(labels.is_set(LABEL_COUNT));
        assert_eq!(
            labels.slots().collect::<Vec<_>>(),
            vec!["label", "label_count", "tooltip"]
        );
    }
}
