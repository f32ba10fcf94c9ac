//! Built-in statuses shipped by the host system.
//!
//! Each one carries its own dropdown labels and dashicon. Labels are stored as
//! translation source text and resolved through a [`Translator`] on demand.

use std::fmt;

use crate::ports::Translator;

use super::labels::{INLINE_DROPDOWN, METABOX_DROPDOWN, StatusLabels};

/// Text domain used for every built-in label lookup.
pub const TEXT_DOMAIN: &str = "wp-statuses";

/// Icon used when neither the caller nor a built-in entry provides one.
pub const DEFAULT_DASHICON: &str = "dashicons-post-status";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinStatus {
    Publish,
    Private,
    Pending,
    Draft,
}

struct BuiltinEntry {
    metabox_dropdown: &'static str,
    inline_dropdown: Option<&'static str>,
    dashicon: &'static str,
}

impl BuiltinStatus {
    pub const ALL: [BuiltinStatus; 4] = [
        BuiltinStatus::Publish,
        BuiltinStatus::Private,
        BuiltinStatus::Pending,
        BuiltinStatus::Draft,
    ];

    /// Exact, case-sensitive match. Empty or unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "publish" => Some(BuiltinStatus::Publish),
            "private" => Some(BuiltinStatus::Private),
            "pending" => Some(BuiltinStatus::Pending),
            "draft" => Some(BuiltinStatus::Draft),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BuiltinStatus::Publish => "publish",
            BuiltinStatus::Private => "private",
            BuiltinStatus::Pending => "pending",
            BuiltinStatus::Draft => "draft",
        }
    }

    fn entry(self) -> BuiltinEntry {
        match self {
            BuiltinStatus::Publish => BuiltinEntry {
                metabox_dropdown: "Publicly published",
                inline_dropdown: Some("Published"),
                dashicon: "dashicons-visibility",
            },
            BuiltinStatus::Private => BuiltinEntry {
                metabox_dropdown: "Privately Published",
                inline_dropdown: Some("Private"),
                dashicon: "dashicons-hidden",
            },
            BuiltinStatus::Pending => BuiltinEntry {
                metabox_dropdown: "Pending Review",
                inline_dropdown: None,
                dashicon: "dashicons-flag",
            },
            BuiltinStatus::Draft => BuiltinEntry {
                metabox_dropdown: "Draft",
                inline_dropdown: None,
                dashicon: "dashicons-edit",
            },
        }
    }

    /// Source text of the metabox dropdown label (untranslated).
    pub fn metabox_dropdown(self) -> &'static str {
        self.entry().metabox_dropdown
    }

    /// Source text of the inline dropdown label, if the entry defines one.
    pub fn inline_dropdown(self) -> Option<&'static str> {
        self.entry().inline_dropdown
    }

    pub fn dashicon(self) -> &'static str {
        self.entry().dashicon
    }

    /// The entry's label slots, translated under [`TEXT_DOMAIN`].
    pub fn labels<T: Translator + ?Sized>(self, translator: &T) -> StatusLabels {
        let entry = self.entry();
        let mut labels = StatusLabels::new();
        labels.set(
            METABOX_DROPDOWN,
            Some(translator.translate(entry.metabox_dropdown, TEXT_DOMAIN)),
        );
        if let Some(inline) = entry.inline_dropdown {
            labels.set(INLINE_DROPDOWN, Some(translator.translate(inline, TEXT_DOMAIN)));
        }
        labels
    }
}

impl fmt::Display for BuiltinStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impls::IdentityTranslator;
    use rstest::rstest;

    #[rstest]
    #[case::publish("publish", Some(BuiltinStatus::Publish))]
    #[case::private("private", Some(BuiltinStatus::Private))]
    #[case::pending("pending", Some(BuiltinStatus::Pending))]
    #[case::draft("draft", Some(BuiltinStatus::Draft))]
    #[case::custom("archive", None)]
    #[case::empty("", None)]
    #[case::case_sensitive("Publish", None)]
    fn from_name_matches_exactly(#[case] name: &str, #[case] expected: Option<BuiltinStatus>) {
        assert_eq!(BuiltinStatus::from_name(name), expected);
    }

    #[test]
    fn names_round_trip_through_lookup() {
        for status in BuiltinStatus::ALL {
            assert_eq!(BuiltinStatus::from_name(status.name()), Some(status));
            assert_eq!(status.to_string(), status.name());
        }
    }

    #[rstest]
    #[case::publish(BuiltinStatus::Publish, "Publicly published", Some("Published"), "dashicons-visibility")]
    #[case::private(BuiltinStatus::Private, "Privately Published", Some("Private"), "dashicons-hidden")]
    #[case::pending(BuiltinStatus::Pending, "Pending Review", None, "dashicons-flag")]
    #[case::draft(BuiltinStatus::Draft, "Draft", None, "dashicons-edit")]
    fn table_entries(
        #[case] status: BuiltinStatus,
        #[case] metabox: &str,
        #[case] inline: Option<&str>,
        #[case] dashicon: &str,
    ) {
        let labels = status.labels(&IdentityTranslator);

        assert_eq!(labels.get(METABOX_DROPDOWN), Some(metabox));
        assert_eq!(labels.get(INLINE_DROPDOWN), inline);
        assert_eq!(labels.is_set(INLINE_DROPDOWN), inline.is_some());
        assert_eq!(labels.len(), if inline.is_some() { 2 } else { 1 });
        assert_eq!(status.dashicon(), dashicon);
    }

    #[test]
    fn labels_go_through_the_translator_with_the_text_domain() {
        struct Shouting;
        impl Translator for Shouting {
            fn translate(&self, text: &str, domain: &str) -> String {
                assert_eq!(domain, TEXT_DOMAIN);
                text.to_uppercase()
            }
        }

        let labels = BuiltinStatus::Private.labels(&Shouting);
        assert_eq!(labels.get(METABOX_DROPDOWN), Some("PRIVATELY PUBLISHED"));
        assert_eq!(labels.get(INLINE_DROPDOWN), Some("PRIVATE"));
    }
}
