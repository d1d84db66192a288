//! Translation catalogs for the staking pages.
//!
//! Catalogs are bundled JSON files, one per locale and namespace. A lookup
//! tries the active locale, then English, then gives back the key itself.

mod markup;

pub use markup::Message;
pub use markup::Span;

use std::collections::HashMap;

use dioxus_logger::tracing::debug;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// The namespace used by [`Catalog::t`].
pub const DEFAULT_NAMESPACE: &str = "page-staking";

/// Locale used when a key is missing from the active one.
pub const FALLBACK_LOCALE: Locale = Locale::En;

#[derive(Error, Debug)]
pub enum I18nError {
    #[error("invalid catalog for {locale}/{namespace}: {source}")]
    Catalog {
        locale: &'static str,
        namespace: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("malformed markup: {0}")]
    Markup(#[from] quick_xml::Error),
    #[error("unbalanced markup")]
    Unbalanced,
}

/// A supported site language.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    /// The language code, e.g. "en".
    pub fn code(&self) -> &'static str {
        self.into()
    }
}

/// The namespaces bundled for a locale, as (namespace, json) pairs.
fn bundled(locale: Locale) -> &'static [(&'static str, &'static str)] {
    match locale {
        Locale::En => &[(
            "page-staking",
            include_str!("../../locales/en/page-staking.json"),
        )],
        Locale::Es => &[(
            "page-staking",
            include_str!("../../locales/es/page-staking.json"),
        )],
    }
}

type Namespaces = HashMap<&'static str, HashMap<String, String>>;

fn parse_namespaces(
    locale: Locale,
    sources: &[(&'static str, &'static str)],
) -> Result<Namespaces, I18nError> {
    sources
        .iter()
        .map(|&(namespace, json)| {
            serde_json::from_str::<HashMap<String, String>>(json)
                .map(|strings| (namespace, strings))
                .map_err(|source| I18nError::Catalog {
                    locale: locale.code(),
                    namespace,
                    source,
                })
        })
        .collect()
}

/// All translated strings for one active locale, plus the fallback locale.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    locale: Locale,
    active: Namespaces,
    fallback: Namespaces,
}

impl Catalog {
    /// Loads the bundled catalogs for `locale`.
    pub fn load(locale: Locale) -> Result<Self, I18nError> {
        Self::from_sources(locale, bundled(locale), bundled(FALLBACK_LOCALE))
    }

    /// Builds a catalog from (namespace, json) pairs.
    pub fn from_sources(
        locale: Locale,
        active: &[(&'static str, &'static str)],
        fallback: &[(&'static str, &'static str)],
    ) -> Result<Self, I18nError> {
        let active = parse_namespaces(locale, active)?;
        let fallback = if locale == FALLBACK_LOCALE {
            Namespaces::new()
        } else {
            parse_namespaces(FALLBACK_LOCALE, fallback)?
        };
        Ok(Self {
            locale,
            active,
            fallback,
        })
    }

    /// An empty catalog. Every lookup gives back its key.
    pub fn empty(locale: Locale) -> Self {
        Self {
            locale,
            ..Default::default()
        }
    }

    /// Looks up `key` in `namespace`, falling back to English.
    pub fn lookup(&self, namespace: &str, key: &str) -> Option<&str> {
        [&self.active, &self.fallback]
            .into_iter()
            .find_map(|namespaces| namespaces.get(namespace)?.get(key))
            .map(String::as_str)
    }

    /// Translates `key` from the default namespace.
    pub fn t(&self, key: &str) -> String {
        self.translate(DEFAULT_NAMESPACE, key)
    }

    /// Translates a `namespace:key` id and parses its inline markup.
    pub fn t_rich(&self, id: &str) -> Message {
        let (namespace, key) = split_id(id);
        Message::from_markup(&self.translate(namespace, key))
    }

    fn translate(&self, namespace: &str, key: &str) -> String {
        match self.lookup(namespace, key) {
            Some(text) => text.to_string(),
            None => {
                debug!("missing translation {}:{} for {}", namespace, key, self.locale.code());
                key.to_string()
            }
        }
    }
}

/// Splits "namespace:key". A bare key belongs to the default namespace.
fn split_id(id: &str) -> (&str, &str) {
    id.split_once(':').unwrap_or((DEFAULT_NAMESPACE, id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn bundled_catalogs_parse() {
        for locale in Locale::iter() {
            let catalog = Catalog::load(locale).unwrap();
            assert!(catalog.lookup(DEFAULT_NAMESPACE, "page-staking-dropdown-saas").is_some());
        }
    }

    #[test]
    fn translates_from_active_locale() {
        let catalog = Catalog::load(Locale::Es).unwrap();
        assert_eq!(catalog.t("page-staking-dropdown-saas"), "Staking como servicio");
    }

    #[test]
    fn missing_key_falls_back_to_english() {
        let catalog = Catalog::load(Locale::Es).unwrap();
        let english = Catalog::load(Locale::En).unwrap();
        let id = "page-staking:page-staking-hierarchy-cex-p3";
        assert_eq!(catalog.t_rich(id), english.t_rich(id));
    }

    #[test]
    fn unknown_key_returns_key() {
        let catalog = Catalog::load(Locale::En).unwrap();
        assert_eq!(catalog.t("no-such-key"), "no-such-key");
        assert_eq!(
            catalog.t_rich("page-staking:no-such-key"),
            Message::Plain("no-such-key".to_string())
        );
        assert_eq!(Catalog::empty(Locale::Es).t("anything"), "anything");
    }

    #[test]
    fn rich_ids_name_their_namespace() {
        let catalog = Catalog::from_sources(
            Locale::En,
            &[("other", r#"{"greeting": "Hello <em>there</em>"}"#)],
            &[],
        )
        .unwrap();
        assert_eq!(catalog.t("greeting"), "greeting");
        assert_eq!(
            catalog.t_rich("other:greeting"),
            Message::Rich(vec![
                Span::Text("Hello ".to_string()),
                Span::Emphasis(vec![Span::Text("there".to_string())]),
            ])
        );
    }

    #[test]
    fn invalid_catalog_is_an_error() {
        let err = Catalog::from_sources(Locale::En, &[("page-staking", "{not json")], &[])
            .unwrap_err();
        assert!(matches!(err, I18nError::Catalog { locale: "en", .. }));
    }

    #[test]
    fn bare_id_uses_default_namespace() {
        assert_eq!(split_id("foo"), ("page-staking", "foo"));
        assert_eq!(split_id("ns:foo"), ("ns", "foo"));
    }
}
