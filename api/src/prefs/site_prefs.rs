use std::env;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::i18n::Locale;
use crate::tokens::ColorMode;

/// Represents all site prefs. Served to the client before the first render.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct SitePrefs {
    locale: Locale,
    analytics_enabled: bool,
    color_mode: ColorMode,
}

impl SitePrefs {
    pub fn new(locale: Locale, analytics_enabled: bool, color_mode: ColorMode) -> Self {
        Self {
            locale,
            analytics_enabled,
            color_mode,
        }
    }

    /// Creates a SitePrefs instance from environment variables,
    /// with in-code defaults.
    ///
    /// # Environment Variables
    /// - `SITE_LOCALE`: "en" or "es" (case-insensitive). defaults to "en".
    /// - `ANALYTICS`: "true" or "1" to record events. defaults to true.
    /// - `COLOR_MODE`: "light" or "dark" (case-insensitive). defaults to "light".
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`SitePrefs::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        const ANALYTICS_ENABLED: bool = true;

        let locale = lookup("SITE_LOCALE")
            .and_then(|s| Locale::from_str(s.trim()).ok())
            .unwrap_or_default();

        let analytics_enabled = match lookup("ANALYTICS") {
            Some(val) => val.eq_ignore_ascii_case("true") || val == "1",
            None => ANALYTICS_ENABLED,
        };

        let color_mode = lookup("COLOR_MODE")
            .and_then(|s| ColorMode::from_str(s.trim()).ok())
            .unwrap_or_default();

        Self {
            locale,
            analytics_enabled,
            color_mode,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn analytics_enabled(&self) -> bool {
        self.analytics_enabled
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }
}

impl Default for SitePrefs {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn prefs_from(vars: &[(&str, &str)]) -> SitePrefs {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SitePrefs::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let prefs = prefs_from(&[]);
        assert_eq!(prefs.locale(), Locale::En);
        assert!(prefs.analytics_enabled());
        assert_eq!(prefs.color_mode(), ColorMode::Light);
    }

    #[test]
    fn reads_each_variable() {
        let prefs = prefs_from(&[
            ("SITE_LOCALE", "ES"),
            ("ANALYTICS", "false"),
            ("COLOR_MODE", "dark"),
        ]);
        assert_eq!(prefs, SitePrefs::new(Locale::Es, false, ColorMode::Dark));
    }

    #[test]
    fn analytics_accepts_one_and_true() {
        assert!(prefs_from(&[("ANALYTICS", "1")]).analytics_enabled());
        assert!(prefs_from(&[("ANALYTICS", "TRUE")]).analytics_enabled());
        assert!(!prefs_from(&[("ANALYTICS", "0")]).analytics_enabled());
    }

    #[test]
    fn unknown_values_fall_back_to_defaults() {
        let prefs = prefs_from(&[("SITE_LOCALE", "klingon"), ("COLOR_MODE", "sepia")]);
        assert_eq!(prefs.locale(), Locale::En);
        assert_eq!(prefs.color_mode(), ColorMode::Light);
    }
}
