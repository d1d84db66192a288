use std::ops::Deref;
use std::rc::Rc;

use api::i18n::Catalog;
use api::i18n::Message;
use api::prefs::site_prefs::SitePrefs;
use api::tokens::Palette;
use dioxus_logger::tracing::warn;

#[derive(Debug, PartialEq)]
pub struct AppStateData {
    pub prefs: SitePrefs,
    pub catalog: Catalog,
    pub palette: Palette,
}

/// The stable, non-reactive state shared by every component on the page.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState(Rc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(prefs: SitePrefs) -> Self {
        let locale = prefs.locale();
        let catalog = Catalog::load(locale).unwrap_or_else(|e| {
            warn!("no translations for {}: {}", locale.code(), e);
            Catalog::empty(locale)
        });

        Self(Rc::new(AppStateData {
            prefs,
            catalog,
            palette: Palette::for_mode(prefs.color_mode()),
        }))
    }

    /// Shorthand for [`Catalog::t`].
    pub fn t(&self, key: &str) -> String {
        self.catalog.t(key)
    }

    /// Shorthand for [`Catalog::t_rich`].
    pub fn t_rich(&self, id: &str) -> Message {
        self.catalog.t_rich(id)
    }
}
