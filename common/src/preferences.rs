use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::section::Section;

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    // value of the data-theme attribute on the document root
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    // text direction for the document root
    pub fn dir(&self) -> &'static str {
        match self {
            Language::En => "ltr",
            Language::Ar => "rtl",
        }
    }

    pub fn toggled(&self) -> Language {
        match self {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        }
    }

    // the toggle button names the language it switches to
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Language::En => "ع",
            Language::Ar => "EN",
        }
    }
}

// the part of the preferences that survives a reload
//
// active section, menu and scroll flags are derived from the page itself and are
// deliberately left out of the stored record
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct PersistedPreferences {
    pub theme: Theme,
    pub language: Language,
}

// persistence hook
//
// called with the storable record after every mutation of the store.  the web app
// writes it to local storage; tests record it
pub trait Persist {
    fn persist(&self, prefs: &PersistedPreferences);
}

// PreferenceStore
//
// the single piece of shared ui state.  it is owned by whoever creates it (the app
// root, which hands it down through context) rather than living in a global
#[derive(Debug)]
pub struct PreferenceStore<P: Persist> {
    theme: Theme,
    language: Language,
    active_section: Section,
    menu_open: bool,
    scrolled: bool,
    persistence: P,
}

impl<P: Persist> PreferenceStore<P> {
    pub fn new(persistence: P) -> Self {
        Self::restore(persistence, PersistedPreferences::default())
    }

    pub fn restore(persistence: P, saved: PersistedPreferences) -> Self {
        PreferenceStore {
            theme: saved.theme,
            language: saved.language,
            active_section: Section::default(),
            menu_open: false,
            scrolled: false,
            persistence,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn active_section(&self) -> Section {
        self.active_section
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    pub fn persisted(&self) -> PersistedPreferences {
        PersistedPreferences {
            theme: self.theme,
            language: self.language,
        }
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.mutate(|s| s.theme = s.theme.toggled());
        debug!(theme = self.theme.as_str(), "toggled theme");
        self.theme
    }

    pub fn toggle_language(&mut self) -> Language {
        self.mutate(|s| s.language = s.language.toggled());
        debug!(language = self.language.code(), "toggled language");
        self.language
    }

    pub fn set_active_section(&mut self, section: Section) {
        self.mutate(|s| s.active_section = section);
    }

    pub fn set_scrolled(&mut self, scrolled: bool) {
        self.mutate(|s| s.scrolled = scrolled);
    }

    pub fn set_menu_open(&mut self, open: bool) {
        self.mutate(|s| s.menu_open = open);
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.mutate(|s| s.menu_open = !s.menu_open);
        self.menu_open
    }

    fn mutate(&mut self, f: impl FnOnce(&mut Self)) {
        f(self);
        self.persistence.persist(&self.persisted());
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Default)]
    struct Recorder {
        writes: RefCell<Vec<PersistedPreferences>>,
    }

    impl Persist for Recorder {
        fn persist(&self, prefs: &PersistedPreferences) {
            self.writes.borrow_mut().push(*prefs);
        }
    }

    impl Recorder {
        fn last(&self) -> Option<PersistedPreferences> {
            self.writes.borrow().last().copied()
        }
    }

    #[test]
    fn defaults_on_first_load() {
        let store = PreferenceStore::new(Recorder::default());

        assert_eq!(store.theme(), Theme::Light);
        assert_eq!(store.language(), Language::En);
        assert_eq!(store.active_section(), Section::Home);
        assert!(!store.menu_open());
        assert!(!store.scrolled());
        assert!(store.persistence().writes.borrow().is_empty());
    }

    #[test]
    fn language_toggle_is_persisted_immediately() {
        let mut store = PreferenceStore::new(Recorder::default());

        assert_eq!(store.toggle_language(), Language::Ar);
        assert_eq!(
            store.persistence().last(),
            Some(PersistedPreferences {
                theme: Theme::Light,
                language: Language::Ar,
            })
        );

        assert_eq!(store.toggle_language(), Language::En);
        assert_eq!(store.persistence().last().map(|p| p.language), Some(Language::En));
    }

    #[test]
    fn every_mutation_hits_the_hook() {
        let mut store = PreferenceStore::new(Recorder::default());

        store.toggle_theme();
        store.set_active_section(Section::Skills);
        store.set_scrolled(true);
        store.toggle_menu();
        store.set_menu_open(false);

        let writes = store.persistence().writes.borrow();
        assert_eq!(writes.len(), 5);
        assert!(writes.iter().all(|p| p.theme == Theme::Dark));
    }

    #[test]
    fn restore_brings_back_theme_and_language_only() {
        let saved = PersistedPreferences {
            theme: Theme::Dark,
            language: Language::Ar,
        };
        let store = PreferenceStore::restore(Recorder::default(), saved);

        assert_eq!(store.persisted(), saved);
        assert_eq!(store.active_section(), Section::Home);
        assert!(!store.menu_open());
    }

    #[test]
    fn stored_record_has_two_fields() {
        let json = serde_json::to_value(PersistedPreferences {
            theme: Theme::Dark,
            language: Language::Ar,
        })
        .unwrap();

        assert_eq!(json, serde_json::json!({ "theme": "dark", "language": "ar" }));
    }

    #[test]
    fn language_drives_direction() {
        assert_eq!(Language::Ar.dir(), "rtl");
        assert_eq!(Language::En.dir(), "ltr");
        assert_eq!(Language::En.toggle_label(), "ع");
    }
}
