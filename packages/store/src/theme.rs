//! # Theme tokens
//!
//! Six named palettes, each exposing a precomputed bundle of Tailwind class
//! strings ([`ThemeClasses`]). [`ThemeService`] owns the selected palette,
//! restores it from storage on construction and writes it back on every
//! change. There is no global: whoever needs a theme is handed a service.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::storage::SharedStorage;

/// Storage key holding the selected theme name.
pub const THEME_STORAGE_KEY: &str = "buildline.theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Blue,
    Green,
    Purple,
    Orange,
    Red,
    Teal,
}

/// Class-name bundle of one palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeClasses {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub gradient: &'static str,
    pub border: &'static str,
    pub hover: &'static str,
    pub text: &'static str,
}

impl ThemeName {
    pub const ALL: [ThemeName; 6] = [
        ThemeName::Blue,
        ThemeName::Green,
        ThemeName::Purple,
        ThemeName::Orange,
        ThemeName::Red,
        ThemeName::Teal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::Blue => "blue",
            ThemeName::Green => "green",
            ThemeName::Purple => "purple",
            ThemeName::Orange => "orange",
            ThemeName::Red => "red",
            ThemeName::Teal => "teal",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s.trim())
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThemeName::Blue => "Синяя",
            ThemeName::Green => "Зелёная",
            ThemeName::Purple => "Фиолетовая",
            ThemeName::Orange => "Оранжевая",
            ThemeName::Red => "Красная",
            ThemeName::Teal => "Бирюзовая",
        }
    }

    /// Swatch color for the theme picker.
    pub fn swatch(&self) -> &'static str {
        match self {
            ThemeName::Blue => "#2563eb",
            ThemeName::Green => "#16a34a",
            ThemeName::Purple => "#9333ea",
            ThemeName::Orange => "#ea580c",
            ThemeName::Red => "#dc2626",
            ThemeName::Teal => "#0d9488",
        }
    }

    pub fn classes(&self) -> ThemeClasses {
        match self {
            ThemeName::Blue => ThemeClasses {
                primary: "bg-blue-600 text-white",
                secondary: "bg-blue-50 text-blue-700",
                gradient: "bg-gradient-to-r from-blue-600 to-indigo-600",
                border: "border-blue-500",
                hover: "hover:bg-blue-700",
                text: "text-blue-600",
            },
            ThemeName::Green => ThemeClasses {
                primary: "bg-green-600 text-white",
                secondary: "bg-green-50 text-green-700",
                gradient: "bg-gradient-to-r from-green-600 to-emerald-600",
                border: "border-green-500",
                hover: "hover:bg-green-700",
                text: "text-green-600",
            },
            ThemeName::Purple => ThemeClasses {
                primary: "bg-purple-600 text-white",
                secondary: "bg-purple-50 text-purple-700",
                gradient: "bg-gradient-to-r from-purple-600 to-fuchsia-600",
                border: "border-purple-500",
                hover: "hover:bg-purple-700",
                text: "text-purple-600",
            },
            ThemeName::Orange => ThemeClasses {
                primary: "bg-orange-600 text-white",
                secondary: "bg-orange-50 text-orange-700",
                gradient: "bg-gradient-to-r from-orange-500 to-amber-500",
                border: "border-orange-500",
                hover: "hover:bg-orange-700",
                text: "text-orange-600",
            },
            ThemeName::Red => ThemeClasses {
                primary: "bg-red-600 text-white",
                secondary: "bg-red-50 text-red-700",
                gradient: "bg-gradient-to-r from-red-600 to-rose-600",
                border: "border-red-500",
                hover: "hover:bg-red-700",
                text: "text-red-600",
            },
            ThemeName::Teal => ThemeClasses {
                primary: "bg-teal-600 text-white",
                secondary: "bg-teal-50 text-teal-700",
                gradient: "bg-gradient-to-r from-teal-600 to-cyan-600",
                border: "border-teal-500",
                hover: "hover:bg-teal-700",
                text: "text-teal-600",
            },
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Selected theme plus the storage it persists to.
#[derive(Clone)]
pub struct ThemeService {
    storage: SharedStorage,
    current: ThemeName,
}

impl ThemeService {
    /// Restores the stored theme; falls back to `fallback` when the key is
    /// missing or holds an unknown name.
    pub fn restore(storage: SharedStorage, fallback: ThemeName) -> Self {
        let current = match storage.get(THEME_STORAGE_KEY) {
            Some(raw) => ThemeName::parse(&raw).unwrap_or_else(|| {
                tracing::warn!("unknown stored theme {raw:?}, using {fallback}");
                fallback
            }),
            None => fallback,
        };
        Self { storage, current }
    }

    pub fn current(&self) -> ThemeName {
        self.current
    }

    /// Bundle of the current theme.
    pub fn classes(&self) -> ThemeClasses {
        self.current.classes()
    }

    /// Switches theme and persists the choice. A failed write keeps the new
    /// theme for this session only.
    pub fn select(&mut self, theme: ThemeName) {
        self.current = theme;
        if let Err(e) = self.storage.set(THEME_STORAGE_KEY, theme.as_str()) {
            tracing::warn!("could not persist theme: {e}");
        }
    }
}

impl PartialEq for ThemeService {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl fmt::Debug for ThemeService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeService")
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStorage;
    use crate::storage::KeyValueStore;
    use std::sync::Arc;

    #[test]
    fn test_selected_theme_survives_remount() {
        let storage = MemoryStorage::new();
        let mut first = ThemeService::restore(Arc::new(storage.clone()), ThemeName::Blue);
        assert_eq!(first.current(), ThemeName::Blue);
        first.select(ThemeName::Purple);

        let second = ThemeService::restore(Arc::new(storage), ThemeName::Blue);
        assert_eq!(second.current(), ThemeName::Purple);
        assert_eq!(second.classes().primary, "bg-purple-600 text-white");
    }

    #[test]
    fn test_unknown_stored_value_falls_back() {
        let storage = MemoryStorage::with_entries([(THEME_STORAGE_KEY, "magenta")]);
        let service = ThemeService::restore(Arc::new(storage.clone()), ThemeName::default());
        assert_eq!(service.current(), ThemeName::Blue);
        assert_eq!(storage.get(THEME_STORAGE_KEY).as_deref(), Some("magenta"));
    }

    #[test]
    fn test_every_theme_has_distinct_bundle() {
        let bundles: Vec<_> = ThemeName::ALL.iter().map(|t| t.classes()).collect();
        for (i, a) in bundles.iter().enumerate() {
            for b in &bundles[i + 1..] {
                assert_ne!(a, b);
            }
        }
        for theme in ThemeName::ALL {
            assert_eq!(ThemeName::parse(theme.as_str()), Some(theme));
        }
    }
}
