//! Theme Context
//!
//! Light/dark theme shared via Leptos Context API and remembered in
//! localStorage.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::THEME_STORAGE_KEY;
use crate::hooks::use_local_storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            Theme::Light => "#f6f7fb",
            Theme::Dark => "#0f1115",
        }
    }

    pub fn foreground(self) -> &'static str {
        self.toggled().background()
    }
}

/// Theme signals provided via context
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: ReadSignal<Theme>,
    set_theme: WriteSignal<Theme>,
}

impl ThemeContext {
    pub fn toggle(&self) {
        self.set_theme.update(|t| *t = t.toggled());
        log::info!("theme -> {}", self.theme.get_untracked().as_str());
    }
}

/// Provide the persisted theme to all children
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let (theme, set_theme) = use_local_storage(THEME_STORAGE_KEY, Theme::Light);
    provide_context(ThemeContext { theme, set_theme });
    children()
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("use_theme must be called inside ThemeProvider")
}
