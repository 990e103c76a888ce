//! Theme preference controller.
//!
//! Reads the stored preference (`light`, `dark`, or `auto`) from
//! `localStorage`, applies the resolved theme to the `data-bs-theme`
//! attribute on `<html>`, keeps the switcher indicator in sync, and follows
//! OS color-scheme changes while the preference is `auto`.
//!
//! ERROR HANDLING
//! ==============
//! Storage and DOM lookups are best-effort: disabled storage degrades reads
//! to `auto` and writes to no-ops, and a missing indicator or control skips
//! that one update. Nothing here can fail page boot.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[cfg(feature = "hydrate")]
use crate::util::dom;

/// `localStorage` key holding the persisted preference.
pub const STORAGE_KEY: &str = "theme";

/// Attribute on the root element consumed by the stylesheet.
pub const THEME_ATTRIBUTE: &str = "data-bs-theme";

/// Attribute tying each switcher control to its preference token.
pub const CONTROL_ATTRIBUTE: &str = "data-bs-theme-value";

#[cfg(feature = "hydrate")]
const COLOR_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// User-selected theme preference, as persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    Light,
    Dark,
    /// Follow the OS color-scheme signal. Default for absent or
    /// unrecognized stored values.
    #[default]
    Auto,
}

impl ThemePreference {
    /// Parse a stored token. Anything other than the three recognized
    /// tokens (including absence) degrades to `Auto`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("light") => Self::Light,
            Some("dark") => Self::Dark,
            _ => Self::Auto,
        }
    }

    /// The persisted token for this preference.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Auto => "auto",
        }
    }

    /// Resolve against the OS signal: explicit preferences win, `Auto`
    /// follows `prefers_dark`.
    pub fn resolve(self, prefers_dark: bool) -> ResolvedTheme {
        match self {
            Self::Light => ResolvedTheme::Light,
            Self::Dark => ResolvedTheme::Dark,
            Self::Auto => {
                if prefers_dark {
                    ResolvedTheme::Dark
                } else {
                    ResolvedTheme::Light
                }
            }
        }
    }
}

/// Theme actually written to the document attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolvedTheme {
    Light,
    Dark,
}

impl ResolvedTheme {
    /// The attribute value for this theme.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Accessible label for the switcher: base text plus the active token.
pub fn indicator_label(base: &str, preference: ThemePreference) -> String {
    format!("{base} ({})", preference.as_str())
}

/// Whether the OS currently prefers a dark color scheme. Missing
/// media-query support reads as "not dark".
#[cfg(feature = "hydrate")]
fn prefers_dark() -> bool {
    dom::window()
        .and_then(|w| w.match_media(COLOR_SCHEME_QUERY).ok().flatten())
        .map_or(false, |mq| mq.matches())
}

/// Read the stored preference, degrading to `Auto` when storage is
/// unavailable or holds an unrecognized value.
pub fn get_preference() -> ThemePreference {
    #[cfg(feature = "hydrate")]
    {
        let stored = dom::local_storage().and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
        ThemePreference::parse(stored.as_deref())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        ThemePreference::default()
    }
}

/// Persist `preference`, then apply it to the document. A failed storage
/// write still applies the theme for the current page.
pub fn set_preference(preference: ThemePreference) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = dom::local_storage() {
            let _ = storage.set_item(STORAGE_KEY, preference.as_str());
        }
    }
    apply_theme(preference);
}

/// Resolve `preference` against the current OS signal and write the result
/// to the root element's theme attribute.
pub fn apply_theme(preference: ThemePreference) {
    #[cfg(feature = "hydrate")]
    {
        let resolved = preference.resolve(prefers_dark());
        if let Some(root) = dom::document().and_then(|d| d.document_element()) {
            let _ = root.set_attribute(THEME_ATTRIBUTE, resolved.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = preference;
    }
}

/// Update the switcher indicator to reflect `preference` (the preference,
/// not the resolved theme): active state on the matching control, the
/// active control's icon on the switcher, and its token in the aria-label.
pub fn update_indicator(preference: ThemePreference) {
    #[cfg(feature = "hydrate")]
    {
        let Some(document) = dom::document() else {
            return;
        };
        let Some(switcher) = dom::query(&document, "#bd-theme") else {
            return;
        };

        for control in dom::query_all(&document, &format!("[{CONTROL_ATTRIBUTE}]")) {
            let token = control.get_attribute(CONTROL_ATTRIBUTE);
            let is_active = token.as_deref() == Some(preference.as_str());
            let _ = control.set_attribute("aria-pressed", if is_active { "true" } else { "false" });
            if is_active {
                let _ = control.class_list().add_1("active");
                let icon = dom::query(&document, ".theme-icon-active use");
                let href = control
                    .query_selector("svg use")
                    .ok()
                    .flatten()
                    .and_then(|u| u.get_attribute("href"));
                if let (Some(icon), Some(href)) = (icon, href) {
                    let _ = icon.set_attribute("href", &href);
                }
            } else {
                let _ = control.class_list().remove_1("active");
            }
        }

        if let Some(text) = dom::query(&document, "#bd-theme-text") {
            let base = text.text_content().unwrap_or_default();
            let _ = switcher.set_attribute("aria-label", &indicator_label(&base, preference));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = preference;
    }
}

/// Run once at page load: apply the stored preference, sync the indicator,
/// then wire the switcher controls and the OS color-scheme subscription.
/// Listeners stay attached for the page's lifetime.
pub fn init() {
    let preference = get_preference();
    apply_theme(preference);
    update_indicator(preference);

    #[cfg(feature = "hydrate")]
    {
        let Some(document) = dom::document() else {
            return;
        };

        for control in dom::query_all(&document, &format!("[{CONTROL_ATTRIBUTE}]")) {
            let token = ThemePreference::parse(control.get_attribute(CONTROL_ATTRIBUTE).as_deref());
            dom::on_click(&control, move |_| {
                set_preference(token);
                update_indicator(token);
            });
        }

        // An explicit light/dark preference pins the theme; only `auto`
        // re-resolves when the OS signal changes.
        if let Some(media) = dom::window().and_then(|w| w.match_media(COLOR_SCHEME_QUERY).ok().flatten()) {
            dom::on_event(&media, "change", move |_| {
                if get_preference() == ThemePreference::Auto {
                    apply_theme(ThemePreference::Auto);
                }
            });
        }
    }
}
