#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn parse_accepts_the_three_known_tokens() {
    assert_eq!(ThemePreference::parse(Some("light")), ThemePreference::Light);
    assert_eq!(ThemePreference::parse(Some("dark")), ThemePreference::Dark);
    assert_eq!(ThemePreference::parse(Some("auto")), ThemePreference::Auto);
}

#[test]
fn parse_degrades_unknown_or_missing_values_to_auto() {
    assert_eq!(ThemePreference::parse(None), ThemePreference::Auto);
    assert_eq!(ThemePreference::parse(Some("")), ThemePreference::Auto);
    assert_eq!(ThemePreference::parse(Some("Dark")), ThemePreference::Auto);
    assert_eq!(ThemePreference::parse(Some("solarized")), ThemePreference::Auto);
}

#[test]
fn stored_token_survives_a_parse_round_trip() {
    for preference in [
        ThemePreference::Light,
        ThemePreference::Dark,
        ThemePreference::Auto,
    ] {
        assert_eq!(ThemePreference::parse(Some(preference.as_str())), preference);
    }
}

#[test]
fn explicit_preferences_resolve_regardless_of_os_signal() {
    for prefers_dark in [false, true] {
        assert_eq!(
            ThemePreference::Light.resolve(prefers_dark),
            ResolvedTheme::Light
        );
        assert_eq!(
            ThemePreference::Dark.resolve(prefers_dark),
            ResolvedTheme::Dark
        );
    }
}

#[test]
fn auto_resolves_to_the_os_signal() {
    assert_eq!(ThemePreference::Auto.resolve(false), ResolvedTheme::Light);
    assert_eq!(ThemePreference::Auto.resolve(true), ResolvedTheme::Dark);
}

#[test]
fn resolution_is_stable_between_calls() {
    let first = ThemePreference::Auto.resolve(true);
    let second = ThemePreference::Auto.resolve(true);
    assert_eq!(first.as_str(), second.as_str());
}

#[test]
fn indicator_label_appends_the_preference_token() {
    assert_eq!(
        indicator_label("Toggle theme", ThemePreference::Dark),
        "Toggle theme (dark)"
    );
    assert_eq!(indicator_label("", ThemePreference::Auto), " (auto)");
}

#[test]
fn get_preference_defaults_to_auto_without_a_browser() {
    assert_eq!(get_preference(), ThemePreference::Auto);
}

#[test]
fn browser_facing_entry_points_are_noops_but_callable() {
    set_preference(ThemePreference::Dark);
    apply_theme(ThemePreference::Light);
    update_indicator(ThemePreference::Auto);
    init();
    assert_eq!(get_preference(), ThemePreference::Auto);
}
