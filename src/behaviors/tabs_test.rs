use super::*;

#[test]
fn pane_id_strips_the_leading_fragment_marker() {
    assert_eq!(pane_id("#v-pills-profile"), "v-pills-profile");
    assert_eq!(pane_id("v-pills-profile"), "v-pills-profile");
    assert_eq!(pane_id("#"), "");
}

#[test]
fn button_selector_targets_the_owning_button() {
    assert_eq!(
        button_selector("#v-pills-settings").as_deref(),
        Some(r##"#v-pills-tab button[data-bs-target="#v-pills-settings"]"##)
    );
}

#[test]
fn button_selector_rejects_empty_hashes() {
    assert_eq!(button_selector(""), None);
    assert_eq!(button_selector("#"), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn init_is_a_noop_without_a_browser() {
    init();
}
