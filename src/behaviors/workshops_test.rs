use super::*;

#[test]
fn link_classes_match_the_server_rendered_entries() {
    for class in [
        "d-flex",
        "flex-column",
        "flex-lg-row",
        "gap-3",
        "align-items-start",
        "align-items-lg-center",
        "py-3",
        "link-body-emphasis",
        "text-decoration-none",
        "border-bottom",
    ] {
        assert!(
            LINK_CLASSES.split_whitespace().any(|c| c == class),
            "missing class {class}"
        );
    }
    assert_eq!(LINK_CLASSES.split_whitespace().count(), 10);
}

#[test]
fn class_strings_are_single_spaced() {
    assert!(!LINK_CLASSES.contains("  "));
    assert!(!TITLE_CLASSES.contains("  "));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn init_is_a_noop_without_a_browser() {
    init();
}
