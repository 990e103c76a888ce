use super::*;

#[test]
fn visa_section_shows_only_for_visa_permit() {
    assert_eq!(visa_section_display("visa_permit"), "block");
    assert_eq!(visa_section_display("resident"), "none");
    assert_eq!(visa_section_display(""), "none");
}

#[test]
fn resident_extra_requires_both_selects_to_match() {
    assert_eq!(resident_extra_display("visa_permit", "resident"), "block");
    assert_eq!(resident_extra_display("visa_permit", "nonresident"), "none");
    assert_eq!(resident_extra_display("citizen", "resident"), "none");
    assert_eq!(resident_extra_display("", ""), "none");
}

#[test]
fn expense_row_template_has_one_cell_per_column() {
    assert_eq!(EXPENSE_ROW_HTML.matches("<td>").count(), 5);
    assert!(EXPENSE_ROW_HTML.contains(r#"name="label[]""#));
    assert!(EXPENSE_ROW_HTML.contains(r#"name="amount[]""#));
    assert!(EXPENSE_ROW_HTML.contains(r#"value="USD""#));
    assert!(EXPENSE_ROW_HTML.contains(REMOVE_ROW_CLASS));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn init_is_a_noop_without_a_browser() {
    init();
}
