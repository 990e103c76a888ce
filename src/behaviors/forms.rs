//! Expense-form row editing and conditional section visibility.
//!
//! The reimbursement form is rendered by the server with zero or more
//! expense rows; this module lets the user add blank rows, remove any row,
//! and reveals the visa/resident sections driven by the tax-status selects.
//!
//! Row removal is delegated through a single `<body>` listener so rows added
//! after wiring are removable without per-row listeners.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

#[cfg(feature = "hydrate")]
use crate::util::dom;

/// Class marking the per-row remove buttons.
pub const REMOVE_ROW_CLASS: &str = "remove-row";

/// Markup for one blank expense row, matching the server-rendered rows.
pub const EXPENSE_ROW_HTML: &str = r#"
            <td><input type="text" name="label[]" class="form-control" required></td>
            <td><input type="number" step="0.01" name="amount[]" class="form-control" required></td>
            <td><input type="text" name="currency[]" class="form-control" value="USD"></td>
            <td><input type="file" name="receipt[]" class="form-control"></td>
            <td><button type="button" class="btn btn-danger btn-sm remove-row">X</button></td>
        "#;

const EXPENSE_TABLE_ID: &str = "expense-rows";
const ADD_EXPENSE_ID: &str = "add-expense";
const TAX_STATUS_ID: &str = "id_tax-tax_status";
const VISA_TAX_STATUS_ID: &str = "id_tax-visa_tax_status";
const VISA_SECTION_ID: &str = "visa-section";
const RESIDENT_EXTRA_ID: &str = "resident-extra";

/// CSS `display` value for the visa section given the tax status.
pub fn visa_section_display(tax_status: &str) -> &'static str {
    if tax_status == "visa_permit" { "block" } else { "none" }
}

/// CSS `display` value for the resident-extra section. It is only shown
/// while the visa section itself is shown.
pub fn resident_extra_display(tax_status: &str, visa_tax_status: &str) -> &'static str {
    if tax_status == "visa_permit" && visa_tax_status == "resident" {
        "block"
    } else {
        "none"
    }
}

/// Current value of the select with `id`, when present.
#[cfg(feature = "hydrate")]
fn select_value(document: &web_sys::Document, id: &str) -> Option<String> {
    document
        .get_element_by_id(id)?
        .dyn_into::<web_sys::HtmlSelectElement>()
        .ok()
        .map(|select| select.value())
}

/// Set `display` on the element with `id`, skipping absent elements.
#[cfg(feature = "hydrate")]
fn set_display(document: &web_sys::Document, id: &str, display: &str) {
    let Some(element) = document
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        return;
    };
    let _ = element.style().set_property("display", display);
}

/// Re-derive both conditional sections from the current select values.
#[cfg(feature = "hydrate")]
fn sync_tax_sections(document: &web_sys::Document) {
    let Some(tax_status) = select_value(document, TAX_STATUS_ID) else {
        return;
    };
    let visa_tax_status = select_value(document, VISA_TAX_STATUS_ID).unwrap_or_default();
    set_display(document, VISA_SECTION_ID, visa_section_display(&tax_status));
    set_display(
        document,
        RESIDENT_EXTRA_ID,
        resident_extra_display(&tax_status, &visa_tax_status),
    );
}

/// Wire row add/remove and section visibility for the expense form, when
/// the current page carries one.
pub fn init() {
    #[cfg(feature = "hydrate")]
    {
        let Some(document) = dom::document() else {
            return;
        };

        if let Some(table) = document.get_element_by_id(EXPENSE_TABLE_ID) {
            if let Some(add_button) = document.get_element_by_id(ADD_EXPENSE_ID) {
                let doc = document.clone();
                dom::on_click(&add_button, move |_| {
                    let Ok(row) = doc.create_element("tr") else {
                        return;
                    };
                    row.set_inner_html(EXPENSE_ROW_HTML);
                    let _ = table.append_child(&row);
                });
            }

            if let Some(body) = document.body() {
                dom::on_click(&body, |event| {
                    let Some(target) = event
                        .target()
                        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                    else {
                        return;
                    };
                    if target.class_list().contains(REMOVE_ROW_CLASS) {
                        if let Ok(Some(row)) = target.closest("tr") {
                            row.remove();
                        }
                    }
                });
            }
        }

        if document.get_element_by_id(TAX_STATUS_ID).is_some() {
            sync_tax_sections(&document);
            for id in [TAX_STATUS_ID, VISA_TAX_STATUS_ID] {
                if let Some(select) = document.get_element_by_id(id) {
                    let doc = document.clone();
                    dom::on_event(&select, "change", move |_| sync_tax_sections(&doc));
                }
            }
        }
    }
}
