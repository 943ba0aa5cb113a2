use crate::constants::BODY_DIALOG_OPEN_CLASS;
use crate::dom;
use landing_core::content::FAQ;
use landing_core::markup::{ids, open_state};
use landing_core::{Dialog, ViewState};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn set_dialog_open(document: &web::Document, dialog: Dialog, open: bool) {
    if let Some(el) = document.get_element_by_id(ids::dialog(dialog)) {
        _ = el.set_attribute(ids::STATE_ATTR, open_state(open));
        dom::set_hidden(&el, !open);
    }
}

fn name_input(document: &web::Document) -> Option<web::HtmlInputElement> {
    document
        .get_element_by_id(ids::NAME_INPUT)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
}

pub fn focus_name_input(document: &web::Document) {
    if let Some(input) = name_input(document) {
        _ = input.focus();
        input.select();
    }
}

fn sync_faq(document: &web::Document, open_faq: Option<usize>) {
    for i in 0..FAQ.len() {
        let Some(item) = document.get_element_by_id(&ids::faq_item(i)) else {
            continue;
        };
        let open = open_faq == Some(i);
        _ = item.set_attribute(ids::STATE_ATTR, open_state(open));
        if let Ok(Some(trigger)) = item.query_selector(".accordion-trigger") {
            _ = trigger.set_attribute("aria-expanded", if open { "true" } else { "false" });
        }
        if let Ok(Some(content)) = item.query_selector(".accordion-content") {
            dom::set_hidden(&content, !open);
        }
    }
}

/// Bring the mounted page in line with `state`.
pub fn sync(document: &web::Document, state: &ViewState) {
    for dialog in Dialog::ALL {
        set_dialog_open(document, dialog, state.is_open(dialog));
    }
    if let Some(body) = document.body() {
        let cl = body.class_list();
        _ = if state.any_dialog_open() {
            cl.add_1(BODY_DIALOG_OPEN_CLASS)
        } else {
            cl.remove_1(BODY_DIALOG_OPEN_CLASS)
        };
    }

    if let Some(el) = document.get_element_by_id(ids::PDF_STUDENT_NAME) {
        if el.text_content().as_deref() != Some(state.student_name.as_str()) {
            el.set_text_content(Some(&state.student_name));
        }
    }
    // Leave the input alone while it already matches so the caret stays put
    if let Some(input) = name_input(document) {
        if input.value() != state.student_name {
            input.set_value(&state.student_name);
        }
    }

    sync_faq(document, state.open_faq);
}
