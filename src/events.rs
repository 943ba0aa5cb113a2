use crate::dom::Listener;
use crate::page;
use landing_core::markup::ids;
use landing_core::{Action, Dialog, ParseActionError, ViewState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Resolve the `data-action` of the clicked element or its nearest ancestor.
fn click_action(ev: &web::Event) -> Option<Result<Action, ParseActionError>> {
    let target = ev.target()?.dyn_into::<web::Element>().ok()?;
    let el = target
        .closest(&format!("[{}]", ids::ACTION_ATTR))
        .ok()
        .flatten()?;
    let text = el.get_attribute(ids::ACTION_ATTR)?;
    Some(text.parse())
}

fn input_action(ev: &web::Event) -> Option<Action> {
    let input = ev.target()?.dyn_into::<web::HtmlInputElement>().ok()?;
    if input.id() != ids::NAME_INPUT {
        return None;
    }
    Some(Action::SetStudentName(input.value()))
}

fn dispatch(document: &web::Document, state: &Rc<RefCell<ViewState>>, action: Action) {
    log::debug!("[action] {:?}", action);
    let focus_input = action == Action::OpenDialog(Dialog::Alter);
    if !state.borrow_mut().apply(action) {
        return;
    }
    page::sync(document, &state.borrow());
    if focus_input {
        page::focus_name_input(document);
    }
}

/// Hook clicks, typing and Escape up to `state`. Listeners are removed when
/// the returned guards drop.
pub fn wire(
    document: &web::Document,
    root: &web::Element,
    state: Rc<RefCell<ViewState>>,
) -> anyhow::Result<Vec<Listener>> {
    let mut listeners = Vec::with_capacity(3);

    let (doc, st) = (document.clone(), state.clone());
    listeners.push(Listener::new(root, "click", move |ev| match click_action(&ev) {
        Some(Ok(action)) => dispatch(&doc, &st, action),
        Some(Err(e)) => log::warn!("[action] {}", e),
        None => {}
    })?);

    let (doc, st) = (document.clone(), state.clone());
    listeners.push(Listener::new(root, "input", move |ev| {
        if let Some(action) = input_action(&ev) {
            dispatch(&doc, &st, action);
        }
    })?);

    let doc = document.clone();
    listeners.push(Listener::new(document, "keydown", move |ev| {
        let Some(key) = ev.dyn_ref::<web::KeyboardEvent>().map(|k| k.key()) else {
            return;
        };
        if let Some(action) = Action::for_key(&key) {
            if state.borrow().any_dialog_open() {
                ev.prevent_default();
            }
            dispatch(&doc, &state, action);
        }
    })?);

    Ok(listeners)
}
