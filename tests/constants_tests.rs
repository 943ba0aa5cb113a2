// Host-side tests for front-end constants.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use landing_core::markup::{ids, render_page};
use landing_core::{Dialog, ViewState};

#[test]
fn root_id_does_not_collide_with_page_ids() {
    let mut page_ids = vec![
        ids::CANVAS,
        ids::PDF_STUDENT_NAME,
        ids::NFT_STUDENT_NAME,
        ids::NAME_INPUT,
    ];
    page_ids.extend(Dialog::ALL.iter().map(|d| ids::dialog(*d)));
    assert!(!page_ids.contains(&ROOT_ID));

    let html = render_page(&ViewState::default());
    assert!(!html.contains(&format!(r#"id="{}""#, ROOT_ID)));
}

#[test]
fn page_ids_are_unique_in_markup() {
    let html = render_page(&ViewState::default());
    for id in [ids::CANVAS, ids::PDF_STUDENT_NAME, ids::NFT_STUDENT_NAME, ids::NAME_INPUT] {
        assert_eq!(html.matches(&format!(r#"id="{}""#, id)).count(), 1, "{}", id);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn body_class_is_a_single_token() {
    assert!(!BODY_DIALOG_OPEN_CLASS.is_empty());
    assert!(!BODY_DIALOG_OPEN_CLASS.contains(char::is_whitespace));
    assert!(LOG_LEVEL <= log::Level::Info);
}
