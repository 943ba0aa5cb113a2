#![cfg(target_arch = "wasm32")]
use landing_core::markup;
use landing_core::ViewState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod background;
mod constants;
mod dom;
mod events;
mod frame;
mod page;
mod schedule;

use background::ParticleBackground;

thread_local! {
    static PAGE: RefCell<Option<LandingPage>> = RefCell::new(None);
}

/// The mounted landing page: markup under `root`, the particle background
/// and every listener the page installed.
pub struct LandingPage {
    root: web::Element,
    state: Rc<RefCell<ViewState>>,
    background: Option<ParticleBackground>,
    listeners: Vec<dom::Listener>,
}

impl LandingPage {
    pub fn mount(document: &web::Document, root: web::Element) -> anyhow::Result<Self> {
        let state = Rc::new(RefCell::new(ViewState::default()));
        root.set_inner_html(&markup::render_page(&state.borrow()));

        let background = match ParticleBackground::attach(document) {
            Ok(bg) => {
                log::info!("[mount] particle background with {} particles", bg.particle_count());
                Some(bg)
            }
            Err(e) => {
                log::debug!("[mount] particle background disabled: {}", e);
                None
            }
        };

        let listeners = events::wire(document, &root, state.clone())?;
        page::sync(document, &state.borrow());
        Ok(Self {
            root,
            state,
            background,
            listeners,
        })
    }

    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    pub fn unmount(mut self) {
        if let Some(mut bg) = self.background.take() {
            let frames = bg.frames_drawn();
            bg.detach();
            log::info!("[mount] background stopped after {} frames", frames);
        }
        self.listeners.clear();
        if let Some(body) = self.root.owner_document().and_then(|d| d.body()) {
            _ = body.class_list().remove_1(constants::BODY_DIALOG_OPEN_CLASS);
        }
        self.root.set_inner_html("");
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(constants::LOG_LEVEL).ok();
    log::info!("soulscribe-web starting");

    if let Err(e) = mount() {
        log::error!("mount error: {:?}", e);
    }
    Ok(())
}

fn mount() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let root: web::Element = match document.get_element_by_id(constants::ROOT_ID) {
        Some(el) => el,
        None => document
            .body()
            .map(Into::into)
            .ok_or_else(|| anyhow::anyhow!("missing #{} and <body>", constants::ROOT_ID))?,
    };

    if let Some(previous) = PAGE.with(|slot| slot.borrow_mut().take()) {
        log::warn!("[mount] replacing an already mounted page");
        previous.unmount();
    }
    let page = LandingPage::mount(&document, root)?;
    PAGE.with(|slot| *slot.borrow_mut() = Some(page));
    Ok(())
}

/// Tear the page down: stops the animation and removes all listeners.
#[wasm_bindgen]
pub fn unmount() {
    let page = PAGE.with(|slot| slot.borrow_mut().take());
    match page {
        Some(page) => {
            log::info!("[mount] unmounting, last state {:?}", page.state());
            page.unmount();
        }
        None => log::warn!("[mount] unmount called with nothing mounted"),
    }
}
