use crate::schedule::FrameSchedule;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct LoopInner {
    schedule: RefCell<FrameSchedule>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl LoopInner {
    fn request_next(&self) {
        if !self.schedule.borrow().wants_frame() {
            return;
        }
        let Some(window) = web::window() else {
            return;
        };
        let tick = self.tick.borrow();
        let Some(cb) = tick.as_ref() else {
            return;
        };
        match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(handle) => self.schedule.borrow_mut().scheduled(handle),
            Err(e) => log::warn!("[frame] requestAnimationFrame failed: {:?}", e),
        }
    }

    fn cancel(&self) {
        let pending = self.schedule.borrow_mut().cancel();
        if let (Some(handle), Some(window)) = (pending, web::window()) {
            _ = window.cancel_animation_frame(handle);
        }
    }
}

/// Runs a callback once per display refresh until cancelled or dropped.
pub struct AnimationLoop {
    inner: Rc<LoopInner>,
}

impl AnimationLoop {
    pub fn start(mut on_frame: impl FnMut() + 'static) -> Self {
        let inner = Rc::new(LoopInner {
            schedule: RefCell::new(FrameSchedule::default()),
            tick: RefCell::new(None),
        });
        // The closure lives inside `inner`; a weak handle avoids a cycle.
        let weak: Weak<LoopInner> = Rc::downgrade(&inner);
        *inner.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            if !inner.schedule.borrow_mut().begin_frame() {
                return;
            }
            on_frame();
            inner.request_next();
        }) as Box<dyn FnMut()>));
        inner.request_next();
        Self { inner }
    }

    pub fn cancel(&self) {
        self.inner.cancel();
    }

    pub fn frames(&self) -> u64 {
        self.inner.schedule.borrow().frames()
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.inner.cancel();
        self.inner.tick.borrow_mut().take();
    }
}
