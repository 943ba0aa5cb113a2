//! Canvas 2D renderer for the particle network behind the page.

use crate::dom;
use crate::frame::AnimationLoop;
use instant::Instant;
use landing_core::markup::ids;
use landing_core::{
    link_stroke_style, particle_fill_style, FixedStep, ParticleConfig, ParticleField, LINK_WIDTH,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("no window")]
    NoWindow,
    #[error("missing canvas #{0}")]
    MissingCanvas(&'static str),
    #[error("2D context unavailable")]
    NoContext,
    #[error("resize listener: {0}")]
    Listener(String),
}

struct Surface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    field: ParticleField,
    clock: FixedStep,
    last_instant: Instant,
    fill_style: String,
}

impl Surface {
    fn fit_to_window(&mut self) {
        let Some((width, height)) = dom::viewport_size() else {
            return;
        };
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.field.resize(width, height);
        self.clock.reset();
    }

    fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        for _ in 0..self.clock.advance(dt) {
            self.field.step();
        }
        self.draw();
    }

    fn draw(&self) {
        let ctx = &self.ctx;
        let bounds = self.field.bounds();
        ctx.clear_rect(0.0, 0.0, bounds.x as f64, bounds.y as f64);

        let particles = self.field.particles();
        ctx.set_fill_style_str(&self.fill_style);
        for p in particles {
            ctx.begin_path();
            _ = ctx.arc(
                p.position.x as f64,
                p.position.y as f64,
                p.radius as f64,
                0.0,
                TAU,
            );
            ctx.fill();
        }

        ctx.set_line_width(LINK_WIDTH);
        for link in self.field.links() {
            let Some(style) = link_stroke_style(link.opacity) else {
                continue;
            };
            let (a, b) = (&particles[link.a], &particles[link.b]);
            ctx.begin_path();
            ctx.move_to(a.position.x as f64, a.position.y as f64);
            ctx.line_to(b.position.x as f64, b.position.y as f64);
            ctx.set_stroke_style_str(&style);
            ctx.stroke();
        }
    }
}

/// Full-viewport particle animation. Dropping it stops the animation and
/// unhooks the resize listener.
pub struct ParticleBackground {
    surface: Rc<RefCell<Surface>>,
    animation: Option<AnimationLoop>,
    resize: Option<dom::Listener>,
}

fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> Result<web::CanvasRenderingContext2d, SurfaceError> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<web::CanvasRenderingContext2d>().ok())
        .ok_or(SurfaceError::NoContext)
}

impl ParticleBackground {
    pub fn attach(document: &web::Document) -> Result<Self, SurfaceError> {
        let window = web::window().ok_or(SurfaceError::NoWindow)?;
        let canvas = document
            .get_element_by_id(ids::CANVAS)
            .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
            .ok_or(SurfaceError::MissingCanvas(ids::CANVAS))?;
        let ctx = context_2d(&canvas)?;

        let field = ParticleField::with_rng(0, 0, ParticleConfig::default(), StdRng::from_entropy());
        let surface = Rc::new(RefCell::new(Surface {
            canvas,
            ctx,
            field,
            clock: FixedStep::default(),
            last_instant: Instant::now(),
            fill_style: particle_fill_style(),
        }));
        surface.borrow_mut().fit_to_window();

        let surface_resize = surface.clone();
        let resize = dom::Listener::new(&window, "resize", move |_| {
            surface_resize.borrow_mut().fit_to_window();
        })
        .map_err(|e| SurfaceError::Listener(e.to_string()))?;

        let surface_tick = surface.clone();
        let animation = AnimationLoop::start(move || {
            surface_tick.borrow_mut().frame();
        });

        Ok(Self {
            surface,
            animation: Some(animation),
            resize: Some(resize),
        })
    }

    pub fn particle_count(&self) -> usize {
        self.surface.borrow().field.particles().len()
    }

    pub fn frames_drawn(&self) -> u64 {
        self.animation.as_ref().map_or(0, AnimationLoop::frames)
    }

    /// Cancel the pending frame and remove the resize listener.
    pub fn detach(&mut self) {
        if let Some(animation) = self.animation.take() {
            animation.cancel();
            log::debug!("[background] stopped after {} frames", animation.frames());
        }
        self.resize.take();
    }
}

impl Drop for ParticleBackground {
    fn drop(&mut self) {
        self.detach();
    }
}
