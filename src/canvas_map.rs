//! A pannable canvas grid standing in for a map renderer in the demo app.
//!
//! Fires `"resize"` when the window resizes and `"move"` after each pan step.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement, HtmlElement, MouseEvent};

use crate::dom::{self, EventClosure};
use crate::error::CompareError;
use crate::map::{CompareMap, MapEvents, MapHandler, SyncHandle};
use crate::state::Camera;
use crate::util::clog;

const TILE_PX: f64 = 32.0;
// Grid coordinates of the markers drawn on both maps.
const LANDMARKS: [(f64, f64); 5] = [(2.5, 2.5), (6.5, 3.5), (4.5, 7.5), (10.5, 5.5), (13.5, 9.5)];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: &'static str,
    pub grid: &'static str,
    pub accent: &'static str,
    pub label: &'static str,
}

pub const DAY: Palette = Palette {
    background: "#e8eef4",
    grid: "#b8c4d0",
    accent: "#1f6feb",
    label: "#161b22",
};

pub const NIGHT: Palette = Palette {
    background: "#0e1116",
    grid: "#2f3641",
    accent: "#f0883e",
    label: "#e6edf3",
};

pub struct CanvasMap {
    name: &'static str,
    container: RefCell<Option<HtmlElement>>,
    canvas: HtmlCanvasElement,
    palette: Palette,
    camera: RefCell<Camera>,
    events: MapEvents,
    listeners: PanListeners,
}

struct PanListeners {
    on_down: EventClosure,
    on_move: EventClosure,
    on_up: EventClosure,
    on_resize: EventClosure,
}

impl PanListeners {
    fn new(weak: &Weak<CanvasMap>) -> Self {
        let event = |f: fn(&CanvasMap, &Event)| {
            let weak = weak.clone();
            Closure::wrap(Box::new(move |e: Event| {
                if let Some(map) = weak.upgrade() {
                    f(&map, &e);
                }
            }) as Box<dyn FnMut(_)>)
        };
        Self {
            on_down: event(CanvasMap::on_down),
            on_move: event(CanvasMap::on_move),
            on_up: event(|m, _| m.camera.borrow_mut().end_pan()),
            on_resize: event(|m, _| m.on_window_resize()),
        }
    }
}

fn mouse_xy(e: &Event) -> Option<(f64, f64)> {
    e.dyn_ref::<MouseEvent>()
        .map(|m| (m.client_x() as f64, m.client_y() as f64))
}

impl CanvasMap {
    /// Create a canvas inside `container` and start listening for pans and resizes.
    pub fn attach(
        container: HtmlElement,
        name: &'static str,
        palette: Palette,
    ) -> Result<Rc<Self>, CompareError> {
        let document = dom::document()?;
        let window = web_sys::window().ok_or_else(|| CompareError::Dom("no window".into()))?;
        let canvas = document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| CompareError::Dom("created element is not a canvas".into()))?;
        dom::set_style(&canvas, "display", "block");
        container.append_child(&canvas)?;

        let map = Rc::new_cyclic(|weak| CanvasMap {
            name,
            container: RefCell::new(Some(container)),
            canvas,
            palette,
            camera: RefCell::new(Camera::default()),
            events: MapEvents::default(),
            listeners: PanListeners::new(weak),
        });
        let l = &map.listeners;
        dom::listen(&map.canvas, "mousedown", &l.on_down);
        dom::listen(&window, "mousemove", &l.on_move);
        dom::listen(&window, "mouseup", &l.on_up);
        dom::listen(&window, "resize", &l.on_resize);
        map.fit();
        map.draw();
        clog(&format!("map {}: attached", name));
        Ok(map)
    }

    /// Stop listening and remove the canvas. The container is left in place.
    pub fn detach(&self) {
        let Some(_container) = self.container.borrow_mut().take() else {
            return;
        };
        let l = &self.listeners;
        dom::unlisten(&self.canvas, "mousedown", &l.on_down);
        if let Some(window) = web_sys::window() {
            dom::unlisten(&window, "mousemove", &l.on_move);
            dom::unlisten(&window, "mouseup", &l.on_up);
            dom::unlisten(&window, "resize", &l.on_resize);
        }
        self.events.clear();
        self.canvas.remove();
        clog(&format!("map {}: detached", self.name));
    }

    pub fn camera(&self) -> Camera {
        *self.camera.borrow()
    }

    /// Adopt another map's view without announcing a move.
    pub fn follow(&self, leader: &Camera) {
        let changed = {
            let mut cam = self.camera.borrow_mut();
            let changed = !cam.same_view(leader);
            cam.follow(leader);
            changed
        };
        if changed {
            self.draw();
        }
    }

    fn fit(&self) {
        if let Some(container) = self.container.borrow().as_ref() {
            self.canvas.set_width(container.client_width().max(0) as u32);
            self.canvas.set_height(container.client_height().max(0) as u32);
        }
    }

    fn on_down(&self, e: &Event) {
        if let Some((x, y)) = mouse_xy(e) {
            self.camera.borrow_mut().begin_pan(x, y);
        }
    }

    fn on_move(&self, e: &Event) {
        let Some((x, y)) = mouse_xy(e) else {
            return;
        };
        let moved = self.camera.borrow_mut().pan_to(x, y);
        if moved {
            self.draw();
            self.events.fire("move");
        }
    }

    fn on_window_resize(&self) {
        self.fit();
        self.draw();
        self.events.fire("resize");
    }

    pub fn draw(&self) {
        if !self.canvas.is_connected() {
            return;
        }
        let ctx = match self.canvas.get_context("2d").ok().flatten() {
            Some(c) => match c.dyn_into::<CanvasRenderingContext2d>() {
                Ok(ctx) => ctx,
                Err(_) => return,
            },
            None => return,
        };
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        let cam = self.camera();
        let p = self.palette;
        let spacing = (cam.zoom * TILE_PX).max(4.0);

        ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0).ok();
        ctx.set_fill_style_str(p.background);
        ctx.fill_rect(0.0, 0.0, w, h);

        ctx.set_stroke_style_str(p.grid);
        ctx.set_line_width(1.0);
        let mut x = cam.offset_x.rem_euclid(spacing);
        while x < w {
            ctx.begin_path();
            ctx.move_to(x, 0.0);
            ctx.line_to(x, h);
            ctx.stroke();
            x += spacing;
        }
        let mut y = cam.offset_y.rem_euclid(spacing);
        while y < h {
            ctx.begin_path();
            ctx.move_to(0.0, y);
            ctx.line_to(w, y);
            ctx.stroke();
            y += spacing;
        }

        ctx.set_fill_style_str(p.accent);
        for (lx, ly) in LANDMARKS {
            ctx.begin_path();
            ctx.arc(
                cam.offset_x + lx * spacing,
                cam.offset_y + ly * spacing,
                0.3 * spacing,
                0.0,
                std::f64::consts::PI * 2.0,
            )
            .ok();
            ctx.fill();
        }

        ctx.set_fill_style_str(p.label);
        ctx.set_font("14px sans-serif");
        ctx.fill_text(self.name, 12.0, h - 12.0).ok();
    }
}

impl CompareMap for CanvasMap {
    fn container(&self) -> Option<HtmlElement> {
        self.container.borrow().clone()
    }

    fn on(&self, event: &str, handler: MapHandler) {
        self.events.on(event, handler);
    }

    fn off(&self, event: &str, handler: &MapHandler) {
        self.events.off(event, handler);
    }
}

/// Keep two maps' cameras in lockstep. `b` adopts `a`'s view immediately.
pub fn sync_move(a: &Rc<CanvasMap>, b: &Rc<CanvasMap>) -> SyncHandle {
    let follow = |from: &Rc<CanvasMap>, to: &Rc<CanvasMap>| -> MapHandler {
        let from = Rc::downgrade(from);
        let to = Rc::downgrade(to);
        Rc::new(move || {
            if let (Some(from), Some(to)) = (from.upgrade(), to.upgrade()) {
                to.follow(&from.camera());
            }
        })
    };
    let a_to_b = follow(a, b);
    let b_to_a = follow(b, a);
    a.on("move", a_to_b.clone());
    b.on("move", b_to_a.clone());
    b.follow(&a.camera());

    let (weak_a, weak_b) = (Rc::downgrade(a), Rc::downgrade(b));
    SyncHandle::new(move || {
        if let Some(a) = weak_a.upgrade() {
            a.off("move", &a_to_b);
        }
        if let Some(b) = weak_b.upgrade() {
            b.off("move", &b_to_a);
        }
    })
}
