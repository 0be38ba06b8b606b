//! The swipe compare control: a draggable divider over two stacked maps.
//!
//! The divider lives in a wrapper appended to the primary map's container. The
//! secondary map's container is clipped so it only shows right of the divider.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::closure::Closure;
use web_sys::{Document, Event, HtmlElement};

use crate::dom::{self, EventClosure};
use crate::error::CompareError;
use crate::map::{CompareMap, MapHandler, SyncHandle};
use crate::model::{Bounds, CompareOptions, Modality, Placement, SlideEvent};
use crate::state::{Gesture, PositionState, SlideHandle, SlideListeners, notify_all};
use crate::util::clog;

pub const WRAPPER_CLASS: &str = "map-compare";
pub const SWIPER_CLASS: &str = "compare-swiper";

pub struct Compare {
    shared: Rc<Shared>,
}

struct Shared {
    options: CompareOptions,
    primary: Rc<dyn CompareMap>,
    secondary: Rc<dyn CompareMap>,
    document: Document,
    wrapper: HtmlElement,
    swiper: HtmlElement,
    // Containers given hover listeners; kept so teardown reaches them after a map detaches.
    hover_targets: Vec<HtmlElement>,
    position: RefCell<PositionState>,
    gesture: Cell<Gesture>,
    listeners: RefCell<SlideListeners>,
    sync: RefCell<SyncHandle>,
    handlers: Handlers,
    removed: Cell<bool>,
}

// Kept alive until the control is dropped, even after `remove`, so a handler
// that tears the control down is never freed mid-call.
struct Handlers {
    on_down: EventClosure,
    on_move: EventClosure,
    on_mouse_up: EventClosure,
    on_touch_end: EventClosure,
    on_resize: MapHandler,
}

impl Handlers {
    fn new(weak: &Weak<Shared>) -> Self {
        let event = |f: fn(&Shared, &Event)| {
            let weak = weak.clone();
            Closure::wrap(Box::new(move |e: Event| {
                if let Some(shared) = weak.upgrade() {
                    f(&shared, &e);
                }
            }) as Box<dyn FnMut(_)>)
        };
        let on_resize: MapHandler = {
            let weak = weak.clone();
            Rc::new(move || {
                if let Some(shared) = weak.upgrade() {
                    shared.on_resize();
                }
            })
        };
        Self {
            on_down: event(Shared::on_down),
            on_move: event(Shared::on_move),
            on_mouse_up: event(|s, _| s.on_release(Modality::Mouse)),
            on_touch_end: event(|s, _| s.on_release(Modality::Touch)),
            on_resize,
        }
    }

    fn end_handler(&self, modality: Modality) -> &EventClosure {
        match modality {
            Modality::Mouse => &self.on_mouse_up,
            Modality::Touch => &self.on_touch_end,
        }
    }
}

impl Compare {
    /// Overlay `secondary` on `primary` and center the divider.
    ///
    /// `sync` is called once with both maps after the first placement; the handle it
    /// returns is cleared on [`Compare::remove`].
    pub fn new<S>(
        primary: Rc<dyn CompareMap>,
        secondary: Rc<dyn CompareMap>,
        sync: S,
        options: CompareOptions,
    ) -> Result<Self, CompareError>
    where
        S: FnOnce(&Rc<dyn CompareMap>, &Rc<dyn CompareMap>) -> SyncHandle,
    {
        let document = dom::document()?;
        let swiper = dom::create_div(&document, SWIPER_CLASS)?;
        let wrapper = dom::create_div(&document, WRAPPER_CLASS)?;
        wrapper.append_child(&swiper)?;

        let primary_container = primary
            .container()
            .ok_or(CompareError::MissingContainer("primary"))?;
        let secondary_container = secondary
            .container()
            .ok_or(CompareError::MissingContainer("secondary"))?;
        primary_container.append_child(&wrapper)?;

        let bounds = dom::measure(&secondary_container);
        clog(&format!(
            "compare: bounds left={} width={} height={}",
            bounds.left, bounds.width, bounds.height
        ));

        let hover_targets = if options.mousemove {
            vec![primary_container, secondary_container]
        } else {
            Vec::new()
        };

        let shared = Rc::new_cyclic(|weak| Shared {
            options,
            primary,
            secondary,
            document,
            wrapper,
            swiper,
            hover_targets,
            position: RefCell::new(PositionState::new(bounds)),
            gesture: Cell::new(Gesture::Idle),
            listeners: RefCell::new(SlideListeners::default()),
            sync: RefCell::new(SyncHandle::detached()),
            handlers: Handlers::new(weak),
            removed: Cell::new(false),
        });

        shared.set_position(bounds.center());
        *shared.sync.borrow_mut() = sync(&shared.primary, &shared.secondary);

        let h = &shared.handlers;
        shared.secondary.on("resize", h.on_resize.clone());
        for target in &shared.hover_targets {
            dom::listen(target, "mousemove", &h.on_move);
        }
        dom::listen(&shared.swiper, Modality::Mouse.press_event(), &h.on_down);
        dom::listen(&shared.swiper, Modality::Touch.press_event(), &h.on_down);

        Ok(Self { shared })
    }

    /// Move the divider to a signed offset from the container center.
    pub fn set_slider(&self, center_offset: f64) {
        let placement = self.shared.position.borrow_mut().set_slider(center_offset);
        self.shared.apply(&placement);
    }

    /// Subscribe to divider changes. Only `"slideend"` is recognized; other names are ignored.
    ///
    /// Listeners receive the center-relative offset held *before* the change.
    pub fn on(&self, event: &str, listener: SlideHandle) {
        if SlideEvent::parse(event).is_some() {
            self.shared.listeners.borrow_mut().push(listener);
        }
    }

    /// Remove the first subscription of `listener`. The event name is not consulted.
    pub fn off(&self, _event: &str, listener: &SlideHandle) {
        self.shared.listeners.borrow_mut().remove(listener);
    }

    /// Detach everything the control attached. Safe to call repeatedly.
    pub fn remove(&self) {
        self.shared.teardown();
    }

    pub fn offset(&self) -> Option<f64> {
        self.shared.position.borrow().offset()
    }

    pub fn center_offset(&self) -> Option<f64> {
        self.shared.position.borrow().center_offset()
    }

    pub fn bounds(&self) -> Bounds {
        self.shared.position.borrow().bounds()
    }

    pub fn is_dragging(&self) -> bool {
        self.shared.gesture.get().is_dragging()
    }

    pub fn listener_count(&self) -> usize {
        self.shared.listeners.borrow().len()
    }

    pub fn wrapper(&self) -> &HtmlElement {
        &self.shared.wrapper
    }

    pub fn swiper(&self) -> &HtmlElement {
        &self.shared.swiper
    }
}

impl Drop for Compare {
    fn drop(&mut self) {
        self.shared.teardown();
    }
}

impl Shared {
    fn set_position(&self, x: f64) {
        let placement = self.position.borrow_mut().set_position(x);
        self.apply(&placement);
    }

    fn apply(&self, placement: &Placement) {
        let transform = placement.transform();
        dom::set_style(&self.wrapper, "transform", &transform);
        dom::set_style(&self.wrapper, "-webkit-transform", &transform);
        if let Some(container) = self.secondary.container() {
            dom::set_style(&container, "clip", &placement.clip.to_css());
        }
        if let Some(previous) = placement.previous_offset {
            let snapshot = self.listeners.borrow().snapshot();
            notify_all(&snapshot, previous);
        }
    }

    fn set_pointer_events(&self, value: &str) {
        dom::set_style(&self.wrapper, "pointer-events", value);
        dom::set_style(&self.swiper, "pointer-events", value);
    }

    fn on_down(&self, event: &Event) {
        let mut gesture = self.gesture.get();
        let attach = gesture.press(dom::modality(event));
        self.gesture.set(gesture);
        if let Some(modality) = attach {
            let h = &self.handlers;
            clog(&format!("compare: drag start ({:?})", modality));
            dom::listen(&self.document, modality.move_event(), &h.on_move);
            dom::listen(&self.document, modality.end_event(), h.end_handler(modality));
        }
    }

    fn on_move(&self, event: &Event) {
        let modality = dom::modality(event);
        if self.options.mousemove {
            self.set_pointer_events(modality.pointer_events());
        }
        let Some(client_x) = dom::client_x(event) else {
            return;
        };
        let x = self.position.borrow().pointer_offset(client_x);
        self.set_position(x);
    }

    fn on_release(&self, modality: Modality) {
        let mut gesture = self.gesture.get();
        let detach = gesture.release(modality);
        self.gesture.set(gesture);
        if let Some(modality) = detach {
            clog(&format!("compare: drag end ({:?})", modality));
            self.detach_drag(modality);
        }
    }

    fn detach_drag(&self, modality: Modality) {
        let h = &self.handlers;
        dom::unlisten(&self.document, modality.move_event(), &h.on_move);
        dom::unlisten(&self.document, modality.end_event(), h.end_handler(modality));
    }

    fn on_resize(&self) {
        let Some(container) = self.secondary.container() else {
            return;
        };
        let bounds = dom::measure(&container);
        clog(&format!("compare: resize width={} height={}", bounds.width, bounds.height));
        let placement = self.position.borrow_mut().resize(bounds);
        if let Some(placement) = placement {
            self.apply(&placement);
        }
    }

    fn teardown(&self) {
        if self.removed.replace(true) {
            return;
        }
        clog("compare: remove");
        // Taken out first so a synchronizer that re-enters cannot double-borrow.
        let mut sync = std::mem::replace(&mut *self.sync.borrow_mut(), SyncHandle::detached());
        sync.clear();

        let mut gesture = self.gesture.get();
        let in_flight = gesture.reset();
        self.gesture.set(gesture);
        if let Some(modality) = in_flight {
            self.detach_drag(modality);
        }

        let h = &self.handlers;
        self.secondary.off("resize", &h.on_resize);
        for target in &self.hover_targets {
            dom::unlisten(target, "mousemove", &h.on_move);
        }
        dom::unlisten(&self.swiper, Modality::Mouse.press_event(), &h.on_down);
        dom::unlisten(&self.swiper, Modality::Touch.press_event(), &h.on_down);

        self.listeners.borrow_mut().clear();
        self.wrapper.remove();
    }
}
