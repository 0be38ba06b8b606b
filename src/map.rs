//! Contracts the compare control expects from its collaborators.

use std::cell::RefCell;
use std::rc::Rc;
use web_sys::HtmlElement;

pub type MapHandler = Rc<dyn Fn()>;

/// A map view that can be overlaid by the compare control.
pub trait CompareMap {
    /// Element hosting the map. `None` once the map has been torn down.
    fn container(&self) -> Option<HtmlElement>;
    fn on(&self, event: &str, handler: MapHandler);
    /// Unsubscribe `handler`, matched by identity.
    fn off(&self, event: &str, handler: &MapHandler);
}

/// Teardown token returned by a move synchronizer. Runs at most once.
pub struct SyncHandle {
    clear: Option<Box<dyn FnOnce()>>,
}

impl SyncHandle {
    pub fn new(clear: impl FnOnce() + 'static) -> Self {
        Self {
            clear: Some(Box::new(clear)),
        }
    }

    /// For maps that are not kept in sync.
    pub fn detached() -> Self {
        Self { clear: None }
    }

    pub fn clear(&mut self) {
        if let Some(clear) = self.clear.take() {
            clear();
        }
    }
}

/// Named handler registry for `CompareMap` implementations.
#[derive(Default)]
pub struct MapEvents {
    handlers: RefCell<Vec<(String, MapHandler)>>,
}

impl MapEvents {
    pub fn on(&self, event: &str, handler: MapHandler) {
        self.handlers.borrow_mut().push((event.to_string(), handler));
    }

    pub fn off(&self, event: &str, handler: &MapHandler) {
        let mut handlers = self.handlers.borrow_mut();
        if let Some(i) = handlers
            .iter()
            .position(|(name, h)| name == event && Rc::ptr_eq(h, handler))
        {
            handlers.remove(i);
        }
    }

    pub fn fire(&self, event: &str) {
        let matching: Vec<MapHandler> = self
            .handlers
            .borrow()
            .iter()
            .filter(|(name, _)| name == event)
            .map(|(_, h)| h.clone())
            .collect();
        for h in matching {
            h();
        }
    }

    pub fn count(&self, event: &str) -> usize {
        self.handlers
            .borrow()
            .iter()
            .filter(|(name, _)| name == event)
            .count()
    }

    pub fn clear(&self) {
        self.handlers.borrow_mut().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn sync_handle_runs_once() {
        let hits = Rc::new(Cell::new(0));
        let mut handle = {
            let hits = hits.clone();
            SyncHandle::new(move || hits.set(hits.get() + 1))
        };
        handle.clear();
        handle.clear();
        assert_eq!(hits.get(), 1);
        SyncHandle::detached().clear();
    }

    #[test]
    fn events_fire_by_name_and_unsubscribe_by_identity() {
        let events = MapEvents::default();
        let hits = Rc::new(Cell::new(0));
        let handler: MapHandler = {
            let hits = hits.clone();
            Rc::new(move || hits.set(hits.get() + 1))
        };
        events.on("resize", handler.clone());
        events.fire("move");
        assert_eq!(hits.get(), 0);
        events.fire("resize");
        assert_eq!(hits.get(), 1);
        events.off("move", &handler);
        assert_eq!(events.count("resize"), 1);
        events.off("resize", &handler);
        events.fire("resize");
        assert_eq!(hits.get(), 1);
        assert_eq!(events.count("resize"), 0);
    }

    #[test]
    fn handler_may_unsubscribe_itself_while_firing() {
        let events = Rc::new(MapEvents::default());
        let slot: Rc<RefCell<Option<MapHandler>>> = Rc::new(RefCell::new(None));
        let handler: MapHandler = {
            let events = events.clone();
            let slot = slot.clone();
            Rc::new(move || {
                if let Some(me) = slot.borrow().as_ref() {
                    events.off("resize", me);
                }
            })
        };
        *slot.borrow_mut() = Some(handler.clone());
        events.on("resize", handler);
        events.fire("resize");
        assert_eq!(events.count("resize"), 0);
        slot.borrow_mut().take();
    }
}
