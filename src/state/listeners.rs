use std::rc::Rc;

/// Receives divider movements.
pub trait SlideListener {
    /// `previous_offset` is the center-relative offset held before the change.
    fn on_slide(&self, previous_offset: f64);
}

impl<F: Fn(f64)> SlideListener for F {
    fn on_slide(&self, previous_offset: f64) {
        self(previous_offset)
    }
}

pub type SlideHandle = Rc<dyn SlideListener>;

/// Wrap a closure as a handle that can later be passed to `off`.
pub fn slide_listener(f: impl Fn(f64) + 'static) -> SlideHandle {
    Rc::new(f)
}

/// Ordered subscriber list. Duplicates allowed; removal is by handle identity.
#[derive(Default, Clone)]
pub struct SlideListeners {
    entries: Vec<SlideHandle>,
}

impl SlideListeners {
    pub fn push(&mut self, listener: SlideHandle) {
        self.entries.push(listener);
    }

    /// Drop the first entry pointing at the same listener. Returns whether one was found.
    pub fn remove(&mut self, listener: &SlideHandle) -> bool {
        match self.entries.iter().position(|l| Rc::ptr_eq(l, listener)) {
            Some(i) => {
                self.entries.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copy of the current list, so listeners may subscribe or unsubscribe mid-dispatch.
    pub fn snapshot(&self) -> Vec<SlideHandle> {
        self.entries.clone()
    }
}

pub fn notify_all(listeners: &[SlideHandle], previous_offset: f64) {
    for l in listeners {
        l.on_slide(previous_offset);
    }
}
