// Drag session state extracted from the compare control
use crate::model::Modality;

/// Whether document-level drag listeners are attached, and for which input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Gesture {
    #[default]
    Idle,
    Dragging(Modality),
}

impl Gesture {
    /// Divider pressed. Returns the modality whose move/end pair must be attached.
    pub fn press(&mut self, modality: Modality) -> Option<Modality> {
        match *self {
            Gesture::Idle => {
                *self = Gesture::Dragging(modality);
                Some(modality)
            }
            Gesture::Dragging(_) => None,
        }
    }

    /// Release seen for `modality`. Returns the pair to detach when it ends the session.
    pub fn release(&mut self, modality: Modality) -> Option<Modality> {
        match *self {
            Gesture::Dragging(active) if active == modality => {
                *self = Gesture::Idle;
                Some(active)
            }
            _ => None,
        }
    }

    /// Abandon any session, returning the pair still attached.
    pub fn reset(&mut self) -> Option<Modality> {
        match std::mem::take(self) {
            Gesture::Dragging(active) => Some(active),
            Gesture::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Gesture::Dragging(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_release_cycle_attaches_and_detaches_once() {
        let mut g = Gesture::default();
        for _ in 0..3 {
            assert_eq!(g.press(Modality::Mouse), Some(Modality::Mouse));
            assert!(g.is_dragging());
            assert_eq!(g.release(Modality::Mouse), Some(Modality::Mouse));
            assert_eq!(g, Gesture::Idle);
        }
    }

    #[test]
    fn second_press_while_dragging_attaches_nothing() {
        let mut g = Gesture::default();
        g.press(Modality::Touch);
        assert_eq!(g.press(Modality::Touch), None);
        assert_eq!(g.press(Modality::Mouse), None);
        assert_eq!(g, Gesture::Dragging(Modality::Touch));
    }

    #[test]
    fn mouse_up_does_not_end_touch_drag() {
        let mut g = Gesture::default();
        g.press(Modality::Touch);
        assert_eq!(g.release(Modality::Mouse), None);
        assert_eq!(g, Gesture::Dragging(Modality::Touch));
        assert_eq!(g.release(Modality::Touch), Some(Modality::Touch));
        assert_eq!(g, Gesture::Idle);
    }

    #[test]
    fn release_while_idle_is_ignored() {
        let mut g = Gesture::default();
        assert_eq!(g.release(Modality::Mouse), None);
        assert_eq!(g.release(Modality::Touch), None);
        assert_eq!(g.reset(), None);
    }

    #[test]
    fn reset_returns_pair_in_flight() {
        let mut g = Gesture::default();
        g.press(Modality::Mouse);
        assert_eq!(g.reset(), Some(Modality::Mouse));
        assert_eq!(g.reset(), None);
    }
}
