// Divider position bookkeeping: clamping, clip geometry and change detection.
use crate::model::{Bounds, ClipRect, Placement};

#[derive(Debug, Clone, Default)]
pub struct PositionState {
    bounds: Bounds,
    x: Option<f64>,
}

impl PositionState {
    pub fn new(bounds: Bounds) -> Self {
        Self { bounds, x: None }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Current divider offset from the container's left edge.
    pub fn offset(&self) -> Option<f64> {
        self.x
    }

    pub fn center_offset(&self) -> Option<f64> {
        self.x.map(|x| x - self.bounds.center())
    }

    /// Clamp `x`, store it and describe how it should be rendered.
    ///
    /// `previous_offset` on the result is the center-relative offset held before this
    /// call. Listeners receive that value, so a change is always reported one update
    /// late; existing consumers rely on this.
    pub fn set_position(&mut self, x: f64) -> Placement {
        let x = self.bounds.clamp(x);
        let previous_offset = match self.x {
            Some(old) if old != x => Some(old - self.bounds.center()),
            _ => None,
        };
        self.x = Some(x);
        Placement {
            x,
            clip: ClipRect {
                bottom: self.bounds.height,
                left: x,
            },
            previous_offset,
        }
    }

    /// Place the divider at a signed offset from the container center.
    pub fn set_slider(&mut self, center_offset: f64) -> Placement {
        self.set_position(self.bounds.center() + center_offset)
    }

    /// Adopt freshly measured bounds and re-apply the stored offset, if any.
    pub fn resize(&mut self, bounds: Bounds) -> Option<Placement> {
        self.bounds = bounds;
        self.x.map(|x| self.set_position(x))
    }

    /// Container-relative offset for a pointer at viewport `client_x`.
    pub fn pointer_offset(&self, client_x: f64) -> f64 {
        self.bounds.clamp(client_x - self.bounds.left)
    }
}
