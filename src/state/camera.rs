// Pan state for the demo canvas maps
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub zoom: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub panning: bool,
    pub last_x: f64,
    pub last_y: f64,
}
impl Default for Camera {
    fn default() -> Self {
        Self {
            zoom: 2.5,
            offset_x: 0.0,
            offset_y: 0.0,
            panning: false,
            last_x: 0.0,
            last_y: 0.0,
        }
    }
}

impl Camera {
    pub fn begin_pan(&mut self, x: f64, y: f64) {
        self.panning = true;
        self.last_x = x;
        self.last_y = y;
    }

    /// Move the view by the pointer delta since the last call. Returns true if it moved.
    pub fn pan_to(&mut self, x: f64, y: f64) -> bool {
        if !self.panning {
            return false;
        }
        let dx = x - self.last_x;
        let dy = y - self.last_y;
        self.offset_x += dx;
        self.offset_y += dy;
        self.last_x = x;
        self.last_y = y;
        dx != 0.0 || dy != 0.0
    }

    pub fn end_pan(&mut self) {
        self.panning = false;
    }

    /// Copy the shared view (zoom and offset) from another camera, leaving pan state alone.
    pub fn follow(&mut self, other: &Camera) {
        self.zoom = other.zoom;
        self.offset_x = other.offset_x;
        self.offset_y = other.offset_y;
    }

    pub fn same_view(&self, other: &Camera) -> bool {
        self.zoom == other.zoom && self.offset_x == other.offset_x && self.offset_y == other.offset_y
    }
}
