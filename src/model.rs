//! Core data types for the compare control.
//! Geometry is in CSS pixels, relative to the viewport unless noted.

use serde::{Deserialize, Serialize};

use crate::error::CompareError;

/// Right edge of the clip rectangle; wide enough to never cut the map.
pub const CLIP_RIGHT: &str = "999em";

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    /// Left edge of the secondary map's container in viewport coordinates.
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(left: f64, width: f64, height: f64) -> Self {
        Self { left, width, height }
    }

    pub fn center(&self) -> f64 {
        self.width / 2.0
    }

    /// Clamp a container-relative offset into `[0, width]`. NaN collapses to 0.
    pub fn clamp(&self, x: f64) -> f64 {
        if x.is_nan() {
            return 0.0;
        }
        x.min(self.width).max(0.0)
    }
}

/// Clip applied to the secondary map's container. Only `bottom` and `left` vary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipRect {
    pub bottom: f64,
    pub left: f64,
}

impl ClipRect {
    pub fn to_css(&self) -> String {
        format!("rect(0, {}, {}px, {}px)", CLIP_RIGHT, self.bottom, self.left)
    }
}

/// The visual result of placing the divider at a clamped offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub x: f64,
    pub clip: ClipRect,
    /// Center-relative offset held *before* this placement, present only when the
    /// offset actually changed and a previous offset existed.
    pub previous_offset: Option<f64>,
}

impl Placement {
    pub fn transform(&self) -> String {
        format!("translate({}px, 0)", self.x)
    }
}

/// Input modality of a drag session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Modality {
    Mouse,
    Touch,
}

impl Modality {
    pub fn press_event(self) -> &'static str {
        match self {
            Modality::Mouse => "mousedown",
            Modality::Touch => "touchstart",
        }
    }

    pub fn move_event(self) -> &'static str {
        match self {
            Modality::Mouse => "mousemove",
            Modality::Touch => "touchmove",
        }
    }

    pub fn end_event(self) -> &'static str {
        match self {
            Modality::Mouse => "mouseup",
            Modality::Touch => "touchend",
        }
    }

    /// Hover handling on touch keeps the overlay hit-testable; mouse hover passes through.
    pub fn pointer_events(self) -> &'static str {
        match self {
            Modality::Mouse => "none",
            Modality::Touch => "auto",
        }
    }
}

/// Events a [`crate::Compare`] publishes. Only one exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideEvent {
    SlideEnd,
}

impl SlideEvent {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "slideend" => Some(SlideEvent::SlideEnd),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareOptions {
    /// Follow hover movement over either map, not only active drags.
    pub mousemove: bool,
}

impl CompareOptions {
    pub fn from_json(raw: &str) -> Result<Self, CompareError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| String::from("{}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_keeps_offsets_inside_width() {
        let b = Bounds::new(10.0, 400.0, 300.0);
        assert_eq!(b.clamp(-25.0), 0.0);
        assert_eq!(b.clamp(401.0), 400.0);
        assert_eq!(b.clamp(123.5), 123.5);
        assert_eq!(b.clamp(f64::NAN), 0.0);
        assert_eq!(b.clamp(f64::INFINITY), 400.0);
    }

    #[test]
    fn clip_css_matches_rect_syntax() {
        let clip = ClipRect { bottom: 300.0, left: 150.0 };
        assert_eq!(clip.to_css(), "rect(0, 999em, 300px, 150px)");
        let clip = ClipRect { bottom: 300.0, left: 150.5 };
        assert_eq!(clip.to_css(), "rect(0, 999em, 300px, 150.5px)");
    }

    #[test]
    fn transform_only_moves_horizontally() {
        let p = Placement {
            x: 42.0,
            clip: ClipRect { bottom: 1.0, left: 42.0 },
            previous_offset: None,
        };
        assert_eq!(p.transform(), "translate(42px, 0)");
    }

    #[test]
    fn modality_event_pairs_are_disjoint() {
        assert_eq!(Modality::Mouse.move_event(), "mousemove");
        assert_eq!(Modality::Mouse.end_event(), "mouseup");
        assert_eq!(Modality::Touch.move_event(), "touchmove");
        assert_eq!(Modality::Touch.end_event(), "touchend");
        assert_ne!(Modality::Mouse.end_event(), Modality::Touch.end_event());
    }

    #[test]
    fn only_slideend_is_recognized() {
        assert_eq!(SlideEvent::parse("slideend"), Some(SlideEvent::SlideEnd));
        assert_eq!(SlideEvent::parse("slide"), None);
        assert_eq!(SlideEvent::parse("SLIDEEND"), None);
    }

    #[test]
    fn options_parse_with_defaults() {
        assert_eq!(CompareOptions::from_json("{}").ok(), Some(CompareOptions::default()));
        let on = CompareOptions::from_json(r#"{"mousemove":true}"#).ok();
        assert_eq!(on, Some(CompareOptions { mousemove: true }));
        assert!(CompareOptions::from_json("not json").is_err());
    }

    #[test]
    fn options_json_reloads() {
        let opts = CompareOptions { mousemove: true };
        let back = CompareOptions::from_json(&opts.to_json()).ok();
        assert_eq!(back, Some(opts));
    }
}
