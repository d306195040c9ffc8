use glam::DVec2;

use crate::api::types::{BodyId, ViewTransform};

/// What the camera is locked onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Free camera: drag pans, wheel zooms to the cursor.
    #[default]
    None,
    /// The central body is selected. It never moves, so the camera stays free.
    Central(BodyId),
    /// An orbiting body is selected and followed every frame.
    Body(BodyId),
}

impl Focus {
    pub fn id(self) -> Option<BodyId> {
        match self {
            Focus::None => None,
            Focus::Central(id) | Focus::Body(id) => Some(id),
        }
    }
}

/// Pan/zoom/follow camera over the orbit scene.
///
/// Maps scene coordinates (px from the central body at zoom 1) to viewport
/// coordinates (px from the viewport's top-left corner):
/// `screen = viewport / 2 + pan + scene * scale`.
#[derive(Debug, Clone)]
pub struct CameraState {
    /// Zoom level, always within [min_zoom, max_zoom].
    scale: f64,
    /// Screen-space offset of the scene origin from the viewport centre.
    pan: DVec2,
    /// Viewport size in screen px.
    viewport: DVec2,
    focus: Focus,
    /// A manual drag gesture is in progress.
    dragging: bool,
    min_zoom: f64,
    max_zoom: f64,
}

impl CameraState {
    pub fn new(viewport_width: f64, viewport_height: f64, min_zoom: f64, max_zoom: f64) -> Self {
        Self {
            scale: 1.0_f64.clamp(min_zoom, max_zoom),
            pan: DVec2::ZERO,
            viewport: DVec2::new(viewport_width, viewport_height),
            focus: Focus::None,
            dragging: false,
            min_zoom,
            max_zoom,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn pan_offset(&self) -> DVec2 {
        self.pan
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected body, central or not.
    pub fn focused(&self) -> Option<BodyId> {
        self.focus.id()
    }

    /// Whether pan is being driven by a followed body.
    pub fn is_following(&self) -> bool {
        matches!(self.focus, Focus::Body(_))
    }

    pub fn transform(&self) -> ViewTransform {
        ViewTransform {
            pan_x: self.pan.x,
            pan_y: self.pan.y,
            scale: self.scale,
        }
    }

    /// Viewport centre in screen coordinates.
    pub fn center(&self) -> DVec2 {
        self.viewport / 2.0
    }

    /// Scene point → screen point.
    pub fn to_screen(&self, scene: DVec2) -> DVec2 {
        self.center() + self.pan + scene * self.scale
    }

    /// Screen point → scene point.
    pub fn to_scene(&self, screen: DVec2) -> DVec2 {
        (screen - self.center() - self.pan) / self.scale
    }

    /// Resize the viewport. Pan is relative to the centre, so the scene
    /// stays centred where it was.
    pub fn resize(&mut self, width: f64, height: f64) {
        if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
            self.viewport = DVec2::new(width, height);
        }
    }

    /// Multiply the zoom by `factor`, keeping the scene point under `anchor`
    /// (screen coordinates) fixed. While following a body the anchor is the
    /// viewport centre, so the followed body stays centred.
    /// Returns whether the scale changed.
    pub fn zoom(&mut self, factor: f64, anchor: DVec2) -> bool {
        if !factor.is_finite() || factor <= 0.0 {
            return false;
        }
        let old_zoom = self.scale;
        let new_zoom = (old_zoom * factor).clamp(self.min_zoom, self.max_zoom);
        if (new_zoom - old_zoom).abs() < 1e-12 {
            return false;
        }

        let anchor = if self.is_following() || !anchor.is_finite() {
            DVec2::ZERO
        } else {
            anchor - self.center()
        };

        // Scene point under the anchor, then the pan that puts it back there
        let scene = (anchor - self.pan) / old_zoom;
        self.pan = anchor - scene * new_zoom;
        self.scale = new_zoom;
        true
    }

    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Shift the scene by a screen-space delta.
    /// Ignored unless a drag is active, and ignored while following a body.
    pub fn pan(&mut self, delta: DVec2) -> bool {
        if !self.dragging || self.is_following() || !delta.is_finite() {
            return false;
        }
        self.pan += delta;
        true
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    pub fn clear_focus(&mut self) {
        self.focus = Focus::None;
    }

    /// Per-frame update, after positions are solved.
    /// While following, pins the followed body to the viewport centre;
    /// otherwise leaves pan where the user put it.
    pub fn tick(&mut self, focused_offset: Option<DVec2>) {
        if !self.is_following() {
            return;
        }
        if let Some(offset) = focused_offset {
            self.pan = -offset * self.scale;
        }
    }

    /// Back to zoom 1 centred on the origin. Focus is kept.
    pub fn reset(&mut self) {
        self.scale = 1.0_f64.clamp(self.min_zoom, self.max_zoom);
        self.pan = DVec2::ZERO;
    }
}
