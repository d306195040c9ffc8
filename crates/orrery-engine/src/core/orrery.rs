/// Orrery: the per-frame simulation step.
///
/// Owns the simulation clock, the camera and the per-body state, and applies
/// host input between frames. Each `tick` is one atomic step:
/// advance the clock, solve every body, re-pin the camera, publish a `Frame`.

use glam::DVec2;

use crate::api::config::OrreryConfig;
use crate::api::types::{BodyId, ViewTransform};
use crate::catalogue::{BodyDesc, BodyInfo, Catalogue};
use crate::core::clock::{Elapsed, SimulationClock};
use crate::core::kepler;
use crate::error::ConfigError;
use crate::input::entry::parse_entry;
use crate::input::queue::InputEvent;
use crate::view::camera::{CameraState, Focus};
use crate::view::orbit_path::{scene_extent, OrbitPath};

/// Per-body output of a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    pub id: BodyId,
    /// Scene-px offset from the central body; `None` for the central body.
    pub offset: Option<DVec2>,
}

/// Everything the presentation layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Frames published since start-up.
    pub number: u64,
    pub total_days: f64,
    pub elapsed: Elapsed,
    pub speed: f64,
    pub paused: bool,
    pub transform: ViewTransform,
    pub focused: Option<BodyId>,
    pub paths_visible: bool,
    /// Indexed by `BodyId`.
    pub bodies: Vec<BodyState>,
}

/// Click-vs-drag tracking for the pointer.
#[derive(Debug, Clone, Copy, Default)]
struct DragState {
    active: bool,
    moved: bool,
    start: DVec2,
    last: DVec2,
}

pub struct Orrery {
    config: OrreryConfig,
    catalogue: Catalogue,
    clock: SimulationClock,
    camera: CameraState,
    drag: DragState,
    paths_visible: bool,
    frame: Frame,
}

impl Orrery {
    /// Build an orrery from host-supplied settings. The config is validated
    /// first, since inverted zoom or speed ranges cannot be clamped to.
    pub fn new(config: OrreryConfig, catalogue: Catalogue) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, catalogue))
    }

    /// Built-in solar system with default settings.
    pub fn with_defaults() -> Self {
        Self::build(OrreryConfig::default(), Catalogue::solar_system())
    }

    fn build(config: OrreryConfig, catalogue: Catalogue) -> Self {
        let clock = SimulationClock::new(config.initial_speed, config.min_speed, config.max_speed);
        let camera = CameraState::new(
            config.viewport_width,
            config.viewport_height,
            config.min_zoom,
            config.max_zoom,
        );
        let frame = Frame {
            number: 0,
            total_days: clock.total_days(),
            elapsed: clock.elapsed(),
            speed: clock.speed(),
            paused: clock.is_paused(),
            transform: camera.transform(),
            focused: None,
            paths_visible: true,
            bodies: Vec::with_capacity(catalogue.len()),
        };

        let mut orrery = Self {
            config,
            catalogue,
            clock,
            camera,
            drag: DragState::default(),
            paths_visible: true,
            frame,
        };
        orrery.solve_positions();
        orrery.publish();

        let central = orrery.catalogue.central();
        log::info!(
            "orrery: {} bodies around {}",
            orrery.catalogue.len(),
            orrery.catalogue.get(central).map_or("?", |b| b.name.as_str())
        );
        orrery
    }

    // ── Accessors ──────────────────────────────────────────────────

    pub fn config(&self) -> &OrreryConfig {
        &self.config
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    /// The most recently published frame.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Static facts about a body, for tooltips and the info panel.
    pub fn body_info(&self, id: BodyId) -> Option<BodyInfo> {
        self.catalogue.get(id).map(BodyDesc::info)
    }

    /// Drawable orbit ellipses, in scene px, for every orbiting body.
    pub fn orbit_paths(&self) -> Vec<(BodyId, OrbitPath)> {
        self.catalogue
            .iter()
            .filter_map(|(id, body)| {
                OrbitPath::from_elements(&body.elements, self.config.pixels_per_unit)
                    .map(|path| (id, path))
            })
            .collect()
    }

    /// Side length of the square scene holding every orbit.
    pub fn scene_extent(&self) -> f64 {
        scene_extent(&self.catalogue, &self.config)
    }

    // ── Input ──────────────────────────────────────────────────────

    /// Apply one host event. Call between frames.
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { x, y } => self.pointer_down(DVec2::new(x, y)),
            InputEvent::PointerMove { x, y } => self.pointer_move(DVec2::new(x, y)),
            InputEvent::PointerUp { x, y } => self.pointer_up(DVec2::new(x, y)),
            InputEvent::Zoom { factor, x, y } => {
                self.zoom(factor, DVec2::new(x, y));
            }
            InputEvent::Wheel { notches, x, y } => {
                let factor = self.config.zoom_step.powf(notches);
                self.zoom(factor, DVec2::new(x, y));
            }
            InputEvent::Select(id) => self.focus(id),
            InputEvent::Escape => self.focus(None),
            InputEvent::SetSpeed(speed) => {
                self.set_speed(speed);
            }
            InputEvent::SetTime(days) => {
                self.set_time(days);
            }
            InputEvent::StepTime(days) => {
                self.step_time(days);
            }
            InputEvent::TogglePause => {
                self.clock.toggle_pause();
            }
            InputEvent::TogglePaths => self.paths_visible = !self.paths_visible,
            InputEvent::ResetView => self.camera.reset(),
            InputEvent::Resize { width, height } => self.camera.resize(width, height),
        }
    }

    pub fn set_speed(&mut self, speed: f64) -> f64 {
        self.clock.set_speed(speed)
    }

    pub fn set_time(&mut self, days: f64) -> f64 {
        self.clock.set_absolute(days)
    }

    pub fn step_time(&mut self, delta_days: f64) -> f64 {
        self.clock.advance_by(delta_days)
    }

    /// Speed typed as text. Returns the value the field should now show:
    /// the accepted (clamped) speed, or the previous one if the text is invalid.
    pub fn submit_speed_text(&mut self, text: &str) -> f64 {
        match parse_entry(text) {
            Some(speed) => self.set_speed(speed),
            None => {
                log::debug!("ignoring speed entry {:?}", text);
                self.clock.speed()
            }
        }
    }

    /// Absolute time typed as text, in days. Same revert rules as speed.
    pub fn submit_time_text(&mut self, text: &str) -> f64 {
        match parse_entry(text) {
            Some(days) => self.set_time(days),
            None => {
                log::debug!("ignoring time entry {:?}", text);
                self.clock.total_days()
            }
        }
    }

    /// Zoom around a viewport point (ignored in favour of the centre while
    /// following a body).
    pub fn zoom(&mut self, factor: f64, anchor: DVec2) -> bool {
        self.camera.zoom(factor, anchor)
    }

    /// Select a body, or clear the selection. Unknown ids clear it.
    pub fn focus(&mut self, id: Option<BodyId>) {
        let focus = match id {
            Some(id) if !self.catalogue.contains(id) => {
                log::debug!("focus: unknown body id {}", id.0);
                Focus::None
            }
            Some(id) if self.catalogue.is_central(id) => Focus::Central(id),
            Some(id) => Focus::Body(id),
            None => Focus::None,
        };
        if focus != self.camera.focus() {
            log::debug!("focus: {:?} -> {:?}", self.camera.focus(), focus);
        }
        self.camera.set_focus(focus);
    }

    fn pointer_down(&mut self, pos: DVec2) {
        self.drag = DragState {
            active: true,
            moved: false,
            start: pos,
            last: pos,
        };
        self.camera.begin_drag();
    }

    fn pointer_move(&mut self, pos: DVec2) {
        if !self.drag.active {
            return;
        }
        if !self.drag.moved && pos.distance(self.drag.start) > self.config.drag_threshold {
            self.drag.moved = true;
        }
        if self.drag.moved {
            self.camera.pan(pos - self.drag.last);
            self.drag.last = pos;
        }
    }

    fn pointer_up(&mut self, pos: DVec2) {
        if self.drag.active && !self.drag.moved {
            // A press that never became a drag is a click
            let hit = self.hit_test(pos);
            self.focus(hit);
        }
        self.drag = DragState::default();
        self.camera.end_drag();
    }

    // ── Queries ────────────────────────────────────────────────────

    /// Viewport position of a body as of the last frame.
    pub fn body_screen_position(&self, id: BodyId) -> Option<DVec2> {
        let state = self.frame.bodies.get(id.index())?;
        Some(self.camera.to_screen(state.offset.unwrap_or(DVec2::ZERO)))
    }

    /// Nearest body whose drawn disc (plus slack) contains the viewport point.
    pub fn hit_test(&self, pos: DVec2) -> Option<BodyId> {
        let scale = self.camera.scale();
        let mut best: Option<(BodyId, f64)> = None;
        for (id, body) in self.catalogue.iter() {
            let Some(screen) = self.body_screen_position(id) else {
                continue;
            };
            let dist = screen.distance(pos);
            let hit_r = body.visual_diameter_px(&self.config) / 2.0 * scale + self.config.hit_slack;
            if dist < hit_r && best.map_or(true, |(_, d)| dist < d) {
                best = Some((id, dist));
            }
        }
        best.map(|(id, _)| id)
    }

    // ── Catalogue ──────────────────────────────────────────────────

    /// Swap the body catalogue. The selection follows the selected body's
    /// name into the new catalogue, or is cleared if the name is gone.
    pub fn set_catalogue(&mut self, catalogue: Catalogue) {
        let focused_name = self
            .camera
            .focused()
            .and_then(|id| self.catalogue.get(id))
            .map(|body| body.name.clone());

        self.catalogue = catalogue;
        log::info!("orrery: catalogue replaced, {} bodies", self.catalogue.len());

        let new_id = focused_name.as_deref().and_then(|name| self.catalogue.find(name));
        if let (Some(name), None) = (&focused_name, new_id) {
            log::warn!("focus: {} is not in the new catalogue, clearing", name);
        }
        self.focus(new_id);

        self.solve_positions();
        let offset = self.focused_offset();
        self.camera.tick(offset);
        self.publish();
    }

    // ── Frame ──────────────────────────────────────────────────────

    /// Run one frame: advance by `real_seconds` of wall-clock time, solve
    /// every body, update the camera and publish the result.
    pub fn tick(&mut self, real_seconds: f64) -> &Frame {
        self.clock.advance_real(real_seconds);
        self.solve_positions();
        let offset = self.focused_offset();
        self.camera.tick(offset);
        self.frame.number += 1;
        self.publish();
        &self.frame
    }

    fn solve_positions(&mut self) {
        let days = self.clock.total_days();
        let scale = self.config.pixels_per_unit;
        self.frame.bodies.clear();
        self.frame
            .bodies
            .extend(self.catalogue.iter().map(|(id, body)| BodyState {
                id,
                offset: kepler::position(&body.elements, days).map(|p| p * scale),
            }));
    }

    /// Resolve the followed body by id against this frame's positions.
    /// A focus that no longer resolves is dropped.
    fn focused_offset(&mut self) -> Option<DVec2> {
        match self.camera.focus() {
            Focus::None => None,
            Focus::Central(id) => {
                if !self.catalogue.is_central(id) {
                    log::warn!("focus: body {} is no longer central, clearing", id.0);
                    self.camera.clear_focus();
                }
                None
            }
            Focus::Body(id) => {
                let offset = self.frame.bodies.get(id.index()).and_then(|b| b.offset);
                if offset.is_none() {
                    log::warn!("focus: body {} has no position, clearing", id.0);
                    self.camera.clear_focus();
                }
                offset
            }
        }
    }

    fn publish(&mut self) {
        self.frame.total_days = self.clock.total_days();
        self.frame.elapsed = self.clock.elapsed();
        self.frame.speed = self.clock.speed();
        self.frame.paused = self.clock.is_paused();
        self.frame.transform = self.camera.transform();
        self.frame.focused = self.camera.focused();
        self.frame.paths_visible = self.paths_visible;
    }
}

impl Default for Orrery {
    fn default() -> Self {
        Self::with_defaults()
    }
}
