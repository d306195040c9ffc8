//! `#[wasm_bindgen]` exports for the orrery.
//!
//! The runner lives in a `thread_local!` and every export is a free function.
//! The host calls `orrery_init` once, then `orrery_frame` from
//! `requestAnimationFrame`, and reads the packed frame through
//! `orrery_buffer_ptr` / `orrery_buffer_len`.

pub mod runner;

pub use runner::OrreryRunner;

use std::cell::RefCell;

use orrery_engine::{BodyId, Catalogue, InputEvent, OrreryConfig};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<OrreryRunner>> = const { RefCell::new(None) };
}

fn with_runner<R>(f: impl FnOnce(&mut OrreryRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("Orrery not initialized. Call orrery_init() first.");
        f(runner)
    })
}

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Start the orrery. Both arguments are optional JSON documents; omitted
/// ones fall back to the defaults and the built-in solar system.
#[wasm_bindgen]
pub fn orrery_init(
    config_json: Option<String>,
    catalogue_json: Option<String>,
) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = match config_json {
        Some(json) => OrreryConfig::from_json(&json).map_err(js_error)?,
        None => OrreryConfig::default(),
    };
    let catalogue = match catalogue_json {
        Some(json) => Catalogue::from_json(&json).map_err(js_error)?,
        None => Catalogue::solar_system(),
    };

    let runner = OrreryRunner::new(config, catalogue).map_err(js_error)?;
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("orrery-web: initialized");
    Ok(())
}

/// Replace the body catalogue. The current selection is kept by name.
#[wasm_bindgen]
pub fn orrery_load_catalogue(json: &str) -> Result<(), JsValue> {
    let catalogue = Catalogue::from_json(json).map_err(js_error)?;
    with_runner(|r| r.set_catalogue(catalogue));
    Ok(())
}

/// Run one frame. `timestamp_ms` is the `requestAnimationFrame` timestamp.
#[wasm_bindgen]
pub fn orrery_frame(timestamp_ms: f64) {
    with_runner(|r| {
        r.tick_at(timestamp_ms);
    });
}

/// The host paused its animation loop (e.g. the tab was hidden).
#[wasm_bindgen]
pub fn orrery_stop() {
    with_runner(|r| r.stop());
}

// ---- Pointer and keys ----

#[wasm_bindgen]
pub fn orrery_pointer_down(x: f64, y: f64) {
    with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
}

#[wasm_bindgen]
pub fn orrery_pointer_move(x: f64, y: f64) {
    with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
}

#[wasm_bindgen]
pub fn orrery_pointer_up(x: f64, y: f64) {
    with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
}

/// Mouse wheel. Positive `notches` zoom in.
#[wasm_bindgen]
pub fn orrery_wheel(notches: f64, x: f64, y: f64) {
    with_runner(|r| r.push_input(InputEvent::Wheel { notches, x, y }));
}

/// Zoom by a factor around (x, y), e.g. from a pinch or a +/- button.
#[wasm_bindgen]
pub fn orrery_zoom(factor: f64, x: f64, y: f64) {
    with_runner(|r| r.push_input(InputEvent::Zoom { factor, x, y }));
}

#[wasm_bindgen]
pub fn orrery_escape() {
    with_runner(|r| r.push_input(InputEvent::Escape));
}

#[wasm_bindgen]
pub fn orrery_resize(width: f64, height: f64) {
    with_runner(|r| r.push_input(InputEvent::Resize { width, height }));
}

// ---- Controls ----

/// Select a body by index; a negative index clears the selection.
#[wasm_bindgen]
pub fn orrery_select(index: i32) {
    let id = u32::try_from(index).ok().map(BodyId);
    with_runner(|r| r.push_input(InputEvent::Select(id)));
}

#[wasm_bindgen]
pub fn orrery_set_speed(days_per_second: f64) {
    with_runner(|r| r.push_input(InputEvent::SetSpeed(days_per_second)));
}

#[wasm_bindgen]
pub fn orrery_set_time(days: f64) {
    with_runner(|r| r.push_input(InputEvent::SetTime(days)));
}

#[wasm_bindgen]
pub fn orrery_step_time(days: f64) {
    with_runner(|r| r.push_input(InputEvent::StepTime(days)));
}

#[wasm_bindgen]
pub fn orrery_toggle_pause() {
    with_runner(|r| r.push_input(InputEvent::TogglePause));
}

#[wasm_bindgen]
pub fn orrery_toggle_paths() {
    with_runner(|r| r.push_input(InputEvent::TogglePaths));
}

#[wasm_bindgen]
pub fn orrery_reset_view() {
    with_runner(|r| r.push_input(InputEvent::ResetView));
}

/// Typed speed. Returns the value the field should show afterwards.
#[wasm_bindgen]
pub fn orrery_submit_speed(text: &str) -> f64 {
    with_runner(|r| r.submit_speed_text(text))
}

/// Typed absolute time in days. Returns the value the field should show.
#[wasm_bindgen]
pub fn orrery_submit_time(text: &str) -> f64 {
    with_runner(|r| r.submit_time_text(text))
}

// ---- Data accessors ----

/// Body facts as JSON, or `undefined` for an unknown index.
#[wasm_bindgen]
pub fn orrery_body_info(index: u32) -> Option<String> {
    with_runner(|r| r.body_info(index))
        .and_then(|info| serde_json::to_string(&info).ok())
}

#[wasm_bindgen]
pub fn orrery_body_count() -> u32 {
    with_runner(|r| r.orrery().catalogue().len() as u32)
}

/// Simulated days at full precision. The frame buffer only carries an f32
/// copy, so text displays should read this.
#[wasm_bindgen]
pub fn orrery_total_days() -> f64 {
    with_runner(|r| r.orrery().clock().total_days())
}

#[wasm_bindgen]
pub fn orrery_speed() -> f64 {
    with_runner(|r| r.orrery().clock().speed())
}

/// Elapsed time as "X years, Y days".
#[wasm_bindgen]
pub fn orrery_elapsed_text() -> String {
    with_runner(|r| r.orrery().frame().elapsed.to_string())
}

#[wasm_bindgen]
pub fn orrery_scene_extent() -> f64 {
    with_runner(|r| r.orrery().scene_extent())
}

/// Orbit ellipses in scene px, 5 values per orbiting body:
/// body index, centre x, centre y, semi-major, semi-minor.
#[wasm_bindgen]
pub fn orrery_orbit_paths() -> Vec<f64> {
    with_runner(|r| {
        r.orrery()
            .orbit_paths()
            .into_iter()
            .flat_map(|(id, path)| {
                [id.0 as f64, path.center.x, path.center.y, path.semi_major, path.semi_minor]
            })
            .collect()
    })
}

/// Points along one body's orbit in scene px, flattened as x, y pairs,
/// starting at perihelion. Empty for the central body or an unknown index.
#[wasm_bindgen]
pub fn orrery_orbit_points(index: u32, samples: u32) -> Vec<f64> {
    with_runner(|r| r.orbit_points(index, samples as usize))
}

#[wasm_bindgen]
pub fn orrery_buffer_ptr() -> *const f32 {
    with_runner(|r| r.buffer_ptr())
}

#[wasm_bindgen]
pub fn orrery_buffer_len() -> u32 {
    with_runner(|r| r.buffer_len())
}
