use orrery_engine::{
    BodyInfo, Catalogue, ConfigError, Frame, FrameClock, FrameLayout, InputEvent, InputQueue,
    Orrery, OrreryConfig,
};

/// Drives the orrery from host callbacks.
///
/// Pointer, key and control callbacks are queued; each animation frame drains
/// the queue, steps the orrery and repacks the flat buffer the JavaScript side
/// reads. Text submissions are applied immediately because the caller needs
/// the value to show back in the field; events queued before them are
/// applied first so they cannot overwrite the typed value later.
pub struct OrreryRunner {
    orrery: Orrery,
    input: InputQueue,
    frame_clock: FrameClock,
    /// Packed copy of the latest frame.
    buffer: Vec<f32>,
}

impl OrreryRunner {
    pub fn new(config: OrreryConfig, catalogue: Catalogue) -> Result<Self, ConfigError> {
        Ok(Self::with_orrery(Orrery::new(config, catalogue)?))
    }

    fn with_orrery(orrery: Orrery) -> Self {
        let frame_clock = FrameClock::new(orrery.config().max_frame_seconds);
        let mut buffer = Vec::with_capacity(FrameLayout::floats_for(orrery.catalogue().len()));
        FrameLayout::pack(orrery.frame(), &mut buffer);
        Self {
            orrery,
            input: InputQueue::new(),
            frame_clock,
            buffer,
        }
    }

    pub fn orrery(&self) -> &Orrery {
        &self.orrery
    }

    /// Queue an input event for the next frame.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame with an explicit real-time delta in seconds.
    pub fn tick(&mut self, dt: f64) -> &Frame {
        self.apply_pending();
        self.orrery.tick(dt);
        FrameLayout::pack(self.orrery.frame(), &mut self.buffer);
        self.orrery.frame()
    }

    /// Run one frame from a host timestamp in milliseconds.
    pub fn tick_at(&mut self, timestamp_ms: f64) -> &Frame {
        let dt = self.frame_clock.delta_seconds(timestamp_ms);
        self.tick(dt)
    }

    /// The host stopped its frame loop. The next `tick_at` starts from zero
    /// so the pause is not simulated.
    pub fn stop(&mut self) {
        self.frame_clock.reset();
    }

    pub fn submit_speed_text(&mut self, text: &str) -> f64 {
        self.apply_pending();
        self.orrery.submit_speed_text(text)
    }

    pub fn submit_time_text(&mut self, text: &str) -> f64 {
        self.apply_pending();
        self.orrery.submit_time_text(text)
    }

    /// Apply queued events in arrival order.
    fn apply_pending(&mut self) {
        for event in self.input.drain() {
            self.orrery.apply(event);
        }
    }

    pub fn body_info(&self, index: u32) -> Option<BodyInfo> {
        self.orrery.body_info(orrery_engine::BodyId(index))
    }

    /// Sampled orbit of one body, flattened as x, y pairs.
    pub fn orbit_points(&self, index: u32, samples: usize) -> Vec<f64> {
        self.orrery
            .orbit_paths()
            .into_iter()
            .find(|(id, _)| id.0 == index)
            .map(|(_, path)| path.points(samples).into_iter().flat_map(|p| [p.x, p.y]).collect())
            .unwrap_or_default()
    }

    pub fn set_catalogue(&mut self, catalogue: Catalogue) {
        self.orrery.set_catalogue(catalogue);
        FrameLayout::pack(self.orrery.frame(), &mut self.buffer);
    }

    // ---- Pointer accessors for buffer reads ----

    pub fn buffer_ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }

    pub fn buffer_len(&self) -> u32 {
        self.buffer.len() as u32
    }
}

impl Default for OrreryRunner {
    fn default() -> Self {
        Self::with_orrery(Orrery::with_defaults())
    }
}
