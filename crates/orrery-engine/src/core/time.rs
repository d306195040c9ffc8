/// Frame timer.
/// Turns monotonic host timestamps (milliseconds) into real-second deltas.
pub struct FrameClock {
    /// Timestamp of the previous frame, if any.
    last_ms: Option<f64>,
    /// Upper bound on a single delta, in seconds.
    max_dt: f64,
}

impl FrameClock {
    pub fn new(max_dt: f64) -> Self {
        Self {
            last_ms: None,
            max_dt,
        }
    }

    /// Record a frame timestamp and return the seconds since the previous one.
    /// The first frame after construction or `reset` yields zero, as does a
    /// timestamp that goes backwards.
    pub fn delta_seconds(&mut self, timestamp_ms: f64) -> f64 {
        if !timestamp_ms.is_finite() {
            return 0.0;
        }
        let dt = match self.last_ms {
            Some(last) => ((timestamp_ms - last) / 1000.0).clamp(0.0, self.max_dt),
            None => 0.0,
        };
        self.last_ms = Some(timestamp_ms);
        dt
    }

    /// Forget the previous timestamp, e.g. when the loop is stopped.
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}
