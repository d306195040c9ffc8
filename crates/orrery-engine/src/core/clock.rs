use std::fmt;

/// Days in a Julian year; also the step of the "± year" controls.
pub const DAYS_PER_YEAR: f64 = 365.25;
/// Step of the "± month" controls.
pub const DAYS_PER_MONTH: f64 = DAYS_PER_YEAR / 12.0;

/// Simulated time accumulator.
///
/// `total_days` never goes below zero. `speed` is simulated days per real
/// second and is independent of the accumulated time.
#[derive(Debug, Clone)]
pub struct SimulationClock {
    total_days: f64,
    speed: f64,
    min_speed: f64,
    max_speed: f64,
    paused: bool,
}

/// Whole years and leftover whole days, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elapsed {
    pub years: u64,
    pub days: u32,
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} years, {} days", self.years, self.days)
    }
}

impl SimulationClock {
    pub fn new(speed: f64, min_speed: f64, max_speed: f64) -> Self {
        let mut clock = Self {
            total_days: 0.0,
            speed: min_speed,
            min_speed,
            max_speed,
            paused: false,
        };
        clock.set_speed(speed);
        clock
    }

    pub fn total_days(&self) -> f64 {
        self.total_days
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Set the speed multiplier, clamped to the configured range.
    /// Non-finite values are ignored. Returns the speed now in effect.
    pub fn set_speed(&mut self, speed: f64) -> f64 {
        if speed.is_finite() {
            self.speed = speed.clamp(self.min_speed, self.max_speed);
        }
        self.speed
    }

    /// Shift simulated time by `delta_days` (either sign), clamping at zero.
    pub fn advance_by(&mut self, delta_days: f64) -> f64 {
        if delta_days.is_finite() {
            self.total_days = (self.total_days + delta_days).max(0.0);
        }
        self.total_days
    }

    /// Overwrite simulated time, clamping at zero.
    pub fn set_absolute(&mut self, days: f64) -> f64 {
        if days.is_finite() {
            self.total_days = days.max(0.0);
        }
        self.total_days
    }

    /// Advance by `speed × real_seconds` unless paused.
    /// Returns the number of simulated days that elapsed.
    pub fn advance_real(&mut self, real_seconds: f64) -> f64 {
        if self.paused || !real_seconds.is_finite() || real_seconds <= 0.0 {
            return 0.0;
        }
        let before = self.total_days;
        self.advance_by(self.speed * real_seconds);
        self.total_days - before
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    /// Split the accumulated time into years and days.
    pub fn elapsed(&self) -> Elapsed {
        Elapsed {
            years: (self.total_days / DAYS_PER_YEAR).floor() as u64,
            days: (self.total_days % DAYS_PER_YEAR).floor() as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock() -> SimulationClock {
        SimulationClock::new(10.0, 0.0, 1000.0)
    }

    #[test]
    fn negative_absolute_time_clamps_to_zero() {
        let mut c = clock();
        c.set_absolute(500.0);
        assert_eq!(c.set_absolute(-5.0), 0.0);
        assert_eq!(c.total_days(), 0.0);
    }

    #[test]
    fn advance_is_additive() {
        let mut split = clock();
        split.set_absolute(100.0);
        split.advance_by(36.5);
        split.advance_by(-12.25);

        let mut joined = clock();
        joined.set_absolute(100.0);
        joined.advance_by(36.5 - 12.25);

        assert!((split.total_days() - joined.total_days()).abs() < 1e-12);
    }

    #[test]
    fn stepping_back_past_zero_clamps() {
        let mut c = clock();
        c.set_absolute(10.0);
        c.advance_by(-DAYS_PER_YEAR);
        assert_eq!(c.total_days(), 0.0);
    }

    #[test]
    fn speed_clamps_without_touching_time() {
        let mut c = clock();
        c.set_absolute(42.0);
        assert_eq!(c.set_speed(5000.0), 1000.0);
        assert_eq!(c.set_speed(-3.0), 0.0);
        assert_eq!(c.total_days(), 42.0);
    }

    #[test]
    fn non_finite_input_is_ignored() {
        let mut c = clock();
        c.set_absolute(7.0);
        c.set_speed(f64::NAN);
        c.advance_by(f64::INFINITY);
        c.set_absolute(f64::NAN);
        assert_eq!(c.speed(), 10.0);
        assert_eq!(c.total_days(), 7.0);
    }

    #[test]
    fn real_time_scales_by_speed() {
        let mut c = clock();
        let advanced = c.advance_real(0.5);
        assert!((advanced - 5.0).abs() < 1e-12);
        assert!((c.total_days() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn paused_clock_holds_still() {
        let mut c = clock();
        assert!(c.toggle_pause());
        assert_eq!(c.advance_real(2.0), 0.0);
        // discrete jumps still work while paused
        c.advance_by(DAYS_PER_MONTH);
        assert!((c.total_days() - 30.4375).abs() < 1e-12);
    }

    #[test]
    fn elapsed_splits_years_and_days() {
        let mut c = clock();
        c.set_absolute(2.0 * DAYS_PER_YEAR + 40.7);
        let elapsed = c.elapsed();
        assert_eq!(elapsed, Elapsed { years: 2, days: 40 });
        assert_eq!(elapsed.to_string(), "2 years, 40 days");
    }
}
