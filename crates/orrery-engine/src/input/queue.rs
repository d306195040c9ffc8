use crate::api::types::BodyId;

/// Input events the orrery understands.
/// Pointer coordinates are viewport px from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A touch/click began.
    PointerDown { x: f64, y: f64 },
    /// A touch/cursor moved.
    PointerMove { x: f64, y: f64 },
    /// A touch/click ended.
    PointerUp { x: f64, y: f64 },
    /// Pinch or programmatic zoom by a scalar factor around (x, y).
    Zoom { factor: f64, x: f64, y: f64 },
    /// Mouse wheel: positive `notches` zoom in, negative zoom out.
    Wheel { notches: f64, x: f64, y: f64 },
    /// Select a body from a list, or clear the selection.
    Select(Option<BodyId>),
    /// Escape key: clear the selection.
    Escape,
    /// Speed slider moved (days per real second).
    SetSpeed(f64),
    /// Jump to an absolute simulated time in days.
    SetTime(f64),
    /// Step simulated time by a signed number of days.
    StepTime(f64),
    TogglePause,
    /// Show/hide orbit paths.
    TogglePaths,
    /// Zoom 1, pan 0.
    ResetView,
    /// Viewport size changed.
    Resize { width: f64, height: f64 },
}

/// A queue of input events.
/// The host pushes events between frames; the frame loop drains them all
/// before it reads any state, so a frame never sees half an event.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerDown { x: 10.0, y: 20.0 });
        q.push(InputEvent::Escape);
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn drain_keeps_order() {
        let mut q = InputQueue::new();
        q.push(InputEvent::SetTime(100.0));
        q.push(InputEvent::StepTime(-30.0));
        q.push(InputEvent::Select(Some(BodyId(3))));
        let events = q.drain();
        assert_eq!(
            events,
            vec![
                InputEvent::SetTime(100.0),
                InputEvent::StepTime(-30.0),
                InputEvent::Select(Some(BodyId(3))),
            ]
        );
    }
}
