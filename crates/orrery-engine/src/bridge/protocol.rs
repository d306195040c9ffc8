/// Flat frame buffer read by the JavaScript presentation layer.
///
/// Layout (all values f32 / 4 bytes):
/// ```text
/// [Header: 12 floats]
/// [Bodies: body_count × 4 floats]
/// ```
///
/// Body records are indexed by body id. Offsets are scene px from the
/// central body; the view transform in the header maps them to the screen.

use bytemuck::{Pod, Zeroable};

use crate::core::orrery::Frame;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Header value for "nothing selected".
pub const NO_FOCUS: f32 = -1.0;

/// The frame counter wraps here; past 2^24 an f32 skips integers.
pub const FRAME_COUNTER_WRAP: u64 = 1 << 24;

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct FrameHeader {
    pub protocol_version: f32,
    /// Frame number modulo `FRAME_COUNTER_WRAP`; use it to detect new frames.
    pub frame_counter: f32,
    /// Simulated days since epoch, narrowed to f32 for drawing. Resolution
    /// drops at large values; text displays read the clock's f64 instead.
    pub total_days: f32,
    /// Simulated days per real second.
    pub speed: f32,
    /// 1.0 when paused.
    pub paused: f32,
    pub pan_x: f32,
    pub pan_y: f32,
    pub scale: f32,
    /// Selected body index, or `NO_FOCUS`.
    pub focused: f32,
    pub body_count: f32,
    /// 1.0 when orbit paths should be drawn.
    pub paths_visible: f32,
    pub _pad: f32,
}

impl FrameHeader {
    pub const FLOATS: usize = 12;
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct BodyRecord {
    pub x: f32,
    pub y: f32,
    /// 0.0 for the central body, which has no offset (draw it at the origin).
    pub present: f32,
    pub _pad: f32,
}

impl BodyRecord {
    pub const FLOATS: usize = 4;
}

fn flag(value: bool) -> f32 {
    if value {
        1.0
    } else {
        0.0
    }
}

/// Packs frames into the flat buffer.
pub struct FrameLayout;

impl FrameLayout {
    /// Buffer length in floats for `body_count` bodies.
    pub fn floats_for(body_count: usize) -> usize {
        FrameHeader::FLOATS + body_count * BodyRecord::FLOATS
    }

    pub fn header(frame: &Frame) -> FrameHeader {
        FrameHeader {
            protocol_version: PROTOCOL_VERSION,
            frame_counter: (frame.number % FRAME_COUNTER_WRAP) as f32,
            total_days: frame.total_days as f32,
            speed: frame.speed as f32,
            paused: flag(frame.paused),
            pan_x: frame.transform.pan_x as f32,
            pan_y: frame.transform.pan_y as f32,
            scale: frame.transform.scale as f32,
            focused: frame.focused.map_or(NO_FOCUS, |id| id.0 as f32),
            body_count: frame.bodies.len() as f32,
            paths_visible: flag(frame.paths_visible),
            _pad: 0.0,
        }
    }

    /// Overwrite `buffer` with the packed frame.
    /// The buffer is reused across frames, so its allocation is stable
    /// unless the body count grows.
    pub fn pack(frame: &Frame, buffer: &mut Vec<f32>) {
        buffer.clear();
        buffer.reserve(Self::floats_for(frame.bodies.len()));

        let header = Self::header(frame);
        buffer.extend_from_slice(bytemuck::cast_slice(&[header]));

        for body in &frame.bodies {
            let record = match body.offset {
                Some(offset) => BodyRecord {
                    x: offset.x as f32,
                    y: offset.y as f32,
                    present: 1.0,
                    _pad: 0.0,
                },
                None => BodyRecord::default(),
            };
            buffer.extend_from_slice(bytemuck::cast_slice(&[record]));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::BodyId;
    use crate::core::orrery::Orrery;

    #[test]
    fn struct_sizes_match_float_counts() {
        assert_eq!(std::mem::size_of::<FrameHeader>(), FrameHeader::FLOATS * 4);
        assert_eq!(std::mem::size_of::<BodyRecord>(), BodyRecord::FLOATS * 4);
    }

    #[test]
    fn pack_writes_header_then_bodies() {
        let mut orrery = Orrery::with_defaults();
        orrery.focus(Some(BodyId(3)));
        let frame = orrery.tick(1.0).clone();

        let mut buffer = Vec::new();
        FrameLayout::pack(&frame, &mut buffer);
        assert_eq!(buffer.len(), FrameLayout::floats_for(14));

        let header: &[FrameHeader] = bytemuck::cast_slice(&buffer[..FrameHeader::FLOATS]);
        let header = header[0];
        assert_eq!(header.protocol_version, PROTOCOL_VERSION);
        assert_eq!(header.frame_counter, 1.0);
        assert_eq!(header.total_days, 10.0);
        assert_eq!(header.focused, 3.0);
        assert_eq!(header.body_count, 14.0);
        assert_eq!(header.paths_visible, 1.0);

        let records: &[BodyRecord] = bytemuck::cast_slice(&buffer[FrameHeader::FLOATS..]);
        assert_eq!(records[0].present, 0.0);
        let earth = frame.bodies[3].offset.unwrap();
        assert_eq!(records[3].x, earth.x as f32);
        assert_eq!(records[3].y, earth.y as f32);
        assert_eq!(records[3].present, 1.0);
    }

    #[test]
    fn frame_counter_wraps_before_losing_precision() {
        let orrery = Orrery::with_defaults();
        let mut frame = orrery.frame().clone();

        frame.number = FRAME_COUNTER_WRAP - 1;
        let last = FrameLayout::header(&frame).frame_counter;
        frame.number = FRAME_COUNTER_WRAP;
        assert_eq!(FrameLayout::header(&frame).frame_counter, 0.0);
        frame.number = FRAME_COUNTER_WRAP + 1;
        assert_eq!(FrameLayout::header(&frame).frame_counter, 1.0);
        assert_eq!(last, (FRAME_COUNTER_WRAP - 1) as f32);
        assert_ne!(last, FRAME_COUNTER_WRAP as f32);
    }

    #[test]
    fn no_focus_is_negative() {
        let orrery = Orrery::with_defaults();
        assert_eq!(FrameLayout::header(orrery.frame()).focused, NO_FOCUS);
    }

    #[test]
    fn pack_replaces_previous_contents() {
        let orrery = Orrery::with_defaults();
        let mut buffer = vec![9.0; 500];
        FrameLayout::pack(orrery.frame(), &mut buffer);
        assert_eq!(buffer.len(), FrameLayout::floats_for(14));
    }
}
