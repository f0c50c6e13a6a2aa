/// Host buffer layout.
/// Must stay in sync with the host page's `protocol.js`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Camera: 20 floats]
/// [Instances: max_instances × 20 floats]
/// [Events: max_events × 4 floats]
/// [Lights: max_lights × 12 floats]
/// [Stars: max_stars × 6 floats]
/// ```
///
/// Capacities are written into the header every frame.
/// The host reads them from the header to compute offsets dynamically.

use crate::api::stage::StageConfig;
use crate::api::types::SceneEvent;
use crate::renderer::camera::CameraUniform;
use crate::renderer::instance::NodeInstance;
use crate::renderer::stars::StarPoint;
use crate::systems::lighting::LightInstance;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_PROTOCOL_VERSION: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_ELAPSED: usize = 2;
pub const HEADER_MAX_INSTANCES: usize = 3;
pub const HEADER_INSTANCE_COUNT: usize = 4;
pub const HEADER_ADDITIVE_SPLIT: usize = 5;
pub const HEADER_MAX_EVENTS: usize = 6;
pub const HEADER_EVENT_COUNT: usize = 7;
pub const HEADER_MAX_LIGHTS: usize = 8;
pub const HEADER_LIGHT_COUNT: usize = 9;
pub const HEADER_MAX_STARS: usize = 10;
pub const HEADER_STAR_COUNT: usize = 11;
pub const HEADER_VIEWPORT_WIDTH: usize = 12;
pub const HEADER_VIEWPORT_HEIGHT: usize = 13;
pub const HEADER_LABEL_COUNT: usize = 14;
pub const HEADER_READY: usize = 15;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per node instance (wire format, fixed).
pub const INSTANCE_FLOATS: usize = NodeInstance::FLOATS;

/// Floats per scene event: kind, a, b, c (wire format, fixed).
pub const EVENT_FLOATS: usize = SceneEvent::FLOATS;

/// Floats per light: kind, xyz, rgb, intensity, range, pad×3.
pub const LIGHT_FLOATS: usize = LightInstance::FLOATS;

/// Floats per star: xyz, rgb.
pub const STAR_FLOATS: usize = StarPoint::FLOATS;

/// Floats in the camera block: view-projection (16) + eye (4).
pub const CAMERA_FLOATS: usize = CameraUniform::FLOATS;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_instances: usize,
    pub max_events: usize,
    pub max_lights: usize,
    pub max_stars: usize,

    pub instance_data_floats: usize,
    pub event_data_floats: usize,
    pub light_data_floats: usize,
    pub star_data_floats: usize,

    /// Offset (in floats) where the camera block begins.
    pub camera_offset: usize,
    pub instance_data_offset: usize,
    pub event_data_offset: usize,
    pub light_data_offset: usize,
    pub star_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_instances: usize, max_events: usize, max_lights: usize, max_stars: usize) -> Self {
        let instance_data_floats = max_instances * INSTANCE_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;
        let light_data_floats = max_lights * LIGHT_FLOATS;
        let star_data_floats = max_stars * STAR_FLOATS;

        let camera_offset = HEADER_FLOATS;
        let instance_data_offset = camera_offset + CAMERA_FLOATS;
        let event_data_offset = instance_data_offset + instance_data_floats;
        let light_data_offset = event_data_offset + event_data_floats;
        let star_data_offset = light_data_offset + light_data_floats;

        let buffer_total_floats = star_data_offset + star_data_floats;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            max_instances,
            max_events,
            max_lights,
            max_stars,
            instance_data_floats,
            event_data_floats,
            light_data_floats,
            star_data_floats,
            camera_offset,
            instance_data_offset,
            event_data_offset,
            light_data_offset,
            star_data_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }

    /// Compute layout from a StageConfig.
    pub fn from_config(config: &StageConfig) -> Self {
        Self::new(config.max_instances, config.max_events, config.max_lights, config.max_stars)
    }
}

/// Per-frame values written into the header.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameHeader {
    pub frame: u64,
    pub elapsed: f64,
    pub instance_count: u32,
    pub additive_split: u32,
    pub event_count: u32,
    pub light_count: u32,
    pub star_count: u32,
    pub viewport: (f32, f32),
    pub label_count: u32,
    pub ready: bool,
}

/// Fill the header block. `header` must hold at least `HEADER_FLOATS`.
pub fn write_header(header: &mut [f32], layout: &ProtocolLayout, frame: &FrameHeader) {
    header[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
    header[HEADER_FRAME_COUNTER] = frame.frame as f32;
    header[HEADER_ELAPSED] = frame.elapsed as f32;
    header[HEADER_MAX_INSTANCES] = layout.max_instances as f32;
    header[HEADER_INSTANCE_COUNT] = frame.instance_count as f32;
    header[HEADER_ADDITIVE_SPLIT] = frame.additive_split as f32;
    header[HEADER_MAX_EVENTS] = layout.max_events as f32;
    header[HEADER_EVENT_COUNT] = frame.event_count as f32;
    header[HEADER_MAX_LIGHTS] = layout.max_lights as f32;
    header[HEADER_LIGHT_COUNT] = frame.light_count as f32;
    header[HEADER_MAX_STARS] = layout.max_stars as f32;
    header[HEADER_STAR_COUNT] = frame.star_count as f32;
    header[HEADER_VIEWPORT_WIDTH] = frame.viewport.0;
    header[HEADER_VIEWPORT_HEIGHT] = frame.viewport.1;
    header[HEADER_LABEL_COUNT] = frame.label_count as f32;
    header[HEADER_READY] = if frame.ready { 1.0 } else { 0.0 };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_default_config_matches_expected_sizes() {
        let config = StageConfig::default();
        let layout = ProtocolLayout::from_config(&config);

        assert_eq!(layout.max_instances, config.max_instances);
        assert_eq!(layout.instance_data_floats, config.max_instances * 20);
        assert_eq!(layout.event_data_floats, config.max_events * 4);
        assert_eq!(layout.light_data_floats, config.max_lights * 12);
        assert_eq!(layout.star_data_floats, config.max_stars * 6);
        assert_eq!(layout.camera_offset, 16);
        assert_eq!(layout.instance_data_offset, 36);
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = ProtocolLayout::new(100, 20, 4, 2000);

        assert_eq!(layout.camera_offset, HEADER_FLOATS);
        assert_eq!(layout.instance_data_offset, layout.camera_offset + CAMERA_FLOATS);
        assert_eq!(layout.event_data_offset, layout.instance_data_offset + layout.instance_data_floats);
        assert_eq!(layout.light_data_offset, layout.event_data_offset + layout.event_data_floats);
        assert_eq!(layout.star_data_offset, layout.light_data_offset + layout.light_data_floats);
        assert_eq!(layout.buffer_total_floats, layout.star_data_offset + layout.star_data_floats);
        assert_eq!(layout.buffer_total_bytes, layout.buffer_total_floats * 4);
    }

    #[test]
    fn header_carries_counts_and_capacities() {
        let layout = ProtocolLayout::new(64, 8, 4, 100);
        let frame = FrameHeader {
            frame: 12,
            elapsed: 0.5,
            instance_count: 9,
            additive_split: 6,
            event_count: 1,
            light_count: 2,
            star_count: 100,
            viewport: (800.0, 600.0),
            label_count: 7,
            ready: true,
        };
        let mut header = [0.0f32; HEADER_FLOATS];
        write_header(&mut header, &layout, &frame);

        assert_eq!(header[HEADER_PROTOCOL_VERSION], PROTOCOL_VERSION);
        assert_eq!(header[HEADER_FRAME_COUNTER], 12.0);
        assert_eq!(header[HEADER_MAX_INSTANCES], 64.0);
        assert_eq!(header[HEADER_ADDITIVE_SPLIT], 6.0);
        assert_eq!(header[HEADER_MAX_STARS], 100.0);
        assert_eq!(header[HEADER_VIEWPORT_HEIGHT], 600.0);
        assert_eq!(header[HEADER_READY], 1.0);
    }
}
