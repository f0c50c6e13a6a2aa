use glam::Vec2;
use crate::api::types::{FrameTime, NodeId, SceneEvent};
use crate::assets::overrides::SceneOverrides;
use crate::assets::phrases::Phrase;
use crate::components::visual::Color;
use crate::core::scene::Scene;
use crate::error::SceneError;
use crate::input::queue::InputQueue;
use crate::renderer::camera::PerspectiveCamera;
use crate::renderer::stars::StarBuffer;
use crate::systems::lighting::LightRig;
use crate::systems::rng::Rng;
use crate::systems::text::LabelTable;

/// Configuration for the engine, provided by the stage.
#[derive(Debug, Clone, PartialEq)]
pub struct StageConfig {
    /// Initial viewport size in CSS pixels (replaced by the first resize).
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// Maximum number of node instances (default: 256).
    pub max_instances: usize,
    /// Maximum number of scene events per frame (default: 16).
    pub max_events: usize,
    /// Maximum number of lights (default: 4).
    pub max_lights: usize,
    /// Maximum number of background stars (default: 4000).
    pub max_stars: usize,
    /// Seed for every random draw the stage makes.
    pub seed: u64,
    pub background: Color,
    /// Exponential fog density (0 disables fog).
    pub fog_density: f32,
    /// When true, an init failure is logged and the scene keeps running
    /// with whatever was built. When false, the failure reaches the host.
    pub guard_init: bool,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            viewport_width: 800.0,
            viewport_height: 600.0,
            max_instances: 256,
            max_events: 16,
            max_lights: 4,
            max_stars: 4000,
            seed: 42,
            background: Color::BLACK,
            fog_density: 0.0,
            guard_init: false,
        }
    }
}

/// Asynchronous load results delivered by the host.
/// Failures carry `SceneError::Font` or `SceneError::PhraseSource`.
#[derive(Debug)]
pub enum AssetEvent {
    FontLoaded,
    FontFailed(SceneError),
    Phrases(Vec<Phrase>),
    PhrasesFailed(SceneError),
}

/// The contract every scene variant fulfils.
pub trait Stage {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> StageConfig {
        StageConfig::default()
    }

    /// Apply host overrides. Called before init, if at all.
    fn configure(&mut self, _overrides: &SceneOverrides) -> Result<(), SceneError> {
        Ok(())
    }

    /// Build the static scene: camera, lights, stars, sun, meteors.
    fn init(&mut self, ctx: &mut EngineContext) -> Result<(), SceneError>;

    /// React to font or phrase load results.
    fn on_asset(&mut self, _ctx: &mut EngineContext, _event: AssetEvent) {}

    /// The frame tick. `ctx.time()` holds the current frame time.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Metadata JSON for the phrase at `index`, for the host's detail view.
    fn phrase_json(&self, _index: usize) -> Option<String> {
        None
    }
}

/// Mutable access to engine state, passed to every `Stage` hook.
pub struct EngineContext {
    pub scene: Scene,
    pub camera: PerspectiveCamera,
    pub labels: LabelTable,
    pub stars: StarBuffer,
    pub lights: LightRig,
    pub events: Vec<SceneEvent>,
    pub rng: Rng,
    viewport: Vec2,
    time: FrameTime,
    max_events: usize,
    next_id: u32,
}

impl EngineContext {
    pub fn new(config: &StageConfig) -> Self {
        let mut camera = PerspectiveCamera::default();
        camera.set_viewport(config.viewport_width, config.viewport_height);
        Self {
            scene: Scene::new(),
            camera,
            labels: LabelTable::new(),
            stars: StarBuffer::new(),
            lights: LightRig::default(),
            events: Vec::with_capacity(config.max_events),
            rng: Rng::new(config.seed),
            viewport: Vec2::new(config.viewport_width, config.viewport_height),
            time: FrameTime::default(),
            max_events: config.max_events,
            next_id: 1,
        }
    }

    /// Generate the next unique node ID.
    pub fn next_id(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a scene event to be forwarded to the host.
    /// Events beyond the per-frame capacity are dropped.
    pub fn emit_event(&mut self, event: SceneEvent) {
        if self.events.len() >= self.max_events {
            log::warn!("event queue full ({}), dropping event kind {}", self.max_events, event.kind);
            return;
        }
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }

    pub fn time(&self) -> FrameTime {
        self.time
    }

    pub fn set_time(&mut self, time: FrameTime) {
        self.time = time;
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Record a new viewport size and update the camera aspect.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            log::warn!("ignoring degenerate viewport {}x{}", width, height);
            return;
        }
        self.viewport = Vec2::new(width, height);
        self.camera.set_viewport(width, height);
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new(&StageConfig::default())
    }
}
