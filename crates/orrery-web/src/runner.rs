use orrery_engine::{
    Stage, StageConfig, EngineContext, AssetEvent, SceneOverrides, SceneError,
    Clock, FrameTime, InputEvent, InputQueue, RenderBuffer, CameraUniform,
    LightInstance, LabelId, ProtocolLayout, FrameHeader, parse_phrases,
};
use orrery_engine::bridge::protocol::{write_header, HEADER_FLOATS};
use orrery_engine::systems::render::build_render_buffer;
use orrery_engine::systems::text::apply_measured_width;

/// Generic scene runner that wires up the frame loop.
///
/// Each scene crate creates a `thread_local!` SceneRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly. Time comes from the injected `Clock`, so the
/// loop can be driven headless in tests.
pub struct SceneRunner<S: Stage, C: Clock> {
    stage: S,
    clock: C,
    ctx: EngineContext,
    input: InputQueue,
    render_buffer: RenderBuffer,
    config: StageConfig,
    layout: ProtocolLayout,
    header: [f32; HEADER_FLOATS],
    camera: CameraUniform,
    lights: Vec<LightInstance>,
    start: f64,
    elapsed: f64,
    frame: u64,
    initialized: bool,
}

impl<S: Stage, C: Clock> SceneRunner<S, C> {
    pub fn new(stage: S, clock: C) -> Self {
        let config = stage.config();
        let layout = ProtocolLayout::from_config(&config);
        let ctx = EngineContext::new(&config);
        let render_buffer = RenderBuffer::with_capacity(config.max_instances);
        let camera = ctx.camera.uniform();

        Self {
            stage,
            clock,
            ctx,
            input: InputQueue::new(),
            render_buffer,
            config,
            layout,
            header: [0.0; HEADER_FLOATS],
            camera,
            lights: Vec::new(),
            start: 0.0,
            elapsed: 0.0,
            frame: 0,
            initialized: false,
        }
    }

    /// Apply JSON overrides. Only allowed before `init`.
    pub fn configure(&mut self, json: &str) -> Result<(), SceneError> {
        if self.initialized {
            log::warn!("scene already running; overrides ignored");
            return Ok(());
        }
        let overrides = SceneOverrides::from_json(json)?;
        self.stage.configure(&overrides)?;

        // Capacities or the seed may have changed.
        let viewport = self.ctx.viewport();
        self.config = self.stage.config();
        self.layout = ProtocolLayout::from_config(&self.config);
        self.ctx = EngineContext::new(&self.config);
        self.ctx.resize(viewport.x, viewport.y);
        self.render_buffer = RenderBuffer::with_capacity(self.config.max_instances);
        Ok(())
    }

    /// Build the scene. Call once after construction.
    ///
    /// With `guard_init` set, a failure is logged and the scene runs with
    /// whatever was built. Otherwise the error is returned and no frames run.
    pub fn init(&mut self) -> Result<(), SceneError> {
        if self.initialized {
            log::warn!("scene init called twice");
            return Ok(());
        }
        self.start = self.clock.now();
        self.elapsed = 0.0;
        self.ctx.set_time(FrameTime::new(0.0, 0));

        if let Err(e) = self.stage.init(&mut self.ctx) {
            if !self.config.guard_init {
                return Err(e);
            }
            log::error!("scene failed to start: {}", e);
        }

        self.lights = self.ctx.lights.instances(self.layout.max_lights);
        self.initialized = true;
        self.publish();
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Push an input event into the queue.
    /// Resizes also take effect immediately so picking uses the new size.
    pub fn push_input(&mut self, event: InputEvent) {
        if let InputEvent::Resize { width, height } = event {
            self.ctx.resize(width, height);
        }
        self.input.push(event);
    }

    fn sync_time(&mut self) {
        let since_start = if self.initialized { self.clock.now() - self.start } else { 0.0 };
        // Never run time backwards, even if the clock does.
        self.elapsed = self.elapsed.max(since_start);
        self.ctx.set_time(FrameTime::new(self.elapsed, self.frame));
    }

    fn deliver(&mut self, event: AssetEvent) {
        self.sync_time();
        self.stage.on_asset(&mut self.ctx, event);
    }

    pub fn font_loaded(&mut self) {
        self.deliver(AssetEvent::FontLoaded);
    }

    pub fn font_failed(&mut self, reason: &str) {
        self.deliver(AssetEvent::FontFailed(SceneError::Font(reason.to_string())));
    }

    /// Parse and deliver a phrase payload. A malformed payload counts as a
    /// failed load.
    pub fn load_phrases_json(&mut self, json: &str) -> Result<(), SceneError> {
        match parse_phrases(json) {
            Ok(phrases) => {
                self.deliver(AssetEvent::Phrases(phrases));
                Ok(())
            }
            Err(e) => {
                let err = SceneError::from(e);
                self.deliver(AssetEvent::PhrasesFailed(SceneError::PhraseSource(err.to_string())));
                Err(err)
            }
        }
    }

    pub fn phrases_failed(&mut self, reason: &str) {
        self.deliver(AssetEvent::PhrasesFailed(SceneError::PhraseSource(reason.to_string())));
    }

    /// Host reports the real width of a tessellated label.
    pub fn label_measured(&mut self, label: u32, width: f32) {
        apply_measured_width(&mut self.ctx.scene, LabelId(label), width);
    }

    /// Run one frame: update the stage, then rebuild every host buffer.
    pub fn tick(&mut self) {
        if !self.initialized {
            return;
        }

        // Clear per-frame transient data
        self.ctx.clear_frame_data();
        self.sync_time();

        self.stage.update(&mut self.ctx, &self.input);

        self.input.clear();

        self.publish();
        self.frame += 1;
    }

    fn publish(&mut self) {
        build_render_buffer(self.ctx.scene.iter(), &mut self.render_buffer);
        self.camera = self.ctx.camera.uniform();

        let viewport = self.ctx.viewport();
        let frame = FrameHeader {
            frame: self.frame,
            elapsed: self.elapsed,
            instance_count: self.render_buffer.instance_count(),
            additive_split: self.render_buffer.additive_split,
            event_count: self.ctx.events.len() as u32,
            light_count: self.lights.len() as u32,
            star_count: self.star_count(),
            viewport: (viewport.x, viewport.y),
            label_count: self.ctx.labels.len() as u32,
            ready: self.initialized,
        };
        write_header(&mut self.header, &self.layout, &frame);
    }

    pub fn stage(&self) -> &S {
        &self.stage
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    // ---- Pointer accessors for host memory reads ----

    pub fn header_ptr(&self) -> *const f32 {
        self.header.as_ptr()
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn additive_split(&self) -> u32 {
        self.render_buffer.additive_split
    }

    pub fn instances(&self) -> &RenderBuffer {
        &self.render_buffer
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn camera_ptr(&self) -> *const f32 {
        &self.camera as *const CameraUniform as *const f32
    }

    pub fn camera(&self) -> &CameraUniform {
        &self.camera
    }

    pub fn stars_ptr(&self) -> *const f32 {
        self.ctx.stars.points_ptr()
    }

    pub fn star_count(&self) -> u32 {
        self.ctx.stars.len().min(self.layout.max_stars) as u32
    }

    pub fn star_size(&self) -> f32 {
        self.ctx.stars.size
    }

    pub fn star_opacity(&self) -> f32 {
        self.ctx.stars.opacity
    }

    pub fn stars_additive(&self) -> bool {
        self.ctx.stars.additive
    }

    pub fn lights_ptr(&self) -> *const f32 {
        self.lights.as_ptr() as *const f32
    }

    pub fn light_count(&self) -> u32 {
        self.lights.len() as u32
    }

    pub fn ambient(&self) -> [f32; 4] {
        let rig = &self.ctx.lights;
        [rig.ambient.r, rig.ambient.g, rig.ambient.b, rig.ambient_intensity]
    }

    pub fn background(&self) -> [f32; 3] {
        self.config.background.to_array()
    }

    pub fn fog_density(&self) -> f32 {
        self.config.fog_density
    }

    pub fn viewport(&self) -> (f32, f32) {
        let v = self.ctx.viewport();
        (v.x, v.y)
    }

    pub fn label_count(&self) -> u32 {
        self.ctx.labels.len() as u32
    }

    pub fn label_text(&self, index: u32) -> Option<String> {
        self.ctx.labels.get(LabelId(index)).map(str::to_string)
    }

    pub fn phrase_json(&self, index: u32) -> Option<String> {
        self.stage.phrase_json(index as usize)
    }

    // ---- Capacity accessors (read by the host via wasm_bindgen exports) ----

    pub fn max_instances(&self) -> u32 {
        self.layout.max_instances as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn max_lights(&self) -> u32 {
        self.layout.max_lights as u32
    }

    pub fn max_stars(&self) -> u32 {
        self.layout.max_stars as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}
