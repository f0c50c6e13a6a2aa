//! The orbit stage: sun, stars, optional meteors, and one orbiting label per
//! phrase, parameterised by an `OrbitVariant`.

use glam::{Vec2, Vec3};
use crate::api::stage::{AssetEvent, EngineContext, Stage, StageConfig};
use crate::api::types::{NodeId, SceneEvent};
use crate::assets::overrides::SceneOverrides;
use crate::assets::phrases::Phrase;
use crate::components::node::Node;
use crate::components::visual::{Color, Material, Shape, Visual};
use crate::core::load::LoadGate;
use crate::error::SceneError;
use crate::input::queue::{InputEvent, InputQueue};
use crate::orbit::body::OrbitingBody;
use crate::orbit::entrance::Entrance;
use crate::orbit::meteor::Meteor;
use crate::orbit::placement::place;
use crate::orbit::sun::SunNodes;
use crate::orbit::variant::OrbitVariant;
use crate::renderer::camera::{client_to_ndc, PerspectiveCamera};
use crate::systems::billboard::facing_rotation;
use crate::systems::controls::OrbitControls;
use crate::systems::picking::pick_phrase;
use crate::systems::starfield::generate_stars;
use crate::systems::text::{estimate_width, DEFAULT_ADVANCE};

pub const TAG_SUN: &str = "sun";
pub const TAG_SUN_GLOW: &str = "sun-glow";
pub const TAG_SUN_HALO: &str = "sun-halo";
pub const TAG_SUN_LABEL: &str = "sun-label";
pub const TAG_PHRASE: &str = "phrase";
pub const TAG_METEOR: &str = "meteor";

pub struct OrbitStage {
    variant: OrbitVariant,
    controls: OrbitControls,
    gate: LoadGate,
    phrases: Vec<Phrase>,
    bodies: Vec<OrbitingBody>,
    meteors: Vec<Meteor>,
    sun: Option<SunNodes>,
    sun_label: Option<NodeId>,
    selected: Option<usize>,
    initialized: bool,
}

impl OrbitStage {
    pub fn new(variant: OrbitVariant) -> Self {
        let viewport = Vec2::new(variant.stage.viewport_width, variant.stage.viewport_height);
        let controls = OrbitControls::new(variant.controls, viewport);
        Self {
            variant,
            controls,
            gate: LoadGate::new(),
            phrases: Vec::new(),
            bodies: Vec::new(),
            meteors: Vec::new(),
            sun: None,
            sun_label: None,
            selected: None,
            initialized: false,
        }
    }

    pub fn variant(&self) -> &OrbitVariant {
        &self.variant
    }

    pub fn bodies(&self) -> &[OrbitingBody] {
        &self.bodies
    }

    pub fn meteors(&self) -> &[Meteor] {
        &self.meteors
    }

    pub fn phrases(&self) -> &[Phrase] {
        &self.phrases
    }

    pub fn sun(&self) -> Option<&SunNodes> {
        self.sun.as_ref()
    }

    pub fn sun_label(&self) -> Option<NodeId> {
        self.sun_label
    }

    pub fn controls(&self) -> &OrbitControls {
        &self.controls
    }

    /// Most recently picked phrase index.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn load_gate(&self) -> &LoadGate {
        &self.gate
    }

    fn setup_camera(&mut self, ctx: &mut EngineContext) {
        let setup = &self.variant.camera;
        let viewport = ctx.viewport();
        let mut camera = PerspectiveCamera::new(setup.fov_y_degrees, 1.0, setup.near, setup.far)
            .with_position(setup.position);
        camera.set_viewport(viewport.x, viewport.y);
        camera.look_at(setup.target);
        ctx.camera = camera;

        self.controls = OrbitControls::new(self.variant.controls, viewport);
        self.controls.target = setup.target;
    }

    fn spawn_sun(&mut self, ctx: &mut EngineContext) {
        let sun = &self.variant.sun;

        let core = ctx.next_id();
        ctx.scene.spawn(
            Node::new(core)
                .with_tag(TAG_SUN)
                .with_visual(Visual::sphere(sun.radius, sun.material)),
        );

        let glow = ctx.next_id();
        ctx.scene.spawn(
            Node::new(glow)
                .with_tag(TAG_SUN_GLOW)
                .with_visual(Visual::shell(sun.glow_radius, sun.glow)),
        );

        let halo = sun.halo.as_ref().map(|h| {
            let id = ctx.next_id();
            let material = Material::unlit(Color::WHITE)
                .with_opacity(h.opacity)
                .additive();
            ctx.scene.spawn(
                Node::new(id)
                    .with_tag(TAG_SUN_HALO)
                    .with_scale(Vec3::new(h.size, h.size, 1.0))
                    .with_visual(Visual::new(Shape::Halo { size: 1.0 }, material)),
            );
            id
        });

        self.sun = Some(SunNodes { core, glow, halo });
    }

    fn spawn_meteors(&mut self, ctx: &mut EngineContext) {
        let Some(config) = self.variant.meteors else {
            return;
        };
        let shape = Shape::Streak {
            length: config.length,
            radius_top: config.radius_top,
            radius_bottom: config.radius_bottom,
        };
        let material = Material::unlit(Color::WHITE).with_opacity(config.opacity);
        for _ in 0..config.count {
            let id = ctx.next_id();
            let meteor = Meteor::spawn(id, &config, &mut ctx.rng);
            ctx.scene.spawn(
                Node::new(id)
                    .with_tag(TAG_METEOR)
                    .with_position(meteor.position)
                    .with_rotation(config.rotation())
                    .with_visual(Visual::new(shape, material)),
            );
            self.meteors.push(meteor);
        }
    }

    /// The sun label needs the font; it appears once, whenever both the
    /// stage and the font are ready.
    fn ensure_sun_label(&mut self, ctx: &mut EngineContext) {
        if !self.initialized || self.sun_label.is_some() || !self.gate.font_ready() {
            return;
        }
        let label = &self.variant.sun.label;
        let label_id = ctx.labels.add(label.text.clone());
        let shape = Shape::Text {
            label: label_id,
            size: label.size,
            depth: label.depth,
            width: estimate_width(&label.text, label.size, DEFAULT_ADVANCE),
        };
        let id = ctx.next_id();
        ctx.scene.spawn(
            Node::new(id)
                .with_tag(TAG_SUN_LABEL)
                .with_position(Vec3::new(0.0, label.height, 0.0))
                .with_visual(Visual::new(shape, label.material)),
        );
        self.sun_label = Some(id);
    }

    /// Create one orbiting body per phrase, once font and phrases are in.
    fn populate(&mut self, ctx: &mut EngineContext) {
        if !self.initialized {
            return;
        }
        let Some(phrases) = self.gate.take_phrases() else {
            return;
        };

        let total = phrases.len();
        if total == 0 {
            log::warn!("{}: phrase list is empty, nothing will orbit", self.variant.name);
        }
        let room = self.variant.stage.max_instances.saturating_sub(ctx.scene.len());
        if total > room {
            log::warn!(
                "{}: {} phrases but room for {} labels; extra phrases stay hidden",
                self.variant.name,
                total,
                room
            );
        }

        let now = ctx.time().elapsed;
        let t = ctx.time().seconds();
        let style = self.variant.labels.clone();

        for (index, phrase) in phrases.iter().enumerate().take(room) {
            let placement = place(&self.variant.placement, index, total, &mut ctx.rng);
            let text = phrase.label(style.max_chars);
            let width = estimate_width(&text, style.size, DEFAULT_ADVANCE);
            let label = ctx.labels.add(text.into_owned());

            let id = ctx.next_id();
            let mut body = OrbitingBody::new(id, index, placement.shape, placement.angle);
            if let Some(stagger) = self.variant.entrance_stagger {
                body = body.with_entrance(Entrance::new(now, stagger * index as f32));
            }
            let scale = if body.entrance().is_some() { 0.0 } else { 1.0 };
            let position = body.position(t);

            ctx.scene.spawn(
                Node::new(id)
                    .with_tag(TAG_PHRASE)
                    .with_position(position)
                    .with_rotation(facing_rotation(position, ctx.camera.position, Vec3::Y))
                    .with_scale(Vec3::splat(scale))
                    .with_visual(Visual::new(
                        Shape::Text { label, size: style.size, depth: style.depth, width },
                        style.material(index),
                    ))
                    .with_phrase(index),
            );
            self.bodies.push(body);
        }

        log::info!("{}: {} phrases in orbit", self.variant.name, self.bodies.len());
        self.phrases = phrases;
    }

    fn pick(&mut self, ctx: &mut EngineContext, x: f32, y: f32) {
        let viewport = ctx.viewport();
        let ndc = client_to_ndc(x, y, viewport.x, viewport.y);
        let ray = ctx.camera.ray_through(ndc);
        if let Some(index) = pick_phrase(&ray, ctx.scene.iter()) {
            log::debug!("picked phrase {}", index);
            self.selected = Some(index);
            ctx.emit_event(SceneEvent::phrase_selected(index));
        }
    }

    fn animate_meteors(&mut self, ctx: &mut EngineContext) {
        let Some(config) = self.variant.meteors else {
            return;
        };
        for meteor in &mut self.meteors {
            meteor.step(&config, &mut ctx.rng);
            if let Some(node) = ctx.scene.get_mut(meteor.node) {
                node.position = meteor.position;
            }
        }
    }

    fn animate_bodies(&mut self, ctx: &mut EngineContext) {
        let now = ctx.time().elapsed;
        let t = ctx.time().seconds();
        let eye = ctx.camera.position;
        for body in &mut self.bodies {
            let has_entrance = body.entrance().is_some();
            let scale = body.entrance_scale(now);
            body.advance();
            let position = body.position(t);
            if let Some(node) = ctx.scene.get_mut(body.node) {
                node.position = position;
                node.rotation = facing_rotation(position, eye, Vec3::Y);
                if has_entrance {
                    node.set_uniform_scale(scale);
                }
            }
        }
    }
}

impl Stage for OrbitStage {
    fn config(&self) -> StageConfig {
        self.variant.stage.clone()
    }

    fn configure(&mut self, overrides: &SceneOverrides) -> Result<(), SceneError> {
        if self.initialized {
            log::warn!("{}: overrides after init are ignored", self.variant.name);
            return Ok(());
        }
        self.variant.apply(overrides)
    }

    fn init(&mut self, ctx: &mut EngineContext) -> Result<(), SceneError> {
        self.variant.validate()?;
        log::info!("{}: building scene", self.variant.name);

        self.setup_camera(ctx);
        ctx.lights = self.variant.lights.clone();
        generate_stars(&self.variant.stars, &mut ctx.rng, &mut ctx.stars);
        self.spawn_sun(ctx);
        self.spawn_meteors(ctx);
        self.initialized = true;

        // Assets may have arrived before init.
        self.ensure_sun_label(ctx);
        self.populate(ctx);
        Ok(())
    }

    fn on_asset(&mut self, ctx: &mut EngineContext, event: AssetEvent) {
        match event {
            AssetEvent::FontLoaded => {
                if self.gate.font_loaded() {
                    log::info!("{}: font loaded", self.variant.name);
                }
                self.ensure_sun_label(ctx);
                self.populate(ctx);
            }
            AssetEvent::FontFailed(err) => {
                log::error!("{}: {}; labels disabled", self.variant.name, err);
                self.gate.font_failed();
            }
            AssetEvent::Phrases(list) => {
                log::info!("{}: received {} phrases", self.variant.name, list.len());
                self.gate.phrases_loaded(list);
                self.populate(ctx);
            }
            AssetEvent::PhrasesFailed(err) => {
                log::error!("{}: {}", self.variant.name, err);
                self.gate.phrases_failed();
            }
        }
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            self.controls.handle(event);
            if let InputEvent::PointerDown { x, y } = *event {
                if self.variant.picking {
                    self.pick(ctx, x, y);
                }
            }
        }

        self.animate_meteors(ctx);
        self.animate_bodies(ctx);
        self.controls.update(&mut ctx.camera);

        // After the camera moves, so the halo faces the eye this frame renders from.
        let t = ctx.time().seconds();
        if let Some(sun) = self.sun {
            sun.animate(&self.variant.sun, &mut ctx.scene, t, ctx.camera.position);
        }
    }

    fn phrase_json(&self, index: usize) -> Option<String> {
        let phrase = self.phrases.get(index)?;
        match phrase.to_json() {
            Ok(json) => Some(json),
            Err(e) => {
                log::error!("phrase {} could not be serialised: {}", index, e);
                None
            }
        }
    }
}
