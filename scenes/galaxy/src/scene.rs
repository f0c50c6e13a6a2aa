//! Galaxy scene: a denser, tinted star field, halo sun, fanned orbits with
//! colour-cycled glowing labels that grow in one after another, and meteors.

use glam::Vec3;
use orrery_engine::{Color, Light, LightRig, Material, OrbitVariant, StageConfig, StarFieldConfig, StarPalette};
use orrery_engine::orbit::{CameraSetup, HaloConfig, LabelStyle, MeteorConfig, PlacementConfig, SunConfig, SunLabelConfig};
use orrery_engine::systems::controls::ControlsConfig;

pub fn variant() -> OrbitVariant {
    OrbitVariant {
        name: "galaxy".to_string(),
        stage: StageConfig {
            max_instances: 512,
            max_stars: 4000,
            background: Color::hex(0x020205),
            fog_density: 0.001,
            guard_init: true,
            ..Default::default()
        },
        camera: CameraSetup {
            fov_y_degrees: 55.0,
            far: 2000.0,
            position: Vec3::new(0.0, 30.0, 90.0),
            ..Default::default()
        },
        controls: ControlsConfig {
            damping: 0.05,
            min_distance: 30.0,
            max_distance: 300.0,
            auto_rotate: true,
            auto_rotate_speed: 0.3,
            ..Default::default()
        },
        lights: LightRig::new(Color::WHITE, 0.4)
            .with_light(Light::point(Vec3::ZERO, Color::hex(0xffaa00), 2.0, 500.0))
            .with_light(Light::directional(Vec3::new(-1.0, 1.0, 1.0), Color::hex(0x7b61ff), 0.5)),
        stars: StarFieldConfig {
            count: 4000,
            extent: 1200.0,
            additive: true,
            palette: StarPalette {
                base: Color::WHITE,
                tints: vec![(0.9, Color::hex(0xff9de2)), (0.8, Color::hex(0x7b61ff))],
            },
            ..Default::default()
        },
        sun: SunConfig {
            radius: 6.0,
            material: Material::new(Color::hex(0xffaa00)).with_emissive(Color::hex(0xff5500), 2.0),
            glow_radius: 9.0,
            glow: Material::unlit(Color::hex(0xff4400)).with_opacity(0.15).additive(),
            glow_ratio: 1.1,
            glow_spin: -0.002,
            pulse_rate: 1.5,
            pulse_amount: 0.02,
            halo: Some(HaloConfig::default()),
            label: SunLabelConfig {
                text: "Monserrat".to_string(),
                size: 2.5,
                depth: 0.2,
                height: 12.0,
                material: Material::new(Color::WHITE).with_emissive(Color::hex(0xffdd00), 1.2),
            },
        },
        placement: PlacementConfig::fanned(),
        labels: LabelStyle {
            max_chars: None,
            size: 1.4,
            depth: 0.15,
            palette: [0xff6b9d, 0x00d4ff, 0xffeb3b, 0x9c27b0, 0x4caf50]
                .into_iter()
                .map(Color::hex)
                .collect(),
            glow: Some(0.6),
        },
        entrance_stagger: Some(0.15),
        meteors: Some(MeteorConfig::default()),
        picking: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use orrery_engine::{Stage, OrbitStage, EngineContext, AssetEvent, Phrase, InputQueue, InputEvent, FrameTime};

    fn run(stage: &mut OrbitStage, ctx: &mut EngineContext, input: &InputQueue, from: u64, to: u64) {
        for frame in from..to {
            ctx.set_time(FrameTime::new(frame as f64 / 60.0, frame));
            stage.update(ctx, input);
        }
    }

    #[test]
    fn variant_is_valid() {
        let v = variant();
        assert!(v.validate().is_ok());
        assert_eq!(v.fixed_node_count(), 4 + 15);
        assert!(v.stage.guard_init);
    }

    #[test]
    fn label_colours_cycle() {
        let labels = variant().labels;
        assert_eq!(labels.color(0), Color::hex(0xff6b9d));
        assert_eq!(labels.color(5), Color::hex(0xff6b9d));
        assert_eq!(labels.color(7), Color::hex(0xffeb3b));
        let m = labels.material(1);
        assert!(!m.unlit);
        assert_abs_diff_eq!(m.emissive_intensity, 0.6);
    }

    #[test]
    fn full_phrases_enter_and_clicks_are_ignored() {
        let mut stage = OrbitStage::new(variant());
        let mut ctx = EngineContext::new(&stage.config());
        stage.init(&mut ctx).unwrap();
        assert_eq!(stage.meteors().len(), 15);
        assert!(stage.sun().and_then(|s| s.halo).is_some());

        let long = "una frase muy larga que no se recorta";
        stage.on_asset(&mut ctx, AssetEvent::FontLoaded);
        stage.on_asset(&mut ctx, AssetEvent::Phrases(vec![Phrase::plain(long), Phrase::plain("b")]));
        assert_eq!(ctx.labels.get(orrery_engine::LabelId(1)), Some(long));

        let mut input = InputQueue::new();
        input.push(InputEvent::PointerDown { x: 400.0, y: 300.0 });
        run(&mut stage, &mut ctx, &input, 0, 1);
        assert!(ctx.events.is_empty());
        assert_eq!(stage.selected(), None);

        let empty = InputQueue::new();
        run(&mut stage, &mut ctx, &empty, 1, 150);
        for body in stage.bodies() {
            assert!(body.entrance().is_some_and(|e| e.is_complete()));
        }
    }
}
