//! Basic scene: flat violet labels on banded orbits, white stars, plain sun.

use orrery_engine::OrbitVariant;

pub fn variant() -> OrbitVariant {
    OrbitVariant::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_engine::{Color, Stage, OrbitStage, EngineContext, AssetEvent, Phrase, InputQueue, FrameTime};
    use orrery_engine::orbit::RadiusLayout;

    #[test]
    fn variant_is_valid() {
        let v = variant();
        assert!(v.validate().is_ok());
        assert_eq!(v.name, "basic");
        assert!(v.picking);
        assert!(v.meteors.is_none());
        assert!(v.entrance_stagger.is_none());
        assert_eq!(v.labels.max_chars, Some(15));
        assert_eq!(v.labels.palette, vec![Color::hex(0x7b61ff)]);
        assert!(matches!(v.placement.radius, RadiusLayout::Banded { .. }));
    }

    #[test]
    fn scene_builds_and_runs() {
        let mut stage = OrbitStage::new(variant());
        let mut ctx = EngineContext::new(&stage.config());
        stage.init(&mut ctx).unwrap();
        assert_eq!(ctx.stars.len(), 2000);

        let phrases = (0..4).map(|i| Phrase::plain(format!("frase{i}-abcdefghijklmno"))).collect();
        stage.on_asset(&mut ctx, AssetEvent::Phrases(phrases));
        stage.on_asset(&mut ctx, AssetEvent::FontLoaded);
        assert_eq!(stage.bodies().len(), 4);

        let input = InputQueue::new();
        for frame in 0..30u64 {
            ctx.set_time(FrameTime::new(frame as f64 / 60.0, frame));
            stage.update(&mut ctx, &input);
        }
        assert_eq!(ctx.labels.get(orrery_engine::LabelId(1)), Some("frase0-abcdefgh..."));
    }
}
