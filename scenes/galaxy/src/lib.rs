use wasm_bindgen::prelude::*;
use orrery_engine::OrbitStage;

mod scene;

orrery_web::export_stage!(OrbitStage, OrbitStage::new(scene::variant()), "galaxy");
