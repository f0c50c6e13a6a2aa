pub mod clock;
pub mod runner;

pub use clock::DateClock;
pub use runner::SceneRunner;
pub use orrery_engine as engine;

/// Route `log` output and panics to the browser console. Safe to call more
/// than once; only the first logger install takes effect.
pub fn install_console(level: log::Level) {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(level).is_err() {
        log::debug!("console logger already installed");
    }
}

/// Generate all `#[wasm_bindgen]` exports for a scene.
///
/// Generates:
/// - `thread_local!` storage for the SceneRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (scene_configure, scene_init, scene_frame,
///   input handlers, asset callbacks, data accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use orrery_engine::OrbitStage;
///
/// mod scene;
///
/// orrery_web::export_stage!(OrbitStage, OrbitStage::new(scene::variant()), "basic");
/// ```
///
/// # Arguments
///
/// - `$stage_type`: The stage type that implements `orrery_engine::Stage`
/// - `$ctor`: Expression building a fresh stage
/// - `$name`: A string literal used in log messages
#[macro_export]
macro_rules! export_stage {
    ($stage_type:ty, $ctor:expr, $name:literal) => {
        use std::cell::RefCell;
        use $crate::engine::InputEvent;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::SceneRunner<$stage_type, $crate::DateClock>>> =
                RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::SceneRunner<$stage_type, $crate::DateClock>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Scene not initialized. Call scene_init() first.");
                f(runner)
            })
        }

        fn ensure_runner() {
            RUNNER.with(|cell| {
                let mut slot = cell.borrow_mut();
                if slot.is_none() {
                    $crate::install_console(log::Level::Info);
                    *slot = Some($crate::SceneRunner::new($ctor, $crate::DateClock));
                }
            });
        }

        /// Optional: apply JSON overrides before `scene_init`.
        #[wasm_bindgen]
        pub fn scene_configure(json: &str) -> Result<(), JsValue> {
            ensure_runner();
            with_runner(|r| r.configure(json)).map_err(|e| JsValue::from_str(&e.to_string()))
        }

        #[wasm_bindgen]
        pub fn scene_init() -> Result<(), JsValue> {
            ensure_runner();
            with_runner(|r| r.init()).map_err(|e| {
                log::error!("{}: {}", $name, e);
                JsValue::from_str(&e.to_string())
            })?;
            log::info!("{}: initialized", $name);
            Ok(())
        }

        #[wasm_bindgen]
        pub fn scene_frame() {
            with_runner(|r| r.tick());
        }

        #[wasm_bindgen]
        pub fn scene_resize(width: f32, height: f32) {
            with_runner(|r| r.push_input(InputEvent::Resize { width, height }));
        }

        #[wasm_bindgen]
        pub fn scene_pointer_down(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
        }

        #[wasm_bindgen]
        pub fn scene_pointer_up(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
        }

        #[wasm_bindgen]
        pub fn scene_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn scene_wheel(delta: f32) {
            with_runner(|r| r.push_input(InputEvent::Wheel { delta }));
        }

        // ---- Asset callbacks ----

        #[wasm_bindgen]
        pub fn scene_font_loaded() {
            with_runner(|r| r.font_loaded());
        }

        #[wasm_bindgen]
        pub fn scene_font_failed(reason: &str) {
            with_runner(|r| r.font_failed(reason));
        }

        #[wasm_bindgen]
        pub fn scene_load_phrases(json: &str) -> Result<(), JsValue> {
            with_runner(|r| r.load_phrases_json(json)).map_err(|e| JsValue::from_str(&e.to_string()))
        }

        #[wasm_bindgen]
        pub fn scene_phrases_failed(reason: &str) {
            with_runner(|r| r.phrases_failed(reason));
        }

        #[wasm_bindgen]
        pub fn scene_label_measured(label: u32, width: f32) {
            with_runner(|r| r.label_measured(label, width));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_header_ptr() -> *const f32 {
            with_runner(|r| r.header_ptr())
        }

        #[wasm_bindgen]
        pub fn get_camera_ptr() -> *const f32 {
            with_runner(|r| r.camera_ptr())
        }

        #[wasm_bindgen]
        pub fn get_instances_ptr() -> *const f32 {
            with_runner(|r| r.instances_ptr())
        }

        #[wasm_bindgen]
        pub fn get_instance_count() -> u32 {
            with_runner(|r| r.instance_count())
        }

        #[wasm_bindgen]
        pub fn get_additive_split() -> u32 {
            with_runner(|r| r.additive_split())
        }

        #[wasm_bindgen]
        pub fn get_events_ptr() -> *const f32 {
            with_runner(|r| r.events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_events_len() -> u32 {
            with_runner(|r| r.events_len())
        }

        #[wasm_bindgen]
        pub fn get_label_count() -> u32 {
            with_runner(|r| r.label_count())
        }

        #[wasm_bindgen]
        pub fn get_label_text(index: u32) -> Option<String> {
            with_runner(|r| r.label_text(index))
        }

        #[wasm_bindgen]
        pub fn get_phrase_json(index: u32) -> Option<String> {
            with_runner(|r| r.phrase_json(index))
        }

        // ---- Stars ----

        #[wasm_bindgen]
        pub fn get_stars_ptr() -> *const f32 {
            with_runner(|r| r.stars_ptr())
        }

        #[wasm_bindgen]
        pub fn get_star_count() -> u32 {
            with_runner(|r| r.star_count())
        }

        #[wasm_bindgen]
        pub fn get_star_size() -> f32 {
            with_runner(|r| r.star_size())
        }

        #[wasm_bindgen]
        pub fn get_star_opacity() -> f32 {
            with_runner(|r| r.star_opacity())
        }

        #[wasm_bindgen]
        pub fn get_stars_additive() -> bool {
            with_runner(|r| r.stars_additive())
        }

        // ---- Environment ----

        #[wasm_bindgen]
        pub fn get_background() -> Vec<f32> {
            with_runner(|r| r.background().to_vec())
        }

        #[wasm_bindgen]
        pub fn get_fog_density() -> f32 {
            with_runner(|r| r.fog_density())
        }

        // ---- Lighting accessors ----

        #[wasm_bindgen]
        pub fn get_lights_ptr() -> *const f32 {
            with_runner(|r| r.lights_ptr())
        }

        #[wasm_bindgen]
        pub fn get_light_count() -> u32 {
            with_runner(|r| r.light_count())
        }

        /// Ambient light as `[r, g, b, intensity]`.
        #[wasm_bindgen]
        pub fn get_ambient() -> Vec<f32> {
            with_runner(|r| r.ambient().to_vec())
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_instances() -> u32 {
            with_runner(|r| r.max_instances())
        }

        #[wasm_bindgen]
        pub fn get_max_events() -> u32 {
            with_runner(|r| r.max_events())
        }

        #[wasm_bindgen]
        pub fn get_max_lights() -> u32 {
            with_runner(|r| r.max_lights())
        }

        #[wasm_bindgen]
        pub fn get_max_stars() -> u32 {
            with_runner(|r| r.max_stars())
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats())
        }
    };
}

