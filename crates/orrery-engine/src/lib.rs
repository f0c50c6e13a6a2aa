pub mod api;
pub mod assets;
pub mod bridge;
pub mod components;
pub mod core;
pub mod error;
pub mod extensions;
pub mod input;
pub mod orbit;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::stage::{Stage, StageConfig, EngineContext, AssetEvent};
pub use api::types::{NodeId, LabelId, SceneEvent, FrameTime};
pub use assets::overrides::SceneOverrides;
pub use assets::phrases::{Phrase, PhraseId, parse_phrases};
pub use bridge::protocol::{ProtocolLayout, FrameHeader};
pub use components::node::Node;
pub use components::visual::{Color, BlendMode, Material, Shape, Visual};
pub use core::clock::{Clock, ManualClock};
pub use core::load::{LoadGate, FontState};
pub use core::scene::Scene;
pub use error::SceneError;
pub use input::queue::{InputEvent, InputQueue};
pub use orbit::{OrbitStage, OrbitVariant};
pub use renderer::camera::{PerspectiveCamera, CameraUniform};
pub use renderer::instance::{NodeInstance, RenderBuffer};
pub use renderer::stars::{StarBuffer, StarPoint};
pub use systems::controls::{OrbitControls, ControlsConfig};
pub use systems::lighting::{Light, LightRig, LightInstance};
pub use systems::rng::Rng;
pub use systems::starfield::{StarFieldConfig, StarPalette};

pub use extensions::Easing;
