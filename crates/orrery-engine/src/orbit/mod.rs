//! Phrase orbits around a central sun.

pub mod body;
pub mod entrance;
pub mod meteor;
pub mod placement;
pub mod stage;
pub mod sun;
pub mod variant;

pub use body::{OrbitPlane, OrbitShape, OrbitingBody};
pub use entrance::{Entrance, ENTRANCE_DURATION};
pub use meteor::{Meteor, MeteorConfig};
pub use placement::{place, Placement, PlacementConfig, RadiusLayout, SpeedBand, TiltModel};
pub use stage::OrbitStage;
pub use sun::{HaloConfig, SunConfig, SunLabelConfig, SunNodes};
pub use variant::{CameraSetup, LabelStyle, OrbitVariant};
