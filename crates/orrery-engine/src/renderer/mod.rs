pub mod camera;
pub mod instance;
pub mod stars;

pub use camera::{PerspectiveCamera, CameraUniform, client_to_ndc};
pub use instance::{NodeInstance, RenderBuffer};
pub use stars::{StarBuffer, StarPoint};
