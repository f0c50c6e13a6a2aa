// extensions/mod.rs
//
// Helpers with no dependency on Node/Scene.

pub mod easing;

pub use easing::Easing;
