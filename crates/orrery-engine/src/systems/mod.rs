pub mod billboard;
pub mod controls;
pub mod lighting;
pub mod picking;
pub mod render;
pub mod rng;
pub mod starfield;
pub mod text;
