pub mod node;
pub mod visual;
