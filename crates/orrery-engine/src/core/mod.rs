pub mod clock;
pub mod load;
pub mod scene;
