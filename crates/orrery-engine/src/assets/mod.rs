pub mod overrides;
pub mod phrases;
