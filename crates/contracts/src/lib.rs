pub mod analysis;
pub mod system;
