pub mod file;
pub mod normalize;
