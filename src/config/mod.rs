pub mod options;

pub use options::OrthoOptions;
