pub mod builder;
pub mod interpolate;
pub mod measure;
