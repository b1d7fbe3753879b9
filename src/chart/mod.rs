pub mod mapping;
pub mod polar;
pub mod scrub;
