pub mod compile;
pub mod environments;
pub mod validate;
