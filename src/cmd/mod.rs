pub mod crack;
pub mod model;
pub mod validate;
