pub mod analyze;
pub mod inspect;
pub mod validate;
