pub mod category;
pub mod metadata;
