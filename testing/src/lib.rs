pub mod actor;
pub mod document;
pub mod opaque;
