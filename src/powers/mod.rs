/// Domain layer: the text, code, data and art operations behind each command.
pub mod art;
pub mod code;
pub mod data;
pub mod errors;
pub mod suggest;
pub mod text;

pub use errors::PowerError;
