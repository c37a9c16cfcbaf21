pub mod image;
pub mod parse;
