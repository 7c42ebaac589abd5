//! Question collection: model, parser and directory loader

pub mod model;
pub mod parse;
pub mod scan;

pub use model::Question;
pub use scan::read_questions;
