//! The combination core: category/option model, text parser, selection
//! state, and the combination generator. Everything here is pure and
//! infallible; malformed input is skipped, never surfaced as an error.

pub mod combine;
pub mod model;
pub mod parser;
pub mod samples;
pub mod selection;


pub use combine::generate_combination;
pub use model::{catalog_to_text, Category};
pub use parser::parse_text_input;
pub use selection::Selection;
