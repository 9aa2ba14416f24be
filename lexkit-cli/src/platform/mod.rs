//! Terminal output

mod cli;

pub use cli::{print_error_with_source, render_token, source_lines, tokens_to_json};
