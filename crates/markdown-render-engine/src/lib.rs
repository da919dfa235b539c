pub mod io;
pub mod page;
pub mod parsing;

// Re-export key types for easier usage
pub use io::*;
pub use page::{PageTemplate, title_from_markdown};
pub use parsing::render;
