//! # Block Scanning
//!
//! Single-pass, line-oriented block scanning with one-line lookahead.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` from local facts only (fence, blank, table row, heading,
//!    list item, text)
//!
//! 2. **Block Construction** (`scanner`): a `BlockScanner` walks the lines
//!    with a forward-only `LineCursor`, groups maximal runs of lines into
//!    `Block`s and yields them in source order
//!
//! ## Modules
//!
//! - **`types`**: The `Block` enum
//! - **`kinds`**: Block-specific types with owned delimiters (CodeFence, Heading, ListKind, Table, Paragraph)
//! - **`classify`**: `classify()` produces a `LineClass` for each line
//! - **`cursor`**: `LineCursor`, forward-only position over the document lines
//! - **`scanner`**: `BlockScanner` state machine (`Normal` / `InFencedCode`)
//!
//! ## Key Invariants
//!
//! - The cursor only moves forward; every step consumes at least one line
//! - Fenced code blocks are raw zones: no block or inline parsing inside
//! - Adjacent lists of different kinds are never merged

pub mod classify;
pub mod cursor;
pub mod kinds;
pub mod scanner;
pub mod types;

pub use classify::{LineClass, classify};
pub use cursor::LineCursor;
pub use kinds::ListKind;
pub use scanner::{BlockScanner, Mode};
pub use types::Block;
