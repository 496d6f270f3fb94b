//! Console I/O layer: the interactive prompt and line reader (`console`) and
//! `writers` that render evaluation outcomes as text or JSON lines.
pub mod console;
pub use console::{PROMPT, prompt, read_expression};

pub mod writers;
pub use writers::write_outcome;
