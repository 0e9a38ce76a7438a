//! Command handlers for the Verse CLI.
//!
//! Each submodule implements one command; `main` only dispatches.

mod gen;

pub use gen::{emit_classes, parse_gen_options, render_source, run_gen, GenOptions};
