//! Embedded V8 engine wrapper
//!
//! The engine is consumed as a black box: `compile` turns source text into a
//! runnable script or a diagnostic, `run` executes it in the engine context.
//! Everything about JavaScript semantics, GC and the object model belongs to
//! the `v8` crate.

mod isolate;
pub mod platform;

pub use isolate::{CompiledScript, ScriptEngine};
