//! Deterministic renderers for teamguard reports.
//!
//! Renderers consume a renderable projection rather than the report types
//! directly, so the emitted envelope can evolve without touching output
//! formats.

#![forbid(unsafe_code)]

mod markdown;
mod model;
mod text;

pub use markdown::render_markdown;
pub use model::{
    RenderableAction, RenderableData, RenderableOutcome, RenderableReport, RenderableVerdict,
    RenderableVerdictStatus,
};
pub use text::render_text;
