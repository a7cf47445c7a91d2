//! Grammar productions.
//!
//! - [`ty`]: type expressions (`T?`, `T!E`, `(T)`)
//! - [`item`]: the item-level skimmer that finds declarations and
//!   annotation sites

mod item;
mod ty;

pub use item::{skim, Annotation, AnnotationSite, DeclKind, Declaration, SkimOutput};
