//! # standin-record
//!
//! Record layer for Standin: the shape capability interface, selective
//! field merging, and best-effort record synthesis.
//!
//! A *shape* is a record type's declared structure. Instead of inspecting
//! types at runtime, every storable record implements [`Shape`] and hands
//! the rest of the system a stable identifier plus a static field table.
//! Everything downstream (type-erased storage, selective update, synthesis)
//! is driven by those descriptors.

pub mod merge;
pub mod shape;
pub mod synth;

pub use merge::merge_fields;
pub use shape::{FieldDescriptor, FieldKind, Shape};
pub use synth::synthesize;
