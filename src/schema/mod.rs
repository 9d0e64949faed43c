//! Host schema collaborators.
//!
//! The translation layer never owns schema metadata beyond its manifest.
//! Everything it needs from the host application goes through the traits
//! here:
//!
//! - `provider`: `SchemaProvider`, declared field types per entity type
//! - `sink`: `SchemaExtensionSink`, told which shadow fields must exist
//! - `scaffold`: `FieldScaffolder`, builds editable field descriptors

mod provider;
mod scaffold;
mod sink;

pub use provider::{FieldType, SchemaProvider, StaticSchema};
pub use scaffold::{BasicScaffolder, FieldDescriptor, FieldKind, FieldScaffolder};
pub use sink::{NoopSink, RecordingSink, SchemaExtensionSink};
