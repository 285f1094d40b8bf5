//! Schema persistence for Gridschema.
//!
//! Everything that produces or persists the read-only [`gridschema_model::SchemaStore`]
//! the resolution engine consults:
//! - [`load_document`] / [`load_file`] / [`load_directory`] — validate JSON
//!   schema documents and deep-merge them into a store
//! - [`dump_document`] / [`dump_file`] — serialize a store back out, with
//!   empty tables pruned
//! - [`SchemaRegistry`] — memoizes one loaded store per source identity,
//!   consulting an injectable, ordered list of [`SchemaProvider`]s
//!
//! Resolution never runs against a store that failed document validation;
//! every malformed shape is reported as [`LoadError::MalformedDocument`]
//! before the store is handed to callers.

mod document;
mod error;
mod registry;

pub use document::{dump_document, dump_file, load_document, load_directory, load_file};
pub use error::{LoadError, LoadResult};
pub use registry::{DirectoryProvider, SchemaProvider, SchemaRegistry};
