//! Symbolic name resolution for Gridschema.
//!
//! Clients write queries and records against stable symbolic names — aliases
//! (`$status`), tags (`#sortable`), literal escapes (`!code`), bare names
//! with the `sg_` convention prefix — and this crate maps them onto the
//! physical names of one deployment's schema:
//!
//! - [`Resolver`] — borrows a read-only [`gridschema_model::SchemaStore`]
//!   and performs entity resolution, field resolution (including dotted
//!   multi-hop relation paths), and recursive structure rewriting
//! - [`ResolveOptions`] — the lenient/strict knobs shared by every operation
//! - [`FieldSpec`] — a single field spec or an ordered list of them
//! - [`ResolveError`] — typed failures (invalid spec, unknown names,
//!   ambiguous resolve-one calls)
//!
//! All operations are synchronous, deterministic, and free of I/O; under the
//! default lenient options, unresolvable names degrade to empty results or
//! literal passthrough instead of failing.

mod error;
mod options;
mod resolver;
mod spec;
mod structure;

pub use error::{ResolveError, ResolveResult};
pub use options::ResolveOptions;
pub use resolver::Resolver;
pub use spec::FieldSpec;
