//! Entity and field spec resolution.

use gridschema_model::SchemaStore;

use crate::error::{ResolveError, ResolveResult};
use crate::options::ResolveOptions;
use crate::spec::{FieldSpec, SpecOp};

/// Structural fields present on every record; aliases never shadow them.
const STRUCTURAL_FIELDS: [&str; 2] = ["id", "type"];

/// Convention prefix retried when a bare field name misses.
const AUTO_PREFIX: &str = "sg_";

/// The resolution engine.
///
/// Borrows a read-only [`SchemaStore`] and maps symbolic specs onto the
/// physical names it holds. Cheap to copy; create one per store and share
/// it freely.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'s> {
    store: &'s SchemaStore,
}

impl<'s> Resolver<'s> {
    #[must_use]
    pub fn new(store: &'s SchemaStore) -> Self {
        Self { store }
    }

    /// The store this resolver reads from.
    #[must_use]
    pub fn store(&self) -> &'s SchemaStore {
        self.store
    }

    // ── Entities ─────────────────────────────────────────────────

    /// Resolves an entity spec into an ordered list of concrete entity
    /// type names.
    ///
    /// Misses of a defined operator (`#tag`, `$alias`) resolve to an empty
    /// list; a bare name that matches nothing passes through unchanged
    /// unless `strict` is set.
    pub fn resolve_entity(&self, spec: &str, opts: &ResolveOptions) -> ResolveResult<Vec<String>> {
        match SpecOp::parse(spec)? {
            SpecOp::Literal(name) => Ok(vec![name.to_string()]),
            SpecOp::Tag(tag) => Ok(self
                .store
                .entity_tag(tag)
                .map(<[String]>::to_vec)
                .unwrap_or_default()),
            // An undefined entity alias resolves to nothing, unlike the
            // field-alias passthrough below.
            SpecOp::Alias(alias) => Ok(self
                .store
                .entity_alias(alias)
                .map(|target| vec![target.to_string()])
                .unwrap_or_default()),
            SpecOp::Name => {
                // Exact type names win over implicit aliases.
                if self.store.has_entity(spec) {
                    return Ok(vec![spec.to_string()]);
                }
                if opts.implicit_aliases
                    && let Some(target) = self.store.entity_alias(spec)
                {
                    return Ok(vec![target.to_string()]);
                }
                if opts.strict {
                    return Err(ResolveError::UnknownEntity {
                        spec: spec.to_string(),
                    });
                }
                Ok(vec![spec.to_string()])
            }
        }
    }

    /// Resolves an entity spec that must name exactly one entity type.
    pub fn resolve_one_entity(&self, spec: &str, opts: &ResolveOptions) -> ResolveResult<String> {
        let mut names = self.resolve_entity(spec, opts)?;
        if names.len() == 1 {
            Ok(names.remove(0))
        } else {
            Err(ResolveError::AmbiguousResolution {
                spec: spec.to_string(),
                count: names.len(),
            })
        }
    }

    // ── Fields ───────────────────────────────────────────────────

    /// Resolves a non-dotted field spec against one concrete entity type.
    ///
    /// Unlike entity resolution, the entity type itself must exist in the
    /// store; an absent type is an error even in lenient mode.
    fn resolve_field_single(
        &self,
        entity_type: &str,
        spec: &str,
        opts: &ResolveOptions,
    ) -> ResolveResult<Vec<String>> {
        let Some(entity) = self.store.entity(entity_type) else {
            return Err(ResolveError::UnknownEntity {
                spec: entity_type.to_string(),
            });
        };

        // Present on every record, whatever the schema says.
        if STRUCTURAL_FIELDS.contains(&spec) {
            return Ok(vec![spec.to_string()]);
        }

        match SpecOp::parse(spec)? {
            SpecOp::Literal(name) => Ok(vec![name.to_string()]),
            SpecOp::Tag(tag) => Ok(entity.field_tags.get(tag).cloned().unwrap_or_default()),
            // A missed field alias keeps its sigil, so the unresolved spec
            // stays visible to whatever consumes the result.
            SpecOp::Alias(alias) => Ok(vec![entity
                .field_aliases
                .get(alias)
                .cloned()
                .unwrap_or_else(|| spec.to_string())]),
            SpecOp::Name => {
                // Exact field names win over the prefix and implicit aliases.
                if entity.has_field(spec) {
                    return Ok(vec![spec.to_string()]);
                }
                if opts.auto_prefix {
                    let prefixed = format!("{AUTO_PREFIX}{spec}");
                    if entity.has_field(&prefixed) {
                        return Ok(vec![prefixed]);
                    }
                }
                if opts.implicit_aliases
                    && let Some(target) = entity.field_aliases.get(spec)
                {
                    return Ok(vec![target.clone()]);
                }
                if opts.strict {
                    return Err(ResolveError::UnknownField {
                        entity_type: entity_type.to_string(),
                        spec: spec.to_string(),
                    });
                }
                Ok(vec![spec.to_string()])
            }
        }
    }

    /// Resolves a field spec — or an ordered list of them — into concrete
    /// field names (or dotted relation paths) on `entity_type`.
    pub fn resolve_field(
        &self,
        entity_type: &str,
        spec: impl Into<FieldSpec>,
        opts: &ResolveOptions,
    ) -> ResolveResult<Vec<String>> {
        match spec.into() {
            FieldSpec::Many(specs) => {
                let mut resolved = Vec::new();
                for spec in &specs {
                    resolved.extend(self.resolve_field(entity_type, spec.as_str(), opts)?);
                }
                Ok(resolved)
            }
            FieldSpec::One(spec) => {
                if spec.contains('.') {
                    self.resolve_dotted(entity_type, &spec, opts)
                } else {
                    self.resolve_field_single(entity_type, &spec, opts)
                }
            }
        }
    }

    /// Resolves a field spec that must produce exactly one path.
    pub fn resolve_one_field(
        &self,
        entity_type: &str,
        spec: impl Into<FieldSpec>,
        opts: &ResolveOptions,
    ) -> ResolveResult<String> {
        let spec = spec.into();
        let mut fields = self.resolve_field(entity_type, spec.clone(), opts)?;
        if fields.len() == 1 {
            Ok(fields.remove(0))
        } else {
            Err(ResolveError::AmbiguousResolution {
                spec: spec.to_string(),
                count: fields.len(),
            })
        }
    }

    /// Expands a dotted relation-path spec into every concrete path it
    /// names.
    ///
    /// Tokens pair into (entity spec, field spec) hops: the caller-supplied
    /// root type is the first hop's entity spec, and each later field token
    /// is preceded by its entity token. Every hop resolves independently;
    /// the result is the cartesian product across hops, first hop varying
    /// slowest, with no deduplication.
    fn resolve_dotted(
        &self,
        root_type: &str,
        spec: &str,
        opts: &ResolveOptions,
    ) -> ResolveResult<Vec<String>> {
        let tokens: Vec<&str> = spec.split('.').collect();

        let mut hops = vec![(root_type, tokens[0])];
        let mut i = 1;
        while i + 1 < tokens.len() {
            hops.push((tokens[i], tokens[i + 1]));
            i += 2;
        }

        // Candidate (entity type, field name) pairs per hop: outer loop
        // over entity candidates, inner loop over field candidates. Entity
        // specs here need not name existing types — resolution passes them
        // through — but asking a field of a nonexistent type fails.
        let mut hop_pairs: Vec<Vec<(String, String)>> = Vec::with_capacity(hops.len());
        for (entity_spec, field_spec) in hops {
            let mut pairs = Vec::new();
            for entity_type in self.resolve_entity(entity_spec, opts)? {
                for field_name in self.resolve_field_single(&entity_type, field_spec, opts)? {
                    pairs.push((entity_type.clone(), field_name));
                }
            }
            hop_pairs.push(pairs);
        }

        // Render the product. The first hop contributes its field name
        // only; every later hop contributes "Entity.field".
        let mut paths = vec![String::new()];
        for (hop, pairs) in hop_pairs.iter().enumerate() {
            let mut extended = Vec::with_capacity(paths.len() * pairs.len());
            for prefix in &paths {
                for (entity_type, field_name) in pairs {
                    let segment = if hop == 0 {
                        field_name.clone()
                    } else {
                        format!("{entity_type}.{field_name}")
                    };
                    extended.push(if prefix.is_empty() {
                        segment
                    } else {
                        format!("{prefix}.{segment}")
                    });
                }
            }
            paths = extended;
        }
        Ok(paths)
    }
}
