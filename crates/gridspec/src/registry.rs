//! Named type metadata, registered explicitly or loaded from schema files.
//!
//! A schema document lists types under `types`:
//!
//! ```yaml
//! types:
//!   - name: Person
//!     sheet:
//!       read_only: true
//!       min_rows: 5
//!     fields:
//!       - name: firstName
//!         kind: text
//!         column: {}
//!       - name: age
//!         kind: integer
//!         column:
//!           type: numeric
//!           title: Age (years)
//!       - name: internalId
//!         kind: long
//! ```
//!
//! Fields without a `column` entry are not part of the table. `kind` and
//! `column.type` accept unknown names, which end up as text columns.
//!
//! ```rust
//! use gridspec::{build_named, MetadataRegistry};
//!
//! let registry = MetadataRegistry::from_yaml_str(r#"
//! types:
//!   - name: Person
//!     fields:
//!       - { name: firstName, kind: text, column: {} }
//! "#).unwrap();
//!
//! let table = build_named::<_, ()>(&registry, "Person", None).unwrap();
//! assert_eq!(table.col_headers, vec!["First name"]);
//! assert!(build_named::<_, ()>(&registry, "Pet", None).is_err());
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GridSpecError, Result};
use crate::metadata::{Introspector, Sheet, TypeMetadata};

/// On-disk schema layout.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct SchemaDocument {
    #[serde(default)]
    types: Vec<TypeMetadata>,
}

/// A set of type metadata addressed by type name.
#[derive(Clone, Debug, Default)]
pub struct MetadataRegistry {
    types: BTreeMap<String, TypeMetadata>,
}

impl MetadataRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a YAML schema document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let document: SchemaDocument = serde_yaml::from_str(yaml)?;
        Self::from_document(document)
    }

    /// Parses a JSON schema document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: SchemaDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    /// Loads a schema file. `.json` files are parsed as JSON, everything
    /// else as YAML.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        log::debug!("loading sheet schema from {}", path.display());
        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }

    fn from_document(document: SchemaDocument) -> Result<Self> {
        let mut registry = Self::new();
        for meta in document.types {
            registry.register(meta)?;
        }
        Ok(registry)
    }

    /// Adds metadata for a type.
    ///
    /// Fails if the metadata is invalid (see [`TypeMetadata::validate`]) or
    /// the name is already taken.
    pub fn register(&mut self, meta: TypeMetadata) -> Result<()> {
        meta.validate()?;
        if self.types.contains_key(&meta.name) {
            return Err(GridSpecError::DuplicateType(meta.name));
        }
        log::debug!(
            "registered sheet type '{}' ({} field(s))",
            meta.name,
            meta.fields.len()
        );
        self.types.insert(meta.name.clone(), meta);
        Ok(())
    }

    /// Registers the derived metadata of `T`.
    pub fn register_sheet<T: Sheet>(&mut self) -> Result<()> {
        self.register(T::sheet_metadata())
    }

    /// Moves every type of `other` into this registry.
    pub fn merge(&mut self, other: MetadataRegistry) -> Result<()> {
        for (_, meta) in other.types {
            self.register(meta)?;
        }
        Ok(())
    }

    pub fn get(&self, type_name: &str) -> Option<&TypeMetadata> {
        log::trace!("looking up sheet type '{}'", type_name);
        self.types.get(type_name)
    }

    /// Like [`get`](Self::get), but an unknown name is an error.
    pub fn resolve(&self, type_name: &str) -> Result<&TypeMetadata> {
        self.get(type_name)
            .ok_or_else(|| GridSpecError::UnknownType(type_name.to_string()))
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    /// Registered type names, sorted.
    pub fn type_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.types.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Introspector for MetadataRegistry {
    fn introspect(&self, type_name: &str) -> Result<&TypeMetadata> {
        self.resolve(type_name)
    }
}
