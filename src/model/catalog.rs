// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mntl-space and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Selectable space types.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use thiserror::Error;

use super::identity::Identity;

/// Label token replaced by the current identity.
pub const IDENTITY_PLACEHOLDER: &str = "{identity}";

/// One entry of the space-type selector.
///
/// A descriptor whose `label` contains [`IDENTITY_PLACEHOLDER`] is *identity-requiring*: it can
/// only be active while an identity is known.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct TypeDescriptor {
    /// Unique key and URI prefix, e.g. `mntl:open`.
    #[schemars(with = "String")]
    pub value: SmolStr,
    /// Option text; may contain `{identity}`.
    pub label: String,
    pub description: String,
}

impl TypeDescriptor {
    pub fn new(
        value: impl Into<SmolStr>,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self { value: value.into(), label: label.into(), description: description.into() }
    }

    pub fn requires_identity(&self) -> bool {
        self.label.contains(IDENTITY_PLACEHOLDER)
    }

    /// The label with the first placeholder replaced by `identity` (scheme stripped).
    ///
    /// Without an identity the placeholder stays visible as a hint.
    pub fn label_for(&self, identity: Option<&Identity>) -> String {
        match identity {
            Some(identity) => self.label.replacen(IDENTITY_PLACEHOLDER, identity.embedded(), 1),
            None => self.label.clone(),
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog must contain at least one type")]
    Empty,

    #[error("duplicate type value: {0}")]
    DuplicateValue(SmolStr),

    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error reading {path}: {error}")]
    Io { path: PathBuf, error: std::io::Error },
}

/// Ordered, non-empty list of [`TypeDescriptor`]s with unique values.
///
/// Order matters twice: the first entry is the fallback when the active type disappears, and
/// URI parsing tries prefixes in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TypeCatalog {
    types: Vec<TypeDescriptor>,
}

impl TypeCatalog {
    pub fn new(types: Vec<TypeDescriptor>) -> Result<Self, CatalogError> {
        if types.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::with_capacity(types.len());
        for ty in &types {
            if !seen.insert(ty.value.as_str()) {
                return Err(CatalogError::DuplicateValue(ty.value.clone()));
            }
        }
        Ok(Self { types })
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let types: Vec<TypeDescriptor> = serde_json::from_str(json)?;
        Self::new(types)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|error| CatalogError::Io { path: path.to_path_buf(), error })?;
        Self::from_json_str(&json)
    }

    pub fn types(&self) -> &[TypeDescriptor] {
        &self.types
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TypeDescriptor> {
        self.types.iter()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// A constructed catalog is never empty.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn get(&self, value: &str) -> Option<&TypeDescriptor> {
        self.types.iter().find(|ty| ty.value == value)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.get(value).is_some()
    }

    pub fn first(&self) -> &TypeDescriptor {
        &self.types[0]
    }

    pub fn first_without_identity(&self) -> Option<&TypeDescriptor> {
        self.types.iter().find(|ty| !ty.requires_identity())
    }

    /// Active type of a freshly created locator: the public commons if there is one.
    pub fn default_active(&self) -> &TypeDescriptor {
        self.first_without_identity().unwrap_or_else(|| self.first())
    }

    /// First descriptor whose value is a prefix of `uri`.
    pub fn match_prefix(&self, uri: &str) -> Option<&TypeDescriptor> {
        self.types.iter().find(|ty| uri.starts_with(ty.value.as_str()))
    }
}

impl Default for TypeCatalog {
    fn default() -> Self {
        Self {
            types: vec![
                TypeDescriptor::new(
                    "mntl:open",
                    "mntl:open/{identity}",
                    "mntl:open - Owned by you, readable by the world",
                ),
                TypeDescriptor::new("mntl:publ", "mntl:publ", "mntl:publ - A true public commons"),
            ],
        }
    }
}

impl<'a> IntoIterator for &'a TypeCatalog {
    type Item = &'a TypeDescriptor;
    type IntoIter = std::slice::Iter<'a, TypeDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'de> Deserialize<'de> for TypeCatalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let types = Vec::<TypeDescriptor>::deserialize(deserializer)?;
        Self::new(types).map_err(serde::de::Error::custom)
    }
}

/// JSON Schema of a catalog file (an array of descriptors).
pub fn catalog_json_schema() -> schemars::Schema {
    schemars::schema_for!(Vec<TypeDescriptor>)
}
