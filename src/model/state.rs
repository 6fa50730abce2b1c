// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mntl-space and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smol_str::SmolStr;

use super::catalog::{TypeCatalog, TypeDescriptor};
use super::identity::Identity;
use super::path::SpacePath;

/// The structured selection behind a canonical URI.
///
/// Fields are only writable inside the crate; callers go through the `Locator` mutators so the
/// catalog/identity invariants are re-established on every change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatorState {
    pub(crate) active_type: SmolStr,
    pub(crate) identity: Option<Identity>,
    pub(crate) path: SpacePath,
    pub(crate) path_override: Option<SpacePath>,
}

impl LocatorState {
    pub fn new(catalog: &TypeCatalog) -> Self {
        Self {
            active_type: catalog.default_active().value.clone(),
            identity: None,
            path: SpacePath::root(),
            path_override: None,
        }
    }

    pub fn active_type(&self) -> &str {
        &self.active_type
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// The editable path, ignoring any override.
    pub fn path(&self) -> &SpacePath {
        &self.path
    }

    pub fn path_override(&self) -> Option<&SpacePath> {
        self.path_override.as_ref()
    }

    /// The override when one is active, otherwise the editable path.
    pub fn effective_path(&self) -> &SpacePath {
        self.path_override.as_ref().unwrap_or(&self.path)
    }

    pub fn active_descriptor<'c>(&self, catalog: &'c TypeCatalog) -> Option<&'c TypeDescriptor> {
        catalog.get(&self.active_type)
    }
}

#[cfg(test)]
mod tests {
    use super::LocatorState;
    use crate::model::{SpacePath, TypeCatalog};

    #[test]
    fn new_state_uses_catalog_defaults() {
        let catalog = TypeCatalog::default();
        let state = LocatorState::new(&catalog);
        assert_eq!(state.active_type(), "mntl:publ");
        assert_eq!(state.identity(), None);
        assert_eq!(state.path().as_str(), "/");
        assert!(state.path_override().is_none());
        assert_eq!(
            state.active_descriptor(&catalog).map(|ty| ty.value.as_str()),
            Some("mntl:publ")
        );
    }

    #[test]
    fn override_wins_for_effective_path() {
        let mut state = LocatorState::new(&TypeCatalog::default());
        state.path = SpacePath::new("/edited");
        assert_eq!(state.effective_path().as_str(), "/edited");
        state.path_override = Some(SpacePath::new("fixed"));
        assert_eq!(state.effective_path().as_str(), "/fixed");
        assert_eq!(state.path().as_str(), "/edited");
    }
}
