// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mntl-space and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Component registry for hosts that look up widgets by tag.

use std::collections::BTreeMap;
use std::sync::{Mutex, OnceLock, PoisonError};

use thiserror::Error;

use crate::locator::Locator;

/// Tag under which the default locator is registered.
pub const DEFAULT_TAG: &str = "mntl-space-fab";

pub type Factory = fn() -> Locator;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("component tag is already defined: {0}")]
    AlreadyDefined(String),

    #[error("unknown component tag: {0}")]
    Unknown(String),
}

#[derive(Debug, Default)]
pub struct ComponentRegistry {
    factories: BTreeMap<String, Factory>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tags can be defined once; redefinition is an error and keeps the first factory.
    pub fn define(&mut self, tag: impl Into<String>, factory: Factory) -> Result<(), RegistryError> {
        let tag = tag.into();
        if self.factories.contains_key(&tag) {
            return Err(RegistryError::AlreadyDefined(tag));
        }
        tracing::debug!(tag = %tag, "component defined");
        self.factories.insert(tag, factory);
        Ok(())
    }

    pub fn is_defined(&self, tag: &str) -> bool {
        self.factories.contains_key(tag)
    }

    pub fn create(&self, tag: &str) -> Result<Locator, RegistryError> {
        let factory =
            self.factories.get(tag).ok_or_else(|| RegistryError::Unknown(tag.to_owned()))?;
        Ok(factory())
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }
}

fn global() -> &'static Mutex<ComponentRegistry> {
    static REGISTRY: OnceLock<Mutex<ComponentRegistry>> = OnceLock::new();
    REGISTRY.get_or_init(|| Mutex::new(ComponentRegistry::new()))
}

/// Registers [`Locator::new`] under [`DEFAULT_TAG`] in the process-wide registry.
///
/// Returns `true` only for the call that performed the registration.
pub fn register_default() -> bool {
    let mut registry = global().lock().unwrap_or_else(PoisonError::into_inner);
    registry.define(DEFAULT_TAG, Locator::new).is_ok()
}

pub fn define_global(tag: impl Into<String>, factory: Factory) -> Result<(), RegistryError> {
    global().lock().unwrap_or_else(PoisonError::into_inner).define(tag, factory)
}

pub fn create_global(tag: &str) -> Result<Locator, RegistryError> {
    global().lock().unwrap_or_else(PoisonError::into_inner).create(tag)
}
