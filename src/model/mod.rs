// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mntl-space and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A locator state pairs an active space type from the [`TypeCatalog`] with an optional
//! [`Identity`] and a [`SpacePath`].

pub mod catalog;
pub mod identity;
pub mod path;
pub mod state;

pub use catalog::{
    catalog_json_schema, CatalogError, TypeCatalog, TypeDescriptor, IDENTITY_PLACEHOLDER,
};
pub use identity::{Identity, MAILTO_SCHEME};
pub use path::{SpacePath, PATH_SEPARATOR};
pub use state::LocatorState;
