// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mntl-space and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! mntl-space: pick a mental space and a sub-path, exchange them as one canonical URI.
//!
//! The [`Locator`] owns the selection; [`uri`] maps it to and from the canonical string and
//! [`policy`] gates identity-requiring space types.

pub mod locator;
pub mod model;
pub mod policy;
pub mod registry;
pub mod tui;
pub mod ui;
pub mod uri;

pub use locator::{ChangeEvent, ListenerId, Locator, TypeOption, CHANGE_EVENT};
pub use model::{Identity, LocatorState, SpacePath, TypeCatalog, TypeDescriptor};
