// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mntl-space and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Selection policy: which space types are eligible and where to fall back when the active one
//! stops being eligible.
//!
//! All functions are pure; they return the next state and leave notification to the caller.

use crate::model::{Identity, LocatorState, TypeCatalog, TypeDescriptor};

/// `false` only for identity-requiring types while no identity is known.
pub fn is_selectable(ty: &TypeDescriptor, state: &LocatorState) -> bool {
    !ty.requires_identity() || state.identity().is_some()
}

/// Option text for `ty` under the current identity.
pub fn label_for(ty: &TypeDescriptor, state: &LocatorState) -> String {
    ty.label_for(state.identity())
}

/// Stores `identity` and falls back to the first type that needs no identity if the active type
/// just became ineligible.
pub fn apply_identity(
    state: &LocatorState,
    catalog: &TypeCatalog,
    identity: Option<Identity>,
) -> LocatorState {
    let mut next = state.clone();
    next.identity = identity;
    fall_back_without_identity(&mut next, catalog);
    next
}

/// Re-validates `state` against a replacement catalog.
///
/// An active type missing from `catalog` is reset to its first entry; the identity rule is then
/// applied on top, so the result is always selectable when the catalog allows it.
pub fn apply_catalog(state: &LocatorState, catalog: &TypeCatalog) -> LocatorState {
    let mut next = state.clone();
    if !catalog.contains(&next.active_type) {
        next.active_type = catalog.first().value.clone();
    }
    fall_back_without_identity(&mut next, catalog);
    next
}

/// Both catalog and identity rules, for states produced by URI parsing.
pub fn revalidate(state: &LocatorState, catalog: &TypeCatalog) -> LocatorState {
    apply_catalog(state, catalog)
}

/// Selects `value` when it exists in `catalog` and is currently selectable.
pub fn select_type(
    state: &LocatorState,
    catalog: &TypeCatalog,
    value: &str,
) -> Option<LocatorState> {
    let ty = catalog.get(value)?;
    if !is_selectable(ty, state) {
        return None;
    }
    let mut next = state.clone();
    next.active_type = ty.value.clone();
    Some(next)
}

fn fall_back_without_identity(state: &mut LocatorState, catalog: &TypeCatalog) {
    if state.identity.is_some() {
        return;
    }
    let needs_identity =
        state.active_descriptor(catalog).is_some_and(TypeDescriptor::requires_identity);
    if !needs_identity {
        return;
    }
    if let Some(fallback) = catalog.first_without_identity() {
        tracing::debug!(
            from = %state.active_type,
            to = %fallback.value,
            "active space type requires an identity; falling back"
        );
        state.active_type = fallback.value.clone();
    }
}
