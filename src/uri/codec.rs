// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mntl-space and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use memchr::memchr;

use crate::model::{LocatorState, SpacePath, TypeCatalog};

/// Renders the canonical URI `{type}[/{identity}]{path}`.
///
/// The identity segment is only written for identity-requiring types while an identity is
/// known. An active type missing from `catalog` is rendered without identity.
pub fn format_uri(state: &LocatorState, catalog: &TypeCatalog) -> String {
    let path = state.effective_path().as_str();
    let identity = state
        .active_descriptor(catalog)
        .filter(|ty| ty.requires_identity())
        .and(state.identity());

    match identity {
        Some(identity) => {
            let embedded = identity.embedded();
            let mut uri =
                String::with_capacity(state.active_type.len() + 1 + embedded.len() + path.len());
            uri.push_str(&state.active_type);
            uri.push('/');
            uri.push_str(embedded);
            uri.push_str(path);
            uri
        }
        None => {
            let mut uri = String::with_capacity(state.active_type.len() + path.len());
            uri.push_str(&state.active_type);
            uri.push_str(path);
            uri
        }
    }
}

/// Applies `uri` on top of `current` and returns the resulting state.
///
/// Parsing never fails:
/// - an empty `uri` leaves the state unchanged;
/// - a `uri` without a known type prefix is taken as a literal path;
/// - for identity-requiring types with a known identity the identity segment is skipped, not
///   re-derived, and the remainder after it becomes the path.
///
/// `identity` and `path_override` are never written here.
pub fn parse_uri(uri: &str, current: &LocatorState, catalog: &TypeCatalog) -> LocatorState {
    let mut next = current.clone();
    if uri.is_empty() {
        return next;
    }

    let Some(ty) = catalog.match_prefix(uri) else {
        next.path = SpacePath::new(uri);
        return next;
    };

    next.active_type = ty.value.clone();
    let rest = &uri[ty.value.len()..];

    if ty.requires_identity() && current.identity.is_some() {
        if let Some(path) = path_after_identity(rest) {
            next.path = path;
        }
    } else {
        next.path = SpacePath::new(rest);
    }

    next
}

/// Strips the `/{identity}` segment from `rest`.
///
/// `None` when `rest` has no separator at all; `/` when nothing follows the identity segment.
fn path_after_identity(rest: &str) -> Option<SpacePath> {
    let bytes = rest.as_bytes();
    let first = memchr(b'/', bytes)?;
    let path = match memchr(b'/', &bytes[first + 1..]) {
        Some(offset) => SpacePath::new(&rest[first + 1 + offset..]),
        None => SpacePath::root(),
    };
    Some(path)
}
