// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mntl-space and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Scheme token that is stripped whenever an identity is displayed or embedded in a URI.
pub const MAILTO_SCHEME: &str = "mailto:";

/// An opaque user identifier, e.g. `mailto:alice@ex.io`.
///
/// No format is enforced; the only rule is that an identity is never empty, because an empty
/// string means "no identity is known" everywhere in the locator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity {
    value: String,
}

impl Identity {
    /// Returns `None` for the empty string.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.is_empty() {
            return None;
        }
        Some(Self { value })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// The identity as it appears inside a canonical URI and in option labels.
    pub fn embedded(&self) -> &str {
        self.value.strip_prefix(MAILTO_SCHEME).unwrap_or(&self.value)
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for Identity {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for Identity {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::Identity;

    #[test]
    fn empty_identity_is_none() {
        assert_eq!(Identity::new(""), None);
    }

    #[test]
    fn embedded_strips_mailto_scheme_once() {
        let identity = Identity::new("mailto:alice@ex.io").expect("identity");
        assert_eq!(identity.embedded(), "alice@ex.io");
        assert_eq!(identity.as_str(), "mailto:alice@ex.io");

        let identity = Identity::new("mailto:mailto:bob").expect("identity");
        assert_eq!(identity.embedded(), "mailto:bob");
    }

    #[test]
    fn embedded_keeps_plain_handles() {
        let identity = Identity::new("carol").expect("identity");
        assert_eq!(identity.embedded(), "carol");
    }
}
