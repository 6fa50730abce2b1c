// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mntl-space and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const PATH_SEPARATOR: char = '/';

/// A sub-path inside a mental space. Always starts with `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct SpacePath {
    value: String,
}

impl SpacePath {
    /// Normalizes `text` by inserting a leading `/` when it is missing.
    ///
    /// The empty string becomes `/`. No other rewriting (duplicate separators, `..`) happens.
    pub fn new(text: impl Into<String>) -> Self {
        let mut value = text.into();
        if !value.starts_with(PATH_SEPARATOR) {
            value.insert(0, PATH_SEPARATOR);
        }
        Self { value }
    }

    pub fn root() -> Self {
        Self { value: PATH_SEPARATOR.to_string() }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn is_root(&self) -> bool {
        self.value.len() == 1
    }
}

impl Default for SpacePath {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for SpacePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for SpacePath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<String> for SpacePath {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for SpacePath {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<SpacePath> for String {
    fn from(path: SpacePath) -> Self {
        path.value
    }
}
