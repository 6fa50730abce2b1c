// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mntl-space and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Canonical URI codec.
//!
//! Canonical format: `{type}[/{identity}]{path}`, e.g. `mntl:publ/notes/today` or
//! `mntl:open/alice@ex.io/notes`.

mod codec;

pub use codec::{format_uri, parse_uri};

#[cfg(test)]
mod tests;
