// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mntl-space and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Presentation toggles for the path control.
//!
//! These never change how the canonical URI is derived; they only tell a presentation adapter
//! whether to show the path input and whether the user may edit it.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathControls {
    rev: u64,
    editable: bool,
    visible: bool,
}

impl Default for PathControls {
    fn default() -> Self {
        Self { rev: 0, editable: true, visible: true }
    }
}

impl PathControls {
    /// Bumped on every effective change so adapters can cheaply detect a re-render.
    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn editable(&self) -> bool {
        self.editable
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn set_editable(&mut self, editable: bool) -> bool {
        if self.editable == editable {
            return false;
        }
        self.editable = editable;
        self.rev = self.rev.wrapping_add(1);
        true
    }

    pub fn set_visible(&mut self, visible: bool) -> bool {
        if self.visible == visible {
            return false;
        }
        self.visible = visible;
        self.rev = self.rev.wrapping_add(1);
        true
    }
}
