// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mntl-space and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The locator: owner of the selection state.
//!
//! Every mutation computes the next [`LocatorState`] with the pure functions from
//! [`crate::policy`] and [`crate::uri`], swaps it in, and then notifies listeners once if the
//! state or the `{ mentalSpace, path, fullUri }` payload changed. Malformed input is ignored,
//! never rejected.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use smol_str::SmolStr;

use crate::model::{Identity, LocatorState, SpacePath, TypeCatalog, TypeDescriptor};
use crate::policy;
use crate::ui::PathControls;
use crate::uri::{format_uri, parse_uri};

/// Name under which change notifications are published to hosts.
pub const CHANGE_EVENT: &str = "graph-changed";

/// Payload of a change notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangeEvent {
    pub mental_space: String,
    /// Effective path (override included).
    pub path: String,
    pub full_uri: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&ChangeEvent)>;

/// One row of the space-type selector as a presentation adapter should render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeOption {
    pub value: SmolStr,
    pub label: String,
    pub selected: bool,
    pub disabled: bool,
}

pub struct Locator {
    catalog: TypeCatalog,
    state: LocatorState,
    controls: PathControls,
    listeners: SmallVec<[(ListenerId, Listener); 2]>,
    next_listener_id: u64,
}

impl fmt::Debug for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Locator")
            .field("catalog", &self.catalog)
            .field("state", &self.state)
            .field("controls", &self.controls)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Default for Locator {
    fn default() -> Self {
        Self::new()
    }
}

impl Locator {
    pub fn new() -> Self {
        Self::with_catalog(TypeCatalog::default())
    }

    pub fn with_catalog(catalog: TypeCatalog) -> Self {
        let state = LocatorState::new(&catalog);
        Self {
            catalog,
            state,
            controls: PathControls::default(),
            listeners: SmallVec::new(),
            next_listener_id: 0,
        }
    }

    // -- accessors --------------------------------------------------------------------------

    pub fn state(&self) -> &LocatorState {
        &self.state
    }

    pub fn catalog(&self) -> &TypeCatalog {
        &self.catalog
    }

    pub fn controls(&self) -> &PathControls {
        &self.controls
    }

    /// The canonical URI.
    pub fn uri(&self) -> String {
        format_uri(&self.state, &self.catalog)
    }

    pub fn value(&self) -> String {
        self.uri()
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.state.identity()
    }

    pub fn mental_space(&self) -> &str {
        self.state.active_type()
    }

    /// Effective path: the override when set, otherwise the edited path.
    pub fn path(&self) -> &str {
        self.state.effective_path().as_str()
    }

    pub fn path_value(&self) -> Option<&str> {
        self.state.path_override().map(SpacePath::as_str)
    }

    pub fn path_editable(&self) -> bool {
        self.controls.editable()
    }

    pub fn show_path(&self) -> bool {
        self.controls.visible()
    }

    /// Whether a presentation adapter should accept path edits right now.
    pub fn is_path_input_enabled(&self) -> bool {
        self.controls.editable() && self.state.path_override().is_none()
    }

    pub fn active_descriptor(&self) -> Option<&TypeDescriptor> {
        self.state.active_descriptor(&self.catalog)
    }

    pub fn description(&self) -> &str {
        self.active_descriptor().map(|ty| ty.description.as_str()).unwrap_or("")
    }

    pub fn is_selectable(&self, value: &str) -> bool {
        self.catalog.get(value).is_some_and(|ty| policy::is_selectable(ty, &self.state))
    }

    pub fn options(&self) -> Vec<TypeOption> {
        self.catalog
            .iter()
            .map(|ty| TypeOption {
                value: ty.value.clone(),
                label: policy::label_for(ty, &self.state),
                selected: ty.value == self.state.active_type(),
                disabled: !policy::is_selectable(ty, &self.state),
            })
            .collect()
    }

    pub fn change_event(&self) -> ChangeEvent {
        ChangeEvent {
            mental_space: self.state.active_type().to_owned(),
            path: self.path().to_owned(),
            full_uri: self.uri(),
        }
    }

    // -- notifications ----------------------------------------------------------------------

    pub fn subscribe(&mut self, listener: impl FnMut(&ChangeEvent) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    // -- mutators ---------------------------------------------------------------------------

    /// Parses `uri` into the state. Unknown prefixes become a literal path.
    pub fn set_value(&mut self, uri: &str) {
        let parsed = parse_uri(uri, &self.state, &self.catalog);
        let next = policy::revalidate(&parsed, &self.catalog);
        self.commit(None, next);
    }

    /// `None` or an empty string clears the identity.
    pub fn set_identity(&mut self, identity: Option<&str>) {
        let identity = identity.and_then(Identity::new);
        let next = policy::apply_identity(&self.state, &self.catalog, identity);
        self.commit(None, next);
    }

    /// Replaces the catalog. Empty or duplicated lists are ignored.
    pub fn set_catalog(&mut self, types: Vec<TypeDescriptor>) {
        match TypeCatalog::new(types) {
            Ok(catalog) => self.replace_catalog(catalog),
            Err(err) => tracing::debug!(%err, "ignoring catalog assignment"),
        }
    }

    pub fn replace_catalog(&mut self, catalog: TypeCatalog) {
        let next = policy::apply_catalog(&self.state, &catalog);
        self.commit(Some(catalog), next);
    }

    /// Selects `value`; ignored when it is not in the catalog or not currently selectable.
    pub fn set_active_type(&mut self, value: &str) -> bool {
        match policy::select_type(&self.state, &self.catalog, value) {
            Some(next) => {
                self.commit(None, next);
                true
            }
            None => {
                tracing::debug!(value, "ignoring unavailable space type");
                false
            }
        }
    }

    /// Sets the editable path; ignored while a path override is active.
    pub fn set_path(&mut self, text: &str) -> bool {
        if self.state.path_override().is_some() {
            tracing::debug!(text, "ignoring path edit while path override is active");
            return false;
        }
        let mut next = self.state.clone();
        next.path = SpacePath::new(text);
        self.commit(None, next);
        true
    }

    pub fn set_path_override(&mut self, path: Option<&str>) {
        let mut next = self.state.clone();
        next.path_override = path.map(SpacePath::new);
        self.commit(None, next);
    }

    pub fn set_path_editable(&mut self, editable: bool) {
        if self.controls.set_editable(editable) {
            tracing::trace!(editable, "path editability changed");
        }
    }

    pub fn set_show_path(&mut self, visible: bool) {
        if self.controls.set_visible(visible) {
            tracing::trace!(visible, "path visibility changed");
        }
    }

    fn commit(&mut self, catalog: Option<TypeCatalog>, next: LocatorState) {
        let before = self.change_event();
        if let Some(catalog) = catalog {
            self.catalog = catalog;
        }
        let state_changed = self.state != next;
        self.state = next;

        let event = self.change_event();
        if !state_changed && event == before {
            tracing::trace!(uri = %event.full_uri, "locator state converged; no notification");
            return;
        }

        tracing::debug!(
            mental_space = %event.mental_space,
            path = %event.path,
            uri = %event.full_uri,
            "locator changed"
        );
        for (_, listener) in self.listeners.iter_mut() {
            listener(&event);
        }
    }
}
