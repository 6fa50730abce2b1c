// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mntl-space and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use rstest::{fixture, rstest};

use super::{format_uri, parse_uri};
use crate::model::{Identity, LocatorState, SpacePath, TypeCatalog, TypeDescriptor};

#[fixture]
fn catalog() -> TypeCatalog {
    TypeCatalog::default()
}

fn state_with(
    catalog: &TypeCatalog,
    active_type: &str,
    identity: Option<&str>,
    path: &str,
) -> LocatorState {
    let mut state = LocatorState::new(catalog);
    state.active_type = active_type.into();
    state.identity = identity.and_then(Identity::new);
    state.path = SpacePath::new(path);
    state
}

#[rstest]
fn formats_public_type_without_identity(catalog: TypeCatalog) {
    let state = state_with(&catalog, "mntl:publ", Some("mailto:alice@ex.io"), "/notes/today");
    assert_eq!(format_uri(&state, &catalog), "mntl:publ/notes/today");
}

#[rstest]
fn formats_identity_segment_without_scheme(catalog: TypeCatalog) {
    let state = state_with(&catalog, "mntl:open", Some("mailto:alice@ex.io"), "/notes");
    assert_eq!(format_uri(&state, &catalog), "mntl:open/alice@ex.io/notes");
}

#[rstest]
fn formats_identity_type_without_known_identity_as_plain(catalog: TypeCatalog) {
    let state = state_with(&catalog, "mntl:open", None, "/notes");
    assert_eq!(format_uri(&state, &catalog), "mntl:open/notes");
}

#[rstest]
fn formats_unknown_active_type_without_identity(catalog: TypeCatalog) {
    let state = state_with(&catalog, "mntl:gone", Some("alice"), "/x");
    assert_eq!(format_uri(&state, &catalog), "mntl:gone/x");
}

#[rstest]
fn formats_path_override_instead_of_path(catalog: TypeCatalog) {
    let mut state = state_with(&catalog, "mntl:publ", None, "/edited");
    state.path_override = Some(SpacePath::new("fixed"));
    assert_eq!(format_uri(&state, &catalog), "mntl:publ/fixed");
}

#[rstest]
fn parses_public_uri(catalog: TypeCatalog) {
    let state = LocatorState::new(&catalog);
    let next = parse_uri("mntl:publ/notes/today", &state, &catalog);
    assert_eq!(next.active_type(), "mntl:publ");
    assert_eq!(next.path().as_str(), "/notes/today");
    assert_eq!(next.identity(), None);
}

#[rstest]
#[case("mntl:publ", "/")]
#[case("mntl:publnotes", "/notes")]
#[case("mntl:publ/", "/")]
fn parses_public_uri_remainder_as_normalized_path(
    catalog: TypeCatalog,
    #[case] uri: &str,
    #[case] expected: &str,
) {
    let state = state_with(&catalog, "mntl:publ", None, "/previous");
    let next = parse_uri(uri, &state, &catalog);
    assert_eq!(next.active_type(), "mntl:publ");
    assert_eq!(next.path().as_str(), expected);
}

#[rstest]
fn parses_identity_uri_and_discards_identity_segment(catalog: TypeCatalog) {
    let state = state_with(&catalog, "mntl:publ", Some("mailto:alice@ex.io"), "/");
    let next = parse_uri("mntl:open/mailto:alice@ex.io/notes", &state, &catalog);
    assert_eq!(next.active_type(), "mntl:open");
    assert_eq!(next.path().as_str(), "/notes");
    assert_eq!(next.identity().map(Identity::as_str), Some("mailto:alice@ex.io"));
}

#[rstest]
fn identity_segment_is_not_rederived(catalog: TypeCatalog) {
    let state = state_with(&catalog, "mntl:publ", Some("alice"), "/");
    let next = parse_uri("mntl:open/mallory/deep/path", &state, &catalog);
    assert_eq!(next.identity().map(Identity::as_str), Some("alice"));
    assert_eq!(next.path().as_str(), "/deep/path");
    assert_eq!(format_uri(&next, &catalog), "mntl:open/alice/deep/path");
}

#[rstest]
fn identity_uri_without_second_separator_resets_path_to_root(catalog: TypeCatalog) {
    let state = state_with(&catalog, "mntl:publ", Some("alice"), "/previous");
    let next = parse_uri("mntl:open/alice", &state, &catalog);
    assert_eq!(next.active_type(), "mntl:open");
    assert_eq!(next.path().as_str(), "/");
}

#[rstest]
fn identity_uri_without_any_separator_keeps_previous_path(catalog: TypeCatalog) {
    let state = state_with(&catalog, "mntl:publ", Some("alice"), "/previous");
    let next = parse_uri("mntl:open", &state, &catalog);
    assert_eq!(next.active_type(), "mntl:open");
    assert_eq!(next.path().as_str(), "/previous");
}

#[rstest]
fn identity_type_without_known_identity_keeps_segment_in_path(catalog: TypeCatalog) {
    let state = LocatorState::new(&catalog);
    let next = parse_uri("mntl:open/alice/notes", &state, &catalog);
    assert_eq!(next.active_type(), "mntl:open");
    assert_eq!(next.path().as_str(), "/alice/notes");
}

#[rstest]
fn unknown_prefix_is_taken_as_literal_path(catalog: TypeCatalog) {
    let state = state_with(&catalog, "mntl:publ", Some("alice"), "/previous");
    let next = parse_uri("notes/today", &state, &catalog);
    assert_eq!(next.active_type(), "mntl:publ");
    assert_eq!(next.identity().map(Identity::as_str), Some("alice"));
    assert_eq!(next.path().as_str(), "/notes/today");
}

#[rstest]
fn empty_uri_is_a_no_op(catalog: TypeCatalog) {
    let state = state_with(&catalog, "mntl:publ", None, "/previous");
    assert_eq!(parse_uri("", &state, &catalog), state);
}

#[rstest]
fn parse_never_touches_path_override(catalog: TypeCatalog) {
    let mut state = state_with(&catalog, "mntl:publ", None, "/edited");
    state.path_override = Some(SpacePath::new("/fixed"));
    let next = parse_uri("mntl:publ/other", &state, &catalog);
    assert_eq!(next.path().as_str(), "/other");
    assert_eq!(next.path_override().map(SpacePath::as_str), Some("/fixed"));
    assert_eq!(next.effective_path().as_str(), "/fixed");
}

#[test]
fn overlapping_prefixes_resolve_in_catalog_order() {
    let catalog = TypeCatalog::new(vec![
        TypeDescriptor::new("mntl:pub", "mntl:pub", ""),
        TypeDescriptor::new("mntl:publ", "mntl:publ", ""),
    ])
    .expect("catalog");
    let state = LocatorState::new(&catalog);
    let next = parse_uri("mntl:publ/x", &state, &catalog);
    assert_eq!(next.active_type(), "mntl:pub");
    assert_eq!(next.path().as_str(), "/l/x");
}

#[rstest]
#[case("mntl:publ", None, "/")]
#[case("mntl:publ", None, "/notes/today")]
#[case("mntl:publ", Some("alice"), "/a/b/c")]
#[case("mntl:open", Some("mailto:alice@ex.io"), "/")]
#[case("mntl:open", Some("mailto:alice@ex.io"), "/notes")]
#[case("mntl:open", Some("bob"), "/deeply/nested/path/")]
fn format_then_parse_round_trips(
    catalog: TypeCatalog,
    #[case] active_type: &str,
    #[case] identity: Option<&str>,
    #[case] path: &str,
) {
    let state = state_with(&catalog, active_type, identity, path);
    let uri = format_uri(&state, &catalog);

    let type_end = state.active_type().len();
    assert!(uri[type_end..].starts_with('/'), "path segment of {uri} must start with '/'");

    let reparsed = parse_uri(&uri, &state, &catalog);
    assert_eq!(reparsed.active_type(), state.active_type());
    assert_eq!(reparsed.effective_path(), state.effective_path());
    assert_eq!(format_uri(&reparsed, &catalog), uri);
}

#[rstest]
fn round_trip_into_fresh_state_for_public_types(catalog: TypeCatalog) {
    let state = state_with(&catalog, "mntl:publ", None, "/x/y");
    let uri = format_uri(&state, &catalog);
    let reparsed = parse_uri(&uri, &LocatorState::new(&catalog), &catalog);
    assert_eq!(reparsed, state);
}
