// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mntl-space and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mntl_space::uri::{format_uri, parse_uri};
use mntl_space::{Locator, TypeCatalog};

// Benchmark identity (keep stable):
// - Group names in this file: `uri.format`, `uri.parse`
// - Case IDs must remain stable across refactors so results stay comparable over time.
fn locator_for(case: &str) -> Locator {
    let mut locator = Locator::new();
    match case {
        "public_short" => locator.set_value("mntl:publ/notes"),
        "identity_deep" => {
            locator.set_identity(Some("mailto:alice@ex.io"));
            locator.set_active_type("mntl:open");
            locator.set_path(&"/segment".repeat(32));
        }
        _ => unreachable!("unknown bench case {case}"),
    }
    locator
}

fn benches_codec(c: &mut Criterion) {
    let catalog = TypeCatalog::default();

    {
        let mut group = c.benchmark_group("uri.format");
        for case_id in ["public_short", "identity_deep"] {
            let locator = locator_for(case_id);
            group.bench_function(case_id, |b| {
                b.iter(|| format_uri(black_box(locator.state()), black_box(&catalog)))
            });
        }
        group.finish();
    }

    {
        let mut group = c.benchmark_group("uri.parse");
        for case_id in ["public_short", "identity_deep"] {
            let locator = locator_for(case_id);
            let uri = locator.uri();
            group.bench_function(case_id, |b| {
                b.iter(|| parse_uri(black_box(&uri), black_box(locator.state()), black_box(&catalog)))
            });
        }
        group.finish();
    }
}

criterion_group!(benches, benches_codec);
criterion_main!(benches);
