//! Common utilities for benchmarks

use criterion::Criterion;
use pprof::criterion::{Output, PProfProfiler};
use serde_json::{json, Map, Value};

/// Configure criterion with flamegraph profiling support
pub fn criterion_config() -> Criterion {
    Criterion::default()
        .warm_up_time(std::time::Duration::from_secs(3))
        .measurement_time(std::time::Duration::from_secs(10))
        .sample_size(100)
        .with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)))
}

/// Document text with `entries` aliases, a quarter as many shim entries and
/// a tenth as many bundles, mixing every accepted shape
pub fn create_document(entries: usize) -> String {
    let mut paths = Map::new();
    for i in 0..entries {
        let value = if i % 3 == 0 {
            json!({ "path": format!("Scripts/module-{}", i), "defaultBundle": format!("bundle-{}", i % 10) })
        } else {
            Value::String(format!("Scripts/module-{}", i))
        };
        paths.insert(format!("module-{}", i), value);
    }

    let mut shim = Map::new();
    for i in 0..entries / 4 {
        shim.insert(
            format!("legacy-{}", i),
            json!({ "exports": format!("Legacy{}", i), "deps": [format!("module-{}", i), "jquery"] }),
        );
    }

    let mut bundles = Map::new();
    for i in 0..(entries / 10).max(1) {
        let modules: Vec<String> = (0..10).map(|j| format!("module-{}", i * 10 + j)).collect();
        let value = if i % 2 == 0 {
            json!(modules)
        } else {
            json!({
                "outputPath": format!("Scripts/Bundles/bundle-{}.js", i),
                "includes": [format!("bundle-{}", i - 1)],
                "virtual": i % 4 == 3,
                "items": modules.iter().map(|m| json!({ "path": m, "compression": "none" })).collect::<Vec<_>>()
            })
        };
        bundles.insert(format!("bundle-{}", i), value);
    }

    let document = json!({ "paths": paths, "shim": shim, "bundles": bundles });
    serde_json::to_string_pretty(&document).expect("benchmark document serializes")
}
