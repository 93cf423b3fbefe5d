use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Aggregate monthly client_usage.csv into one row per namespace.
    //
    // The fixture has one row per (month, namespace). The chart shows usage
    // for the whole period, so sum each namespace's counts across months.
    let usage_src = Path::new("../fixtures/client_usage.csv");
    let usage_dest = Path::new(&out_dir).join("namespace_usage.csv");

    let mut output = String::from("namespace,non_entity_tokens,distinct_entities,total\n");

    if usage_src.exists() {
        let mut totals: BTreeMap<String, (f64, f64)> = BTreeMap::new();

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(usage_src)
            .expect("Failed to open client_usage.csv");

        for record in rdr.records().flatten() {
            let namespace = record.get(1).unwrap_or("").trim().to_string();
            let tokens = record.get(2).unwrap_or("").trim().parse::<f64>();
            let entities = record.get(3).unwrap_or("").trim().parse::<f64>();
            if namespace.is_empty() {
                continue;
            }
            if let (Ok(tokens), Ok(entities)) = (tokens, entities) {
                let entry = totals.entry(namespace).or_default();
                entry.0 += tokens;
                entry.1 += entities;
            }
        }

        for (namespace, (tokens, entities)) in &totals {
            output.push_str(&format!(
                "{},{:.0},{:.0},{:.0}\n",
                namespace,
                tokens,
                entities,
                tokens + entities
            ));
        }
    }

    fs::write(&usage_dest, output).unwrap();

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/client_usage.csv");
}
