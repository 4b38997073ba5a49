//! Embeds the SQL files in `migrations/` as a `&[Migration]` literal.
//!
//! Every migration consists of `<name>.up.sql` and `<name>.down.sql`; a
//! missing half is embedded as an empty script. Migrations are ordered by
//! name.

use std::{collections::BTreeMap, fmt::Write, path::PathBuf};

fn main() {
    println!("cargo::rerun-if-changed=migrations");

    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("migrations");
    let mut migrations = BTreeMap::<String, [String; 2]>::new();
    for entry in dir.read_dir().expect("failed to read migrations directory") {
        let path = entry.expect("failed to read migrations entry").path();
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let (name, idx) = if let Some(name) = file_name.strip_suffix(".up.sql") {
            (name, 0)
        } else if let Some(name) = file_name.strip_suffix(".down.sql") {
            (name, 1)
        } else {
            continue;
        };
        let script = std::fs::read_to_string(&path).expect("failed to read migration");
        migrations.entry(name.to_owned()).or_default()[idx] = script;
    }

    let mut out = String::from("&[");
    for (name, [up, down]) in &migrations {
        write!(out, "Migration{{name:{name:?},up:{up:?},down:{down:?}}},").unwrap();
    }
    out.push(']');

    let path = PathBuf::from(std::env::var("OUT_DIR").unwrap()).join("migrations.rs");
    std::fs::write(&path, out).expect("failed to write migrations.rs");
    println!("cargo::rustc-env=MIGRATIONS={}", path.display());
}
