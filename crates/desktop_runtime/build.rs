use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const CATALOG_SCHEMA_VERSION: u32 = 1;
const KNOWN_ICONS: [&str; 3] = ["computer", "joystick", "notepad"];
const KNOWN_CONTENT: [&str; 3] = ["about", "tictactoe", "wordle"];

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AppEntry {
    id: String,
    label: String,
    icon: String,
    content: String,
    preferred_width: i32,
    preferred_height: i32,
    #[serde(default = "default_resizable")]
    resizable: bool,
}

fn default_resizable() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AppCatalog {
    schema_version: u32,
    apps: Vec<AppEntry>,
}

fn validate(catalog: &AppCatalog, path: &str) {
    if catalog.schema_version != CATALOG_SCHEMA_VERSION {
        panic!(
            "catalog schema mismatch in {path}: expected {CATALOG_SCHEMA_VERSION} found {}",
            catalog.schema_version
        );
    }
    if catalog.apps.is_empty() {
        panic!("catalog {path} declares no apps");
    }

    let mut seen = HashSet::new();
    for app in &catalog.apps {
        if app.id.trim().is_empty() || app.label.trim().is_empty() {
            panic!("catalog {path} has an app with an empty id or label");
        }
        if !seen.insert(app.id.as_str()) {
            panic!("catalog {path} declares app `{}` twice", app.id);
        }
        if app.preferred_width <= 0 || app.preferred_height <= 0 {
            panic!("app `{}` in {path} has a non-positive preferred size", app.id);
        }
        if !KNOWN_ICONS.contains(&app.icon.as_str()) {
            panic!("app `{}` in {path} uses unknown icon `{}`", app.id, app.icon);
        }
        if !KNOWN_CONTENT.contains(&app.content.as_str()) {
            panic!(
                "app `{}` in {path} uses unknown content `{}`",
                app.id, app.content
            );
        }
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("app_catalog.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let catalog: AppCatalog = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    validate(&catalog, &path.display().to_string());

    let json = serde_json::to_string_pretty(&catalog).expect("serialize app catalog");
    let generated = format!(
        "/// Build-time generated app catalog JSON.\n\
pub const APP_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("app_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
