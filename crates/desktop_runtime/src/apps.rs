//! Static application registry backed by the build-time validated app catalog.

mod placeholders;

use std::{collections::HashSet, sync::OnceLock};

use leptos::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{icons::IconName, model::AppId};

use self::placeholders::{AboutMePanel, TictactoePanel, WordlePanel};

mod generated {
    include!(concat!(env!("OUT_DIR"), "/app_catalog_generated.rs"));
}

pub const APP_CATALOG_SCHEMA_VERSION: u32 = 1;

/// Renderable unit shown inside an app's window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppContent {
    About,
    Tictactoe,
    Wordle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppDescriptor {
    pub id: AppId,
    pub label: String,
    pub icon: IconName,
    pub content: AppContent,
    pub preferred_width: i32,
    pub preferred_height: i32,
    #[serde(default = "default_resizable")]
    pub resizable: bool,
}

fn default_resizable() -> bool {
    true
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors raised while loading an [`AppCatalog`].
pub enum CatalogError {
    #[error("app catalog is not valid JSON: {0}")]
    Parse(String),
    #[error("unsupported app catalog schema version {found} (expected {expected})")]
    UnsupportedSchema { expected: u32, found: u32 },
    #[error("app `{0}` is declared more than once")]
    DuplicateAppId(AppId),
    #[error("app catalog entry has an empty `{field}`")]
    EmptyField { field: &'static str },
    #[error("app `{0}` has a non-positive preferred size")]
    InvalidSize(AppId),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppCatalog {
    pub schema_version: u32,
    pub apps: Vec<AppDescriptor>,
}

impl AppCatalog {
    /// Parses and validates catalog JSON.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] when the payload does not parse or violates catalog rules.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let catalog: Self =
            serde_json::from_str(raw).map_err(|err| CatalogError::Parse(err.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.schema_version != APP_CATALOG_SCHEMA_VERSION {
            return Err(CatalogError::UnsupportedSchema {
                expected: APP_CATALOG_SCHEMA_VERSION,
                found: self.schema_version,
            });
        }
        let mut seen = HashSet::new();
        for app in &self.apps {
            if app.id.as_str().trim().is_empty() {
                return Err(CatalogError::EmptyField { field: "id" });
            }
            if app.label.trim().is_empty() {
                return Err(CatalogError::EmptyField { field: "label" });
            }
            if app.preferred_width <= 0 || app.preferred_height <= 0 {
                return Err(CatalogError::InvalidSize(app.id.clone()));
            }
            if !seen.insert(&app.id) {
                return Err(CatalogError::DuplicateAppId(app.id.clone()));
            }
        }
        Ok(())
    }
}

/// Returns every launchable app in desktop order.
pub fn app_registry() -> &'static [AppDescriptor] {
    static CATALOG: OnceLock<AppCatalog> = OnceLock::new();
    &CATALOG
        .get_or_init(|| {
            AppCatalog::from_json(generated::APP_CATALOG_JSON)
                .expect("app catalog is validated by the build script")
        })
        .apps
}

pub fn app_descriptor(app_id: &AppId) -> Option<&'static AppDescriptor> {
    app_registry().iter().find(|app| &app.id == app_id)
}

pub fn render_app_contents(content: AppContent) -> View {
    match content {
        AppContent::About => view! { <AboutMePanel /> }.into_view(),
        AppContent::Tictactoe => view! { <TictactoePanel /> }.into_view(),
        AppContent::Wordle => view! { <WordlePanel /> }.into_view(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn catalog_json(apps: &str) -> String {
        format!(r#"{{ "schema_version": 1, "apps": [{apps}] }}"#)
    }

    const ABOUT: &str = r#"{ "id": "about", "label": "About Me", "icon": "computer",
        "content": "about", "preferred_width": 400, "preferred_height": 350 }"#;

    #[test]
    fn registry_lists_catalog_apps_in_order() {
        let ids: Vec<&str> = app_registry().iter().map(|app| app.id.as_str()).collect();
        assert_eq!(ids, vec!["about", "tictactoe", "wordle"]);

        let tictactoe = app_descriptor(&AppId::from("tictactoe")).expect("tictactoe");
        assert_eq!(tictactoe.label, "Tictactoe");
        assert_eq!(tictactoe.preferred_width, 250);
        assert_eq!(tictactoe.preferred_height, 350);
        assert!(tictactoe.resizable);
    }

    #[test]
    fn unknown_app_has_no_descriptor() {
        assert!(app_descriptor(&AppId::from("minesweeper")).is_none());
    }

    #[test]
    fn catalog_defaults_resizable_to_true() {
        let catalog = AppCatalog::from_json(&catalog_json(ABOUT)).expect("valid catalog");
        assert!(catalog.apps[0].resizable);
        assert_eq!(catalog.apps[0].icon, IconName::Computer);
        assert_eq!(catalog.apps[0].content, AppContent::About);
    }

    #[test]
    fn catalog_rejects_duplicate_ids() {
        let raw = catalog_json(&format!("{ABOUT}, {ABOUT}"));
        assert_eq!(
            AppCatalog::from_json(&raw),
            Err(CatalogError::DuplicateAppId(AppId::from("about")))
        );
    }

    #[test]
    fn catalog_rejects_unsupported_schema() {
        let raw = format!(r#"{{ "schema_version": 2, "apps": [{ABOUT}] }}"#);
        assert_eq!(
            AppCatalog::from_json(&raw),
            Err(CatalogError::UnsupportedSchema {
                expected: 1,
                found: 2
            })
        );
    }

    #[test]
    fn catalog_rejects_empty_label_and_bad_size() {
        let empty_label = ABOUT.replace("About Me", " ");
        assert_eq!(
            AppCatalog::from_json(&catalog_json(&empty_label)),
            Err(CatalogError::EmptyField { field: "label" })
        );

        let zero_width = ABOUT.replace("400", "0");
        assert_eq!(
            AppCatalog::from_json(&catalog_json(&zero_width)),
            Err(CatalogError::InvalidSize(AppId::from("about")))
        );
    }

    #[test]
    fn catalog_rejects_unknown_content() {
        let raw = catalog_json(&ABOUT.replace(r#""content": "about""#, r#""content": "paint""#));
        assert!(matches!(
            AppCatalog::from_json(&raw),
            Err(CatalogError::Parse(_))
        ));
    }
}
