pub mod apps;
pub mod components;
mod effect_executor;
pub mod host;
pub mod icons;
pub mod model;
pub mod reducer;
mod runtime_context;
pub mod window_manager;

pub use apps::{app_descriptor, app_registry, AppContent, AppDescriptor, CatalogError};
pub use components::{DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, DesktopTransition, ReducerError, RuntimeEffect};
