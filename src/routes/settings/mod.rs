mod handlers;
mod types;

pub use handlers::{get_settings, update_settings};
pub use types::{SettingsPayload, SettingsResponse, UpdateSettingsResponse};

// Re-export utoipa path structs for OpenAPI documentation
pub use handlers::{__path_get_settings, __path_update_settings};
