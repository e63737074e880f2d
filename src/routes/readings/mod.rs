mod handlers;
mod types;

pub use handlers::{create_reading, get_history, get_history_by_timespan, get_latest_reading};
pub use types::{
    CreateReadingResponse, HistoryQuery, ReadingPayload, ReadingResponse, TimespanQuery,
    parse_timespan,
};

// Re-export utoipa path structs for OpenAPI documentation
pub use handlers::{
    __path_create_reading, __path_get_history, __path_get_history_by_timespan,
    __path_get_latest_reading,
};
