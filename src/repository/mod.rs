//! Typed data-access operations. Repositories take a borrowed connection,
//! return `sea_orm::DbErr` untranslated, and own no HTTP concerns.

pub mod readings;
pub mod settings;
