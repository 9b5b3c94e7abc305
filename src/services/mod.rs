pub mod aggregation;
pub mod dashboard_service;
pub mod notes_service;
pub mod record_store;
pub mod sample_data;
pub mod settings_service;
pub mod week_utils;
pub mod weekly_service;
