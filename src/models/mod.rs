pub mod dashboard;
pub mod metrics;
pub mod note;
pub mod settings;
pub mod week;
pub mod weekly;
