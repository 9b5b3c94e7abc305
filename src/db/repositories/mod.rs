pub mod note_repository;
pub mod settings_repository;
pub mod weekly_repository;
