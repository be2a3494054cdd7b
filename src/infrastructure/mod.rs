pub mod database;
pub mod i18n;
pub mod repositories;
pub mod security;
pub mod time;
