pub mod item;
pub mod postgres_service;
