//! Общие типы и чистая логика, разделяемые backend и frontend
//!
//! - `domain` — записи (aggregates) по каждой сущности админки
//! - `shared` — бейджи, фильтрация/пагинация, детальный просмотр, метрики, валидация
//! - `dashboards` — DTO обзорного дашборда

pub mod dashboards;
pub mod domain;
pub mod shared;
