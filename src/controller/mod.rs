pub mod cache;
pub mod data_service;
pub mod http_handlers;
