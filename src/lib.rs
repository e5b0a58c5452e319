pub mod api;
pub mod cache;
pub mod components;
pub mod config;
pub mod pages;
pub mod routes;
pub mod theme;
pub mod types;
