pub mod config;
pub mod db;
pub mod dto;
pub mod error;
pub mod locks;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
