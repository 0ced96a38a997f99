pub mod api;
pub mod backend;
pub mod cache;
pub mod config;
pub mod data_models;
pub mod error;
pub mod locations;
pub mod output;
pub mod pages;
pub mod pagination;
pub mod query_engine;
pub mod results_view;
pub mod ticket;
