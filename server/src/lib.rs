// coursehub_server/src/lib.rs

//! HTTP front end for the coursehub catalogue: configuration, the PostgreSQL
//! store adapter, actix-web routing and the JSON response envelope.

pub mod config;
pub mod db;
pub mod errors;
pub mod seed;
pub mod state;
pub mod web;
