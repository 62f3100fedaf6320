//! HTTP handlers for service metadata and account CRUD.

pub mod account;
pub mod common;
