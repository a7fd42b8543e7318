// ABOUTME: Library crate for cvwizard exposing the wizard state, components, and profile store

#![allow(missing_docs)]

pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod models;
pub mod store;
