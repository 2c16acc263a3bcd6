//! Webinars - organize webinars and manage their seat capacity.
//!
//! Layered as domain → ports → application handlers → adapters, with
//! configuration loaded from the environment.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
