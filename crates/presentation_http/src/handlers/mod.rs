//! HTTP request handlers

pub mod departures;
pub mod health;
pub mod stops;
