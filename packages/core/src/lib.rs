//! Parkways core library.
//!
//! An in-memory model of visitors, national parks and the trips joining
//! them, organised in domain, infrastructure and usecase layers.

pub mod domain;
pub mod infrastructure;
pub mod usecase;
