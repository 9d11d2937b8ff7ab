#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

//! docsearch-core
//!
//! Data model, error type, configuration and the thin I/O collaborators
//! (snapshot store, directory loader, seed set) shared by the text and
//! engine crates.

pub mod config;
pub mod corpus;
pub mod data_processor;
pub mod error;
pub mod seed;
pub mod store;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
