//! Host independent logic of the campsite info view.
//!
//! Everything in here is plain Rust so that it can be tested
//! without a browser. The frontend only wires the results
//! into the DOM.

pub use campsite_entities as entities;

pub mod comment;
pub mod display;
pub mod form;
pub mod validate;
