//! Integration tests for the pricing engine

mod catalog_test;
mod engine_test;
mod properties_test;
