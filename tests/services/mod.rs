//! Service-level tests over in-memory repositories

mod catalogue_tests;
mod warehouse_tests;
