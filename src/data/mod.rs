//! Data ingestion and persistence
//!
//! CSV loading and saving for the listings table.

pub mod table;

pub use table::ListingTable;
