//! Data layer: measurement tables and file loading.
//!
//! ```text
//!  .csv / .parquet
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  skip rows, parse, apply aliases → DataTable
//!   └──────────┘
//!        │
//!        ▼
//!   ┌───────────┐
//!   │ DataTable │  named numeric columns, one row per frequency
//!   └───────────┘
//! ```

pub mod loader;
pub mod model;
