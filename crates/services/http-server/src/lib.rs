//! EV metadata harmonization server
//!
//! JSON API over the unified extracellular-vesicle metadata table.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐   ┌──────────────────┐   ┌────────────────────┐
//! │  HTTP API Server │──▶│  DatasetLocator  │──▶│  Parquet reader    │
//! │  (axum)          │   │  (env / search)  │   │  (blocking pool)   │
//! └────────┬─────────┘   └──────────────────┘   └─────────┬──────────┘
//!          │                                              ▼
//!          │                                   ┌────────────────────┐
//!          └──────────── JSON ◀────────────────│  harmonize         │
//!                                              │  (filters, summary)│
//!                                              └────────────────────┘
//! ```

pub mod api;
pub mod config;
