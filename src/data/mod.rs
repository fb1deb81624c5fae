/// Data layer: core types, loading, classification, and chart geometry.
///
/// Architecture:
/// ```text
///  .csv / .tsv
///       │
///       ▼
///  ┌──────────┐
///  │  loader   │  parse file → TableData (headers + records)
///  └──────────┘
///       │
///       ▼
///  ┌──────────┐
///  │ classify  │  sample a record prefix → numeric column candidates
///  └──────────┘
///       │  (user picks columns; `select` validates typed indices)
///       ▼
///  ┌──────────┐
///  │  series   │  extract capped float series → pixel geometry per viewport
///  └──────────┘
/// ```
///
/// Everything below `loader` is pure and stateless: the same `TableData`
/// snapshot always yields the same candidates and the same pixel points.
pub mod classify;
pub mod error;
pub mod loader;
pub mod model;
pub mod select;
pub mod series;
