/// Data layer: core types, loading, and the chart pipeline.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Vec<Row>, header-ordered columns
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  year-range bound → surviving row indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  series   │  rows → labels + values (aggregate per group in bar mode)
///   └──────────┘
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
pub mod series;
