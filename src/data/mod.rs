/// Data layer: catalog types, loading, and the search pipeline.
///
/// Architecture:
/// ```text
///  industries / sectors / education  (.csv or .json)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse tables → Catalog
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Catalog  │  read-only rows + derived sector-name index
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  tri-state criteria → matching indices
///   └──────────┘   (codes: sector expansion, salary: thresholds)
///        │
///        ▼
///   ┌──────────┐
///   │   rank    │  order by descending median wage
///   └──────────┘
/// ```

pub mod codes;
pub mod filter;
pub mod loader;
pub mod model;
pub mod rank;
pub mod salary;
