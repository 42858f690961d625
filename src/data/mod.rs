/// Data layer: core types, loading, and the two chart computations.
///
/// Architecture:
/// ```text
///   launch records .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → LaunchDataset (never mutated)
///   └──────────┘
///        │
///        ├───────────────────────┐
///        ▼                       ▼
///   ┌───────────┐          ┌──────────┐
///   │ aggregate │          │  filter   │  site + payload range
///   └───────────┘          └──────────┘  → ScatterChart
///     site → PieChart            │
///                                ▼
///                          ┌──────────┐
///                          │  export   │  selection → .csv
///                          └──────────┘
/// ```
pub mod aggregate;
pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
