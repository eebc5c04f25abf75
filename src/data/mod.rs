/// Data layer: core types, loading, filtering, and summaries.
///
/// Architecture:
/// ```text
///  assets/penguins.csv (embedded)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV / JSON → PenguinDataset
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ PenguinDataset  │  Vec<Penguin>, immutable after load
///   └────────────────┘
///        │
///        ▼
///   ┌──────────┐        ┌──────────┐
///   │  filter   │───────▶│ summary  │  count / mean accessors
///   └──────────┘ indices └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod summary;
