/// Data layer: benchmark records, loading, and errors.
///
/// Architecture:
/// ```text
///  array.data / list.data / list_simple.data
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse rows → one record per operation
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Datasets  │  add / union / intersection / difference
///   └──────────┘
/// ```

pub mod error;
pub mod loader;
pub mod model;
