/// Prediction layer: core types, artifact loading, and feature alignment.
///
/// Architecture:
/// ```text
///  pollution_model.json   model_columns.json
///        │                      │
///        └──────────┬───────────┘
///                   ▼
///             ┌──────────┐
///             │  loader   │  parse + validate → PollutionModel
///             └──────────┘
///                   │
///   (year, id)      ▼
///        │    ┌──────────────┐
///        ├──▶ │    align      │  request → FeatureVector (schema order)
///        │    └──────────────┘
///        │          │
///        │          ▼
///        │    ┌──────────────┐
///        └──▶ │ LinearRegressor │  FeatureVector → 9 pollutant values
///             └──────────────┘
/// ```

pub mod align;
pub mod loader;
pub mod model;
