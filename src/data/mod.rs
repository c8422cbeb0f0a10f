//! Data layer: the parsed values and the file loader.
//!
//! Architecture:
//! ```text
//!   values.txt  (one float per line)
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader  │  read file → parse lines → Values
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  Values  │  Vec<f64>, index → [x, y] points, summary
//!   └──────────┘
//! ```

pub mod loader;
pub mod model;
