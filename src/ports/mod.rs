//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `JudgmentSource` - Where a judgment set is loaded from

mod judgment_source;

pub use judgment_source::{JudgmentSource, JudgmentSourceError};
