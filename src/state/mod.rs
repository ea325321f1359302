//! State module for tracking entity assembly
//!
//! This module provides the per-entity lifecycle used by the scheduler while a
//! record is assembled across several fetches.
//!
//! # Components
//!
//! - `EntityKey`: (entity type, metallum id), the identity used for dedup
//! - `Stage`: a completion stage, one asynchronous sub-fetch an entity waits on
//! - `EntityState`: Seeded, Partial, Complete or Emitted

mod entity_state;
mod stage;

// Re-export main types
pub use entity_state::{EntityKey, EntityState};
pub use stage::{Stage, StageSet};
