//! Award determination and decision notice assembly engine for social
//! security appeal tribunals.
//!
//! Given a read-only case snapshot and an externally supplied document
//! configuration, the crate classifies each scored activity into an award
//! tier, validates the snapshot's internal consistency, and assembles the
//! structured notice body that a judge issues. Persistence, identity lookup,
//! rendering, and the callback shell that decides when to invoke this engine
//! are external collaborators.

pub mod config;
pub mod notices;
