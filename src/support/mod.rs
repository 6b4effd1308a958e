//! Small capabilities the validation pipeline consumes.
//!
//! # Responsibilities
//! - Boolean/number literal predicates (`strings`)
//! - Email syntax checks, including comma-separated lists (`email`)
//! - Directory permission probes (`fs`)
//!
//! # Design Decisions
//! - Every function here is total: bad input yields `false`/`None`, never an
//!   error, so the validation pipeline stays aggregation-only

pub mod email;
pub mod fs;
pub mod strings;
