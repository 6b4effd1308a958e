//! Field rule declarations and the rule builder.
//!
//! # Data Flow
//! ```text
//! RulesBuilder::new(service)
//!     → .configuration_folder(..) / .configuration_name(..)
//!     → .field(..) / .key_field(..)   (appended in declaration order)
//!     → .build()
//!     → loader::create_configuration(..)
//!     → Configuration (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Builder methods that take caller strings are fallible and chain with `?`
//! - Rules keep declaration order; validation errors report in that order
//! - Enumerated keys go through the `FieldKey` trait so the composed
//!   `"<Group>.<Member>"` string is identical at declaration and lookup

pub mod builder;
pub mod field;

pub use builder::RulesBuilder;
pub use field::{Condition, FieldKey, FieldRule, FieldType};
