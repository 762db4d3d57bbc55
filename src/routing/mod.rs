//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (verb, path)
//!     → matcher.rs (split path, evaluate each template)
//!     → table.rs (specificity tie-break over all matches)
//!     → Return: matched RouteEntry + captures, or no match
//!
//! Route Registration (at startup):
//!     raw tokens / RouteDecl[]
//!     → template.rs (parse + validate segment ordering)
//!     → table.rs (append entry, publish new snapshot)
//! ```
//!
//! # Design Decisions
//! - Templates validated at registration, matched lock-free at runtime
//! - Deterministic: same input always resolves to the same entry
//! - Most specific match wins (fewest optionals, most literals, then
//!   registration order)

pub mod decl;
pub mod matcher;
pub mod table;
pub mod template;

pub use decl::{parse_verb_marker, register_declared, DeclError, VerbMarker};
pub use matcher::{match_segments, split_path};
pub use table::{RouteEntry, RouteId, RouteTable, SecurityTier, Verb, VerbRule};
pub use template::{PathTemplate, RegistrationError, Segment};
