//! Route registry and lookup.
//!
//! # Responsibilities
//! - Store registered (verb, security tier, template, handler) entries
//! - Resolve an incoming (verb, path) pair to the most specific entry
//! - Answer feature-presence queries by identifying literal segment
//!
//! # Design Decisions
//! - Append-only at runtime; entries are never removed
//! - Overlapping templates are permitted and resolved by specificity at
//!   lookup time, not rejected at registration
//! - Lookups read a lock-free `ArcSwap` snapshot; writers are serialized by
//!   a mutex and publish a new snapshot atomically, so no lock is ever held
//!   across handler invocation

use std::cmp::Reverse;
use std::fmt;
use std::sync::{Arc, Mutex};

use arc_swap::ArcSwap;

use crate::dispatch::handler::Handler;
use crate::routing::matcher::match_segments;
use crate::routing::template::{PathTemplate, RegistrationError};

/// HTTP verb of an incoming request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
}

impl Verb {
    /// Parse a verb name, case-insensitively.
    pub fn parse(name: &str) -> Option<Verb> {
        match name.trim().to_ascii_uppercase().as_str() {
            "GET" => Some(Verb::Get),
            "POST" => Some(Verb::Post),
            "PUT" => Some(Verb::Put),
            "DELETE" => Some(Verb::Delete),
            "PATCH" => Some(Verb::Patch),
            "HEAD" => Some(Verb::Head),
            "OPTIONS" => Some(Verb::Options),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
            Verb::Patch => "PATCH",
            Verb::Head => "HEAD",
            Verb::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verb dimension of a registered entry: one concrete verb, or any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbRule {
    /// The entry answers every verb.
    Any,
    /// The entry answers exactly this verb.
    Only(Verb),
}

impl VerbRule {
    pub fn allows(&self, verb: Verb) -> bool {
        match self {
            VerbRule::Any => true,
            VerbRule::Only(expected) => *expected == verb,
        }
    }
}

impl fmt::Display for VerbRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerbRule::Any => f.write_str("ANY"),
            VerbRule::Only(verb) => write!(f, "{}", verb),
        }
    }
}

/// Security tier of a registered entry.
///
/// `Secure` entries are gated on a privileged context before the handler is
/// ever invoked; `Public` entries require nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityTier {
    Public,
    Secure,
}

impl fmt::Display for SecurityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecurityTier::Public => f.write_str("PUBLIC"),
            SecurityTier::Secure => f.write_str("SECURE"),
        }
    }
}

/// Identifier handed back at registration, in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteId(pub u64);

/// One registered route.
pub struct RouteEntry {
    pub id: RouteId,
    pub rule: VerbRule,
    pub tier: SecurityTier,
    pub template: PathTemplate,
    handler: Arc<dyn Handler>,
}

impl RouteEntry {
    pub fn handler(&self) -> &Arc<dyn Handler> {
        &self.handler
    }
}

impl fmt::Debug for RouteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteEntry")
            .field("id", &self.id)
            .field("rule", &self.rule)
            .field("tier", &self.tier)
            .field("template", &self.template)
            .finish_non_exhaustive()
    }
}

/// The set of all registered routes.
///
/// Built at startup (or incrementally as feature modules load) and read for
/// the lifetime of the process. Lookups are lock-free snapshot reads.
pub struct RouteTable {
    snapshot: ArcSwap<Vec<Arc<RouteEntry>>>,
    writer: Mutex<()>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self {
            snapshot: ArcSwap::from_pointee(Vec::new()),
            writer: Mutex::new(()),
        }
    }

    /// Register a route from raw tokens. Template validation errors abort
    /// registration of this entry and surface to the caller.
    pub fn register<I, S>(
        &self,
        rule: VerbRule,
        tier: SecurityTier,
        tokens: I,
        handler: Arc<dyn Handler>,
    ) -> Result<RouteId, RegistrationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let template = PathTemplate::parse(tokens)?;
        Ok(self.register_template(rule, tier, template, handler))
    }

    /// Register an already-parsed template.
    pub fn register_template(
        &self,
        rule: VerbRule,
        tier: SecurityTier,
        template: PathTemplate,
        handler: Arc<dyn Handler>,
    ) -> RouteId {
        let _guard = self.writer.lock().expect("route table writer lock poisoned");
        let current = self.snapshot.load();
        let id = RouteId(current.len() as u64);

        tracing::debug!(
            route = %template,
            verb = %rule,
            tier = %tier,
            id = id.0,
            "Route registered"
        );

        let mut next = Vec::with_capacity(current.len() + 1);
        next.extend(current.iter().cloned());
        next.push(Arc::new(RouteEntry {
            id,
            rule,
            tier,
            template,
            handler,
        }));
        self.snapshot.store(Arc::new(next));
        id
    }

    /// Find the best entry for (verb, path segments) and its captures.
    ///
    /// Among all matching entries the most specific wins: fewer optional
    /// segments first, then more literal segments, then registration order.
    /// A concrete literal route shadows a capture route on the same verb.
    pub fn lookup(
        &self,
        verb: Verb,
        segments: &[&str],
    ) -> Option<(Arc<RouteEntry>, Vec<(String, String)>)> {
        let entries = self.snapshot.load();
        entries
            .iter()
            .filter(|entry| entry.rule.allows(verb))
            .filter_map(|entry| {
                match_segments(&entry.template, segments)
                    .map(|captures| (entry.clone(), captures))
            })
            // min_by_key keeps the first of equal keys, which is the
            // first-registered entry: the final tie-break.
            .min_by_key(|(entry, _)| {
                (
                    entry.template.optional_count(),
                    Reverse(entry.template.literal_count()),
                )
            })
    }

    /// Whether any registered route is identified by this first literal
    /// segment. Used by subsystems to probe for loaded features.
    pub fn is_defined(&self, key: &str) -> bool {
        self.snapshot
            .load()
            .iter()
            .any(|entry| entry.template.first_literal() == Some(key))
    }

    pub fn len(&self) -> usize {
        self.snapshot.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}
