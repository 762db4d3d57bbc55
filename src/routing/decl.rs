//! Declarative route registration.
//!
//! Route trees can be declared as plain strings (in config files or by
//! feature modules) and compiled against the table at startup. A verb marker
//! selects the verb and security tier: `GET`, `GET(SECURE)`, `POST_SECURE`,
//! or `ANY`; the default tier is PUBLIC.

use std::sync::Arc;

use thiserror::Error;

use crate::config::schema::RouteDecl;
use crate::dispatch::handler::Handler;
use crate::routing::table::{RouteId, RouteTable, SecurityTier, Verb, VerbRule};
use crate::routing::template::{PathTemplate, RegistrationError};

/// Parsed verb marker: the verb rule plus the security tier it implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerbMarker {
    pub rule: VerbRule,
    pub tier: SecurityTier,
}

/// Errors raised while compiling route declarations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeclError {
    #[error("unknown verb marker `{0}`")]
    UnknownVerb(String),

    #[error("unknown security tier `{0}`")]
    UnknownTier(String),

    #[error("no handler named `{0}` is registered")]
    UnknownHandler(String),

    #[error(transparent)]
    Template(#[from] RegistrationError),
}

/// Parse a verb marker string.
///
/// Accepted forms: a bare verb name or `ANY`; `VERB(PUBLIC)` / `VERB(SECURE)`;
/// the shorthand `VERB_SECURE`.
pub fn parse_verb_marker(marker: &str) -> Result<VerbMarker, DeclError> {
    let marker = marker.trim();

    let (verb_part, tier) = if let Some(open) = marker.find('(') {
        let inner = marker[open + 1..]
            .strip_suffix(')')
            .ok_or_else(|| DeclError::UnknownVerb(marker.to_string()))?;
        (&marker[..open], parse_tier(inner)?)
    } else if let Some(verb_part) = marker.strip_suffix("_SECURE") {
        (verb_part, SecurityTier::Secure)
    } else {
        (marker, SecurityTier::Public)
    };

    let rule = if verb_part.trim().eq_ignore_ascii_case("ANY") {
        VerbRule::Any
    } else {
        VerbRule::Only(
            Verb::parse(verb_part).ok_or_else(|| DeclError::UnknownVerb(marker.to_string()))?,
        )
    };

    Ok(VerbMarker { rule, tier })
}

fn parse_tier(name: &str) -> Result<SecurityTier, DeclError> {
    match name.trim().to_ascii_uppercase().as_str() {
        "PUBLIC" => Ok(SecurityTier::Public),
        "SECURE" => Ok(SecurityTier::Secure),
        other => Err(DeclError::UnknownTier(other.to_string())),
    }
}

/// Compile one declaration into its marker and template without registering.
pub fn compile(decl: &RouteDecl) -> Result<(VerbMarker, PathTemplate), DeclError> {
    let marker = parse_verb_marker(&decl.verb)?;
    let template = PathTemplate::parse(&decl.path)?;
    Ok((marker, template))
}

/// Register declared routes against the table, resolving handler names
/// through the caller-supplied lookup.
///
/// All-or-nothing is deliberately *not* attempted: entries are registered in
/// declaration order and the first bad declaration aborts with its ids so
/// far discarded by the caller. Startup treats any error here as fatal.
pub fn register_declared<F>(
    table: &RouteTable,
    decls: &[RouteDecl],
    mut resolve: F,
) -> Result<Vec<RouteId>, DeclError>
where
    F: FnMut(&str) -> Option<Arc<dyn Handler>>,
{
    let mut ids = Vec::with_capacity(decls.len());
    for decl in decls {
        let (marker, template) = compile(decl)?;
        let handler =
            resolve(&decl.handler).ok_or_else(|| DeclError::UnknownHandler(decl.handler.clone()))?;
        ids.push(table.register_template(marker.rule, marker.tier, template, handler));
    }
    Ok(ids)
}
