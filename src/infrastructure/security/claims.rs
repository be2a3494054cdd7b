// src/infrastructure/security/claims.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::security::Role;
use biscuit_auth::builder::{Fact, Predicate, Term};
use chrono::{DateTime, Utc};
use std::{
    collections::HashSet,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

pub fn parse_claims(facts: Vec<Fact>) -> ApplicationResult<AuthenticatedUser> {
    let ctx = ClaimsContext::from_facts(facts);
    build_authenticated_user(ctx)
}

fn build_authenticated_user(ctx: ClaimsContext) -> ApplicationResult<AuthenticatedUser> {
    let username = ctx
        .username
        .ok_or_else(|| ApplicationError::unauthenticated("missing user"))?;
    let issued_at = ctx
        .issued_at
        .ok_or_else(|| ApplicationError::unauthenticated("missing issued_at"))?;
    let expires_at = ctx
        .expires_at
        .ok_or_else(|| ApplicationError::unauthenticated("missing expires_at"))?;

    let mut authorities = ctx
        .role
        .map(|role| role.default_authorities())
        .unwrap_or_default();
    authorities.extend(ctx.authorities);

    Ok(AuthenticatedUser {
        username,
        role: ctx.role,
        authorities,
        issued_at: DateTime::<Utc>::from(issued_at),
        expires_at: DateTime::<Utc>::from(expires_at),
    })
}

#[derive(Default)]
struct ClaimsContext {
    username: Option<String>,
    role: Option<Role>,
    issued_at: Option<SystemTime>,
    expires_at: Option<SystemTime>,
    authorities: HashSet<String>,
}

impl ClaimsContext {
    fn from_facts(facts: Vec<Fact>) -> Self {
        let mut ctx = ClaimsContext::default();
        for fact in facts {
            ctx.apply_predicate(&fact.predicate);
        }
        ctx
    }

    fn apply_predicate(&mut self, predicate: &Predicate) {
        match predicate.name.as_str() {
            "user" => self.username = first_str(predicate),
            "role" => self.role = first_str(predicate).and_then(|name| name.parse().ok()),
            "issued_at" => self.issued_at = first_date(predicate),
            "expires_at" => self.expires_at = first_date(predicate),
            "authority" => {
                if let Some(authority) = first_str(predicate) {
                    self.authorities.insert(authority);
                }
            }
            _ => {}
        }
    }
}

fn first_str(predicate: &Predicate) -> Option<String> {
    match predicate.terms.first() {
        Some(Term::Str(value)) => Some(value.clone()),
        _ => None,
    }
}

fn first_date(predicate: &Predicate) -> Option<SystemTime> {
    match predicate.terms.first() {
        Some(Term::Date(seconds)) => Some(UNIX_EPOCH + Duration::from_secs(*seconds)),
        _ => None,
    }
}
