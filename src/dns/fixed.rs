//! Fixed answers, for offline runs and tests.

use super::Resolver;
use crate::error::ResolveError;
use std::collections::HashMap;

/// Answers lookups from an in-memory table.
///
/// Names missing from the table fail with [`ResolveError::NotFound`].
#[derive(Debug, Default, Clone)]
pub struct StaticResolver {
    answers: HashMap<String, Vec<String>>,
}

impl StaticResolver {
    pub fn new() -> StaticResolver {
        StaticResolver::default()
    }

    /// Add (or replace) the answer for `domain`.
    pub fn with(mut self, domain: &str, addrs: &[&str]) -> StaticResolver {
        self.answers.insert(
            domain.to_string(),
            addrs.iter().map(|a| a.to_string()).collect(),
        );
        self
    }
}

impl Resolver for StaticResolver {
    fn resolve(&self, domain: &str) -> Result<Vec<String>, ResolveError> {
        self.answers
            .get(domain)
            .cloned()
            .ok_or(ResolveError::NotFound)
    }
}
