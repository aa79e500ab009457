use super::registry::{ScopeHandler, ScopeRegistry};
use crate::error::{ScopeError, ScopeResult};
use tracing::debug;

/// A scope name matched to a handler on the target
#[derive(Debug)]
pub struct ResolvedScope<'a, T> {
    /// Name as the caller wrote it
    pub scope: &'a str,
    pub handler_id: String,
    pub handler: &'a ScopeHandler<T>,
}

/// Maps scope names to handlers.
///
/// Stateless: resolution depends only on the registry and the name.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScopeResolver;

impl ScopeResolver {
    /// Naming convention: scope names map to snake_case handler identifiers.
    ///
    /// `withinRange` → `within_range`, `by-status` → `by_status`,
    /// `HTMLExport` → `html_export`.
    pub fn handler_id(scope: &str) -> String {
        let chars: Vec<char> = scope.trim().chars().collect();
        let mut id = String::with_capacity(chars.len() + 4);

        for (i, &c) in chars.iter().enumerate() {
            if c.is_uppercase() {
                let prev = i.checked_sub(1).map(|p| chars[p]);
                let next = chars.get(i + 1).copied();
                let boundary = match prev {
                    Some(p) if p.is_lowercase() || p.is_ascii_digit() => true,
                    Some(p) if p.is_uppercase() => next.is_some_and(char::is_lowercase),
                    _ => false,
                };
                if boundary && !id.ends_with('_') {
                    id.push('_');
                }
                id.extend(c.to_lowercase());
            } else if c.is_alphanumeric() {
                id.push(c);
            } else if !id.is_empty() && !id.ends_with('_') {
                id.push('_');
            }
        }

        while id.ends_with('_') {
            id.pop();
        }
        id
    }

    /// Resolve `scope` against `registry`, failing with
    /// [`ScopeError::ScopeNotFound`] when the target has no such capability.
    pub fn resolve<'a, T>(
        registry: &'a ScopeRegistry<T>,
        scope: &'a str,
    ) -> ScopeResult<ResolvedScope<'a, T>> {
        let handler_id = Self::handler_id(scope);
        if handler_id.is_empty() {
            return Err(ScopeError::not_found(scope));
        }

        let handler = registry
            .get(&handler_id)
            .ok_or_else(|| ScopeError::not_found(scope))?;

        debug!(scope = %scope, handler = %handler_id, "Resolved scope");
        Ok(ResolvedScope {
            scope,
            handler_id,
            handler,
        })
    }
}
