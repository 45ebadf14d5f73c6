//! Dispatch table built from the routing document.
//!
//! # Responsibilities
//! - Turn declared operations into dispatchable route bindings
//! - Resolve each binding's dispatch coordinates (group/method)
//! - Drop entries that cannot be dispatched
//!
//! # Design Decisions
//! - Immutable after construction (shared via Arc, no locks)
//! - Only operations with an `operationId` are dispatchable
//! - Path matching itself is left to the HTTP router; templates use the
//!   same `{id}` syntax axum does
//! - Templates the HTTP router cannot register (partial-segment parameters,
//!   reserved paths, duplicates, conflicting parameter names) fail the
//!   whole table with a typed error

use axum::http::Method;
use axum::routing::MethodFilter;

use crate::routing::document::{RoutingDocument, RoutingError};
use crate::routing::operation::OperationId;

/// Path the gateway serves the routing document on.
pub const DOCS_PATH: &str = "/api-docs/openapi.json";

/// A dispatchable operation: one template and one method.
#[derive(Debug, Clone)]
pub struct RouteBinding {
    /// Route template exactly as declared; echoed as the event `resource`.
    pub template: String,
    /// `template` with a leading `/`, as registered with the HTTP router.
    pub route: String,
    pub method: Method,
    pub filter: MethodFilter,
    pub operation: OperationId,
}

/// All dispatchable operations, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    bindings: Vec<RouteBinding>,
}

impl RouteTable {
    /// Build the table from a routing document.
    pub fn from_document(document: &RoutingDocument) -> Result<Self, RoutingError> {
        let mut bindings: Vec<RouteBinding> = Vec::new();
        // (route, segments) of every distinct registered route
        let mut routes: Vec<(String, Vec<Segment>)> = Vec::new();

        for declared in document.operations()? {
            let Some(operation_id) = declared.operation_id else {
                tracing::debug!(path = %declared.path, method = %declared.method, "Skipping operation without operationId");
                continue;
            };

            let method = match Method::from_bytes(declared.method.to_uppercase().as_bytes()) {
                Ok(m) => m,
                Err(_) => {
                    tracing::warn!(path = %declared.path, method = %declared.method, "Invalid method key");
                    continue;
                }
            };
            let filter = match MethodFilter::try_from(method.clone()) {
                Ok(f) => f,
                Err(_) => {
                    tracing::warn!(path = %declared.path, method = %method, "Unsupported method");
                    continue;
                }
            };

            let route = if declared.path.starts_with('/') {
                declared.path.clone()
            } else {
                format!("/{}", declared.path)
            };

            if route == DOCS_PATH {
                return Err(RoutingError::ReservedPath(declared.path));
            }
            let segments = parse_route(&route).map_err(|reason| RoutingError::UnsupportedTemplate {
                template: declared.path.clone(),
                reason,
            })?;

            if bindings.iter().any(|b| b.route == route && b.method == method) {
                return Err(RoutingError::DuplicateRoute {
                    route,
                    method: method.to_string(),
                });
            }
            if !routes.iter().any(|(r, _)| *r == route) {
                if let Some((existing, _)) = routes.iter().find(|(_, s)| overlaps(s, &segments)) {
                    return Err(RoutingError::ConflictingTemplates {
                        first: existing.clone(),
                        second: route,
                    });
                }
                routes.push((route.clone(), segments));
            }

            let operation = OperationId::parse(&operation_id);
            tracing::debug!(
                operation = %operation,
                group = operation.group_name(),
                target = operation.method_name(),
                "Registered operation"
            );

            bindings.push(RouteBinding {
                template: declared.path,
                route,
                method,
                filter,
                operation,
            });
        }

        Ok(Self { bindings })
    }

    pub fn bindings(&self) -> &[RouteBinding] {
        &self.bindings
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Look up the binding for an operation id.
    pub fn find(&self, operation_id: &str) -> Option<&RouteBinding> {
        self.bindings
            .iter()
            .find(|b| b.operation.as_str() == operation_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
    CatchAll(String),
}

/// Split `route` into segments, rejecting what the HTTP router cannot
/// register.
fn parse_route(route: &str) -> Result<Vec<Segment>, &'static str> {
    let raw: Vec<&str> = route[1..].split('/').collect();
    let mut segments = Vec::with_capacity(raw.len());

    for (index, segment) in raw.iter().enumerate() {
        if segment.starts_with(':') {
            return Err("segments must not start with `:`");
        }
        if segment.starts_with('*') {
            return Err("segments must not start with `*`");
        }
        if !segment.contains(['{', '}']) {
            segments.push(Segment::Static(segment.to_string()));
            continue;
        }

        let whole = segment.len() > 2
            && segment.starts_with('{')
            && segment.ends_with('}')
            && segment.matches('{').count() == 1
            && segment.matches('}').count() == 1;
        if !whole {
            return Err("parameters must span a whole segment");
        }

        let inner = &segment[1..segment.len() - 1];
        let (name, catch_all) = match inner.strip_prefix('*') {
            Some(name) => (name, true),
            None => (inner, false),
        };
        if name.is_empty() {
            return Err("parameter name is empty");
        }
        if catch_all && index + 1 != raw.len() {
            return Err("catch-all parameter must be the last segment");
        }
        let repeated = segments.iter().any(|s| match s {
            Segment::Param(n) | Segment::CatchAll(n) => n == name,
            Segment::Static(_) => false,
        });
        if repeated {
            return Err("parameter name is repeated");
        }

        segments.push(if catch_all {
            Segment::CatchAll(name.to_string())
        } else {
            Segment::Param(name.to_string())
        });
    }

    Ok(segments)
}

/// Two routes overlap when, after a shared prefix, they bind the same
/// position to differently named parameters.
fn overlaps(a: &[Segment], b: &[Segment]) -> bool {
    for (left, right) in a.iter().zip(b) {
        match (left, right) {
            (Segment::Static(x), Segment::Static(y)) if x == y => continue,
            (Segment::Param(x), Segment::Param(y)) if x == y => continue,
            (Segment::Param(_), Segment::Param(_)) => return true,
            (Segment::CatchAll(x), Segment::CatchAll(y)) => return x != y,
            _ => return false,
        }
    }
    false
}
