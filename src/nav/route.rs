//! Destinations, path templates, and the route registry.
//!
//! A route string doubles as a path template: literal segments separated by
//! `/`, with `{name}` segments binding arguments. Matching is exact per
//! segment — no prefix or partial matches.

use crate::nav::error::NavError;
use std::collections::HashMap;

/// Argument value kind for a path parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    /// Any non-empty segment
    Text,
    /// Segment must parse as a signed integer
    Integer,
}

/// Declared path parameter of a destination
#[derive(Debug, Clone, PartialEq)]
pub struct ArgSpec {
    pub name: String,
    pub kind: ArgKind,
    pub required: bool,
}

/// One segment of a parsed route template
#[derive(Debug, Clone, PartialEq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// Parsed form of a route string
#[derive(Debug, Clone, PartialEq)]
pub struct PathTemplate {
    raw: String,
    segments: Vec<Segment>,
}

impl PathTemplate {
    /// Parse a route string into segments, validating parameter syntax
    pub fn parse(route: &str) -> Result<Self, NavError> {
        let bad = |reason: &str| NavError::BadTemplate {
            route: route.to_string(),
            reason: reason.to_string(),
        };

        if route.is_empty() {
            return Err(bad("route is empty"));
        }
        if route.starts_with('/') || route.ends_with('/') {
            return Err(bad("route must not begin or end with '/'"));
        }

        let mut segments = Vec::new();
        let mut seen_params: Vec<&str> = Vec::new();

        for part in route.split('/') {
            if part.is_empty() {
                return Err(bad("empty path segment"));
            }
            if let Some(name) = part.strip_prefix('{') {
                let name = name
                    .strip_suffix('}')
                    .ok_or_else(|| bad("unterminated '{' in segment"))?;
                if name.is_empty() {
                    return Err(bad("parameter name is empty"));
                }
                if name.contains('{') || name.contains('}') {
                    return Err(bad("nested braces in parameter name"));
                }
                if seen_params.contains(&name) {
                    return Err(bad("duplicate parameter name"));
                }
                seen_params.push(name);
                segments.push(Segment::Param(name.to_string()));
            } else if part.contains('{') || part.contains('}') {
                return Err(bad("braces inside literal segment"));
            } else {
                segments.push(Segment::Literal(part.to_string()));
            }
        }

        Ok(Self {
            raw: route.to_string(),
            segments,
        })
    }

    /// The original route string
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Parameter names in declaration order
    pub fn param_names(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Param(name) => Some(name.as_str()),
                Segment::Literal(_) => None,
            })
            .collect()
    }

    /// Match a concrete path against this template, binding parameters.
    ///
    /// Returns `None` unless every segment matches and the segment counts
    /// are identical.
    pub fn match_path(&self, path: &str) -> Option<HashMap<String, String>> {
        let parts: Vec<&str> = path.split('/').collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut args = HashMap::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(lit) => {
                    if lit != part {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    if part.is_empty() {
                        return None;
                    }
                    args.insert(name.clone(), part.to_string());
                }
            }
        }
        Some(args)
    }

    /// Build a concrete path from this template and an argument map
    pub fn format(&self, args: &HashMap<String, String>) -> Result<String, NavError> {
        let mut parts = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(lit) => parts.push(lit.clone()),
                Segment::Param(name) => {
                    let value = args.get(name).ok_or_else(|| NavError::MissingArgument {
                        route: self.raw.clone(),
                        name: name.clone(),
                    })?;
                    parts.push(value.clone());
                }
            }
        }
        Ok(parts.join("/"))
    }
}

/// A named, addressable screen in the navigation graph
#[derive(Debug, Clone, PartialEq)]
pub struct Destination {
    template: PathTemplate,
    pub label: String,
    pub icon: char,
    pub show_in_tab_row: bool,
    args: Vec<ArgSpec>,
}

impl Destination {
    /// Define a destination. Argument specs are derived from the route
    /// template; parameters default to required `Text` arguments.
    pub fn new(route: &str, label: &str, icon: char) -> Result<Self, NavError> {
        let template = PathTemplate::parse(route)?;
        let args = template
            .param_names()
            .into_iter()
            .map(|name| ArgSpec {
                name: name.to_string(),
                kind: ArgKind::Text,
                required: true,
            })
            .collect();
        Ok(Self {
            template,
            label: label.to_string(),
            icon,
            show_in_tab_row: false,
            args,
        })
    }

    /// Mark this destination as a top-level tab
    pub fn tab(mut self) -> Self {
        self.show_in_tab_row = true;
        self
    }

    /// Override the kind of a declared argument
    pub fn arg_kind(mut self, name: &str, kind: ArgKind) -> Self {
        if let Some(spec) = self.args.iter_mut().find(|a| a.name == name) {
            spec.kind = kind;
        }
        self
    }

    pub fn route(&self) -> &str {
        self.template.raw()
    }

    pub fn template(&self) -> &PathTemplate {
        &self.template
    }

    pub fn args(&self) -> &[ArgSpec] {
        &self.args
    }

    /// Type-check bound argument values against the declared specs
    fn args_valid(&self, bound: &HashMap<String, String>) -> bool {
        self.args.iter().all(|spec| match bound.get(&spec.name) {
            Some(value) => match spec.kind {
                ArgKind::Text => true,
                ArgKind::Integer => value.parse::<i64>().is_ok(),
            },
            None => !spec.required,
        })
    }
}

/// Fixed set of destinations, defined once at startup.
///
/// Registration order is preserved so the tab row renders tabs in the order
/// they were declared.
#[derive(Debug, Clone)]
pub struct RouteRegistry {
    destinations: Vec<Destination>,
    default_route: String,
}

impl RouteRegistry {
    /// Create a registry whose first registered destination is the default.
    /// The default is both the start destination and the fallback tab.
    pub fn new(default: Destination) -> Self {
        let default_route = default.route().to_string();
        Self {
            destinations: vec![default],
            default_route,
        }
    }

    /// Change the default destination to an already-registered route
    pub fn set_default_route(&mut self, route: &str) -> Result<(), NavError> {
        self.resolve(route)?;
        self.default_route = route.to_string();
        Ok(())
    }

    /// Add a destination, rejecting duplicate routes
    pub fn register(&mut self, destination: Destination) -> Result<(), NavError> {
        if self
            .destinations
            .iter()
            .any(|d| d.route() == destination.route())
        {
            return Err(NavError::DuplicateRoute {
                route: destination.route().to_string(),
            });
        }
        self.destinations.push(destination);
        Ok(())
    }

    /// Look up a destination by exact route string
    pub fn resolve(&self, route: &str) -> Result<&Destination, NavError> {
        self.destinations
            .iter()
            .find(|d| d.route() == route)
            .ok_or_else(|| NavError::NotFound {
                route: route.to_string(),
            })
    }

    /// Match a concrete path (possibly carrying argument segments) against
    /// every registered template, binding and type-checking arguments.
    pub fn match_path(
        &self,
        path: &str,
    ) -> Result<(&Destination, HashMap<String, String>), NavError> {
        for destination in &self.destinations {
            if let Some(args) = destination.template().match_path(path) {
                if destination.args_valid(&args) {
                    return Ok((destination, args));
                }
            }
        }
        Err(NavError::NotFound {
            route: path.to_string(),
        })
    }

    /// Destinations shown in the tab row, in registration order
    pub fn tabs(&self) -> Vec<&Destination> {
        self.destinations
            .iter()
            .filter(|d| d.show_in_tab_row)
            .collect()
    }

    /// All registered destinations, in registration order
    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn default_destination(&self) -> &Destination {
        // The default route is registered in new(), so this cannot fail
        self.resolve(&self.default_route)
            .expect("default destination is always registered")
    }

    /// Resolve the tab that should be highlighted for the current route.
    ///
    /// Exact matches only; `None` and routes that are not tabs (e.g. a
    /// deep-linked detail screen) fall back to the default destination.
    pub fn current_tab(&self, current_route: Option<&str>) -> &Destination {
        current_route
            .and_then(|route| {
                self.destinations
                    .iter()
                    .find(|d| d.show_in_tab_row && d.route() == route)
            })
            .unwrap_or_else(|| self.default_destination())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_registry() -> RouteRegistry {
        let mut registry =
            RouteRegistry::new(Destination::new("overview", "Overview", '◉').unwrap().tab());
        registry
            .register(Destination::new("accounts", "Accounts", '◈').unwrap().tab())
            .unwrap();
        registry
            .register(Destination::new("bills", "Bills", '◇').unwrap().tab())
            .unwrap();
        registry
            .register(Destination::new("account/{account_type}", "Account", '◎').unwrap())
            .unwrap();
        registry
    }

    #[test]
    fn test_template_parses_params_in_order() {
        let template = PathTemplate::parse("account/{account_type}").unwrap();
        assert_eq!(template.param_names(), vec!["account_type"]);
    }

    #[test]
    fn test_template_rejects_malformed_routes() {
        assert!(PathTemplate::parse("").is_err());
        assert!(PathTemplate::parse("/leading").is_err());
        assert!(PathTemplate::parse("trailing/").is_err());
        assert!(PathTemplate::parse("a//b").is_err());
        assert!(PathTemplate::parse("a/{").is_err());
        assert!(PathTemplate::parse("a/{}").is_err());
        assert!(PathTemplate::parse("a/{x}/{x}").is_err());
        assert!(PathTemplate::parse("a/b{c}").is_err());
    }

    #[test]
    fn test_template_match_binds_args() {
        let template = PathTemplate::parse("account/{account_type}").unwrap();
        let args = template.match_path("account/Checking").unwrap();
        assert_eq!(args.get("account_type").map(String::as_str), Some("Checking"));
    }

    #[test]
    fn test_template_match_is_exact() {
        let template = PathTemplate::parse("account/{account_type}").unwrap();
        // No prefix matching: wrong segment count never matches
        assert!(template.match_path("account").is_none());
        assert!(template.match_path("account/Checking/extra").is_none());
        assert!(template.match_path("bills/Checking").is_none());
    }

    #[test]
    fn test_template_format_round_trip() {
        let template = PathTemplate::parse("account/{account_type}").unwrap();
        let mut args = HashMap::new();
        args.insert("account_type".to_string(), "Vacation".to_string());
        assert_eq!(template.format(&args).unwrap(), "account/Vacation");
    }

    #[test]
    fn test_template_format_missing_arg() {
        let template = PathTemplate::parse("account/{account_type}").unwrap();
        let err = template.format(&HashMap::new()).unwrap_err();
        assert!(matches!(err, NavError::MissingArgument { .. }));
    }

    #[test]
    fn test_registry_resolves_every_destination() {
        let registry = sample_registry();
        for destination in registry.destinations() {
            let resolved = registry.resolve(destination.route()).unwrap();
            assert_eq!(resolved, destination);
        }
    }

    #[test]
    fn test_registry_rejects_duplicates() {
        let mut registry = sample_registry();
        let err = registry
            .register(Destination::new("bills", "Bills Again", '◇').unwrap())
            .unwrap_err();
        assert_eq!(
            err,
            NavError::DuplicateRoute {
                route: "bills".to_string()
            }
        );
    }

    #[test]
    fn test_registry_match_path_with_args() {
        let registry = sample_registry();
        let (destination, args) = registry.match_path("account/checking").unwrap();
        assert_eq!(destination.route(), "account/{account_type}");
        assert_eq!(args.get("account_type").map(String::as_str), Some("checking"));
    }

    #[test]
    fn test_registry_match_path_unknown() {
        let registry = sample_registry();
        assert!(matches!(
            registry.match_path("nonexistent"),
            Err(NavError::NotFound { .. })
        ));
    }

    #[test]
    fn test_integer_arg_rejects_text() {
        let mut registry = sample_registry();
        registry
            .register(
                Destination::new("bill/{bill_id}", "Bill", '◇')
                    .unwrap()
                    .arg_kind("bill_id", ArgKind::Integer),
            )
            .unwrap();

        assert!(registry.match_path("bill/42").is_ok());
        assert!(matches!(
            registry.match_path("bill/rent"),
            Err(NavError::NotFound { .. })
        ));
    }

    #[test]
    fn test_current_tab_exact_match() {
        let registry = sample_registry();
        assert_eq!(registry.current_tab(Some("bills")).route(), "bills");
    }

    #[test]
    fn test_current_tab_falls_back_to_default() {
        let registry = sample_registry();
        assert_eq!(registry.current_tab(None).route(), "overview");
        assert_eq!(registry.current_tab(Some("unknown")).route(), "overview");
        // Detail screens are not tabs, so they highlight the default tab
        assert_eq!(
            registry.current_tab(Some("account/{account_type}")).route(),
            "overview"
        );
    }
}
