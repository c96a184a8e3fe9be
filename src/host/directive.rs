//! Map reload directives.
//!
//! Translation from a logical map identifier to the concrete reload
//! request handed to the host. Identifiers are not validated; the host is
//! trusted to reject garbage on its side.

use std::fmt;

/// Prefix marking a workshop-hosted map identifier.
pub const WORKSHOP_PREFIX: &str = "ws:";

/// A concrete environment-change request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReloadDirective {
    /// Load a built-in map by name.
    Map(String),
    /// Load a workshop-hosted map by ID.
    WorkshopMap(String),
}

impl fmt::Display for ReloadDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Map(name) => write!(f, "load map {name}"),
            Self::WorkshopMap(id) => write!(f, "load workshop map {id}"),
        }
    }
}

/// Translate a logical map identifier into a reload directive.
///
/// A `ws:`-prefixed identifier selects the workshop form with the prefix
/// stripped; anything else is treated as a plain map name.
pub fn build_reload_directive(identifier: &str) -> ReloadDirective {
    match identifier.strip_prefix(WORKSHOP_PREFIX) {
        Some(id) => ReloadDirective::WorkshopMap(id.to_string()),
        None => ReloadDirective::Map(identifier.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workshop_prefix_selects_workshop_form() {
        let directive = build_reload_directive("ws:3070923343");
        assert_eq!(directive, ReloadDirective::WorkshopMap("3070923343".to_string()));
        assert_eq!(directive.to_string(), "load workshop map 3070923343");
    }

    #[test]
    fn plain_identifier_selects_map_form() {
        let directive = build_reload_directive("de_dust2");
        assert_eq!(directive, ReloadDirective::Map("de_dust2".to_string()));
        assert_eq!(directive.to_string(), "load map de_dust2");
    }

    #[test]
    fn prefix_only_yields_empty_workshop_id() {
        // Not validated here; the host sees whatever the config held.
        assert_eq!(
            build_reload_directive("ws:"),
            ReloadDirective::WorkshopMap(String::new())
        );
    }

    #[test]
    fn prefix_must_lead() {
        assert_eq!(
            build_reload_directive("de_ws:map"),
            ReloadDirective::Map("de_ws:map".to_string())
        );
    }
}
