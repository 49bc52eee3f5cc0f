//! Tool system adapters
//!
//! The [`ToolRegistry`] aggregates tool providers and implements the
//! application's `ToolExecutorPort`. Two providers ship with the harness:
//!
//! | Provider | Tools | Priority |
//! |----------|-------|----------|
//! | [`BuiltinProvider`] | `add_numbers` | -100 (fallback) |
//! | [`WebToolProvider`] | `wiki_lookup`, `web_search` | 50 |

pub mod builtin;
pub mod registry;

#[cfg(feature = "web-tools")]
pub mod web;

pub use builtin::BuiltinProvider;
pub use registry::ToolRegistry;

#[cfg(feature = "web-tools")]
pub use web::WebToolProvider;

use gauge_domain::ToolSpec;

/// The full tool specification the default providers offer.
///
/// Used for request-shape tests and anywhere a spec is needed without
/// running discovery.
pub fn default_tool_spec() -> ToolSpec {
    let mut spec = ToolSpec::new().register(builtin::add_numbers_definition());

    #[cfg(feature = "web-tools")]
    {
        spec = spec
            .register(web::wiki::wiki_lookup_definition())
            .register(web::search::web_search_definition());
    }

    spec
}
