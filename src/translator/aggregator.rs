//! Clause aggregation
//!
//! Decides, per construct, which OpenMP directives one OpenACC directive
//! expands to. Wrapper directives always come before the directive they wrap:
//!
//! - `parallel` / `parallel loop` with data-movement clauses get a preceding
//!   `target data` carrying the `map` clauses in tofrom, to, from, alloc order.
//! - `loop gang` gets a preceding `teams`.
//! - `data` is itself the `target data` directive.

use serde::Serialize;

use crate::parser::ast::{ClauseKey, ClauseSet, Construct};

/// One output directive line, without indentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OmpDirective {
    /// `Some("omp")` for OpenMP directives, `None` for bare markers like `scop`
    pub namespace: Option<&'static str>,
    pub fragments: Vec<String>,
}

impl OmpDirective {
    pub fn omp(name: &str, clauses: impl IntoIterator<Item = String>) -> Self {
        let mut fragments = vec![name.to_string()];
        fragments.extend(clauses);
        Self {
            namespace: Some("omp"),
            fragments,
        }
    }

    pub fn marker(name: &str) -> Self {
        Self {
            namespace: None,
            fragments: vec![name.to_string()],
        }
    }

    /// The directive text, e.g. `#pragma omp parallel for num_threads(4)`
    pub fn text(&self) -> String {
        let mut parts = vec!["#pragma"];
        parts.extend(self.namespace);
        parts.extend(self.fragments.iter().map(String::as_str));
        parts.join(" ")
    }
}

/// Expand a construct into its ordered OpenMP directives
pub fn aggregate(construct: &Construct) -> Vec<OmpDirective> {
    match construct {
        Construct::Parallel(set) => with_data_region("parallel", set),
        Construct::ParallelLoop(set) => with_data_region("parallel for", set),
        Construct::Loop(set) => {
            let mut directives = Vec::with_capacity(2);
            if set.contains(ClauseKey::Gang) {
                directives.push(OmpDirective::omp("teams", Vec::new()));
            }
            directives.push(OmpDirective::omp("for", set.fragments.clone()));
            directives
        }
        Construct::DataRegion(set) => vec![OmpDirective::omp("target data", set.map_fragments())],
        Construct::ScopMarker => vec![OmpDirective::marker("scop")],
        Construct::EndScopMarker => vec![OmpDirective::marker("endscop")],
    }
}

fn with_data_region(name: &str, set: &ClauseSet) -> Vec<OmpDirective> {
    let primary = OmpDirective::omp(name, set.fragments.clone());
    if set.has_data_movement() {
        vec![OmpDirective::omp("target data", set.map_fragments()), primary]
    } else {
        vec![primary]
    }
}
