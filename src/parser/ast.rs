//! AST definitions for translated documents
//!
//! A [`Document`] is an ordered sequence of items: untouched passthrough text
//! and recognized OpenACC directives. Each directive carries one [`Construct`]
//! whose clauses have already been folded into a [`ClauseSet`].

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// A parsed source document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub items: Vec<Item>,
}

impl Document {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// All OpenACC directives in document order
    pub fn directives(&self) -> impl Iterator<Item = &Directive> {
        self.items.iter().filter_map(|item| match item {
            Item::Directive(directive) => Some(directive),
            Item::Passthrough(_) => None,
        })
    }
}

/// One line (or logical line) of the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Item {
    /// Source text reproduced verbatim, including its line terminator if any
    Passthrough(String),
    Directive(Directive),
}

/// An OpenACC directive with the indentation it was written at
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Directive {
    pub indent: String,
    /// 1-based line of the `#pragma` marker
    pub line: usize,
    pub construct: Construct,
    /// Terminator written after each expanded line, `\n` or `\r\n`
    pub line_ending: String,
}

/// The operation a directive requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "clauses", rename_all = "snake_case")]
pub enum Construct {
    Parallel(ClauseSet),
    Loop(ClauseSet),
    ParallelLoop(ClauseSet),
    DataRegion(ClauseSet),
    ScopMarker,
    EndScopMarker,
}

impl Construct {
    pub fn clauses(&self) -> Option<&ClauseSet> {
        match self {
            Construct::Parallel(set)
            | Construct::Loop(set)
            | Construct::ParallelLoop(set)
            | Construct::DataRegion(set) => Some(set),
            Construct::ScopMarker | Construct::EndScopMarker => None,
        }
    }
}

/// Canonical clause names used as attribute keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClauseKey {
    NumWorkers,
    Vector,
    Collapse,
    Independent,
    Reduction,
    Gang,
    Copy,
    #[serde(rename = "copyin")]
    CopyIn,
    #[serde(rename = "copyout")]
    CopyOut,
    Create,
}

impl ClauseKey {
    /// Data-movement clauses in the order their map clauses are emitted
    pub const DATA_MOVEMENT: [ClauseKey; 4] = [
        ClauseKey::Copy,
        ClauseKey::CopyIn,
        ClauseKey::CopyOut,
        ClauseKey::Create,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ClauseKey::NumWorkers => "num_workers",
            ClauseKey::Vector => "vector",
            ClauseKey::Collapse => "collapse",
            ClauseKey::Independent => "independent",
            ClauseKey::Reduction => "reduction",
            ClauseKey::Gang => "gang",
            ClauseKey::Copy => "copy",
            ClauseKey::CopyIn => "copyin",
            ClauseKey::CopyOut => "copyout",
            ClauseKey::Create => "create",
        }
    }

    pub fn is_data_movement(&self) -> bool {
        Self::DATA_MOVEMENT.contains(self)
    }

    /// OpenMP map type for a data-movement clause
    pub fn map_type(&self) -> Option<&'static str> {
        match self {
            ClauseKey::Copy => Some("tofrom"),
            ClauseKey::CopyIn => Some("to"),
            ClauseKey::CopyOut => Some("from"),
            ClauseKey::Create => Some("alloc"),
            _ => None,
        }
    }
}

impl fmt::Display for ClauseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reduction operators; each maps to the identical OpenMP symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReductionOp {
    Add,
    Mul,
    Max,
    Min,
    BitAnd,
    BitOr,
    And,
    Or,
    Mod,
}

impl ReductionOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            ReductionOp::Add => "+",
            ReductionOp::Mul => "*",
            ReductionOp::Max => "max",
            ReductionOp::Min => "min",
            ReductionOp::BitAnd => "&",
            ReductionOp::BitOr => "|",
            ReductionOp::And => "&&",
            ReductionOp::Or => "||",
            ReductionOp::Mod => "%",
        }
    }
}

/// Raw parameter text recorded for a clause
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ClauseValue {
    None,
    Text(String),
    Reduction { op: ReductionOp, vars: String },
}

impl ClauseValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ClauseValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

pub type Attributes = BTreeMap<ClauseKey, ClauseValue>;

/// A single OpenACC clause as written in the source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Clause {
    NumWorkers(String),
    Vector(Option<String>),
    Collapse(String),
    Independent,
    Reduction { op: ReductionOp, vars: Vec<String> },
    Gang,
    Copy(Vec<String>),
    #[serde(rename = "copyin")]
    CopyIn(Vec<String>),
    #[serde(rename = "copyout")]
    CopyOut(Vec<String>),
    Create(Vec<String>),
}

/// What one clause contributes to its construct
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClauseOutcome {
    /// OpenMP clause text for the primary directive
    pub fragments: Vec<String>,
    /// At most one entry, keyed by the clause's canonical name
    pub attributes: Attributes,
}

impl ClauseOutcome {
    fn new(fragments: Vec<String>, key: ClauseKey, value: ClauseValue) -> Self {
        Self {
            fragments,
            attributes: BTreeMap::from([(key, value)]),
        }
    }
}

impl Clause {
    pub fn key(&self) -> ClauseKey {
        match self {
            Clause::NumWorkers(_) => ClauseKey::NumWorkers,
            Clause::Vector(_) => ClauseKey::Vector,
            Clause::Collapse(_) => ClauseKey::Collapse,
            Clause::Independent => ClauseKey::Independent,
            Clause::Reduction { .. } => ClauseKey::Reduction,
            Clause::Gang => ClauseKey::Gang,
            Clause::Copy(_) => ClauseKey::Copy,
            Clause::CopyIn(_) => ClauseKey::CopyIn,
            Clause::CopyOut(_) => ClauseKey::CopyOut,
            Clause::Create(_) => ClauseKey::Create,
        }
    }

    /// Construct-independent mapping of this clause onto OpenMP
    ///
    /// Data-movement clauses produce no fragment here; the aggregator turns
    /// their attributes into `map` clauses.
    pub fn outcome(&self) -> ClauseOutcome {
        let key = self.key();
        match self {
            Clause::NumWorkers(n) => ClauseOutcome::new(
                vec![format!("num_threads({})", n)],
                key,
                ClauseValue::Text(n.clone()),
            ),
            Clause::Vector(None) => {
                ClauseOutcome::new(vec!["simd".to_string()], key, ClauseValue::None)
            }
            Clause::Vector(Some(n)) => ClauseOutcome::new(
                vec![format!("simd simdlen({})", n)],
                key,
                ClauseValue::Text(n.clone()),
            ),
            Clause::Collapse(n) => ClauseOutcome::new(
                vec![format!("collapse({})", n)],
                key,
                ClauseValue::Text(n.clone()),
            ),
            Clause::Independent | Clause::Gang => {
                ClauseOutcome::new(Vec::new(), key, ClauseValue::None)
            }
            Clause::Reduction { op, vars } => {
                let vars = vars.join(", ");
                ClauseOutcome::new(
                    vec![format!("reduction({}:{})", op.symbol(), vars)],
                    key,
                    ClauseValue::Reduction { op: *op, vars },
                )
            }
            Clause::Copy(vars)
            | Clause::CopyIn(vars)
            | Clause::CopyOut(vars)
            | Clause::Create(vars) => {
                ClauseOutcome::new(Vec::new(), key, ClauseValue::Text(vars.join(", ")))
            }
        }
    }
}

/// The folded clause list of one construct
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ClauseSet {
    pub clauses: Vec<Clause>,
    /// Fragments of every clause, in source order
    pub fragments: Vec<String>,
    /// Merged attributes; a repeated clause overwrites the earlier one
    pub attributes: Attributes,
}

impl ClauseSet {
    pub fn from_clauses(clauses: Vec<Clause>) -> Self {
        let mut fragments = Vec::new();
        let mut attributes = Attributes::new();
        for clause in &clauses {
            let outcome = clause.outcome();
            fragments.extend(outcome.fragments);
            attributes.extend(outcome.attributes);
        }
        Self {
            clauses,
            fragments,
            attributes,
        }
    }

    pub fn contains(&self, key: ClauseKey) -> bool {
        self.attributes.contains_key(&key)
    }

    pub fn get(&self, key: ClauseKey) -> Option<&ClauseValue> {
        self.attributes.get(&key)
    }

    pub fn has_data_movement(&self) -> bool {
        self.attributes.keys().any(ClauseKey::is_data_movement)
    }

    /// `map(...)` fragments in the fixed tofrom, to, from, alloc order
    pub fn map_fragments(&self) -> Vec<String> {
        ClauseKey::DATA_MOVEMENT
            .iter()
            .filter_map(|key| {
                let vars = self.get(*key)?.as_text()?;
                let map_type = key.map_type()?;
                Some(format!("map({}: {})", map_type, vars))
            })
            .collect()
    }
}
