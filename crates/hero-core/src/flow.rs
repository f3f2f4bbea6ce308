use crate::error::{HeroError, Result};
use crate::types::Stage;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// FlowKind
// ---------------------------------------------------------------------------

/// Which journey graph a session runs on. Express is the five-stage quick
/// path; guided walks explicit type, profile and authority selections
/// before the gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FlowKind {
    Express,
    Guided,
}

impl FlowKind {
    pub fn all() -> &'static [FlowKind] {
        &[FlowKind::Express, FlowKind::Guided]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FlowKind::Express => "express",
            FlowKind::Guided => "guided",
        }
    }

    pub fn flow(self) -> &'static Flow {
        match self {
            FlowKind::Express => &EXPRESS,
            FlowKind::Guided => &GUIDED,
        }
    }
}

impl fmt::Display for FlowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FlowKind {
    type Err = HeroError;

    fn from_str(s: &str) -> Result<FlowKind> {
        match s {
            "express" => Ok(FlowKind::Express),
            "guided" => Ok(FlowKind::Guided),
            _ => Err(HeroError::InvalidFlow(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Flow
// ---------------------------------------------------------------------------

/// A stage graph. Each entry lists a stage and its forward edges; the first
/// edge is the primary path, the rest are optional detours. Stage order in
/// the table is journey order, which is what back-navigation walks.
#[derive(Debug)]
pub struct Flow {
    kind: FlowKind,
    edges: &'static [(Stage, &'static [Stage])],
}

static EXPRESS: Flow = Flow {
    kind: FlowKind::Express,
    edges: &[
        (Stage::Welcome, &[Stage::Input]),
        (Stage::Input, &[Stage::Reveal]),
        (Stage::Reveal, &[Stage::Mythos]),
        (Stage::Mythos, &[Stage::Final]),
        (Stage::Final, &[]),
    ],
};

static GUIDED: Flow = Flow {
    kind: FlowKind::Guided,
    edges: &[
        (Stage::Welcome, &[Stage::TypeSelection]),
        (Stage::TypeSelection, &[Stage::TypeReveal]),
        (Stage::TypeReveal, &[Stage::ProfileSelection]),
        (
            Stage::ProfileSelection,
            &[Stage::AuthoritySelection, Stage::ProfileReveal],
        ),
        (Stage::ProfileReveal, &[Stage::AuthoritySelection]),
        (
            Stage::AuthoritySelection,
            &[Stage::GateInput, Stage::AuthorityReveal],
        ),
        (Stage::AuthorityReveal, &[Stage::GateInput]),
        (Stage::GateInput, &[Stage::FinalReveal]),
        (Stage::FinalReveal, &[Stage::Final]),
        (Stage::Final, &[]),
    ],
};

impl Flow {
    pub fn kind(&self) -> FlowKind {
        self.kind
    }

    /// Journey entry point.
    pub fn entry(&self) -> Stage {
        self.edges[0].0
    }

    /// Stages in journey order.
    pub fn stages(&self) -> impl Iterator<Item = Stage> + '_ {
        self.edges.iter().map(|(stage, _)| *stage)
    }

    pub fn contains(&self, stage: Stage) -> bool {
        self.edges.iter().any(|(s, _)| *s == stage)
    }

    /// Forward edges out of `stage`. Empty for terminal stages and stages
    /// outside this flow.
    pub fn successors(&self, stage: Stage) -> &'static [Stage] {
        self.edges
            .iter()
            .find(|(s, _)| *s == stage)
            .map(|(_, next)| *next)
            .unwrap_or(&[])
    }

    /// The main-path successor, skipping optional detours.
    pub fn primary_successor(&self, stage: Stage) -> Option<Stage> {
        self.successors(stage).first().copied()
    }

    /// The first stage in journey order with a forward edge into `stage`.
    /// Detour stages never capture back-navigation: retreating from a stage
    /// reached via a detour still lands on the main path.
    pub fn predecessor(&self, stage: Stage) -> Option<Stage> {
        self.edges
            .iter()
            .find(|(_, next)| next.contains(&stage))
            .map(|(s, _)| *s)
    }

    pub fn is_terminal(&self, stage: Stage) -> bool {
        self.successors(stage).is_empty()
    }

    /// Check that `from -> to` is an edge of this flow.
    pub fn validate_advance(&self, from: Stage, to: Stage) -> Result<()> {
        if !self.contains(from) || !self.successors(from).contains(&to) {
            return Err(HeroError::InvalidTransition {
                from: from.to_string(),
                to: to.to_string(),
                reason: format!("not an edge in the {} flow", self.kind),
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
