//! The CDCL front-end's boundary contract. Out of scope per spec §1/§6:
//! this module defines the shape an external-solver bridge would have
//! (`--solvers <csv>` over `{g3,g4,cd,m22}`, `--minimal` self-test) without
//! wiring in a real IPASIR/Glucose/Cadical backend. A production bridge
//! would follow the crates visible elsewhere in this corpus (`cadical-rs`,
//! `varisat`) rather than reimplementing CDCL from scratch here.
//!
//! Grounded on `original_source/cdcl_solver.py`'s solver-name set and
//! `--minimal` self-test. Until a real backend is wired in, `solve`
//! delegates to the in-scope DPLL engine as a placeholder: it produces the
//! right verdict, just not via conflict-driven clause learning.

use std::str::FromStr;

use crate::budget::Deadline;
use crate::clause::Formula;
use crate::engine::{dpll, EngineReport};

/// The external engines the original adapter could select among. Kept as a
/// pure enum; no dependency on any of these solvers is introduced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExternalSolver {
    Glucose3,
    Glucose4,
    Cadical,
    Maplesat,
}

impl FromStr for ExternalSolver {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "g3" => Ok(ExternalSolver::Glucose3),
            "g4" => Ok(ExternalSolver::Glucose4),
            "cd" => Ok(ExternalSolver::Cadical),
            "m22" => Ok(ExternalSolver::Maplesat),
            other => Err(format!("unknown solver: {other}")),
        }
    }
}

pub fn parse_solver_list(csv: &str) -> Result<Vec<ExternalSolver>, String> {
    csv.split(',').map(|s| s.trim().parse()).collect()
}

/// A minimal hardcoded formula used by the `--minimal` self-test flag,
/// matching `run_minimal_test()` in the original adapter: `(x1 ∨ x2) ∧
/// (¬x1 ∨ x3)`, which is satisfiable.
pub fn minimal_test_formula() -> Formula {
    use crate::clause::Clause;
    use crate::types::Lit;
    vec![
        Clause::from_literals([Lit::new(0, false), Lit::new(1, false)]),
        Clause::from_literals([Lit::new(0, true), Lit::new(2, false)]),
    ]
}

/// Thin adapter over a selection of external solvers. No backend is wired
/// in here (out of scope); `solve` falls back to the DPLL engine.
pub struct CdclAdapter {
    pub solvers: Vec<ExternalSolver>,
}

impl CdclAdapter {
    pub fn new(solvers: Vec<ExternalSolver>) -> Self {
        CdclAdapter { solvers }
    }

    pub fn solve(&self, formula: &Formula, deadline: &Deadline, verbose: bool) -> EngineReport {
        if self.solvers.is_empty() {
            log::warn!("no external solvers requested; falling back to the DPLL reference backend");
        }
        dpll::solve(formula, deadline, verbose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_solver_codes() {
        assert_eq!(
            parse_solver_list("g3,g4,cd,m22").unwrap(),
            vec![
                ExternalSolver::Glucose3,
                ExternalSolver::Glucose4,
                ExternalSolver::Cadical,
                ExternalSolver::Maplesat,
            ]
        );
    }

    #[test]
    fn rejects_unknown_solver_codes() {
        assert!(parse_solver_list("g3,bogus").is_err());
    }

    #[test]
    fn minimal_test_formula_is_satisfiable() {
        use crate::budget::Deadline;
        use std::time::Duration;
        let adapter = CdclAdapter::new(vec![ExternalSolver::Glucose3]);
        let deadline = Deadline::starting_now(Duration::from_secs(5));
        let report = adapter.solve(&minimal_test_formula(), &deadline, false);
        assert_eq!(report.verdict, crate::engine::Verdict::Satisfiable);
    }
}
