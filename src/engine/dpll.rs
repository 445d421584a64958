//! DPLL backtracking search: unit propagation, pure-literal elimination,
//! then branch on a deterministically-chosen literal.
//!
//! Grounded on the teacher's `src/solver/dpll.rs`, extended with the
//! pure-literal-elimination step the teacher omitted (spec §4.5 step 3)
//! and a deadline/`calls` counter per `original_source/dpll_solver.py`.
//! Unlike DP, DPLL never performs cross-resolution, so memory stays linear
//! in input size along any one branch; and unlike the teacher's original,
//! no model is returned (§3: assignments are internal, discarded at
//! return).

use crate::budget::Deadline;
use crate::clause::{Clause, Formula};
use crate::engine::{EngineReport, Verdict};
use crate::simplify::{pure_literal_eliminate, unit_propagate};
use crate::types::Lit;

pub fn solve(formula: &Formula, deadline: &Deadline, verbose: bool) -> EngineReport {
    let mut calls = 0u64;
    let verdict = dpll_search(formula.clone(), deadline, &mut calls, verbose);
    EngineReport { verdict, steps: calls }
}

fn dpll_search(formula: Formula, deadline: &Deadline, calls: &mut u64, verbose: bool) -> Verdict {
    *calls += 1;
    if deadline.expired() {
        return Verdict::Timeout;
    }
    if verbose && *calls % 1000 == 0 {
        log::debug!("DPLL progress: {calls} recursive calls, {} clauses", formula.len());
    }

    let formula = match unit_propagate(formula) {
        Err(_) => return Verdict::Unsatisfiable,
        Ok(f) => f,
    };

    let (formula, changed) = pure_literal_eliminate(formula);
    if changed {
        return dpll_search(formula, deadline, calls, verbose);
    }

    if formula.is_empty() {
        return Verdict::Satisfiable;
    }
    if formula.iter().any(Clause::is_empty) {
        // Defensive: unit propagation should already have caught this.
        return Verdict::Unsatisfiable;
    }

    // Canonical deterministic decision: first literal of the first clause,
    // in the formula's current enumeration order (see DESIGN.md, Open
    // Question 2).
    let lit = formula[0].literals()[0];

    match dpll_search(branch(&formula, lit), deadline, calls, verbose) {
        Verdict::Satisfiable => Verdict::Satisfiable,
        Verdict::Timeout => Verdict::Timeout,
        Verdict::Unsatisfiable => dpll_search(branch(&formula, lit.negate()), deadline, calls, verbose),
    }
}

/// Drops clauses containing `lit`; strips `¬lit` from the rest. No
/// tautology check is needed; branching can't introduce one.
fn branch(formula: &Formula, lit: Lit) -> Formula {
    formula
        .iter()
        .filter(|c| !c.contains(lit))
        .map(|c| {
            if c.contains(lit.negate()) {
                Clause::from_literals(c.literals().iter().copied().filter(|&l| l != lit.negate()))
            } else {
                c.clone()
            }
        })
        .collect()
}
