//! Davis-Putnam variable elimination: eliminate variables one at a time by
//! resolving all positive occurrences against all negative occurrences,
//! simplifying via shared unit propagation and pure-literal elimination
//! (see [`crate::simplify`]) plus subsumption after each step.
//!
//! Grounded on `original_source/dp_solver.py`'s `dp_solve`.

use std::collections::BTreeSet;

use crate::budget::Deadline;
use crate::clause::{Clause, Formula};
use crate::engine::{EngineReport, Verdict};
use crate::simplify::{pure_literal_eliminate, unit_propagate};
use crate::types::{Lit, Var};

pub fn solve(formula: &Formula, deadline: &Deadline, verbose: bool) -> EngineReport {
    let mut calls = 0u64;
    let verdict = dp_solve(formula.clone(), deadline, &mut calls, verbose);
    EngineReport { verdict, steps: calls }
}

fn dp_solve(formula: Formula, deadline: &Deadline, calls: &mut u64, verbose: bool) -> Verdict {
    *calls += 1;
    if deadline.expired() {
        return Verdict::Timeout;
    }
    if verbose && *calls % 100 == 0 {
        log::debug!("DP progress: {calls} recursive calls, {} clauses", formula.len());
    }

    let formula = match unit_propagate(formula) {
        Err(_) => return Verdict::Unsatisfiable,
        Ok(f) => f,
    };
    if formula.is_empty() {
        return Verdict::Satisfiable;
    }

    let (formula, changed) = pure_literal_eliminate(formula);
    if changed {
        return dp_solve(formula, deadline, calls, verbose);
    }

    let formula = simplify_by_subsumption(formula);

    let Some(var) = choose_elimination_variable(&formula) else {
        // No variable has both polarities left: every remaining variable is pure.
        return Verdict::Satisfiable;
    };

    let mut positive = Vec::new();
    let mut negative = Vec::new();
    let mut rest = Vec::new();
    for c in formula {
        let pos_lit = Lit::new(var, false);
        let neg_lit = Lit::new(var, true);
        if c.contains(pos_lit) {
            positive.push(c);
        } else if c.contains(neg_lit) {
            negative.push(c);
        } else {
            rest.push(c);
        }
    }

    let mut resolvents = Vec::new();
    for p in &positive {
        for n in &negative {
            let resolvent = p
                .resolve(n, Lit::new(var, false))
                .expect("p contains +var and n contains -var by construction");
            if resolvent.is_tautology() {
                continue;
            }
            // Defensive: a resolvent that still mentions var would mean one of
            // p/n contained both polarities of var (a tautology, filtered earlier).
            if resolvent.contains(Lit::new(var, false)) || resolvent.contains(Lit::new(var, true)) {
                continue;
            }
            if resolvent.is_empty() {
                return Verdict::Unsatisfiable;
            }
            resolvents.push(resolvent);
        }
    }

    rest.extend(resolvents);
    let next = simplify_by_subsumption(rest);
    dp_solve(next, deadline, calls, verbose)
}

/// Removes any clause that is a strict superset of another, keeping the
/// smaller. Canonical insertion order: drop stored supersets of the
/// incoming clause; skip the incoming clause if some stored clause already
/// subsumes it.
fn simplify_by_subsumption(clauses: Formula) -> Formula {
    let mut kept: Vec<Clause> = Vec::with_capacity(clauses.len());
    for c in clauses {
        if kept.iter().any(|d| d.subsumes(&c)) {
            continue;
        }
        kept.retain(|d| !c.subsumes(d) || d == &c);
        if !kept.contains(&c) {
            kept.push(c);
        }
    }
    kept
}

/// The smallest-indexed variable with both a positive and a negative
/// occurrence remaining in the formula.
fn choose_elimination_variable(formula: &Formula) -> Option<Var> {
    let mut positive: BTreeSet<Var> = BTreeSet::new();
    let mut negative: BTreeSet<Var> = BTreeSet::new();
    for c in formula {
        for l in c {
            if l.is_neg() {
                negative.insert(l.var());
            } else {
                positive.insert(l.var());
            }
        }
    }
    positive.intersection(&negative).min().copied()
}
