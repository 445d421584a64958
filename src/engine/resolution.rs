//! Pure resolution (saturation). Closes the input clause set under binary
//! resolution, halting when either the empty clause is derived (UNSAT) or a
//! full round produces no new clause (SAT).
//!
//! Grounded on `original_source/resolution_solver.py`'s `pure_resolution`,
//! restructured around [`Clause`]'s canonical set identity instead of
//! Python `frozenset`s.

use std::collections::HashSet;

use crate::budget::Deadline;
use crate::clause::{Clause, Formula};
use crate::engine::{EngineReport, Verdict};

pub fn saturate(formula: &Formula, deadline: &Deadline, verbose: bool) -> EngineReport {
    // Tautologies in the input are inert; drop them up front (invariant 2).
    let mut clauses: HashSet<Clause> =
        formula.iter().filter(|c| !c.is_tautology()).cloned().collect();

    if clauses.iter().any(|c| c.is_empty()) {
        return EngineReport { verdict: Verdict::Unsatisfiable, steps: 0 };
    }

    let mut resolvents = 0u64;
    let mut round = 0u64;

    loop {
        if deadline.expired() {
            log::debug!("resolution timed out after {} rounds, {} resolvents", round, resolvents);
            return EngineReport { verdict: Verdict::Timeout, steps: resolvents };
        }
        round += 1;
        if verbose {
            log::debug!("resolution round {round}: {} clauses", clauses.len());
        }

        let snapshot: Vec<&Clause> = clauses.iter().collect();
        let n = snapshot.len();
        let mut new_clauses: HashSet<Clause> = HashSet::new();

        for i in 0..n {
            for j in (i + 1)..n {
                let (c1, c2) = (snapshot[i], snapshot[j]);
                let Some(lit) = c1.first_complementary_literal(c2) else {
                    continue;
                };
                let resolvent = c1.resolve(c2, lit).expect("precondition checked above");

                if resolvent.is_tautology() {
                    continue;
                }
                if resolvent.is_empty() {
                    return EngineReport { verdict: Verdict::Unsatisfiable, steps: resolvents + 1 };
                }
                if !clauses.contains(&resolvent) && !new_clauses.contains(&resolvent) {
                    new_clauses.insert(resolvent);
                    resolvents += 1;
                }
            }
        }

        if new_clauses.is_empty() {
            return EngineReport { verdict: Verdict::Satisfiable, steps: resolvents };
        }
        clauses.extend(new_clauses);
    }
}
