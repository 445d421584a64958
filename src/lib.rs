//! # cnf-deciders
//!
//! A family of propositional satisfiability deciders for CNF formulas in
//! DIMACS syntax: pure resolution (saturation), Davis-Putnam (DP) variable
//! elimination, DPLL backtracking search, and a thin CDCL front-end
//! boundary. Every decider returns one of [`engine::Verdict::Satisfiable`],
//! [`engine::Verdict::Unsatisfiable`], or [`engine::Verdict::Timeout`].
//!
//! ## Architecture
//!
//! - **Data types** ([`types`]): variables and literals.
//! - **Clause algebra** ([`clause`]): canonical clauses, resolution,
//!   tautology/subsumption checks.
//! - **Parser** ([`parser`]): tolerant DIMACS CNF parsing.
//! - **Budget controller** ([`budget`]): the single wall-clock deadline
//!   every engine polls cooperatively.
//! - **Shared simplification** ([`simplify`]): unit propagation and
//!   pure-literal elimination, used by both DP and DPLL.
//! - **Engines** ([`engine`]): `resolution`, `dp`, `dpll`, and the
//!   out-of-scope `cdcl` adapter boundary.
//! - **CLI** (`src/bin/cnfd.rs`): one binary, one subcommand per decider.
//!
//! Engines never mutate their input and never share state across solves: 
//! each call is a fresh, single-threaded computation (§5). Logging is
//! routed through the `log` crate; run with `RUST_LOG=debug` or the CLI's
//! `--verbose` flag to see per-round/per-call progress.
//!
//! ```
//! use cnf_deciders::budget::Deadline;
//! use cnf_deciders::clause::Clause;
//! use cnf_deciders::engine::{dpll, Verdict};
//! use cnf_deciders::types::Lit;
//! use std::time::Duration;
//!
//! // (x1) ∧ (¬x2)
//! let formula = vec![
//!     Clause::from_literals([Lit::new(0, false)]),
//!     Clause::from_literals([Lit::new(1, true)]),
//! ];
//!
//! let deadline = Deadline::starting_now(Duration::from_secs(5));
//! let report = dpll::solve(&formula, &deadline, false);
//! assert_eq!(report.verdict, Verdict::Satisfiable);
//! ```

pub mod budget;
pub mod clause;
pub mod engine;
pub mod error;
pub mod parser;
pub mod simplify;
pub mod types;
