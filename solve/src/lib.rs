pub mod cli;
pub mod dispatch;
pub mod error;
pub mod logging;

pub use dispatch::{solve, solve_both, solver_for, Day, Part, Solver, NO_BASEMENT};
pub use error::SolveError;
