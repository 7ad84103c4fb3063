//! User interface and presentation
//!
//! Presenters format hexes and locations for the command line, separating
//! presentation from the addressing logic.

pub mod presenters;
