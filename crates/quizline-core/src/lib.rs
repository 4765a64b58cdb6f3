//! quizline-core: question store, session runner, and high-score persistence.
//!
//! This crate holds the whole game: the question data model, the shuffle and
//! lifeline logic of a playthrough, and the small JSON record that carries the
//! high score between runs. The CLI crate only wires it to a terminal.

pub mod console;
pub mod error;
pub mod game;
pub mod highscore;
pub mod model;
pub mod session;
pub mod store;
