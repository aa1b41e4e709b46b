//! advisor-core — insurance adequacy evaluation behind a voice/text wizard.
//!
//! The crate is split the same way the product is:
//!   - `evaluator`: the pure adequacy formula and tier classification
//!   - `session`:   the explicit wizard state machine
//!   - `speech`:    narration/transcription collaborator seams
//!   - `transcript`: voice-token extraction and the five-number guard
//!   - `config`:    plan catalogs and narration prompts from data/
//!
//! The evaluator never performs I/O and never touches the speech layer;
//! everything audible flows through the session.

pub mod command;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod event;
pub mod session;
pub mod speech;
pub mod transcript;
pub mod types;
