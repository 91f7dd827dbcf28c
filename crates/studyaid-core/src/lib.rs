//! studyaid-core: study planning, question bank and quiz scoring.
//!
//! This crate holds everything the `studyaid` binary needs that is not
//! terminal I/O: the weighted study-time allocator, the subject allow-list,
//! the multiple-choice question bank with its sampler, the quiz session
//! state machine and the heuristic document question generator.

pub mod allocator;
pub mod bank;
pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod sampler;
pub mod scoring;
pub mod session;
pub mod subjects;
