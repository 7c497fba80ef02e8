//! Build orchestration.
//!
//! This module provides the [`Bundler`] that turns an Elm + Java project into
//! a signed APK by running a fixed sequence of SDK tools.
//!
//! # Module Organization
//!
//! - [`process`] - [`Step`] descriptors and sequential execution
//! - [`steps`] - the fixed command lines for each tool
//! - [`elm`] - Elm compilation and the live-reload server
//! - [`orchestrator`] - [`Bundler`], the three build phases

pub mod elm;
mod orchestrator;
pub mod process;
pub mod steps;

pub use orchestrator::Bundler;
pub use process::Step;
