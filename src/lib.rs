//! Core library for the `fuzzsift` CLI.
//!
//! This crate provides the building blocks used by the binary: CLI argument
//! types, configuration loading, request templating and execution, the
//! matcher/filter chain, input and output providers, and the job that ties
//! them together. The primary user-facing interface is the `fuzzsift`
//! command-line application; library APIs may evolve as the CLI grows.
pub mod args;
pub mod config;
pub mod error;
pub mod filter;
pub mod http;
pub mod input;
pub mod job;
pub mod output;
pub mod shutdown;
