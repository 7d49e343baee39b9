//! oraconn CLI - command-line front-end for `oraconn-format`.
//!
//! Loads a descriptor inventory, renders one connection format for the
//! requested ids and reports the diagnostics recorded along the way.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
