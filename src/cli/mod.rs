//! CLI infrastructure for the pacai toolkit
//!
//! This module provides the command-line interface for solving mazes with
//! graph search and training Q-learning agents on a grid world.

pub mod commands;
pub mod output;
