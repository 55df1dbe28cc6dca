// Copyright (c) 2026 The Presentes Authors

//! Chá de Casa Nova gift registry tooling.
//!
//! Guests who prefer to contribute money instead of a physical gift pay by
//! PIX. This crate keeps the payee configuration and turns a contribution
//! amount into a "Copia e Cola" code via [`presentes_pix`].

#![deny(clippy::print_stdout)]

pub mod amount;
pub mod config;

// Re-export commands module for CLI binary
#[allow(clippy::print_stdout)]
pub mod commands;
