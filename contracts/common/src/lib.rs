//! Shared utilities and error types for the Screen Stake contracts.
//!
//! This crate provides:
//! - [`CommonError`]: standardised error codes reported by shared helpers.
//! - [`ownable`]: the single-owner authorization gate.
//!
//! Contract-specific errors convert from [`CommonError`] so a contract can
//! surface gate failures through its own error enum.

#![no_std]

use soroban_sdk::contracterror;

// ── Modules ──────────────────────────────────────────────────────────────────

pub mod ownable;

pub use ownable::*;

// ── Shared error enum ────────────────────────────────────────────────────────

/// Standardised error codes shared by every contract in the workspace.
///
/// # Code ranges
/// | Range   | Purpose                       |
/// |---------|-------------------------------|
/// | 1 – 9   | Lifecycle / initialisation    |
/// | 10 – 19 | Authentication & authorisation|
/// | 30 – 39 | Validation / input            |
#[contracterror]
#[derive(Clone, Debug, Eq, PartialEq, Copy)]
#[repr(u32)]
pub enum CommonError {
    // ── Lifecycle (1–9) ──────────────────────────────────────
    /// No owner has been recorded yet.
    NotInitialized = 1,

    /// An owner is already recorded; the gate can only be seeded once.
    AlreadyInitialized = 2,

    // ── Auth (10–19) ─────────────────────────────────────────
    /// The caller is not the current owner.
    AccessDenied = 10,

    // ── Validation (30–39) ───────────────────────────────────
    /// The proposed identity can never authorize (e.g. the contract itself).
    InvalidInput = 30,
}
