//! # Cabinet Contract Tests
//!
//! This crate provides "golden" tests for the cabinet's public contract to
//! ensure it doesn't drift accidentally over time.
//!
//! ## Philosophy
//!
//! - **Explicit over implicit**: The public contract is written as code
//! - **Testability first**: Contract tests fail when serialized shapes change
//! - **Mechanism not policy**: Define what must be stable, not how to use it
//!
//! ## Structure
//!
//! The cabinet module pins:
//! - Size tokens and their serialized form
//! - Folder record shapes (leaf, composite, absent child slots)
//! - Audit event shapes
//! - The size-filter error message

pub mod cabinet;
