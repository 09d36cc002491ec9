//! Small shared utilities for the `og_*` crates.
//!
//! Currently this only provides hash containers with a fixed, seeded hasher,
//! see [`hash`].
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Modules

pub mod hash;
