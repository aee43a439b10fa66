#![deny(
    // This is overly strict, of course. The intent is somewhat of a "quality seal," less to fix everything, and more to force us to add inline allows, which are even more needlessly verbose, but give us a mechanism to say "we think this is okay, but you might want to take a second look here."
    clippy::nursery,
    clippy::pedantic,
    // Every item is documented, private ones included.
    missing_docs,
    clippy::missing_docs_in_private_items,
)]

//! Core types shared by the OCEL generator workspace.
//!
//! [`ocel`] holds the object-centric log model that `ocg-gen` produces and writes out as
//! `.jsonocel`. [`eventlog`] holds the flat case/event model, and [`summary`] prints windows of
//! it for `ocgctl show`. [`logging`] and [`errors`] are used by every binary in the workspace.
pub mod errors;
pub mod eventlog;
pub mod logging;
pub mod ocel;
pub mod prelude;
pub mod summary;

/// Unit tests.
#[cfg(test)]
mod tests;
