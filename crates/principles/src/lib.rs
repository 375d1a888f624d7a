//! # Principles Crate
//!
//! Small demonstrations of four of the SOLID principles. The fifth,
//! Open-Closed, lives in the `specification` crate.
//!
//! - **srp**: a journal that manages entries, with persistence kept apart
//! - **lsp**: rectangle and square, and why one can't stand in for the other
//! - **isp**: one fat `Machine` trait versus segregated `Printer` / `Scanner`
//! - **dip**: research code written against a `RelationshipBrowser` trait
//!
//! Nothing here runs on its own; the `solid-demo` binary drives each demo.

pub mod error;
pub mod srp;
pub mod lsp;
pub mod isp;
pub mod dip;

pub use error::DeviceError;
pub use srp::{Journal, PersistenceManager};
pub use lsp::{use_it, AreaCheck, Rectangle, Shape, Square};
pub use isp::{
    Machine, MultiFunctionDevice, MultiFunctionMachine, MultiFunctionPrinter, MyPrinter,
    OldFashionPrinter, Photocopier, Printer, Scanner,
};
pub use dip::{Person, Relationship, RelationshipBrowser, Relationships, Research};
