//! Reactive primitives for the shell's state management
//!
//! Every piece of mutable shell state lives in an [`Actor`] (or an [`Atom`]
//! for purely local UI concerns) and is mutated only by events flowing
//! through [`Relay`]s. Views read state exclusively through signals.
//!
//! Conventions:
//!
//! 1. No raw `Mutable`s outside this module
//! 2. Relays are named `{source}_{event}_relay`
//! 3. Each relay is emitted from exactly one code location (checked in
//!    debug builds)

pub mod actor;
pub mod atom;
pub mod relay;

pub use actor::Actor;
pub use atom::Atom;
pub use relay::{Relay, RelayError, relay};
