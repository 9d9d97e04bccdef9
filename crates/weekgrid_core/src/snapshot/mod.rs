//! Portable snapshot format for schedule persistence and file exchange.
//!
//! # Responsibility
//! - Define the serialized schedule shape shared by the storage slot and
//!   exported files.
//! - Convert between that shape and a validated `ScheduleState`.
//!
//! # Invariants
//! - Unassigned slots are written as `null` and normalized back on read.
//! - Decoding never yields a state that breaks model invariants; invalid
//!   payloads are rejected as a whole.
//! - Activity keys are written in ascending order.

pub mod codec;

pub use codec::{
    decode, encode, from_json, slot_from_wire, slot_to_wire, to_json, SerializedState,
    SnapshotError,
};
