//! Time-block scheduling and capacity accounting for a personal planner.
//!
//! This crate is the scheduling core behind a planner UI: it decides which
//! tasks are eligible to schedule and in what order ([`ops::queue`]), binds
//! batches of tasks to `(date, slot)` cells through a persistence boundary
//! ([`ops::schedule`], [`store`]), and derives the capacity and urgency
//! figures the calendar views render ([`ops::capacity`], [`ops::grid`],
//! [`ops::urgency`]).
//!
//! The host application owns the UI, the transport, and task CRUD. All the
//! pure logic here takes `today` as a parameter; nothing below the host
//! reads the system clock.

pub mod io;
pub mod model;
pub mod ops;
pub mod store;
