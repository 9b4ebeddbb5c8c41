//! Bounded single-occupancy grid worlds.
//!
//! This crate implements the 2D storage, the event bus and the shared world
//! facade that concrete occupant worlds build on.

pub mod events;
pub mod grid;
pub mod random;
pub mod world;

pub use events::EventBus;
pub use grid::Grid;
pub use random::{random_coordinate, random_coordinate_with, seed_shared_rng};
pub use world::{Occupant, Rows, World, WorldCore};
