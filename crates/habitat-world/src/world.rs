//! The coordinate-aware facade every concrete world is built on.
//!
//! A concrete world owns a [`WorldCore`] and implements [`World`] for it,
//! supplying the two placement hooks that know how to accept its own kind of
//! occupant. Everything else (bounds queries, raw placement, snapshots, the
//! environment link and the event bus) is provided by the trait.

use crate::events::EventBus;
use crate::grid::Grid;
use crate::random;
use habitat_core::{Coordinate, EnvironmentId, Error, Located, Result, WorldConfig};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, instrument, trace};

/// Shared handle to an occupant stored in a world
pub type Occupant<T> = Arc<T>;

/// Column-per-`x` table of occupants as handed out by the world snapshots
pub type Rows<T> = Vec<Vec<Option<Occupant<T>>>>;

/// State shared by all worlds: the grid, the owning environment and the bus.
#[derive(Debug)]
pub struct WorldCore<T, E> {
    grid: Option<Grid<Occupant<T>>>,
    environment: Option<EnvironmentId>,
    events: EventBus<E>,
}

impl<T, E: Clone> WorldCore<T, E> {
    /// Create an unusable core; call [`WorldCore::initialize`] before anything else
    pub fn new(events: EventBus<E>) -> Self {
        Self {
            grid: None,
            environment: None,
            events,
        }
    }

    #[instrument(skip(self))]
    pub fn initialize(
        &mut self,
        width: i32,
        height: i32,
        environment: EnvironmentId,
    ) -> Result<()> {
        self.set_environment(environment);
        self.grid = Some(Grid::new(width, height)?);
        debug!("World initialized");
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.grid.is_some()
    }

    pub fn grid(&self) -> Result<&Grid<Occupant<T>>> {
        self.grid.as_ref().ok_or(Error::Uninitialized)
    }

    pub fn grid_mut(&mut self) -> Result<&mut Grid<Occupant<T>>> {
        self.grid.as_mut().ok_or(Error::Uninitialized)
    }

    pub fn environment(&self) -> Option<EnvironmentId> {
        self.environment
    }

    pub fn set_environment(&mut self, environment: EnvironmentId) {
        self.environment = Some(environment);
    }

    pub fn event_bus(&self) -> &EventBus<E> {
        &self.events
    }
}

impl<T, E> fmt::Display for WorldCore<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.grid {
            Some(grid) => write!(f, "World {}x{}", grid.width(), grid.height()),
            None => write!(f, "World"),
        }
    }
}

/// A bounded world holding one kind of occupant.
pub trait World {
    type Item: Located;
    type Event: Clone;

    fn core(&self) -> &WorldCore<Self::Item, Self::Event>;

    fn core_mut(&mut self) -> &mut WorldCore<Self::Item, Self::Event>;

    /// Place a batch of occupants, applying whatever checks this world needs.
    fn place_items<I>(&mut self, items: I) -> Result<()>
    where
        I: IntoIterator<Item = Occupant<Self::Item>>;

    /// Place a single occupant, applying whatever checks this world needs.
    fn place_item(&mut self, item: Occupant<Self::Item>) -> Result<()>;

    /// Bind the owning environment and allocate an empty `width` x `height` grid.
    ///
    /// Calling this again throws away every occupant.
    fn initialize(&mut self, width: i32, height: i32, environment: EnvironmentId) -> Result<()> {
        self.core_mut().initialize(width, height, environment)
    }

    fn initialize_with(&mut self, config: &WorldConfig, environment: EnvironmentId) -> Result<()> {
        self.initialize(config.width, config.height, environment)
    }

    /// Store `item` at (x, y) without consulting `in_bounds` first.
    fn put_item(&mut self, x: i32, y: i32, item: Option<Occupant<Self::Item>>) -> Result<()> {
        trace!(x, y, occupied = item.is_some(), "Writing cell");
        self.core_mut().grid_mut()?.put(x, y, item)
    }

    /// Store `item` at the coordinate it reports for itself.
    fn put_located(&mut self, item: Occupant<Self::Item>) -> Result<()> {
        let Coordinate { x, y } = item.coordinate();
        self.put_item(x, y, Some(item))
    }

    fn free(&mut self, x: i32, y: i32) -> Result<()> {
        self.put_item(x, y, None)
    }

    /// False for every coordinate until the world is initialized
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.core()
            .grid()
            .map_or(false, |grid| grid.in_bounds(x, y))
    }

    fn get_item(&self, x: i32, y: i32) -> Result<Option<Occupant<Self::Item>>> {
        Ok(self.core().grid()?.get(x, y)?.cloned())
    }

    /// Live table, one column per `x`
    fn items(&self) -> Result<&[Vec<Option<Occupant<Self::Item>>>]> {
        Ok(self.core().grid()?.rows())
    }

    /// Mutable columns; cell writes land in the world
    fn items_mut(
        &mut self,
    ) -> Result<Box<dyn Iterator<Item = &mut [Option<Occupant<Self::Item>>]> + '_>> {
        let columns: Box<dyn Iterator<Item = &mut [Option<Occupant<Self::Item>>]> + '_> =
            Box::new(self.core_mut().grid_mut()?.rows_mut());
        Ok(columns)
    }

    /// New column containers sharing the same occupants as the live table
    fn items_copied(&self) -> Result<Rows<Self::Item>> {
        Ok(self.core().grid()?.rows_copied())
    }

    /// Lazy walk over all occupants in table order, empty cells skipped.
    ///
    /// Each call starts a fresh walk over the live grid.
    fn items_flat(&self) -> Result<Box<dyn Iterator<Item = &Occupant<Self::Item>> + '_>> {
        let occupants: Box<dyn Iterator<Item = &Occupant<Self::Item>> + '_> =
            Box::new(self.core().grid()?.flatten());
        Ok(occupants)
    }

    fn environment(&self) -> Option<EnvironmentId> {
        self.core().environment()
    }

    fn set_environment(&mut self, environment: EnvironmentId) {
        self.core_mut().set_environment(environment)
    }

    /// Bus on which this world announces its events
    fn event_bus(&self) -> &EventBus<Self::Event> {
        self.core().event_bus()
    }

    fn publish(&self, event: Self::Event) -> usize {
        self.event_bus().publish(event)
    }

    /// A uniformly drawn coordinate in `[0, max_x) x [0, max_y)`
    fn random_coordinate(max_x: i32, max_y: i32) -> Result<Coordinate>
    where
        Self: Sized,
    {
        random::random_coordinate(max_x, max_y)
    }
}
