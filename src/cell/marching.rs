//! Cell state for wavefront (fast marching) solvers.

use super::{Cell, MutableCell, OccupancyCell};

/// Front state of a cell during propagation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FmState {
    /// Not reached yet.
    Open,
    /// Tentative arrival time, cell is on the front.
    Narrow,
    /// Arrival time is final.
    Frozen,
}

impl Default for FmState {
    fn default() -> Self {
        FmState::Open
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FmCell {
    value: f64,
    velocity: f64,
    occupancy: f64,
    state: FmState,
    index: usize,
}

impl FmCell {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: f64) {
        self.velocity = velocity;
    }

    pub fn state(&self) -> FmState {
        self.state
    }

    pub fn set_state(&mut self, state: FmState) {
        self.state = state;
    }

    /// Arrival time of the front, same as [`Cell::value`].
    pub fn arrival_time(&self) -> f64 {
        self.value
    }

    pub fn is_obstacle(&self) -> bool {
        self.occupancy == 0.0
    }
}

impl Default for FmCell {
    fn default() -> Self {
        FmCell {
            value: f64::INFINITY,
            velocity: 1.0,
            occupancy: 1.0,
            state: FmState::Open,
            index: 0,
        }
    }
}

impl Cell for FmCell {
    fn value(&self) -> f64 {
        self.value
    }

    /// `0`: arrival time, `1`: velocity.
    fn value_of(&self, what: usize) -> f64 {
        match what {
            1 => self.velocity,
            _ => self.value,
        }
    }

    fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    fn type_name(&self) -> &'static str {
        "FMCell - Fast Marching cell"
    }
}

impl MutableCell for FmCell {
    fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    fn set_default(&mut self) {
        self.value = f64::INFINITY;
        self.velocity = if self.is_obstacle() { 0.0 } else { 1.0 };
        self.state = FmState::Open;
    }
}

impl OccupancyCell for FmCell {
    fn occupancy(&self) -> f64 {
        self.occupancy
    }

    fn set_occupancy(&mut self, occupancy: f64) {
        self.occupancy = occupancy;
    }
}
