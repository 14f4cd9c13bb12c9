use super::{Cell, MutableCell, OccupancyCell};

/// Plain cell with a value and an occupancy.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BasicCell {
    value: f64,
    occupancy: f64,
    index: usize,
}

impl BasicCell {
    pub fn new(value: f64, occupancy: f64) -> Self {
        BasicCell {
            value,
            occupancy,
            index: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

impl Default for BasicCell {
    fn default() -> Self {
        BasicCell::new(-1.0, 1.0)
    }
}

impl Cell for BasicCell {
    fn value(&self) -> f64 {
        self.value
    }

    /// `0`: value, `1`: occupancy.
    fn value_of(&self, what: usize) -> f64 {
        match what {
            1 => self.occupancy,
            _ => self.value,
        }
    }

    fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    fn type_name(&self) -> &'static str {
        "Cell - Basic cell"
    }
}

impl MutableCell for BasicCell {
    fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    fn set_default(&mut self) {
        self.value = -1.0;
    }
}

impl OccupancyCell for BasicCell {
    fn occupancy(&self) -> f64 {
        self.occupancy
    }

    fn set_occupancy(&mut self, occupancy: f64) {
        self.occupancy = occupancy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_clear_and_unset() {
        let cell = BasicCell::default();
        assert_eq!(cell.value(), -1.0);
        assert_eq!(cell.occupancy(), 1.0);
        assert!(!cell.is_occupied());
    }

    #[test]
    fn set_default_keeps_occupancy() {
        let mut cell = BasicCell::new(3.5, 0.0);
        cell.set_index(7);
        cell.set_default();

        assert_eq!(cell.value(), -1.0);
        assert!(cell.is_occupied());
        assert_eq!(cell.index(), 7);
    }

    #[test]
    fn value_selector() {
        let cell = BasicCell::new(2.0, 0.5);
        assert_eq!(cell.value_of(0), 2.0);
        assert_eq!(cell.value_of(1), 0.5);
    }
}
