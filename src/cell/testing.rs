use super::{Cell, MutableCell};

/// Minimal single-valued cell for unit tests.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValueCell {
    pub value: f64,
    pub index: usize,
}

impl Cell for ValueCell {
    fn value(&self) -> f64 {
        self.value
    }

    fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    fn type_name(&self) -> &'static str {
        "Cell"
    }
}

impl MutableCell for ValueCell {
    fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    fn set_default(&mut self) {
        self.value = 0.0;
    }
}
