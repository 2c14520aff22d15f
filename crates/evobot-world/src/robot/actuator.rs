/// A wheel actuator holding the speed last commanded by its controller.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Actuator {
    value: f64,
}

impl Actuator {
    #[must_use]
    pub const fn new() -> Self {
        Self { value: 0.0 }
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }
}
