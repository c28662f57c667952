/// An unpositioned circular cross-section of a single physical cable.
#[derive(Clone, Debug, PartialEq)]
pub struct CircleSpec {
    /// Name of the cable type this cross-section belongs to
    pub name: String,
    pub radius: f64,
}

impl CircleSpec {
    pub fn new(name: impl Into<String>, radius: f64) -> Self {
        debug_assert!(
            radius.is_finite() && radius > 0.0,
            "invalid circle radius: {}",
            radius
        );
        Self {
            name: name.into(),
            radius,
        }
    }

    pub fn from_diameter(name: impl Into<String>, diameter: f64) -> Self {
        Self::new(name, diameter / 2.0)
    }

    pub fn diameter(&self) -> f64 {
        self.radius * 2.0
    }
}
