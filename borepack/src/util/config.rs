use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

///Configuration of the bore search
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PackConfig {
    ///Maximum number of circles (cable cross-sections) accepted in a single packing request
    pub max_circles: usize,
    ///Step by which the trial bore radius grows after a failed placement attempt
    pub bore_increment: f64,
    ///Assumed best achievable circle packing density, used to derive the lower bound of the search
    pub packing_density: f64,
    ///Maximum number of placement attempts before the search is considered exhausted
    pub max_attempts: usize,
}

impl PackConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(self.max_circles > 0, "max_circles must be positive");
        ensure!(
            self.bore_increment.is_finite() && self.bore_increment > 0.0,
            "bore_increment must be a positive number, got {}",
            self.bore_increment
        );
        ensure!(
            self.packing_density > 0.0 && self.packing_density < 1.0,
            "packing_density must lie in (0, 1), got {}",
            self.packing_density
        );
        ensure!(self.max_attempts > 0, "max_attempts must be positive");
        Ok(())
    }
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            max_circles: 500,
            bore_increment: 0.01,
            packing_density: 0.75,
            max_attempts: 100_000,
        }
    }
}
