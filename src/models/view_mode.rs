use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which counting unit and horizon the grid uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Days of the current calendar year
    Year,
    /// Weeks of a configured lifespan
    #[default]
    Life,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Year => "year",
            ViewMode::Life => "life",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
