use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Site {
    Bowflex,
    Horizon,
    Schwinn,
}

impl Site {
    pub fn key(&self) -> &'static str {
        match self {
            Site::Bowflex => "bowflex",
            Site::Horizon => "horizon",
            Site::Schwinn => "schwinn",
        }
    }
}
