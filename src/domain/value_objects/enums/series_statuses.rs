use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum SeriesStatus {
    #[default]
    Ongoing,
    Completed,
    Upcoming,
    Cancelled,
}

impl Display for SeriesStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = match self {
            SeriesStatus::Ongoing => "ongoing",
            SeriesStatus::Completed => "completed",
            SeriesStatus::Upcoming => "upcoming",
            SeriesStatus::Cancelled => "cancelled",
        };
        write!(f, "{}", status)
    }
}

impl SeriesStatus {
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "ongoing" => Some(SeriesStatus::Ongoing),
            "completed" => Some(SeriesStatus::Completed),
            "upcoming" => Some(SeriesStatus::Upcoming),
            "cancelled" => Some(SeriesStatus::Cancelled),
            _ => None,
        }
    }
}
