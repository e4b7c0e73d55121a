// Metric card and customer segment domain models
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Flat,
}

impl Direction {
    pub fn arrow(&self) -> Option<char> {
        match self {
            Direction::Up => Some('↑'),
            Direction::Down => Some('↓'),
            Direction::Flat => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCard {
    pub label: String,
    pub value: String,
    pub delta: String,
    pub direction: Direction,
}

impl MetricCard {
    pub fn new(label: &str, value: &str, direction: Direction, change: &str) -> Self {
        let delta = match direction.arrow() {
            Some(arrow) => format!("{} {}", arrow, change),
            None => change.to_string(),
        };

        Self {
            label: label.to_string(),
            value: value.to_string(),
            delta,
            direction,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentShare {
    pub name: String,
    pub percentage: u8,
}

impl SegmentShare {
    pub fn new(name: &str, percentage: u8) -> Self {
        debug_assert!(percentage <= 100);
        Self {
            name: name.to_string(),
            percentage,
        }
    }
}

pub fn total_percentage(shares: &[SegmentShare]) -> u32 {
    shares.iter().map(|s| u32::from(s.percentage)).sum()
}
