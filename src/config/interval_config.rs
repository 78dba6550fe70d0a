use serde::Deserialize;

use crate::ga::fitness::Interval;

#[derive(Debug, Deserialize)]
pub struct IntervalConfig {
    pub x: Interval,
    pub y: Interval,
}
