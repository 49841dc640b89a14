use number_window::MergeResult;
use serde::{Deserialize, Serialize};

/// Body returned by every upstream number source.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamNumbers {
    pub numbers: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumbersResponse {
    pub window_prev_state: Vec<i64>,
    pub window_curr_state: Vec<i64>,
    pub numbers: Vec<i64>,
    pub avg: f64,
}

impl NumbersResponse {
    pub fn new(merge: MergeResult, avg: f64) -> Self {
        Self {
            window_prev_state: merge.prev_state,
            window_curr_state: merge.curr_state,
            numbers: merge.numbers,
            avg,
        }
    }
}
