//! Serializable view of a game after a submission.

use serde::Serialize;

use crate::geom2::DiskPoint;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Xy {
    pub x: f64,
    pub y: f64,
}

impl From<DiskPoint> for Xy {
    #[inline]
    fn from(p: DiskPoint) -> Self {
        Self { x: p.x, y: p.y }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlacedWord {
    pub word: String,
    pub x: f64,
    pub y: f64,
}

/// What the presentation layer needs to redraw after `submit`.
///
/// `hull` is empty before the first accepted word; `error_message` is set only
/// when `accepted` is false.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub accepted: bool,
    pub score: u64,
    pub score_delta: i64,
    pub hull: Vec<Xy>,
    pub points: Vec<PlacedWord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}
