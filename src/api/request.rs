//! Request types for the pay period API.

use serde::{Deserialize, Serialize};

/// Query string for `GET /pay-periods/{year}`.
///
/// An absent `month` selects all twelve pay periods; `month=0` is rejected as
/// out of range rather than treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriodsQuery {
    /// Restricts the result to one pay period month (1-12).
    #[serde(default)]
    pub month: Option<u32>,
}
