use serde::{Deserialize, Serialize};

/// A venture as returned by the host's lookup API. Read-only here: ventures
/// group and color cells in consuming views, they never affect scheduling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venture {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}
