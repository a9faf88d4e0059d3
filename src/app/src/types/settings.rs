use serde::{Deserialize, Serialize};

/// What a submit does while an earlier submission is still in flight
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum SubmitPolicy {
    /// Ignore the new submit
    #[default]
    Block,
    /// Hold the latest draft and send it once the in-flight submission completes
    Queue,
    /// Send right away; the form stays busy until every submission completed
    Allow,
}

/// Settings the shell passes on initialization
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FormSettings {
    #[serde(default)]
    pub submit_policy: SubmitPolicy,
}
