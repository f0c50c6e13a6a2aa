use serde::{Deserialize, Serialize};

/// Optional page-injected tweaks applied to a variant before init.
///
/// ```json
/// { "seed": 7, "star_count": 1000, "meteor_count": 0, "sun_label": "Hola" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneOverrides {
    pub seed: Option<u64>,
    pub star_count: Option<usize>,
    pub meteor_count: Option<usize>,
    pub auto_rotate_speed: Option<f32>,
    pub sun_label: Option<String>,
}

impl SceneOverrides {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
