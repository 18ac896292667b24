use stardust_core::TacticalConfig;

const STATIC_CONFIG_JSON: &str = include_str!("../data/config.json");

pub struct ConfigLoader;

impl ConfigLoader {
    /// Tuning bundled with the crate.
    pub fn load() -> serde_json::Result<TacticalConfig> {
        Self::from_json(STATIC_CONFIG_JSON)
    }

    /// Missing groups and fields keep their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<TacticalConfig> {
        serde_json::from_str(json)
    }
}
