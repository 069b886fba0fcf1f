use serde::{Deserialize, Serialize};
use web_time::Duration;

const DEFAULT_AUTO_PLAY_INTERVAL_MS: u64 = 900;
const DEFAULT_COMMENT_PREVIEW_CHARS: usize = 70;

/// Viewer settings. Missing fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub auto_play_interval_ms: u64,
    pub comment_preview_chars: usize,
}

impl ViewerConfig {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn auto_play_interval(&self) -> Duration {
        Duration::from_millis(self.auto_play_interval_ms)
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            auto_play_interval_ms: DEFAULT_AUTO_PLAY_INTERVAL_MS,
            comment_preview_chars: DEFAULT_COMMENT_PREVIEW_CHARS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults_for_missing_fields() {
        let config = ViewerConfig::from_json(r#"{ "auto_play_interval_ms": 250 }"#).unwrap();

        assert_eq!(config.auto_play_interval(), Duration::from_millis(250));
        assert_eq!(config.comment_preview_chars, 70);
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(ViewerConfig::from_json("{}").unwrap(), ViewerConfig::default());
    }
}
