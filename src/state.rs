use std::sync::Arc;

use crate::config::AppConfig;
use crate::recognizer::{MockRecognizer, Recognizer};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub recognizer: Arc<dyn Recognizer>,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let recognizer =
            Arc::new(MockRecognizer::new(config.scan_delay())) as Arc<dyn Recognizer>;
        Ok(Self { config, recognizer })
    }

    #[cfg(test)]
    pub fn fake() -> Self {
        let config = Arc::new(AppConfig {
            host: "127.0.0.1".into(),
            port: 0,
            scan_delay_ms: 0,
        });
        let recognizer = Arc::new(MockRecognizer::seeded(config.scan_delay(), 1234))
            as Arc<dyn Recognizer>;
        Self { config, recognizer }
    }
}
