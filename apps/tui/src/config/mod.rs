mod settings;

pub use settings::{
    init_app_config, AppConfig, DEFAULT_API_URL, DEFAULT_LOG_FILE, DEFAULT_TIMEOUT_SECS,
};
