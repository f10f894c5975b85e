use std::fs;
use std::path::Path;

use revrec_core::config::{
    env_source, resolve_config_path, AppConfig, LoadOptions, LOG_FORMAT_ENV_KEYS,
    LOG_LEVEL_ENV_KEYS,
};
use toml::Value;

pub fn run() -> String {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => return format!("config validation failed: {error}"),
    };

    let config_file_path = resolve_config_path(None);
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());

    let mut lines = vec!["effective config (source precedence: env > file > default):".to_string()];

    let fields: [(&str, String, &[&str]); 6] = [
        ("backend.base_url", config.backend.base_url.clone(), &["REVREC_BACKEND_BASE_URL"]),
        (
            "backend.timeout_secs",
            config.backend.timeout_secs.to_string(),
            &["REVREC_BACKEND_TIMEOUT_SECS"],
        ),
        (
            "server.bind_address",
            config.server.bind_address.clone(),
            &["REVREC_SERVER_BIND_ADDRESS"],
        ),
        ("server.port", config.server.port.to_string(), &["REVREC_SERVER_PORT"]),
        ("logging.level", config.logging.level.clone(), LOG_LEVEL_ENV_KEYS),
        ("logging.format", config.logging.format.to_string(), LOG_FORMAT_ENV_KEYS),
    ];

    for (key, value, env_keys) in fields {
        lines.push(render_line(
            key,
            &value,
            field_source(key, env_keys, config_file_doc.as_ref(), config_file_path.as_deref()),
        ));
    }

    lines.join("\n")
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

fn field_source(
    key_path: &str,
    env_keys: &[&str],
    config_file_doc: Option<&Value>,
    config_file_path: Option<&Path>,
) -> String {
    if let Some(env_key) = env_source(env_keys) {
        return format!("env ({env_key})");
    }

    if let Some(doc) = config_file_doc {
        if contains_path(doc, key_path) {
            let file_path = config_file_path
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "config file".to_string());
            return format!("file ({file_path})");
        }
    }

    "default".to_string()
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}

fn render_line(key: &str, value: &str, source: String) -> String {
    format!("- {key} = {value} (source: {source})")
}
