use std::env;
use std::fs;
use std::path::Path;

// Claves que config.rs lee con option_env!
const CONFIG_KEYS: &[&str] = &[
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "TRACKER_TICK_INTERVAL_MS",
    "TRACKER_ETA_LABEL",
    "DELIVERY_FEE",
    "CHECKOUT_REDIRECT_DELAY_MS",
    "TOAST_DURATION_MS",
    "MAX_CUISINE_BADGES",
    "MAX_DELIVERY_COST_FILTER",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    let contents = match fs::read_to_string(env_file) {
        Ok(contents) => contents,
        Err(_) => {
            println!("cargo:warning=No .env file found, storefront defaults will be used.");
            return;
        }
    };

    for line in contents.lines().map(str::trim) {
        // Comentarios y líneas vacías
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            println!("cargo:warning=Ignoring malformed .env line: {}", line);
            continue;
        };
        let key = key.trim();
        let value = value.trim().trim_matches('"');

        if !CONFIG_KEYS.contains(&key) {
            println!("cargo:warning=Unknown .env key ignored: {}", key);
            continue;
        }

        // El entorno del proceso tiene prioridad sobre .env
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
