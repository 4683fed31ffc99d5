use std::fs;
use std::path::Path;

/// `#define NAME "value"` entries forwarded to the firmware as compile-time env vars
const FORWARDED_DEFINES: &[&str] = &["WIFI_SSID", "WIFI_PASSWORD", "OTA_AUTH_USER", "OTA_AUTH_PASS"];

fn main() -> anyhow::Result<()> {
    // Necessary for ESP-IDF
    embuild::espidf::sysenv::output();

    // Add crash log helper for better panic diagnostics
    println!("cargo:rustc-link-arg=-Wl,--undefined=esp_backtrace_print_app_description");

    let wifi_config_path = "wifi_config.h";
    println!("cargo:rerun-if-changed={}", wifi_config_path);

    let contents = if Path::new(wifi_config_path).exists() {
        fs::read_to_string(wifi_config_path)?
    } else {
        println!("cargo:warning=wifi_config.h not found! Copy wifi_config.h.example to wifi_config.h and add your credentials.");
        String::new()
    };

    for name in FORWARDED_DEFINES {
        // Empty value means "not configured"; the firmware falls back to its defaults
        let value = define_value(&contents, name).unwrap_or_default();
        println!("cargo:rustc-env={}={}", name, value);
    }

    Ok(())
}

fn define_value<'a>(contents: &'a str, name: &str) -> Option<&'a str> {
    let prefix = format!("#define {}", name);
    contents
        .lines()
        .map(str::trim)
        .find(|l| {
            l.strip_prefix(prefix.as_str())
                .is_some_and(|rest| rest.starts_with(char::is_whitespace))
        })
        .and_then(|l| l.split('"').nth(1))
}
