//! Gateway endpoint configuration.
//!
//! The hosted gateway URL and its public (anon) API key are baked in at
//! build time via `MOLDERP_GATEWAY_URL` / `MOLDERP_GATEWAY_KEY`. When
//! unset the URL falls back to the local gateway port on the host the
//! app was served from.

use once_cell::sync::Lazy;

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub url: String,
    pub anon_key: String,
}

static CONFIG: Lazy<GatewayConfig> = Lazy::new(|| GatewayConfig {
    url: option_env!("MOLDERP_GATEWAY_URL")
        .map(str::to_string)
        .unwrap_or_else(default_gateway_url),
    anon_key: option_env!("MOLDERP_GATEWAY_KEY")
        .unwrap_or_default()
        .to_string(),
});

pub fn gateway_config() -> &'static GatewayConfig {
    &CONFIG
}

fn default_gateway_url() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return compose_base("http:", "127.0.0.1"),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    compose_base(&protocol, &hostname)
}

/// Local gateways listen on 54321.
fn compose_base(protocol: &str, hostname: &str) -> String {
    format!("{protocol}//{hostname}:54321")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_uses_the_serving_host() {
        assert_eq!(
            compose_base("https:", "erp.example.com"),
            "https://erp.example.com:54321"
        );
    }
}
