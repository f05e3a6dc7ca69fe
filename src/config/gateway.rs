use std::env;

/// Realm used in `WWW-Authenticate` challenges when no override is set.
pub const DEFAULT_REALM: &str = "gatewarden";

/// Gateway policy configuration, enumerated at construction.
///
/// # Environment Variables
///
/// - `GATEWAY_PUBLIC_PREFIXES`: comma-separated path prefixes exempt from
///   authentication (default `/console`)
/// - `GATEWAY_ROLE_RULES`: comma-separated `prefix=ROLE` pairs
///   (default `/admin=ADMIN`)
/// - `GATEWAY_REALM`: challenge realm (default `gatewarden`)
/// - `GATEWAY_ALLOW_FRAME_EMBEDDING`: skip the `X-Frame-Options: DENY`
///   response header. Development-only relaxation for embedding the
///   console; keep off in production.
/// - `GATEWAY_ADDR`: listen address (default `0.0.0.0:3000`)
#[derive(Clone, Debug)]
pub struct GatewayConfig {
    pub public_prefixes: Vec<String>,
    pub role_rules: Vec<(String, String)>,
    pub realm: String,
    pub allow_frame_embedding: bool,
    pub addr: String,
}

impl GatewayConfig {
    pub fn from_env() -> Self {
        Self {
            public_prefixes: env::var("GATEWAY_PUBLIC_PREFIXES")
                .map(|s| parse_list(&s))
                .unwrap_or_else(|_| vec!["/console".to_string()]),
            role_rules: env::var("GATEWAY_ROLE_RULES")
                .map(|s| parse_role_rules(&s))
                .unwrap_or_else(|_| vec![("/admin".to_string(), "ADMIN".to_string())]),
            realm: env::var("GATEWAY_REALM").unwrap_or_else(|_| DEFAULT_REALM.to_string()),
            allow_frame_embedding: env::var("GATEWAY_ALLOW_FRAME_EMBEDDING")
                .map(|s| s == "1" || s.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            addr: env::var("GATEWAY_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
        }
    }
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses `prefix=ROLE` pairs; entries without a `=` are skipped.
fn parse_role_rules(raw: &str) -> Vec<(String, String)> {
    raw.split(',')
        .filter_map(|entry| {
            let (prefix, role) = entry.split_once('=')?;
            let (prefix, role) = (prefix.trim(), role.trim());
            if prefix.is_empty() || role.is_empty() {
                return None;
            }
            Some((prefix.to_string(), role.to_string()))
        })
        .collect()
}
