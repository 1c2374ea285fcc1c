// src/utils.rs
use rand::Rng;
use serde_json::Value;
use std::collections::HashSet;

const RCON_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";
pub const RCON_PASSWORD_LEN: usize = 22;

/// Joins `route` onto `base_url`, dropping at most one leading and one
/// trailing slash from the route. `base_url` must already end with '/'.
pub fn api_endpoint(base_url: &str, route: &str) -> String {
    let route = route.strip_prefix('/').unwrap_or(route);
    let route = route.strip_suffix('/').unwrap_or(route);
    format!("{}{}", base_url, route)
}

/// Random URL-safe secret used when no RCON password was supplied.
pub fn generate_rcon_password() -> String {
    let mut rng = rand::thread_rng();
    (0..RCON_PASSWORD_LEN)
        .map(|_| RCON_ALPHABET[rng.gen_range(0..RCON_ALPHABET.len())] as char)
        .collect()
}

/// Keeps only the entries of the envelope's `result` array whose `id` is in
/// `server_ids`. Order is preserved and the rest of the envelope is untouched.
/// A response without a `result` array is returned as-is.
pub fn retain_server_ids(mut response: Value, server_ids: &[String]) -> Value {
    let wanted: HashSet<&str> = server_ids.iter().map(String::as_str).collect();
    if let Some(records) = response.get_mut("result").and_then(Value::as_array_mut) {
        records.retain(|record| {
            record
                .get("id")
                .and_then(Value::as_str)
                .map_or(false, |id| wanted.contains(id))
        });
    }
    response
}
