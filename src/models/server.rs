// src/models/server.rs
use serde::Serialize;

pub const DEFAULT_GAMEMODE: &str = "Competitive";
pub const DEFAULT_LOCATION: &str = "Sydney";
pub const DEFAULT_MAP: &str = "de_dust2";
pub const DEFAULT_PLUGIN: &str = "warmod";
pub const DEFAULT_TICKRATE: u32 = 128;

/// Everything needed to provision a new server. Fields left as `None` are
/// handled when the request body is built: a missing RCON password is
/// generated, a missing join password drops the password block.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerSpec {
    pub name: String,
    pub password: Option<String>,
    pub rcon_password: Option<String>,
    pub gamemode: String,
    pub location: String,
    pub map: String,
    pub plugins: Vec<String>,
    pub tickrate: u32,
}

impl ServerSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            password: None,
            rcon_password: None,
            gamemode: DEFAULT_GAMEMODE.to_string(),
            location: DEFAULT_LOCATION.to_string(),
            map: DEFAULT_MAP.to_string(),
            plugins: vec![DEFAULT_PLUGIN.to_string()],
            tickrate: DEFAULT_TICKRATE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateServerRequest {
    pub name: String,
    pub gamemode: String,
    pub location: Location,
    pub map: MapSelection,
    pub plugins: Vec<String>,
    pub tickrate: u32,
    pub rcon: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<JoinPassword>,
}

impl CreateServerRequest {
    /// `rcon` is the password to send, already resolved by the caller.
    pub fn from_spec(spec: &ServerSpec, rcon: String) -> Self {
        Self {
            name: spec.name.clone(),
            gamemode: spec.gamemode.clone(),
            location: Location { city: spec.location.clone() },
            map: MapSelection::default_map(&spec.map),
            plugins: spec.plugins.clone(),
            tickrate: spec.tickrate,
            rcon,
            password: spec.password.as_ref().map(|value| JoinPassword {
                enabled: true,
                value: value.clone(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    pub city: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapSelection {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    pub group: String,
}

impl MapSelection {
    pub fn default_map(id: &str) -> Self {
        Self {
            kind: "default".to_string(),
            id: id.to_string(),
            group: "mg_active".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JoinPassword {
    pub enabled: bool,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandRequest {
    pub command: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn body_without_join_password_has_no_password_key() {
        let spec = ServerSpec::new("mycsgoserver");
        let body = serde_json::to_value(CreateServerRequest::from_spec(&spec, "rconrconrconrcon".into())).unwrap();

        assert!(body.get("password").is_none());
        assert_eq!(body["map"], json!({"type": "default", "id": "de_dust2", "group": "mg_active"}));
        assert_eq!(body["location"], json!({"city": "Sydney"}));
        assert_eq!(body["plugins"], json!(["warmod"]));
        assert_eq!(body["tickrate"], json!(128));
        assert_eq!(body["gamemode"], json!("Competitive"));
        assert_eq!(body["rcon"], json!("rconrconrconrcon"));
    }

    #[test]
    fn body_with_join_password_has_enabled_block() {
        let mut spec = ServerSpec::new("scrim");
        spec.password = Some("letmein".into());
        spec.tickrate = 64;
        spec.map = "de_inferno".into();
        let body = serde_json::to_value(CreateServerRequest::from_spec(&spec, "x".repeat(16))).unwrap();

        assert_eq!(body["password"], json!({"enabled": true, "value": "letmein"}));
        assert_eq!(body["tickrate"], json!(64));
        assert_eq!(body["map"]["id"], json!("de_inferno"));
    }
}
