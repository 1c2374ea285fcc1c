// src/handlers/servers.rs
use log::debug;
use serde_json::Value;

use crate::cli::Command;
use crate::client::ServerClient;
use crate::error::ClientError;

/// Maps a parsed subcommand onto the matching client call.
pub async fn dispatch(client: &ServerClient, command: Command) -> Result<Value, ClientError> {
    match command {
        Command::Create(args) => {
            let spec = args.into_spec();
            client.create(&spec).await
        }
        Command::Destroy(arg) => client.destroy(&arg.server_id).await,
        Command::Restart(arg) => client.restart(&arg.server_id).await,
        Command::Update(arg) => client.update(&arg.server_id).await,
        Command::List(args) => {
            debug!("Listing {} servers", args.status);
            client.retrieve(Some(args.server_ids.as_slice()), &args.status).await
        }
        Command::SendCommand(args) => client.send_command(&args.server_id, &args.command).await,
        Command::Version(arg) => client.version(&arg.server_id).await,
    }
}

/// Two-space indented JSON, as printed to stdout.
pub fn render(result: &Value) -> Result<String, ClientError> {
    serde_json::to_string_pretty(result).map_err(ClientError::Render)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn render_uses_two_space_indent() {
        let out = render(&json!({"success": true, "result": [1]})).unwrap();
        assert_eq!(out, "{\n  \"success\": true,\n  \"result\": [\n    1\n  ]\n}");
    }

    #[test]
    fn render_errors_are_not_reported_as_bad_responses() {
        let cause = serde_json::from_str::<Value>("not json").unwrap_err();
        let message = ClientError::Render(cause).to_string();
        assert!(message.starts_with("Failed to render response"));
        assert!(!message.contains("API response"));
    }
}
