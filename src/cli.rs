// src/cli.rs
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::client::DEFAULT_STATUS;
use crate::models::server::ServerSpec;

const ABOUT: &str = "A command line interface for managing your https://pacifices.cloud/ servers";

const AFTER_HELP: &str = "Example usage:
  pacifices-cloud create --name mycsgoserver --map de_dust2 --plugin warmod
  pacifices-cloud destroy --serverid abcdefgh
  pacifices-cloud list --serverid abcd-efgh-ikl --serverid abcd-efgh-mnop";

#[derive(Debug, Parser)]
#[command(name = "pacifices-cloud", version, about = ABOUT, after_help = AFTER_HELP)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a CSGO server
    Create(CreateArgs),
    /// Destroy a CSGO server
    Destroy(ServerIdArg),
    /// Restart a CSGO server
    Restart(ServerIdArg),
    /// Update a CSGO server
    Update(ServerIdArg),
    /// Lists your CSGO servers
    List(ListArgs),
    /// Send a console command to a CSGO server
    #[command(name = "command")]
    SendCommand(CommandArgs),
    /// Show the server software version of a CSGO server
    Version(ServerIdArg),
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Name of your CSGO server
    #[arg(long)]
    pub name: String,
    /// CSGO map (e.g. de_dust2)
    #[arg(long, default_value = "de_dust2")]
    pub map: String,
    /// CSGO server tickrate
    #[arg(long, value_enum, default_value_t = Tickrate::High)]
    pub tickrate: Tickrate,
    /// CSGO RCON password (defaults to a random password)
    #[arg(long)]
    pub rcon: Option<String>,
    /// CSGO server join password
    #[arg(long)]
    pub password: Option<String>,
    /// CSGO server location
    #[arg(long, value_enum, default_value_t = Location::Sydney)]
    pub location: Location,
    /// CSGO plugins, repeat for more than one
    #[arg(long = "plugin", value_enum)]
    pub plugins: Vec<Plugin>,
}

impl CreateArgs {
    pub fn into_spec(self) -> ServerSpec {
        let mut spec = ServerSpec::new(self.name);
        spec.map = self.map;
        spec.tickrate = self.tickrate.hz();
        spec.rcon_password = self.rcon;
        spec.password = self.password;
        spec.location = self.location.city().to_string();
        spec.plugins = self.plugins.iter().map(|p| p.name().to_string()).collect();
        spec
    }
}

#[derive(Debug, Args)]
pub struct ServerIdArg {
    /// ServerId of your PacificES Cloud server
    #[arg(long = "serverid")]
    pub server_id: String,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// ServerId of your PacificES Cloud server, repeat to list several
    #[arg(long = "serverid")]
    pub server_ids: Vec<String>,
    /// Only list servers in this state
    #[arg(long, default_value = DEFAULT_STATUS)]
    pub status: String,
}

#[derive(Debug, Args)]
pub struct CommandArgs {
    /// ServerId of your PacificES Cloud server
    #[arg(long = "serverid")]
    pub server_id: String,
    /// Console command to run, e.g. "mp_restartgame 1"
    #[arg(long)]
    pub command: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Tickrate {
    #[value(name = "128")]
    High,
    #[value(name = "64")]
    Low,
}

impl Tickrate {
    pub fn hz(self) -> u32 {
        match self {
            Tickrate::High => 128,
            Tickrate::Low => 64,
        }
    }
}

// Only Sydney is offered for now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Location {
    #[value(name = "Sydney")]
    Sydney,
}

impl Location {
    pub fn city(self) -> &'static str {
        match self {
            Location::Sydney => "Sydney",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Plugin {
    Warmod,
    Nadetails,
}

impl Plugin {
    pub fn name(self) -> &'static str {
        match self {
            Plugin::Warmod => "warmod",
            Plugin::Nadetails => "nadetails",
        }
    }
}
