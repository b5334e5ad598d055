//! Xray Users CLI
//!
//! Thin command-line front end over `domain_xray_users`. Results are printed
//! to stdout as JSON; logs go to stderr.

use clap::{Parser, Subcommand};
use core_config::tracing::{init_tracing, install_color_eyre};
use core_config::{Environment, FromEnv, XrayApiConfig};
use domain_xray_users::{
    CreateUser, HandlerTransport, IdentifierPolicy, RemoveUser, UserFilter, UserManager,
    XrayServer,
};
use eyre::Result;
use tracing::debug;

#[derive(Debug, Parser)]
#[command(name = "xray-users")]
#[command(about = "Manage VLESS users on a running Xray inbound")]
struct Cli {
    /// Xray API host (overrides XRAY_API_HOST)
    #[arg(long, global = true)]
    host: Option<String>,

    /// Xray API port (overrides XRAY_API_PORT)
    #[arg(long, global = true)]
    port: Option<u16>,

    /// Inbound tag (overrides XRAY_INBOUND_TAG)
    #[arg(short, long, global = true)]
    tag: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Add a user to the inbound
    Add {
        email: String,

        /// UUID v4 to use; generated when omitted
        #[arg(long)]
        uuid: Option<String>,

        /// Fail instead of regenerating when --uuid is not a UUID v4
        #[arg(long)]
        strict_uuid: bool,
    },

    /// List users of the inbound
    List {
        /// Only list this user
        #[arg(long)]
        email: Option<String>,
    },

    /// Remove a user from the inbound
    Remove { email: String },
}

impl Cli {
    fn api_config(&self, mut config: XrayApiConfig) -> XrayApiConfig {
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(tag) = &self.tag {
            config.inbound_tag = tag.clone();
        }
        config
    }
}

/// Run one command against `users`, returning what to print on stdout
async fn execute<T>(command: Commands, users: &UserManager<T>) -> Result<Option<String>>
where
    T: HandlerTransport + Clone,
{
    match command {
        Commands::Add {
            email,
            uuid,
            strict_uuid,
        } => {
            let policy = if strict_uuid {
                IdentifierPolicy::Reject
            } else {
                IdentifierPolicy::Regenerate
            };
            let users = users.clone().with_identifier_policy(policy);

            let mut input = CreateUser::new(email);
            if let Some(uuid) = uuid {
                input = input.with_uuid(uuid);
            }

            let created = users.create(input).await?;
            Ok(Some(serde_json::to_string_pretty(&created)?))
        }

        Commands::List { email } => {
            let mut filter = UserFilter::new();
            if let Some(email) = email {
                filter = filter.with_email(email);
            }

            let listing = users.get(filter).await?;
            Ok(Some(serde_json::to_string_pretty(&listing)?))
        }

        Commands::Remove { email } => {
            users.remove(RemoveUser::new(email)).await?;
            Ok(None)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    install_color_eyre();

    let environment = Environment::from_env();
    init_tracing(&environment);

    let cli = Cli::parse();
    let config = cli.api_config(XrayApiConfig::from_env()?);
    debug!(addr = %config.address(), tag = %config.inbound_tag, "Using Xray API");

    let server = XrayServer::connect_lazy(&config)?;

    if let Some(output) = execute(cli.command, server.users()).await? {
        println!("{output}");
    }

    Ok(())
}
