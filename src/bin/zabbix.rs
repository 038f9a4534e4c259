use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use tracing::info;
use zabbix_rs::ZabbixApiClient;

#[derive(Parser)]
#[command(name = "zabbix")]
#[command(about = "Zabbix API query CLI", long_about = None)]
struct Cli {
    /// API endpoint, e.g. https://zabbix.example.com/api_jsonrpc.php
    /// (falls back to ZABBIX_URL)
    #[arg(long)]
    url: Option<String>,
    /// API username (falls back to ZABBIX_USER)
    #[arg(long)]
    user: Option<String>,
    /// API password (falls back to ZABBIX_PASSWORD)
    #[arg(long)]
    password: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List hosts visible to the account
    Hosts,
    /// Fetch recent history for the given item ids
    History {
        #[arg(required = true)]
        item_ids: Vec<String>,
        /// Maximum number of samples to return
        #[arg(short, long, default_value = "25")]
        limit: u32,
    },
    /// Invoke an arbitrary API method with raw JSON params
    Call {
        method: String,
        /// Params as a JSON document (default: empty object)
        #[arg(default_value = "{}")]
        params: String,
    },
}

fn credential(flag: Option<String>, env_key: &str) -> Result<String> {
    match flag {
        Some(value) => Ok(value),
        None => std::env::var(env_key)
            .with_context(|| format!("missing credential: pass a flag or set {env_key}")),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let url = credential(cli.url, "ZABBIX_URL")?;
    let user = credential(cli.user, "ZABBIX_USER")?;
    let password = credential(cli.password, "ZABBIX_PASSWORD")?;

    let mut client = ZabbixApiClient::new(url, user, password)?;
    client.login().await?;
    info!("logged in to {}", client.url());

    let result = run(&client, cli.command).await;

    // best-effort: the session result matters more than the logout ack
    if let Err(err) = client.logout().await {
        info!("logout failed: {err}");
    }

    let response = result?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

async fn run(client: &ZabbixApiClient, command: Commands) -> Result<Value> {
    let value = match command {
        Commands::Hosts => {
            client
                .call(
                    "host.get",
                    json!({ "output": ["hostid", "host", "name", "status"] }),
                )
                .await?
        }
        Commands::History { item_ids, limit } => {
            client
                .call(
                    "history.get",
                    json!({
                        "output": "extend",
                        "itemids": item_ids,
                        "sortfield": "clock",
                        "sortorder": "DESC",
                        "limit": limit,
                    }),
                )
                .await?
        }
        Commands::Call { method, params } => {
            let params: Value =
                serde_json::from_str(&params).context("params is not valid JSON")?;
            client.call(&method, params).await?
        }
    };
    Ok(value)
}
