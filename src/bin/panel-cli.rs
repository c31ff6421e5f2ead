use clap::{Parser, Subcommand};
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::Value;

use panel_proxy::api::auth::X_APP_AUTH;

#[derive(Parser)]
#[command(name = "panel-cli")]
#[command(about = "Command-line client for the control panel proxy", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    /// Shared secret sent as x-app-auth (needed for start and vm-status).
    #[arg(short, long, default_value = "")]
    password: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Game server online flag and player counts
    McStatus,
    /// Power on the VM
    Start,
    /// VM status as reported by the provider
    VmStatus,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let mut headers = HeaderMap::new();
    headers.insert(X_APP_AUTH, HeaderValue::from_str(&cli.password)?);

    let res = match cli.command {
        Commands::McStatus => client.get(format!("{}/api/check-mc", cli.url)).send().await?,
        Commands::Start => {
            client
                .post(format!("{}/api/start", cli.url))
                .headers(headers)
                .send()
                .await?
        }
        Commands::VmStatus => {
            client
                .get(format!("{}/api/status", cli.url))
                .headers(headers)
                .send()
                .await?
        }
    };

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    if !status.is_success() {
        eprintln!("Error: panel returned status {}", status);
    }

    match serde_json::from_str::<Value>(&text) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{}", text),
    }

    if status.is_success() {
        Ok(())
    } else {
        Err(format!("request failed with status {}", status).into())
    }
}
