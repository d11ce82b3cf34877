use clap::{Parser, Subcommand};
use serde_json::{json, Map, Value};

#[derive(Parser)]
#[command(name = "vault-cli")]
#[command(about = "Management CLI for the movie-vault proxy", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check service health
    Health,
    /// Forward a metadata query through the proxy
    Tmdb {
        /// Upstream endpoint, e.g. "movie/popular"
        endpoint: String,
        /// Query parameters as key=value pairs
        #[arg(short, long)]
        param: Vec<String>,
    },
    /// Check a guest access code
    GuestCode { code: String },
    /// Check an account-creation code
    SecretCode { code: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Health => {
            let res = client.get(format!("{}/health", cli.url)).send().await?;
            print_response(res).await?;
        }
        Commands::Tmdb { endpoint, param } => {
            let mut params = Map::new();
            for pair in &param {
                match pair.split_once('=') {
                    Some((key, value)) => {
                        params.insert(key.to_string(), Value::String(value.to_string()));
                    }
                    None => {
                        eprintln!("Ignoring malformed parameter '{}' (want key=value)", pair);
                    }
                }
            }
            let res = client
                .post(format!("{}/api/tmdb-proxy", cli.url))
                .json(&json!({ "endpoint": endpoint, "params": params }))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::GuestCode { code } => {
            let res = client
                .post(format!("{}/api/verify-guest-code", cli.url))
                .json(&json!({ "code": code }))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::SecretCode { code } => {
            let res = client
                .post(format!("{}/api/verify-secret-code", cli.url))
                .json(&json!({ "code": code }))
                .send()
                .await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: proxy returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
