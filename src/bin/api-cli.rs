use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "api-cli")]
#[command(about = "Command-line client for the serverless API demo", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the endpoint catalog
    Index,
    /// Get a greeting
    Hello {
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Check service health
    Status,
    /// Get the current time, optionally in an IANA timezone
    Time {
        #[arg(short, long)]
        timezone: Option<String>,
    },
    /// List users, or look one up by id or role
    Users {
        #[arg(long)]
        id: Option<u32>,
        #[arg(long)]
        role: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let request = match cli.command {
        Commands::Index => client.get(format!("{}/api", base)),
        Commands::Hello { name } => client
            .get(format!("{}/api/hello", base))
            .query(&[("name", name)]),
        Commands::Status => client.get(format!("{}/api/status", base)),
        Commands::Time { timezone } => client
            .get(format!("{}/api/time", base))
            .query(&[("timezone", timezone)]),
        Commands::Users { id, role } => client
            .get(format!("{}/api/users", base))
            .query(&[("id", id.map(|i| i.to_string())), ("role", role)]),
    };

    print_response(request.send().await?).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let json: Value = res.json().await?;

    if status.is_success() {
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        eprintln!("Error: API returned status {}", status);
        eprintln!("{}", serde_json::to_string_pretty(&json)?);
    }
    Ok(())
}
