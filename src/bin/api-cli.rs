use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "api-cli")]
#[command(about = "Command-line client for hello-api", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Greet someone by name and nickname
    Hello {
        name: String,
        #[arg(short, long)]
        nickname: String,
    },
    /// Add two integers in [0, 100)
    Add { x: i64, y: i64 },
    /// Multiply two integers
    Multiply {
        #[arg(allow_hyphen_values = true)]
        x: i64,
        #[arg(allow_hyphen_values = true)]
        y: i64,
    },
    /// Echo a user record
    User {
        name: String,
        #[arg(long)]
        age: i64,
        #[arg(long)]
        address: String,
        /// Friend names, comma separated
        #[arg(long, value_delimiter = ',')]
        friends: Vec<String>,
    },
    /// Write an id sheet on the server
    Sheet {
        filename: String,
        /// Ids, comma separated
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        ids: Vec<i64>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let res = match cli.command {
        Commands::Hello { name, nickname } => {
            client
                .get(format!("{}/hello/{}", cli.url, name))
                .query(&[("nickname", nickname)])
                .send()
                .await?
        }
        Commands::Add { x, y } => {
            client
                .get(format!("{}/add", cli.url))
                .query(&[("x", x), ("y", y)])
                .send()
                .await?
        }
        Commands::Multiply { x, y } => {
            client
                .get(format!("{}/multiply/{}/{}", cli.url, x, y))
                .send()
                .await?
        }
        Commands::User {
            name,
            age,
            address,
            friends,
        } => {
            client
                .post(format!("{}/user", cli.url))
                .json(&json!({
                    "name": name,
                    "age": age,
                    "address": address,
                    "friend_names": friends,
                }))
                .send()
                .await?
        }
        Commands::Sheet { filename, ids } => {
            client
                .post(format!("{}/sheet", cli.url))
                .json(&json!({ "filename": filename, "ids": ids }))
                .send()
                .await?
        }
    };

    print_response(res).await
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
