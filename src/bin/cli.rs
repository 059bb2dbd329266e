//! Veridia CLI
//!
//! Command-line client for a running Veridia API server:
//! - List, submit and inspect applications
//! - Move applications between statuses
//! - Sign in and out of the server session
//! - Generate a default config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::PathBuf;

use veridia::api::dto::{
    ApplicationListResponse, CreateApplicationRequest, LoginRequest, RegisterRequest,
    SessionResponse, UpdateStatusRequest,
};
use veridia::session::HomeStats;
use veridia::tracker::ApplicationRecord;

#[derive(Parser)]
#[command(name = "veridia-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Command-line client for the Veridia hiring API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL
    #[arg(long, default_value = "http://localhost:8090", global = true)]
    pub api_url: String,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List applications
    List {
        /// Role name or "All"
        #[arg(short, long)]
        role: Option<String>,
        /// Status name or "All"
        #[arg(short, long)]
        status: Option<String>,
        /// Search name or email
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Submit an application
    Submit {
        /// Full name
        full_name: String,
        /// Email address
        email: String,
        /// Role (Frontend Dev, Backend Dev, Data Scientist)
        #[arg(short, long)]
        role: Option<String>,
    },

    /// Show one application
    Show {
        /// Application id
        id: u32,
    },

    /// Change an application's status
    Status {
        /// Application id
        id: u32,
        /// New status (Submitted, Shortlisted, Rejected)
        status: String,
    },

    /// Sign in to the server session
    Login {
        email: String,
        #[arg(short, long, default_value = "")]
        password: String,
    },

    /// Register and sign in
    Register {
        full_name: String,
        email: String,
        #[arg(short, long)]
        role: Option<String>,
    },

    /// Show who is signed in
    Whoami,

    /// Sign out of the server session
    Logout,

    /// Show home screen figures
    Stats,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let client = Client::new();
    let api = |path: &str| format!("{}/api/v1{}", cli.api_url, path);

    match &cli.command {
        Commands::List {
            role,
            status,
            query,
        } => {
            let mut params = Vec::new();
            if let Some(role) = role {
                params.push(("role", role.as_str()));
            }
            if let Some(status) = status {
                params.push(("status", status.as_str()));
            }
            if let Some(query) = query {
                params.push(("q", query.as_str()));
            }

            let response = send(client.get(api("/applications")).query(&params), &cli).await;
            let list: ApplicationListResponse = expect_json(response, "List failed").await?;

            if cli.format == "json" {
                print_json(&list)?;
            } else if list.applications.is_empty() {
                println!("No applications match.");
            } else {
                print_table(&list.applications);
                println!();
                println!("{} application(s)", list.total);
            }
        }

        Commands::Submit {
            full_name,
            email,
            role,
        } => {
            let body = CreateApplicationRequest {
                full_name: full_name.clone(),
                email: email.clone(),
                role: role.clone(),
            };
            let response = send(client.post(api("/applications")).json(&body), &cli).await;
            let record: ApplicationRecord = expect_json(response, "Submit failed").await?;

            if cli.format == "json" {
                print_json(&record)?;
            } else {
                println!("Application submitted: #{} {} ({})", record.id, record.name, record.role);
            }
        }

        Commands::Show { id } => {
            let response = send(client.get(api(&format!("/applications/{}", id))), &cli).await;
            let record: ApplicationRecord = expect_json(response, "Lookup failed").await?;

            if cli.format == "json" {
                print_json(&record)?;
            } else {
                println!("Application #{}", record.id);
                println!("  Name:      {}", record.name);
                println!("  Email:     {}", record.email);
                println!("  Role:      {}", record.role);
                println!("  Status:    {}", record.status);
                println!("  Submitted: {}", record.submitted_on);
            }
        }

        Commands::Status { id, status } => {
            let body = UpdateStatusRequest {
                status: status.clone(),
            };
            let response = send(
                client
                    .put(api(&format!("/applications/{}/status", id)))
                    .json(&body),
                &cli,
            )
            .await;
            let record: ApplicationRecord = expect_json(response, "Status update failed").await?;

            if cli.format == "json" {
                print_json(&record)?;
            } else {
                println!("Status updated: #{} {} is now {}", record.id, record.name, record.status);
            }
        }

        Commands::Login { email, password } => {
            let body = LoginRequest {
                email: email.clone(),
                password: password.clone(),
            };
            let response = send(client.post(api("/session/login")).json(&body), &cli).await;
            let session: SessionResponse = expect_json(response, "Login failed").await?;
            print_session(&session, &cli.format)?;
        }

        Commands::Register {
            full_name,
            email,
            role,
        } => {
            let body = RegisterRequest {
                full_name: full_name.clone(),
                email: email.clone(),
                password: String::new(),
                role: role.clone(),
            };
            let response = send(client.post(api("/session/register")).json(&body), &cli).await;
            let session: SessionResponse = expect_json(response, "Registration failed").await?;
            print_session(&session, &cli.format)?;
        }

        Commands::Whoami => {
            let response = send(client.get(api("/session")), &cli).await;
            let session: SessionResponse = expect_json(response, "Session lookup failed").await?;
            print_session(&session, &cli.format)?;
        }

        Commands::Logout => {
            let response = send(client.delete(api("/session")), &cli).await;
            let session: SessionResponse = expect_json(response, "Logout failed").await?;
            print_session(&session, &cli.format)?;
        }

        Commands::Stats => {
            let response = send(client.get(api("/stats")), &cli).await;
            let stats: HomeStats = expect_json(response, "Stats failed").await?;

            if cli.format == "json" {
                print_json(&stats)?;
            } else {
                println!("Veridia Hiring");
                println!();
                println!("  Applications:      {}", stats.applications);
                println!("  Open Roles:        {}", stats.open_roles);
                println!("  Avg Time to Hire:  {} days", stats.avg_time_to_hire_days);
            }
        }

        Commands::Config { output } => {
            let config = veridia::config::generate_default_config();

            match output {
                Some(path) => {
                    // Create parent directory if needed
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(path, &config)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

/// Send a request, exiting with a hint when the server is unreachable
async fn send(request: reqwest::RequestBuilder, cli: &Cli) -> Response {
    match request.send().await {
        Ok(response) => response,
        Err(e) => {
            eprintln!("Cannot connect to Veridia API at {}", cli.api_url);
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("Make sure the Veridia API server is running:");
            eprintln!("  cargo run --bin veridia-api");
            std::process::exit(1);
        }
    }
}

/// Decode a successful response, or print the server's error and exit
async fn expect_json<T: DeserializeOwned>(response: Response, what: &str) -> anyhow::Result<T> {
    if !response.status().is_success() {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&text)
            .ok()
            .and_then(|body| body["error"]["message"].as_str().map(String::from))
            .unwrap_or(text);
        eprintln!("{} ({}): {}", what, status, message);
        std::process::exit(1);
    }

    response
        .json()
        .await
        .with_context(|| format!("{}: unexpected response body", what))
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_table(records: &[ApplicationRecord]) {
    println!(
        "{:<4} {:<20} {:<24} {:<16} {:<12} {}",
        "ID", "Name", "Email", "Role", "Status", "Submitted"
    );
    println!("{}", "-".repeat(88));

    for record in records {
        println!(
            "{:<4} {:<20} {:<24} {:<16} {:<12} {}",
            record.id,
            record.name,
            record.email,
            record.role.as_str(),
            record.status.as_str(),
            record.submitted_on
        );
    }
}

fn print_session(session: &SessionResponse, format: &str) -> anyhow::Result<()> {
    if format == "json" {
        return print_json(session);
    }

    match &session.user {
        Some(user) => {
            let kind = if user.admin { "HR admin" } else { "applicant" };
            println!("Signed in as {} <{}> ({})", user.name, user.email, kind);
        }
        None => println!("Not signed in"),
    }
    println!("Screen: {}", session.view);
    if let Some(notice) = &session.notice {
        println!("{}", notice.message);
    }
    Ok(())
}
