use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::Result;

use userstats::config::{self, Config, LoggingConfig};
use userstats::format::{OutputFormat, render};
use userstats::input::InputReader;
use userstats::model::User;
use userstats::provider::{RandomUserClient, UserSource};
use userstats::server::{self, AppState};
use userstats::stats::StatsEngine;

/// Summary statistics over randomly generated user profiles
#[derive(Parser, Debug)]
#[command(version, about = "Summary statistics over Random User Generator data")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch users from the generator and print their statistics
    Fetch {
        /// Number of users to request (defaults to provider.default_users)
        #[arg(short, long)]
        users: Option<u32>,

        /// Report format (defaults to output.format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Print statistics for a results document
    Submit {
        /// Input JSON file (if not provided, reads from stdin)
        input: Option<PathBuf>,

        /// Report format (defaults to output.format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Run the HTTP service
    Serve {
        /// Address to bind (defaults to server.bind_address)
        #[arg(long)]
        bind: Option<String>,

        /// Port to listen on (defaults to server.port)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    let config_result = config::load_config();
    init_logging(&config_result.config.logging);

    if let Some(warning) = &config_result.warning {
        log::warn!("{}", warning);
        eprintln!("Warning: {} (using defaults)", warning);
    }

    let config = config_result.config;

    match args.command {
        Command::Fetch { users, format } => {
            let client = RandomUserClient::from_config(&config.provider)?;
            let count = users.unwrap_or(config.provider.default_users);
            let users = client.fetch_users(count).await?;
            print_report(&users, format.unwrap_or(config.output.format))?;
        }
        Command::Submit { input, format } => {
            let users = InputReader::read_users(input.as_deref())?;
            print_report(&users, format.unwrap_or(config.output.format))?;
        }
        Command::Serve { bind, port } => {
            serve(config, bind, port).await?;
        }
    }

    Ok(())
}

/// Logs to stderr; `RUST_LOG` takes precedence over the configured level
fn init_logging(logging: &LoggingConfig) {
    let env = env_logger::Env::default().default_filter_or(logging.level.as_str());

    env_logger::Builder::from_env(env)
        .target(env_logger::Target::Stderr)
        .format(|buf, record| {
            let datetime = chrono::Local::now();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();
}

fn print_report(users: &[User], format: OutputFormat) -> Result<()> {
    let report = StatsEngine::with_defaults().get_statistics(users);
    let output = render(&report, format)?;
    println!("{}", output.trim_end());
    Ok(())
}

async fn serve(mut config: Config, bind: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(bind) = bind {
        config.server.bind_address = bind;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    let client = RandomUserClient::from_config(&config.provider)?;
    let state = AppState::new(client, config.provider.default_users)
        .with_max_body_bytes(config.server.max_body_bytes);
    server::run(&config.server, state).await?;
    Ok(())
}
