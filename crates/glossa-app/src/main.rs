use anyhow::Context;
use clap::Parser;
use glossa_config::Config;
use glossa_io::DictionaryClient;
use tokio::io::BufReader;
use tokio::signal;
use tracing_subscriber::EnvFilter;

mod cli;
mod repl;
mod server;

use self::cli::{Cli, Command, language_or_default};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.json);

    let mut config = Config::new();

    match cli.command {
        Command::Serve(args) => {
            args.apply(&mut config);

            // Shutdown future (Ctrl+C)
            let shutdown = async {
                if let Err(e) = signal::ctrl_c().await {
                    tracing::error!("failed to listen for ctrl+c: {e}");
                    std::future::pending::<()>().await;
                }
            };

            server::run(config, shutdown).await
        }
        Command::Lookup(args) => {
            args.addr.apply(&mut config);
            let language = language_or_default(args.language.as_deref(), &config);

            let mut client = connect(&config).await?;
            repl::lookup(&mut client, &args.word, &language).await;
            client.close().await
        }
        Command::Define(args) => {
            args.addr.apply(&mut config);
            let language = language_or_default(args.language.as_deref(), &config);

            let mut client = connect(&config).await?;
            repl::define(&mut client, &args.word, &language, &args.definition).await;
            client.close().await
        }
        Command::Repl(args) => {
            args.addr.apply(&mut config);
            let language = language_or_default(args.language.as_deref(), &config);

            let mut client = connect(&config).await?;
            let stdin = BufReader::new(tokio::io::stdin());
            let count = repl::run(&mut client, stdin, &language).await?;
            tracing::debug!("Looked up {count} word(s)");
            client.close().await
        }
    }
}

async fn connect(config: &Config) -> anyhow::Result<DictionaryClient> {
    let url = config.server.ws_url();
    DictionaryClient::connect(&url)
        .await
        .with_context(|| format!("Is the dictionary server running at {url}?"))
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
