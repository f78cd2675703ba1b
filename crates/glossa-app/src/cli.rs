use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use glossa_config::Config;

#[derive(Parser, Debug)]
#[command(name = "glossa", version, about = "Word dictionary server and client")]
pub struct Cli {
    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the dictionary over WebSocket
    Serve(ServeArgs),
    /// Look up a single word
    Lookup(LookupArgs),
    /// Add a word to the dictionary
    Define(DefineArgs),
    /// Look up words interactively until an empty line
    Repl(ReplArgs),
}

/// Server address, overriding the environment
#[derive(Args, Debug, Default)]
pub struct AddrArgs {
    #[arg(long)]
    pub host: Option<String>,
    #[arg(long)]
    pub port: Option<u16>,
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    #[command(flatten)]
    pub addr: AddrArgs,
    /// Path of the dictionary JSON file
    #[arg(long)]
    pub dictionary: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct LookupArgs {
    pub word: String,
    /// ISO 639-1 language code
    #[arg(short, long)]
    pub language: Option<String>,
    #[command(flatten)]
    pub addr: AddrArgs,
}

#[derive(Args, Debug)]
pub struct DefineArgs {
    pub word: String,
    pub definition: String,
    /// ISO 639-1 language code
    #[arg(short, long)]
    pub language: Option<String>,
    #[command(flatten)]
    pub addr: AddrArgs,
}

#[derive(Args, Debug)]
pub struct ReplArgs {
    /// ISO 639-1 language code
    #[arg(short, long)]
    pub language: Option<String>,
    #[command(flatten)]
    pub addr: AddrArgs,
}

impl AddrArgs {
    pub fn apply(&self, config: &mut Config) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}

impl ServeArgs {
    pub fn apply(&self, config: &mut Config) {
        self.addr.apply(config);
        if let Some(path) = &self.dictionary {
            config.store.path = path.clone();
        }
    }
}

/// Language from the command line, falling back to the configured default
pub fn language_or_default(language: Option<&str>, config: &Config) -> String {
    language
        .map(str::to_string)
        .unwrap_or_else(|| config.client.language.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_overrides_config() {
        let cli = Cli::try_parse_from([
            "glossa",
            "serve",
            "--port",
            "9100",
            "--dictionary",
            "/tmp/words.json",
        ])
        .unwrap();

        let mut config = Config::default();
        let Command::Serve(args) = cli.command else {
            panic!("Expected serve command");
        };
        args.apply(&mut config);

        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.store.path, PathBuf::from("/tmp/words.json"));
    }

    #[test]
    fn test_define_takes_word_and_definition() {
        let cli = Cli::try_parse_from(["glossa", "define", "dog", "a canine", "-l", "en", "--json"])
            .unwrap();

        assert!(cli.json);
        let Command::Define(args) = cli.command else {
            panic!("Expected define command");
        };
        assert_eq!(args.word, "dog");
        assert_eq!(args.definition, "a canine");
        assert_eq!(args.language.as_deref(), Some("en"));
    }

    #[test]
    fn test_language_falls_back_to_config() {
        let config = Config::default();

        assert_eq!(language_or_default(None, &config), "en");
        assert_eq!(language_or_default(Some("fr"), &config), "fr");
    }

    #[test]
    fn test_lookup_requires_word() {
        assert!(Cli::try_parse_from(["glossa", "lookup"]).is_err());
    }
}
