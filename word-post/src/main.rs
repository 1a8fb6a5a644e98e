//! word-post - post one unused dictionary entry to Twitter

use std::path::PathBuf;

use clap::Parser;
use tracing::debug;

use libwordcast::config::{self, Config};
use libwordcast::platforms::twitter::{TwitterCredentials, TwitterPlatform};
use libwordcast::platforms::Platform;
use libwordcast::{lexicon, logging, Result, UsageStore, WordPoster};

#[derive(Parser, Debug)]
#[command(name = "word-post")]
#[command(about = "Post an unused dictionary entry to Twitter", long_about = None)]
struct Cli {
    /// Consumer key for the posting account
    #[arg(long, env = "WORDCAST_CONSUMER_KEY")]
    consumer_key: String,

    /// Consumer secret for the posting account
    #[arg(long, env = "WORDCAST_CONSUMER_SECRET")]
    consumer_secret: String,

    /// Access token for the posting account
    #[arg(long, env = "WORDCAST_ACCESS_TOKEN")]
    access_token: String,

    /// Access token secret for the posting account
    #[arg(long, env = "WORDCAST_ACCESS_SECRET")]
    access_secret: String,

    /// Config file (defaults to the XDG location)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Dictionary file, overriding the configured path
    #[arg(long)]
    dictionary: Option<String>,

    /// Usage store, overriding the configured path
    #[arg(long)]
    database: Option<String>,

    /// Output format (text or json)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    if let Some(path) = &cli.config {
        return Config::load_from_path(path);
    }

    let default_path = config::resolve_config_path()?;
    if default_path.exists() {
        Config::load_from_path(&default_path)
    } else {
        debug!("no config file found, using built-in defaults");
        Ok(Config::default_config())
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;

    let dictionary_path = cli
        .dictionary
        .clone()
        .unwrap_or_else(|| config.dictionary.path.clone());
    let database_path = cli
        .database
        .clone()
        .unwrap_or_else(|| config.database.path.clone());

    // Verify credentials up front so a bad token never consumes an entry.
    let credentials = TwitterCredentials {
        consumer_key: cli.consumer_key.clone(),
        consumer_secret: cli.consumer_secret.clone(),
        access_token: cli.access_token.clone(),
        access_secret: cli.access_secret.clone(),
    };
    let mut platform =
        TwitterPlatform::new(credentials, config.twitter.account_name.clone());
    platform.authenticate().await?;

    let store = UsageStore::open(&database_path).await?;
    if !store.is_initialized().await? {
        let entries = lexicon::load(&dictionary_path)?;
        store.initialize(&entries).await?;
    }

    let entry = store.select_unused().await?;

    let poster = WordPoster::new(Box::new(platform), config.twitter.geotag);
    let post_id = poster.post_entry(&entry.term, &entry.definition).await?;

    print_result(&cli.format, &entry.term, &post_id);
    Ok(())
}

fn print_result(format: &str, term: &str, post_id: &str) {
    if format == "json" {
        let output = serde_json::json!({
            "term": term,
            "post_id": post_id,
        });
        println!("{}", output);
    } else {
        println!("Posted {} ({})", term, post_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_requires_all_four_credentials() {
        let result = Cli::try_parse_from([
            "word-post",
            "--consumer-key",
            "ck",
            "--consumer-secret",
            "cs",
            "--access-token",
            "at",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parses_four_credentials() {
        let cli = Cli::try_parse_from([
            "word-post",
            "--consumer-key",
            "ck",
            "--consumer-secret",
            "cs",
            "--access-token",
            "at",
            "--access-secret",
            "as",
        ])
        .unwrap();

        assert_eq!(cli.consumer_key, "ck");
        assert_eq!(cli.consumer_secret, "cs");
        assert_eq!(cli.access_token, "at");
        assert_eq!(cli.access_secret, "as");
        assert_eq!(cli.format, "text");
        assert!(!cli.verbose);
    }
}
