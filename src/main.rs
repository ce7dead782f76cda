//! SVG Repo Downloader - CLI entry point.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use svgrepo_downloader::{
    api::SvgRepoClient,
    catalog::SourceUrl,
    cli::{Args, Command},
    config::{
        collection_slug, sanitize_directory_input, validate_config, validate_source_url, Config,
    },
    download::{list_collections, PaginationDriver, RunOutcome},
    error::{exit_codes, Error, Result},
    output::{
        print_banner, print_error, print_info, print_run_summary, print_success, print_warning,
        Confirm, Confirmation, FixedConfirm, TerminalConfirm, TerminalProgress,
    },
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_)
                | Error::ConfigValidation { .. }
                | Error::InvalidSource(_)
                | Error::TomlParse(_)
                | Error::UrlParse(_) => ExitCode::from(exit_codes::CONFIG_ERROR as u8),
                Error::Fetch { .. } | Error::Http(_) => {
                    ExitCode::from(exit_codes::NETWORK_ERROR as u8)
                }
                Error::PageCount { .. } | Error::Selector { .. } => {
                    ExitCode::from(exit_codes::PARSE_ERROR as u8)
                }
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging; stdout is kept for listings
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    // Load configuration
    let mut config = Config::load_or_default(args.config.as_deref())?;
    args.merge_into_config(&mut config);
    validate_config(&config)?;

    let client = SvgRepoClient::new(&config.http)?;
    let progress = TerminalProgress::new(config.options.show_progress);
    let driver = PaginationDriver::new(&client, &config.options, &progress);

    match args.command.clone() {
        Command::Download {
            url,
            directory,
            yes,
        } => {
            print_banner();
            download(&driver, &url, directory.as_deref(), yes).await
        }
        Command::List { url, label } => {
            validate_source_url(&url)?;
            let source = SourceUrl::parse(&url)?;
            let state = driver.list(&source, label.as_deref(), &mut io::stdout()).await?;
            print_info(&format!("{} icons listed", state.listed));
            Ok(())
        }
        Command::Collections { category, icons } => {
            collections(&client, &driver, &config, &category, icons).await
        }
    }
}

/// Confirm the destination, then download every icon of `url`.
async fn download(
    driver: &PaginationDriver<'_>,
    url: &str,
    directory: Option<&str>,
    yes: bool,
) -> Result<()> {
    validate_source_url(url)?;
    let source = SourceUrl::parse(url)?;

    let slug = collection_slug(url)
        .ok_or_else(|| Error::InvalidSource(format!("No collection name in '{}'", url)))?;
    let output_dir = match sanitize_directory_input(directory.unwrap_or(""))? {
        Some(dir) => dir,
        None => PathBuf::from(&slug),
    };

    let confirm: Box<dyn Confirm> = if yes {
        Box::new(FixedConfirm(Confirmation::Yes))
    } else {
        Box::new(TerminalConfirm::new())
    };

    let message = format!(
        "The {} '{}' will be downloaded to '{}'. Is it correct?",
        source.mode(),
        slug,
        output_dir.display()
    );
    if confirm.confirm(&message) != Confirmation::Yes {
        print_warning("Aborted!");
        return Ok(());
    }

    match driver.download(&source, &output_dir, confirm.as_ref()).await? {
        RunOutcome::Completed(state) => {
            print_run_summary(&state);
            print_success("Done!");
        }
        RunOutcome::Aborted => print_warning("Aborted!"),
    }

    Ok(())
}

/// List the collections of a category, optionally with their icons.
async fn collections(
    client: &SvgRepoClient,
    driver: &PaginationDriver<'_>,
    config: &Config,
    category: &str,
    icons: bool,
) -> Result<()> {
    let base_url = &config.options.base_url;

    if !icons {
        let found = list_collections(client, base_url, category, &mut io::stdout()).await?;
        print_info(&format!("{} collections listed", found.len()));
        return Ok(());
    }

    let found = list_collections(client, base_url, category, &mut io::sink()).await?;
    for collection in &found {
        let source = SourceUrl::parse(collection)?;
        let label = collection_slug(collection).unwrap_or_default();
        if let Err(e) = driver.list(&source, Some(&label), &mut io::stdout()).await {
            print_warning(&format!("Failed to list {}: {}", collection, e));
        }
    }

    Ok(())
}
