//! secnav CLI tool
//!
//! Drives a section activator over an in-memory page file (TOML or JSON).
//!
//! ## Commands
//!
//! - `activate <page> <id>...`: activate each id in turn and print the final state
//! - `click <page> <index>...`: click nav items by capture index and print the final state
//! - `state <page>`: print the captured state without changing it
//! - `serve [web-root]`: serve a directory over HTTP (requires the `service` feature)
//!
//! State is printed as JSON. With `--write`, the updated page replaces its file atomically.

use clap::{Parser, Subcommand};
use section_nav::{
    activator::{ClickBindings, SectionActivator},
    config::{NavConfig, TomlConfigProvider},
    static_page::{StaticElement, StaticPage},
    NavError,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "secnav")]
#[command(author, version, about = "Toggle the active section of a page from its navigation items", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct PageArgs {
    /// Page file (.toml, or .json)
    page: PathBuf,

    /// Navigation config file (TOML); defaults apply when absent
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the updated page back to its file
    #[arg(short, long)]
    write: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Activate section ids in order
    Activate {
        #[command(flatten)]
        page: PageArgs,

        /// Section ids to activate, applied left to right
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Click nav items by their index in capture order
    Click {
        #[command(flatten)]
        page: PageArgs,

        /// Nav item indices, applied left to right
        #[arg(required = true)]
        indices: Vec<usize>,
    },

    /// Print the captured state
    State {
        #[command(flatten)]
        page: PageArgs,
    },

    /// Serve a directory over HTTP until Ctrl-C
    #[cfg(feature = "service")]
    Serve {
        /// Directory to serve
        #[arg(default_value = ".")]
        web_root: PathBuf,

        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: std::net::IpAddr,

        /// Port to bind
        #[arg(long, default_value_t = section_nav::serve::DEFAULT_PORT)]
        port: u16,
    },
}

fn open(
    args: &PageArgs,
) -> Result<(StaticPage, SectionActivator<StaticElement>, ClickBindings), NavError> {
    let config = match &args.config {
        Some(path) => TomlConfigProvider::new(path.clone()).load()?,
        None => NavConfig::default(),
    };
    let page = StaticPage::load(&args.page)?;
    let (activator, bindings) = SectionActivator::install(&page, &config)?;
    Ok((page, activator, bindings))
}

fn finish(
    args: &PageArgs,
    page: &StaticPage,
    activator: &SectionActivator<StaticElement>,
) -> Result<(), NavError> {
    if args.write {
        page.save(&args.page)?;
        tracing::info!("Wrote {}", args.page.display());
    }
    println!("{}", serde_json::to_string_pretty(&activator.state())?);
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Activate { page: args, ids } => {
            let (page, activator, _) = open(&args)?;
            for id in &ids {
                activator.activate(id);
                if activator.snapshot().section(id).is_none() {
                    tracing::info!("No section with id '{}'; nothing is active", id);
                }
            }
            finish(&args, &page, &activator)?;
            Ok(())
        }

        Commands::Click {
            page: args,
            indices,
        } => {
            let (page, activator, bindings) = open(&args)?;
            for index in indices {
                if !bindings.dispatch(index, &activator) {
                    tracing::warn!(
                        "No nav item at index {} ({} captured)",
                        index,
                        bindings.len()
                    );
                }
            }
            finish(&args, &page, &activator)?;
            Ok(())
        }

        Commands::State { page: args } => {
            let (_, activator, _) = open(&args)?;
            println!("{}", serde_json::to_string_pretty(&activator.state())?);
            Ok(())
        }

        #[cfg(feature = "service")]
        Commands::Serve {
            web_root,
            host,
            port,
        } => {
            use section_nav::serve::{ServeConfig, StaticServer};

            let server = StaticServer::new(ServeConfig {
                web_root,
                host,
                port,
            })?;

            let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
            let mut shutdown_tx = Some(shutdown_tx);
            ctrlc::set_handler(move || {
                if let Some(tx) = shutdown_tx.take() {
                    let _ = tx.send(());
                }
            })?;

            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?;
            runtime.block_on(server.serve(async {
                let _ = shutdown_rx.await;
            }))?;
            Ok(())
        }
    }
}
