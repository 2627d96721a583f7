use anyhow::bail;
use charset_rs::CharsetProvider;
use charset_rs::provider::CatalogOutcome;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "charset")]
#[command(about = "Charset name resolution tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a charset name and print its identity triple
    Resolve {
        name: String,
    },
    /// Print the usable aliases of a charset name
    Aliases {
        name: String,
    },
    /// List charset names known to the alias table
    List {
        /// Only names that resolve to a constructible converter
        #[arg(long)]
        canonical: bool,
        /// Show per-entry outcomes, including skipped entries
        #[arg(long)]
        outcomes: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let provider = CharsetProvider::new();

    match cli.command {
        Command::Resolve { name } => {
            let Some(converter) = provider.resolve(&name) else {
                bail!("no converter available for {}", name);
            };
            println!("internal: {}", converter.internal_name());
            match converter.host_name() {
                Some(host) => println!("host:     {}", host),
                None => println!("host:     (none)"),
            }
            let aliases: Vec<&str> = converter.aliases().collect();
            println!("aliases:  {}", aliases.join(", "));
        }
        Command::Aliases { name } => {
            let Some(converter) = provider.resolve(&name) else {
                bail!("no converter available for {}", name);
            };
            for alias in converter.aliases() {
                println!("{}", alias);
            }
        }
        Command::List { canonical, outcomes } => {
            if outcomes {
                for entry in provider.catalog_outcomes() {
                    match entry.outcome {
                        CatalogOutcome::Resolved { host_name } => {
                            println!("{} -> {}", entry.name, host_name)
                        }
                        CatalogOutcome::Skipped { reason } => {
                            println!("{} (skipped: {})", entry.name, reason)
                        }
                    }
                }
            } else if canonical {
                for name in provider.catalog_canonical_names() {
                    println!("{}", name);
                }
            } else {
                for name in provider.catalog_all_names()? {
                    println!("{}", name);
                }
            }
        }
    }

    Ok(())
}
