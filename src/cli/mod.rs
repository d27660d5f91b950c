// CLI module for running the server and operating on the items database

pub mod items;
pub mod migrate;

use clap::{Parser, Subcommand};

use crate::app_data::AppData;

/// Contact items CLI
#[derive(Parser, Debug)]
#[command(name = "contact-items")]
#[command(about = "Contact info and items REST API", long_about = None)]
pub struct Cli {
    /// Defaults to `serve` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Run the HTTP server
    Serve,

    /// Apply pending database migrations and exit
    Migrate,

    /// Item management commands
    #[command(subcommand)]
    Items(ItemCommands),
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum ItemCommands {
    /// Print every stored item
    List,

    /// Validate and store a new item
    Add {
        /// Name of the item (1-100 characters)
        #[arg(long)]
        name: String,

        /// Optional description of the item
        #[arg(long)]
        description: Option<String>,
    },
}

impl Cli {
    /// The subcommand to run, falling back to `serve`
    pub fn command(&self) -> &Commands {
        self.command.as_ref().unwrap_or(&Commands::Serve)
    }
}

/// Execute a non-server CLI command
///
/// `serve` is handled by the binary since it owns the listener.
///
/// # Returns
/// * `Ok(())` - Command executed successfully
/// * `Err(...)` - Command execution failed
pub async fn execute_command(
    command: &Commands,
    app_data: &AppData,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Serve => {
            tracing::warn!("serve is not a one-shot command; nothing to execute");
        }
        Commands::Migrate => {
            migrate::report_migrations(&app_data.db).await?;
        }
        Commands::Items(ItemCommands::List) => {
            items::list_items(&app_data.item_store).await?;
        }
        Commands::Items(ItemCommands::Add { name, description }) => {
            items::add_item(&app_data.item_store, name, description.clone()).await?;
        }
    }

    Ok(())
}
