use std::sync::Arc;

use clap::Parser;
use contact_items_backend::api::build_routes;
use contact_items_backend::app_data::AppData;
use contact_items_backend::cli::{Cli, Commands, execute_command};
use contact_items_backend::config::{BootstrapSettings, init_database, init_logging, migrate_database};
use poem::{listener::TcpListener, middleware::Tracing, EndpointExt, Server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging()?;

    let cli = Cli::parse();

    let settings = BootstrapSettings::from_env()?;
    tracing::debug!("Loaded bootstrap settings: {:?}", settings);

    let db = init_database(&settings).await?;
    migrate_database(&db).await?;
    tracing::info!("Database ready");

    let app_data = Arc::new(AppData::init(db));

    match cli.command() {
        Commands::Serve => serve(app_data, &settings).await?,
        command => execute_command(command, &app_data).await?,
    }

    Ok(())
}

async fn serve(app_data: Arc<AppData>, settings: &BootstrapSettings) -> Result<(), std::io::Error> {
    let app = build_routes(app_data, settings.api_server_url()).with(Tracing);

    let address = settings.server_address();
    tracing::info!("Starting server on http://{}", address);
    tracing::info!("Swagger UI available at /swagger");
    tracing::info!("API endpoints available at {}", settings.api_server_url());

    Server::new(TcpListener::bind(address))
        .run(app)
        .await
}
