use track_preview_proxy::modules::{self, logger};

#[tokio::main]
async fn main() {
    // Initialize logger
    logger::init_logger();

    // Credentials are checked before anything is bound
    let config = match modules::load_app_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = track_preview_proxy::run(config).await {
        tracing::error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
