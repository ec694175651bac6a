use code_requirements::{Config, version, web};
use log::{error, info};

fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    // Initialize logger
    if std::env::var_os("RUST_LOG").is_none() {
        unsafe {
            std::env::set_var("RUST_LOG", "info");
        }
    }
    env_logger::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    info!("Code → Requirements v{}", version());
    info!("Model: {} at {}", config.model, config.base_url);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(web::serve(config))
}
