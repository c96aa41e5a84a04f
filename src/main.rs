use anyhow::Result;

use instamuse::{
    config::Config,
    generator::Generator,
    logger,
    server,
    web_pages::AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    logger::init(config.log_level)?;

    let generator = Generator::new(&config.gemini)?;
    if generator.is_live() {
        log::info!("Gemini model {} enabled", config.gemini.model);
    } else {
        log::info!("GEMINI_API_KEY not set, serving mock suggestions");
    }

    let router = server::build_router(AppState::new(generator), &config.static_dir);
    let bind_address = config.bind_address();
    let tcp_listener = tokio::net::TcpListener::bind(&bind_address).await?;
    log::info!("InstaMuse listening on http://{bind_address}");

    axum::serve(tcp_listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;
    Ok(())
}
