#[tokio::main]
async fn main() -> conectat::error::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("conectat=info"))
        .init();
    log::info!("Starting ConectaT chat bot");

    match conectat::run().await {
        Ok(()) => {
            log::info!("Chat bot shut down successfully");
            Ok(())
        }
        Err(e) => {
            log::error!("Chat bot encountered an error: {}", e);
            eprintln!("{}", e.user_message());
            Err(e)
        }
    }
}
