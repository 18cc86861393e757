use bill_buddy::{
    config, controllers::bills::Bills, errors::Result, session::SessionStore,
    store::http::HttpBillStore,
};
use dotenvy::dotenv;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Seed the session with the signed-in user
    let mut session = SessionStore::new();
    let user = config::app::get_session_user();
    session.set_user(&user)?;
    info!("Session opened for {} ({})", user.email, user.user_type);

    // 4. Build the remote store client
    let base_url = config::app::get_store_base_url();
    let store = Arc::new(HttpBillStore::new(&base_url));
    info!("Using remote store at {base_url}");

    // 5. Fetch and render the bill listing
    let bills = Bills::new(store);
    let markup = bills.render_listing().await;
    println!("{markup}");

    Ok(())
}
