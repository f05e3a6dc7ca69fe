use clap::Parser;
use dotenvy::dotenv;

use gatewarden::cli::{Cli, Command, provision_user, seed_fixture_users};
use gatewarden::logging::init_tracing;
use gatewarden::router::init_router;
use gatewarden::state::init_app_state;

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        None | Some(Command::Serve) => serve().await,
        Some(Command::Provision {
            username,
            password,
            roles,
        }) => {
            let state = init_app_state().await;
            if let Err(e) = provision_user(state.store.as_ref(), &username, &password, &roles).await
            {
                eprintln!("❌ Error provisioning user: {}", e);
                std::process::exit(1);
            }
        }
        Some(Command::Seed) => {
            let state = init_app_state().await;
            if let Err(e) = seed_fixture_users(state.store.as_ref()).await {
                eprintln!("❌ Error seeding users: {}", e);
                std::process::exit(1);
            }
        }
    }
}

async fn serve() {
    let state = init_app_state().await;
    let addr = state.gateway_config.addr.clone();
    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind listen address");
    println!("🚀 Gateway listening on http://{}", addr);
    axum::serve(listener, app).await.expect("Server error");
}
