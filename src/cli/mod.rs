//! CLI commands: serving the gateway and operator-facing provisioning.
//!
//! Provisioning happens before traffic begins; there is no runtime
//! self-service registration. Duplicate-user failures are reported to
//! the operator and never surface in end-user responses.

use clap::{Parser, Subcommand};

use crate::store::CredentialStore;
use crate::utils::errors::AuthError;

#[derive(Parser, Debug)]
#[command(name = "gatewarden", about = "HTTP Basic authentication gateway")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the gateway (default when no command is given)
    Serve,
    /// Provision a user account into the credential store
    Provision {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        /// Comma-separated role names, e.g. `USER,ADMIN`
        #[arg(long, value_delimiter = ',', default_value = "USER")]
        roles: Vec<String>,
    },
    /// Seed the two fixture accounts (user/USER, admin/ADMIN)
    Seed,
}

pub async fn provision_user(
    store: &dyn CredentialStore,
    username: &str,
    password: &str,
    roles: &[String],
) -> Result<(), AuthError> {
    store.provision(username, password, roles).await?;
    println!("✅ Provisioned '{}' with roles {:?}", username, roles);
    Ok(())
}

/// Seeds the development fixture accounts. Existing accounts are left
/// untouched so reseeding an initialized store is harmless.
pub async fn seed_fixture_users(store: &dyn CredentialStore) -> Result<(), AuthError> {
    for (username, password, role) in [("user", "password", "USER"), ("admin", "password", "ADMIN")]
    {
        match store
            .provision(username, password, &[role.to_string()])
            .await
        {
            Ok(()) => println!("✅ Seeded '{}' with role {}", username, role),
            Err(AuthError::DuplicateUser(_)) => {
                println!("ℹ️  '{}' already exists, skipping", username)
            }
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
