//! Seeds operator accounts. Usage:
//!
//!     seed <username> <password> [<username> <password> ...]
//!
//! Runs migrations first, so it doubles as database initialization.

use argon2::{password_hash::{SaltString, PasswordHasher}, Argon2};
use rand::rngs::OsRng;
use rsvp_backend::config::Config;
use rsvp_backend::domain::models::user::User;
use rsvp_backend::infra::factory::bootstrap_state;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() || args.len() % 2 != 0 {
        eprintln!("Usage: seed <username> <password> [<username> <password> ...]");
        std::process::exit(1);
    }

    let config = Config::from_env();
    let state = bootstrap_state(&config).await;

    for pair in args.chunks(2) {
        let (username, password) = (&pair[0], &pair[1]);

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = match Argon2::default().hash_password(password.as_bytes(), &salt) {
            Ok(hash) => hash.to_string(),
            Err(e) => {
                error!("Failed to hash password for {}: {}", username, e);
                std::process::exit(1);
            }
        };

        let user = User::new(username.clone(), password_hash);
        match state.user_repo.create(&user).await {
            Ok(created) => info!("Seeded user {} ({})", created.username, created.user_id),
            Err(e) if e.is_unique_violation() => warn!("User {} already exists, skipping", username),
            Err(e) => {
                error!("Failed to seed user {}: {:?}", username, e);
                std::process::exit(1);
            }
        }
    }
}
