//! LawyerUp runner: builds the client stores over a platform

pub mod config;

use lawyerup_adapters::{AppStores, Platform};

use crate::config::RunnerConfig;

pub struct RunnerDeps {
    pub platform: Platform,
    pub config: RunnerConfig,
}

/// Build every store and report what was restored from storage
pub fn run(deps: RunnerDeps) -> AppStores {
    let RunnerDeps { platform, config } = deps;

    let stores = AppStores::new(&platform, &config.stores);

    match stores.session.refresh() {
        Some(user) => {
            let user_id = user.id.to_string();
            let own = if user.is_lawyer() {
                stores.bookings.for_lawyer(&user_id)
            } else {
                stores.bookings.for_client(&user_id)
            };
            tracing::info!(
                user_id = %user.id,
                role = %user.role,
                bookings = own.len(),
                "Restored session for {}",
                user.email
            );
        }
        None => tracing::info!("No active session"),
    }

    let bookings = stores.bookings.list();
    let upcoming = bookings.iter().filter(|b| b.status.is_upcoming()).count();
    tracing::info!(
        total = bookings.len(),
        upcoming,
        users = stores.session.users_len(),
        unread_notifications = stores.notifications.unread_count(),
        "Client stores ready"
    );

    stores
}
