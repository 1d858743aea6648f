//! LawyerUp - client state for a legal-services marketplace
//!
//! This crate is the *composition root*.
//! It picks the platform, builds the stores and reports their state.

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lawyerup_runner::config::RunnerConfig;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lawyerup=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting LawyerUp");

    let config = RunnerConfig::from_env()?;
    let platform = create_platform(&config);

    lawyerup_runner::run(lawyerup_runner::RunnerDeps { platform, config });
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn create_platform(config: &RunnerConfig) -> lawyerup_adapters::Platform {
    use lawyerup_adapters::infrastructure::platform;
    use lawyerup_runner::config::StorageTarget;

    match &config.storage {
        StorageTarget::Default => platform::create_platform(None),
        StorageTarget::Memory => platform::create_ephemeral_platform(),
        StorageTarget::File(path) => platform::create_platform(Some(path.clone())),
    }
}

#[cfg(target_arch = "wasm32")]
fn create_platform(config: &RunnerConfig) -> lawyerup_adapters::Platform {
    use lawyerup_adapters::infrastructure::platform;
    use lawyerup_runner::config::StorageTarget;

    match config.storage {
        StorageTarget::Memory => platform::create_ephemeral_platform(),
        // The browser only has localStorage
        _ => platform::create_platform(),
    }
}
