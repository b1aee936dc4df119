use iced::{Application, Settings};

use bookify::client::config::ClientConfig;
use bookify::client::gui::app::{BookifyApp, BootFlags};
use bookify::client::models::navigation::Tab;
use bookify::client::services::api_client::BookifyApi;
use bookify::client::utils::session_store::SessionStore;

fn main() -> anyhow::Result<()> {
    let config = ClientConfig::from_env();
    env_logger::Builder::new().parse_filters(&config.log_level).init();

    // Optional start page, e.g. `bookify-gui '#browse'`
    let initial_tab = std::env::args().nth(1).map(|arg| Tab::from_fragment(&arg)).unwrap_or_default();

    let api = BookifyApi::from_config(&config)?;
    log::info!("Using Bookify API at {}", api.base_url());
    let session = SessionStore::from_config(&config);

    let mut settings = Settings::with_flags(BootFlags { config, api, session, initial_tab });
    settings.window.size = iced::Size::new(1280.0, 820.0);
    BookifyApp::run(settings)?;
    Ok(())
}
