mod controller;
mod events;
mod state;
mod ui;
mod widgets;

use anyhow::anyhow;
use batch_renamer::config::LaunchOptions;
use batch_renamer::session::Session;
use druid::{AppLauncher, WindowDesc};
use state::AppState;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let options = LaunchOptions::from_env();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&options.log_filter))
        .init();

    let mut session = Session::new();
    if let Some(folder) = &options.initial_folder {
        match session.open_folder(folder.clone()) {
            Ok(count) => info!(folder = %folder.display(), count, "initial_folder_loaded"),
            Err(err) => warn!(folder = %folder.display(), error = %err, "initial_folder_failed"),
        }
    }

    let main_window = WindowDesc::new(ui::build_ui())
        .title("Bulk File Renamer")
        .window_size((900.0, 700.0));
    AppLauncher::with_window(main_window)
        .launch(AppState::new(session))
        .map_err(|err| anyhow!("failed to launch application: {}", err))
}
