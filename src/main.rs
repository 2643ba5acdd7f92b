//! # Storeline Main Entry Point
//!
//! Loads the first catalog page, applies the requested sort and search, and
//! prints the resulting screen.

use anyhow::{bail, Result};
use storeline::cmd_args::CommandLineArgs;
use storeline::logging::init_tracing_subscriber;
use storeline::views::render_screen;
use storeline::{CatalogViewModel, ClientConfig, HttpPhotoApi, RemoteItemRepository, Screen};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing_subscriber();

    let cmd_args = CommandLineArgs::parse();
    tracing::debug!("Command line arguments: {:?}", cmd_args);

    let config = ClientConfig::load(cmd_args.profile())?;
    if cmd_args.verbose() {
        eprintln!("Using {} (profile '{}')", config.base_url(), cmd_args.profile());
    }

    let api = HttpPhotoApi::new(config)?;
    let mut screen = Screen::new(CatalogViewModel::with_error_mode(
        RemoteItemRepository::new(api),
        cmd_args.error_mode(),
    ));

    // Each step settles before the next so the steps see each other's results
    screen.load_initial(cmd_args.per_page());
    screen.settle().await;

    if let Some(option) = cmd_args.sort() {
        if cmd_args.remote() {
            screen.fetch_sorted(option);
        } else {
            screen.apply_sort(option);
        }
        screen.settle().await;
    }

    if let Some(query) = cmd_args.search() {
        if cmd_args.remote() {
            screen.search_remote(query);
        } else {
            screen.apply_search(query);
        }
        screen.settle().await;
    }

    let state = screen.state();
    print!("{}", render_screen(&state));

    if let Some(error) = state.error {
        bail!("failed to load catalog: {error}");
    }
    Ok(())
}
