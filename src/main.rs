//! Binary entry point: set up logging, open the store in the working
//! directory, load the first board and drive the Ratatui event loop until the
//! user exits.
use clipboard_boards::{init_logging, run_app, App, Store, SystemClipboard};
use tracing::info;

fn main() -> anyhow::Result<()> {
    if let Some(log_path) = init_logging() {
        info!(log = %log_path.display(), "starting clipboard boards");
    }

    let store = Store::open_default()?;
    let app = App::new(store, Box::new(SystemClipboard::default()))?;
    run_app(app)
}
