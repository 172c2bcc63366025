mod allocator;
mod app;

use std::process::ExitCode;

use crate::app::App;

fn main() -> ExitCode {
    let app = App::init().unwrap_or_else(|e| {
        eprintln!("warning: {e:#}");
        App::from_env()
    });

    app.execute()
}
