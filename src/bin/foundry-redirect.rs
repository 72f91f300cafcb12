use clap::Parser;
use foundry_redirect::{cli::FoundryRedirect, style::Style};

use std::process;

#[tokio::main]
async fn main() {
    let app = FoundryRedirect::parse();
    lumberjack::init(app.log_level);
    tracing::trace!(command_structure = ?app);

    match app.run().await {
        Ok(output) => {
            output.print(app.json);
            process::exit(0)
        }
        Err(error) => {
            tracing::debug!(?error);
            eprintln!("{} {:#}", Style::ErrorPrefix.paint("error:"), error);
            process::exit(1)
        }
    }
}
