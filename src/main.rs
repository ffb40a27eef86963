use clap::Parser;
use fractal_zoom::{RenderArgs, RenderCommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = RenderArgs::parse();
    let command = RenderCommand::new(args);

    if let Err(err) = command.execute() {
        error!("{err}");
        return Err(err.into());
    }

    Ok(())
}
