use anyhow::Result;

mod app;
mod cli;
mod logging;

fn main() -> Result<()> {
    let cli = cli::parse();
    app::run(cli)
}
