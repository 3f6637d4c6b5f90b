use anyhow::Result;
use clap::Parser;
use hangterm::cli::Cli;
use hangterm::core::terminal;
use hangterm::games::hangman::Session;
use hangterm::{logging, Engine};
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log {
        logging::init_tracing(path)?;
    }

    // No words means no game; bail before touching the terminal
    let words = cli.word_list()?;
    info!(words = words.words().len(), "starting");
    let session = Session::new(words)?;

    let mut terminal = terminal::init()?;
    let result = Engine::with_fps(session, cli.fps).run(&mut terminal).await;
    terminal::restore();

    let session = result?;
    info!(rounds = session.rounds(), "bye");
    Ok(())
}
