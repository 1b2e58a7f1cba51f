mod session;

use std::io::{self, BufRead};

use anyhow::Result;
use rated_engine::RatedEngine;
use tracing_subscriber::EnvFilter;

use session::{Flow, Session};

fn main() -> Result<()> {
    // stdout is the UCI channel; logs go to stderr.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut session = Session::new(RatedEngine::default());
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line?;
        if session.handle(&line, &mut stdout)? == Flow::Quit {
            break;
        }
    }
    Ok(())
}
