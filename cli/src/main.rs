use std::io;

use movie_cli::{CommandLineArgs, Prompter, Repl, TerminalView, UreqTransport};
use movie_core::{MovieApi, MovieListClient};
use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    init_tracing_subscriber();

    let args = CommandLineArgs::parse();
    tracing::debug!(api_url = args.api_url(), "starting");

    let mut client = MovieListClient::new(
        MovieApi::new(args.api_url()),
        UreqTransport::new(),
        TerminalView::new(io::stdout()),
    );
    // Initial load; a failure is logged and the session continues.
    let _ = client.fetch();

    let stdin = io::stdin();
    let mut repl = Repl::new(Prompter::new(stdin.lock(), io::stdout()));
    repl.run(&mut client)
}

/// Diagnostics go to stderr so they never interleave with the list on
/// stdout. `MOVIES_LOG_LEVEL` takes the usual filter syntax; the default
/// shows failed operations only.
fn init_tracing_subscriber() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("MOVIES_LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}
