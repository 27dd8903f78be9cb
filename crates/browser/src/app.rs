//! The browser event loop.
//!
//! Input lines and fetch results are multiplexed with `tokio::select!`.
//! Every fetch runs as its own task and reports back over a channel as an
//! [`Action`], so a slow request never blocks typing and the state's ticket
//! check decides which response wins.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;

use crate::client::CatalogClient;
use crate::command::{self, Command, HELP};
use crate::state::{Action, BrowserState, FetchRequest};
use crate::view::View;

/// Run the browser until `quit` or end of input.
///
/// On end of input the loop keeps going until the outstanding request has
/// resolved, so the final frame always shows a settled result.
pub async fn run<R, W>(client: CatalogClient, input: R, output: &mut W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let (tx, mut rx) = mpsc::unbounded_channel::<Action>();
    let mut state = BrowserState::new();

    spawn_fetch(&client, &tx, state.start());
    render(&state, output)?;

    let mut lines = input.lines();
    let mut input_open = true;

    loop {
        if !input_open && !state.is_loading() {
            break;
        }

        tokio::select! {
            line = lines.next_line(), if input_open => {
                let Some(line) = line? else {
                    tracing::debug!("Input closed");
                    input_open = false;
                    continue;
                };

                match command::parse(&line) {
                    Ok(Command::Quit) => break,
                    Ok(Command::Help) => writeln!(output, "{HELP}")?,
                    Ok(Command::Actions(actions)) => {
                        if actions.is_empty() {
                            continue;
                        }
                        for action in actions {
                            if let Some(request) = state.apply(action) {
                                spawn_fetch(&client, &tx, request);
                            }
                        }
                        render(&state, output)?;
                    }
                    Err(e) => writeln!(output, "{e}")?,
                }
            }
            Some(action) = rx.recv() => {
                state.apply(action);
                // A stale response leaves the newer request in flight.
                if !state.is_loading() {
                    render(&state, output)?;
                }
            }
        }
    }

    output.flush()
}

fn spawn_fetch(client: &CatalogClient, tx: &mpsc::UnboundedSender<Action>, request: FetchRequest) {
    let client = client.clone();
    let tx = tx.clone();

    tokio::spawn(async move {
        let FetchRequest { ticket, query } = request;
        let action = match client.fetch_page(&query).await {
            Ok(page) => Action::Loaded { ticket, page },
            Err(e) => {
                tracing::warn!(error = %e, ticket, "Movie fetch failed");
                Action::Failed {
                    ticket,
                    message: e.to_string(),
                }
            }
        };

        if tx.send(action).is_err() {
            tracing::debug!(ticket, "Browser exited before the response arrived");
        }
    });
}

fn render<W: Write>(state: &BrowserState, output: &mut W) -> std::io::Result<()> {
    writeln!(output)?;
    write!(output, "{}", View::from_state(state))?;
    output.flush()
}
