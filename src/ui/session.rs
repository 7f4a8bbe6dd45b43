use std::io::{self, Write};

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::fetch::{Completion, FetchController, Lookup};
use crate::pokemon::Pokemon;
use crate::storage::KeyValueStore;

use super::boundary::ErrorBoundary;
use super::greeting::Greeting;
use super::pokemon::render_presentable;

/// One line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Submit the line as the new query.
    Submit(String),
    /// Trigger the error boundary's recovery action.
    Reset,
    Quit,
}

impl SessionCommand {
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            ":quit" | ":q" => Self::Quit,
            ":reset" | "ok" => Self::Reset,
            other => Self::Submit(other.to_string()),
        }
    }
}

/// Each input line is a change of the name field.
pub async fn run_greeting<S, R, W>(greeting: &mut Greeting<S>, input: R, out: &mut W) -> io::Result<()>
where
    S: KeyValueStore,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "{}", greeting.render())?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        if SessionCommand::parse(&line) == SessionCommand::Quit {
            break;
        }
        greeting.handle_change(&line);
        writeln!(out, "{}", greeting.render())?;
    }
    Ok(())
}

/// Each input line submits a query; outcomes are rendered as they land.
///
/// When the input closes, lookups still in flight are awaited before
/// returning so that piped input gets its answers.
pub async fn run_pokemon<L, R, W>(
    controller: &mut FetchController<L>,
    input: R,
    out: &mut W,
) -> io::Result<()>
where
    L: Lookup<Output = Pokemon>,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    render(controller, out)?;

    let mut lines = input.lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match SessionCommand::parse(&line) {
                    SessionCommand::Quit => return Ok(()),
                    SessionCommand::Reset => ErrorBoundary::reset(controller),
                    SessionCommand::Submit(query) => {
                        controller.on_query_change(query);
                    }
                }
                render(controller, out)?;
            }
            Some(completion) = controller.next_completion() => {
                if matches!(completion, Completion::Applied { .. }) {
                    render(controller, out)?;
                }
            }
        }
    }

    while let Some(completion) = controller.next_completion().await {
        if matches!(completion, Completion::Applied { .. }) {
            render(controller, out)?;
        }
    }
    Ok(())
}

fn render<L, W>(controller: &FetchController<L>, out: &mut W) -> io::Result<()>
where
    L: Lookup<Output = Pokemon>,
    W: Write,
{
    let view = ErrorBoundary::render(controller.lifecycle(), render_presentable);
    writeln!(out, "{}", view)?;
    out.flush()
}
