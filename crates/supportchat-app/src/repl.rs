//! Line-oriented chat loop.
//!
//! Input is not read while a send is in flight, which is the terminal
//! equivalent of a disabled input box.

use std::borrow::Cow;
use std::io::Write;

use supportchat_client::presentation::{header, typing_indicator};
use supportchat_client::{ChatSession, TranscriptView};
use supportchat_common::ChatError;
use supportchat_config::DisplayConfig;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, warn};

const PROMPT: &str = "> ";
/// Return to column 0 and erase the line, removing the typing indicator.
const CLEAR_LINE: &str = "\r\x1b[2K";

enum Command {
    Quit,
    ShowSession,
}

fn parse_command(line: &str) -> Option<Command> {
    match line.trim() {
        "/quit" | "/exit" => Some(Command::Quit),
        "/session" => Some(Command::ShowSession),
        _ => None,
    }
}

fn render<W: Write>(
    out: &mut W,
    view: &mut TranscriptView,
    session: &ChatSession,
) -> Result<(), ChatError> {
    for line in view.take_new_lines(session.state().messages()) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Next input line without its terminator, or `None` at end of input.
/// Invalid UTF-8 is replaced rather than ending the session.
async fn next_line<R>(input: &mut R, buf: &mut Vec<u8>) -> std::io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    buf.clear();
    if input.read_until(b'\n', buf).await? == 0 {
        return Ok(None);
    }

    let line = String::from_utf8_lossy(buf);
    if matches!(line, Cow::Owned(_)) {
        warn!("Input line was not valid UTF-8, invalid bytes replaced");
    }
    Ok(Some(
        line.trim_end_matches(|c| c == '\n' || c == '\r')
            .to_string(),
    ))
}

/// Run until `/quit` or end of input.
pub async fn run_chat<R, W>(
    mut session: ChatSession,
    display: &DisplayConfig,
    mut input: R,
    out: &mut W,
) -> Result<(), ChatError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut view = TranscriptView::new();
    let prefix_len = display.session_prefix_len as usize;

    writeln!(
        out,
        "{}",
        header(&display.title, session.state().session_id(), prefix_len)
    )?;
    render(out, &mut view, &session)?;

    let mut buf = Vec::new();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let Some(line) = next_line(&mut input, &mut buf).await? else {
            debug!("End of input");
            break;
        };

        match parse_command(&line) {
            Some(Command::Quit) => break,
            Some(Command::ShowSession) => {
                writeln!(out, "Session: {}", session.state().session_id())?;
                continue;
            }
            None => {}
        }

        session.set_draft(line);
        let Some(request) = session.begin_submit() else {
            continue;
        };
        render(out, &mut view, &session)?;
        let indicator = typing_indicator(session.state(), display.show_typing_indicator);
        if let Some(indicator) = indicator {
            write!(out, "{indicator}")?;
        }
        out.flush()?;

        let outcome = session.dispatch(&request).await;
        session.finish_submit(outcome);
        if indicator.is_some() {
            write!(out, "{CLEAR_LINE}")?;
        }
        render(out, &mut view, &session)?;
    }

    Ok(())
}
