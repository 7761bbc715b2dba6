//! The operator console: read a line, run the pipeline, report the result.
//!
//! Lines are processed strictly one at a time. Accepted lines go into the
//! history; rejected and unrecognised lines are reported and dropped.

use atc_proto::{CommandParser, ParsedLine};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use crate::config::{Config, OutputFormat};
use crate::error::ConsoleResult;
use crate::history::CommandHistory;
use crate::metrics;
use crate::telemetry::{CommandTimer, spans};

/// Shown when a transmit line names no known command.
pub const NOT_UNDERSTOOD: &str = "Command not understood";

/// Repeats the last accepted line.
pub const REPEAT_LAST: &str = "!!";

/// Lists accepted lines.
pub const SHOW_HISTORY: &str = "!history";

/// What the operator sees for one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A rendered result, written to stdout.
    Result(String),
    /// A rejection message, written to stderr.
    Rejected(String),
}

/// One console session.
pub struct Console<'r> {
    parser: CommandParser<'r>,
    history: CommandHistory,
    output: OutputFormat,
    prompt: String,
    lines_seen: u64,
}

impl<'r> Console<'r> {
    pub fn new(parser: CommandParser<'r>, config: &Config) -> Self {
        Self {
            parser: parser.with_policy(config.console.error_policy),
            history: CommandHistory::new(config.history.limit),
            output: config.console.output,
            prompt: config.console.prompt.clone(),
            lines_seen: 0,
        }
    }

    #[cfg(test)]
    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    /// Process one raw input line. Blank lines produce no reply.
    pub fn handle_line(&mut self, input: &str) -> ConsoleResult<Option<Reply>> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }

        if input == SHOW_HISTORY {
            return Ok(Some(Reply::Result(self.render_history())));
        }

        let line = if input == REPEAT_LAST {
            match self.history.last() {
                Some(entry) => entry.line.clone(),
                None => return Ok(Some(Reply::Rejected("No previous command".to_string()))),
            }
        } else {
            input.to_owned()
        };

        self.lines_seen += 1;
        let span = spans::line(self.lines_seen, line.split_whitespace().next());
        let _enter = span.enter();
        let mut timer = CommandTimer::new();

        match self.parser.parse(&line) {
            Ok(ParsedLine::Transmit(transmit)) if !transmit.is_understood() => {
                timer.set_outcome("unrecognised");
                debug!("no command recognised");
                Ok(Some(Reply::Rejected(NOT_UNDERSTOOD.to_string())))
            }
            Ok(parsed) => {
                timer.set_outcome(parsed.kind_label());
                metrics::record_commands(parsed.command_names());
                debug!(kind = parsed.kind_label(), "line accepted");

                let rendered = self.render(&parsed)?;
                self.history.push(line);
                Ok(Some(Reply::Result(rendered)))
            }
            Err(err) => {
                metrics::record_rejection(err.error_code());
                info!(error = %err, code = err.error_code(), "line rejected");
                Ok(Some(Reply::Rejected(err.to_string())))
            }
        }
    }

    fn render(&self, parsed: &ParsedLine) -> ConsoleResult<String> {
        Ok(match self.output {
            OutputFormat::Pretty => parsed.to_string(),
            OutputFormat::Json => serde_json::to_string(parsed)?,
        })
    }

    fn render_history(&self) -> String {
        if self.history.is_empty() {
            return "History is empty".to_string();
        }
        self.history
            .iter()
            .map(|entry| format!("{} {}", entry.accepted_at.format("%H:%M:%S"), entry.line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Run until `input` is exhausted.
    pub async fn run<R, W, E>(&mut self, input: R, mut out: W, mut err: E) -> ConsoleResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
        E: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();

        loop {
            if !self.prompt.is_empty() {
                out.write_all(self.prompt.as_bytes()).await?;
                out.flush().await?;
            }

            let Some(raw) = lines.next_line().await? else {
                break;
            };

            match self.handle_line(&raw)? {
                Some(Reply::Result(text)) => {
                    out.write_all(text.as_bytes()).await?;
                    out.write_all(b"\n").await?;
                }
                Some(Reply::Rejected(text)) => {
                    err.write_all(text.as_bytes()).await?;
                    err.write_all(b"\n").await?;
                    err.flush().await?;
                }
                None => {}
            }
        }

        out.flush().await?;
        info!(
            lines = self.lines_seen,
            accepted = self.history.len(),
            "input closed"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console(config: &Config) -> Console<'static> {
        Console::new(CommandParser::builtin().unwrap(), config)
    }

    fn quiet() -> Config {
        let mut config = Config::default();
        config.console.prompt = String::new();
        config
    }

    #[test]
    fn test_pretty_output() {
        let mut console = console(&quiet());
        assert_eq!(
            console.handle_line("AAL777 fh 180").unwrap(),
            Some(Reply::Result("AAL777: heading [null, 180, false]".to_string()))
        );
        assert_eq!(
            console.handle_line("timewarp 50").unwrap(),
            Some(Reply::Result("timewarp [50]".to_string()))
        );
    }

    #[test]
    fn test_json_output() {
        let mut config = quiet();
        config.console.output = OutputFormat::Json;
        let mut console = console(&config);

        let Some(Reply::Result(text)) = console.handle_line("AAL777 hold dumba").unwrap() else {
            panic!("expected a result");
        };
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["kind"], "transmit");
        assert_eq!(
            value["commands"][0]["args"],
            serde_json::json!(["right", "1min", "dumba", null])
        );
    }

    #[test]
    fn test_only_accepted_lines_enter_history() {
        let mut console = console(&quiet());
        console.handle_line("AAL777 caf cvs to").unwrap();
        console.handle_line("AAL777 to threeve").unwrap();
        console.handle_line("AAL777 hello").unwrap();
        console.handle_line("   ").unwrap();

        let lines: Vec<_> = console.history().iter().map(|e| e.line.as_str()).collect();
        assert_eq!(lines, ["AAL777 caf cvs to"]);
    }

    #[test]
    fn test_rejections() {
        let mut console = console(&quiet());
        assert_eq!(
            console.handle_line("AAL777 to threeve").unwrap(),
            Some(Reply::Rejected(
                "Invalid argument length. Expected exactly zero arguments".to_string()
            ))
        );
        assert_eq!(
            console.handle_line("AAL777 hello").unwrap(),
            Some(Reply::Rejected(NOT_UNDERSTOOD.to_string()))
        );
        assert_eq!(console.handle_line("").unwrap(), None);
    }

    #[test]
    fn test_collect_all_from_config() {
        let mut config = quiet();
        config.console.error_policy = atc_proto::ErrorPolicy::CollectAll;
        let mut console = console(&config);

        assert_eq!(
            console.handle_line("AAL777 fh north sq 9999").unwrap(),
            Some(Reply::Rejected(
                "Heading must be a number; Invalid transponder code. Expected four digits between 0 and 7"
                    .to_string()
            ))
        );
    }

    #[test]
    fn test_repeat_last() {
        let mut console = console(&quiet());
        assert_eq!(
            console.handle_line(REPEAT_LAST).unwrap(),
            Some(Reply::Rejected("No previous command".to_string()))
        );

        console.handle_line("AAL777 c 80").unwrap();
        assert_eq!(
            console.handle_line(REPEAT_LAST).unwrap(),
            Some(Reply::Result("AAL777: altitude [8000, false]".to_string()))
        );
        assert_eq!(console.history().len(), 2);
    }

    #[test]
    fn test_show_history() {
        let mut console = console(&quiet());
        assert_eq!(
            console.handle_line(SHOW_HISTORY).unwrap(),
            Some(Reply::Result("History is empty".to_string()))
        );

        console.handle_line("AAL777 fh 180").unwrap();
        console.handle_line("AAL777 sq 9999").unwrap();
        console.handle_line("pause").unwrap();

        let Some(Reply::Result(listing)) = console.handle_line(SHOW_HISTORY).unwrap() else {
            panic!("expected a listing");
        };
        let lines: Vec<_> = listing.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(" AAL777 fh 180"));
        assert!(lines[1].ends_with(" pause"));
        // Listing the history is not itself recorded.
        assert_eq!(console.history().len(), 2);
    }

    #[tokio::test]
    async fn test_run_session() {
        let mut config = quiet();
        config.console.prompt = "> ".to_string();
        let mut console = console(&config);

        let input: &[u8] = b"AAL777 fh 180\n\nAAL777 to threeve\ntimewarp\n";
        let mut out = Vec::new();
        let mut err = Vec::new();
        console.run(input, &mut out, &mut err).await.unwrap();

        let out = String::from_utf8(out).unwrap();
        let err = String::from_utf8(err).unwrap();
        assert_eq!(
            out,
            "> AAL777: heading [null, 180, false]\n> > > timewarp [1]\n> "
        );
        assert_eq!(
            err,
            "Invalid argument length. Expected exactly zero arguments\n"
        );
    }
}
