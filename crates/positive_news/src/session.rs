use std::str::FromStr;

use common::{HeadlineClassifier, HeadlineSource, NewsResult};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::info;

use crate::options::{Country, HeadlineCount, Options};
use crate::page::Page;
use crate::pass::run_pass;

pub const HELP: &str = "Commands: <enter> or 'fetch' to fetch positive news, \
'country <in|us|gb|ca|au>', 'count <3-15>', 'options', 'help', 'quit'";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Fetch,
    SetCountry(Country),
    SetCount(HeadlineCount),
    ShowOptions,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let verb = parts.next().unwrap_or("").to_ascii_lowercase();
        let arg = parts.next();
        if parts.next().is_some() {
            return Err(format!("too many arguments in '{}'", s.trim()));
        }

        match (verb.as_str(), arg) {
            ("" | "fetch", None) => Ok(Command::Fetch),
            ("country", Some(code)) => code.parse().map(Command::SetCountry),
            ("count", Some(count)) => count.parse().map(Command::SetCount),
            ("options", None) => Ok(Command::ShowOptions),
            ("help" | "?", None) => Ok(Command::Help),
            ("quit" | "q" | "exit", None) => Ok(Command::Quit),
            ("country" | "count", None) => Err(format!("'{}' needs a value", verb)),
            _ => Err(format!("unknown command '{}'", s.trim())),
        }
    }
}

/// Reads commands line by line until `quit` or end of input. Each fetch
/// command triggers exactly one pass with the current options.
pub async fn run_interactive<R, S, C, P>(
    input: R,
    source: &S,
    classifier: &C,
    page: &mut P,
    options: &mut Options,
) -> NewsResult<usize>
where
    R: AsyncBufRead + Unpin,
    S: HeadlineSource + ?Sized,
    C: HeadlineClassifier + ?Sized,
    P: Page + ?Sized,
{
    let mut lines = input.lines();
    let mut passes = 0;

    page.note(HELP)?;
    page.note(&format!("Options: {}", options))?;

    while let Some(line) = lines.next_line().await? {
        match line.parse::<Command>() {
            Ok(Command::Fetch) => {
                run_pass(source, classifier, page, options).await?;
                passes += 1;
            }
            Ok(Command::SetCountry(country)) => {
                options.country = country;
                page.note(&format!("Options: {}", options))?;
            }
            Ok(Command::SetCount(count)) => {
                options.headline_count = count;
                page.note(&format!("Options: {}", options))?;
            }
            Ok(Command::ShowOptions) => page.note(&format!("Options: {}", options))?,
            Ok(Command::Help) => page.note(HELP)?,
            Ok(Command::Quit) => break,
            Err(e) => page.error(&e)?,
        }
    }

    info!("Session ended after {} passes", passes);
    Ok(passes)
}
