use std::io::Write;

use common::NewsResult;

/// One positive headline as shown to the reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub image_url: Option<String>,
    pub body: String,
    pub source: String,
}

impl Card {
    pub fn caption(&self) -> String {
        format!("Source: {}", self.source)
    }
}

/// Where a pass renders its output.
pub trait Page {
    fn title(&mut self, heading: &str, tagline: &str) -> NewsResult<()>;
    fn note(&mut self, text: &str) -> NewsResult<()>;
    fn warning(&mut self, text: &str) -> NewsResult<()>;
    fn error(&mut self, text: &str) -> NewsResult<()>;
    fn card(&mut self, card: &Card) -> NewsResult<()>;
}

/// Renders the page as Markdown to any writer (stdout in the binary).
pub struct MarkdownPage<W: Write> {
    out: W,
}

impl<W: Write> MarkdownPage<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Page for MarkdownPage<W> {
    fn title(&mut self, heading: &str, tagline: &str) -> NewsResult<()> {
        writeln!(self.out, "# {}\n\n{}\n", heading, tagline)?;
        Ok(self.out.flush()?)
    }

    fn note(&mut self, text: &str) -> NewsResult<()> {
        writeln!(self.out, "{}", text)?;
        Ok(self.out.flush()?)
    }

    fn warning(&mut self, text: &str) -> NewsResult<()> {
        writeln!(self.out, "> **Warning:** {}\n", text)?;
        Ok(self.out.flush()?)
    }

    fn error(&mut self, text: &str) -> NewsResult<()> {
        writeln!(self.out, "> **Error:** {}\n", text)?;
        Ok(self.out.flush()?)
    }

    fn card(&mut self, card: &Card) -> NewsResult<()> {
        writeln!(self.out, "## {}\n", card.title)?;
        if let Some(image_url) = &card.image_url {
            writeln!(self.out, "![{}]({})\n", card.title, image_url)?;
        }
        writeln!(self.out, "{}\n", card.body)?;
        writeln!(self.out, "*{}*\n\n---\n", card.caption())?;
        Ok(self.out.flush()?)
    }
}
