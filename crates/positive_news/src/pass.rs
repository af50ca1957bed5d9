use common::{Article, HeadlineClassifier, HeadlineSource, NewsResult};
use openrouter::interpreter::interpret;
use openrouter::{build_prompt, ClassificationResult, Verdict};
use time::OffsetDateTime;
use tracing::{debug, info, warn};

use crate::options::Options;
use crate::page::{Card, Page};

pub const NO_RESULTS: &str = "No articles found or API limit reached.";

/// Counters for one fetch-classify-render cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassSummary {
    pub fetched: usize,
    pub classified: usize,
    pub shown: usize,
    /// Classification calls that failed at the transport level.
    pub failed: usize,
}

/// Runs one pass: fetch once, then classify every headline in fetch order,
/// one call at a time, rendering only the positive ones.
pub async fn run_pass<S, C, P>(
    source: &S,
    classifier: &C,
    page: &mut P,
    options: &Options,
) -> NewsResult<PassSummary>
where
    S: HeadlineSource + ?Sized,
    C: HeadlineClassifier + ?Sized,
    P: Page + ?Sized,
{
    info!("Fetching headlines from {} ({})", source.name(), options);
    let articles = source
        .fetch_headlines(options.country.code(), options.headline_count.get())
        .await;

    let mut summary = PassSummary {
        fetched: articles.len(),
        ..PassSummary::default()
    };

    if articles.is_empty() {
        page.warning(NO_RESULTS)?;
        return Ok(summary);
    }

    page.note(&pass_heading(options))?;

    for (index, article) in articles.iter().enumerate() {
        let prompt = build_prompt(
            &article.title,
            article.description.as_deref(),
            &article.source_name,
        );

        let reply = match classifier.classify(&prompt).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(
                    "{} failed on headline {} '{}': {}",
                    classifier.name(),
                    index + 1,
                    article.title,
                    e
                );
                summary.failed += 1;
                continue;
            }
        };
        summary.classified += 1;

        match interpret(&reply) {
            ClassificationResult {
                verdict: Verdict::Positive,
                rewrite: Some(rewrite),
            } => {
                page.card(&to_card(article, rewrite))?;
                summary.shown += 1;
            }
            _ => debug!("Dropping headline {} '{}'", index + 1, article.title),
        }
    }

    info!(
        "Pass finished. Fetched: {}, Shown: {}, Failed: {}",
        summary.fetched, summary.shown, summary.failed
    );
    Ok(summary)
}

fn to_card(article: &Article, rewrite: String) -> Card {
    Card {
        title: article.title.clone(),
        image_url: article.image_url.clone(),
        body: rewrite,
        source: article.source_name.clone(),
    }
}

fn pass_heading(options: &Options) -> String {
    let date = OffsetDateTime::now_utc().date();
    format!(
        "*Checking {} headlines for '{}' on {}*\n",
        options.headline_count, options.country, date
    )
}
