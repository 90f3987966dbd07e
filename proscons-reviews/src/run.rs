//! The extraction run: lexicon, reviews, labeler, output file.

use crate::config::PipelineConfig;
use crate::errors::RunError;
use crate::reader::ReviewReader;
use proscons_nlp::{FileSink, LabelSink, SentenceDisplay, SentenceLabeler, SentimentLexicon};
use std::io::BufRead;
use std::path::Path;
use tracing::{debug, debug_span, info};

/// Totals for a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub reviews: usize,
    pub written: usize,
}

/// Label every review in `input` and write the records to `output`.
///
/// With `explain`, each matched body sentence is also rendered to stderr.
pub fn run(
    input: &Path,
    output: &Path,
    config: &PipelineConfig,
    explain: bool,
) -> Result<RunSummary, RunError> {
    let options = config.extract_options();
    info!(output = %output.display(), "writing labeled sentences");
    if options.extract_sentences {
        info!("extracting annotated sentences from review text");
    }
    if options.extract_keyphrases {
        info!("extracting annotated sentences from review keyphrases");
    }

    let lexicon = SentimentLexicon::load(&config.lexicon.path, &config.lexicon_options())?;
    info!(
        path = %config.lexicon.path.display(),
        positive = lexicon.positive().len(),
        negative = lexicon.negative().len(),
        "lexicon loaded"
    );

    let reviews = ReviewReader::open(input)?;
    let mut sink = FileSink::create(output).map_err(|source| RunError::CreateOutput {
        path: output.display().to_string(),
        source,
    })?;

    let labeler = SentenceLabeler::new(&lexicon, options);
    let labeled = label_reviews(&labeler, reviews, &mut sink, explain);
    // Close the output even when the run stopped early.
    let written = sink.finish();
    let reviews = labeled?;

    info!("processed {} reviews", reviews);
    info!("written {} sentences", written);
    Ok(RunSummary { reviews, written })
}

/// Feed every review from `reviews` through `labeler` into `sink`.
///
/// Returns the number of reviews processed.
pub fn label_reviews<R, S>(
    labeler: &SentenceLabeler<'_>,
    mut reviews: ReviewReader<R>,
    sink: &mut S,
    explain: bool,
) -> Result<usize, RunError>
where
    R: BufRead,
    S: LabelSink + ?Sized,
{
    for review in reviews.by_ref() {
        let review = review?;
        let _span = debug_span!("review", id = review.id.as_deref().unwrap_or("")).entered();

        if review.has_no_keyphrases() {
            debug!("review has no pros or cons");
        }
        if explain {
            explain_review(labeler, &review.pros, &review.cons, &review.text);
        }

        labeler
            .extract_review(&review, sink)
            .map_err(RunError::Write)?;
    }

    Ok(reviews.reviews_read())
}

fn explain_review(labeler: &SentenceLabeler<'_>, pros: &[String], cons: &[String], body: &str) {
    let (map, _) = labeler.build_keyphrase_map(pros, cons);
    for matched in labeler.matches(&map, body) {
        eprintln!(
            "{}\n",
            SentenceDisplay::new(&matched.tokens).with(&matched.window)
        );
    }
}
