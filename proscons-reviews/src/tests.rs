use crate::{run, PipelineConfig, ReviewReader, ReviewResult, RunError, RunSummary};
use proscons_nlp::{LabeledSentence, Review, SentenceLabeler, SentimentLexicon};
use std::fs;
use std::path::{Path, PathBuf};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures").join(name)
}

fn sample_config() -> PipelineConfig {
    let mut config = PipelineConfig::default();
    config.lexicon.path = fixture("subjclues-sample.tff");
    config
}

fn sample_lexicon() -> SentimentLexicon {
    let config = sample_config();
    SentimentLexicon::load(&config.lexicon.path, &config.lexicon_options()).unwrap()
}

#[test]
fn test_sample_lexicon() {
    let lexicon = sample_lexicon();

    assert_eq!(lexicon.positive().len(), 3);
    assert_eq!(lexicon.negative().len(), 3);
    // No priorpolarity on the line after `weak`.
    assert!(!lexicon.contains("flash"));
    assert!(!lexicon.contains("fine"));
    assert!(!lexicon.contains("unemployed"));
}

#[test]
fn test_read_camera_reviews() {
    let reader = ReviewReader::open(&fixture("camera-reviews.xml")).unwrap();
    let reviews: Vec<Review> = reader.collect::<ReviewResult<_>>().unwrap();

    assert_eq!(reviews.len(), 3);
    assert_eq!(reviews[0].id.as_deref(), Some("20"));
    assert_eq!(reviews[0].pros, vec!["carl zeiss lens"]);
    assert!(reviews[0].text.contains("The carl zeiss lens is sharp."));
    assert_eq!(reviews[1].pros, vec!["good battery", "great"]);
    assert_eq!(reviews[1].cons, vec!["poor flash", "battery"]);
    assert!(reviews[1].text.contains("weak & slow"));
    assert!(reviews[2].cons.is_empty());
}

#[test]
fn test_run_camera_reviews() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("labeled.txt");

    let summary = run(&fixture("camera-reviews.xml"), &output, &sample_config(), false).unwrap();

    assert_eq!(
        summary,
        RunSummary {
            reviews: 3,
            written: 4
        }
    );
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "-1:\tminolta would have attracted more photographers\n\
         1:\tThe carl zeiss lens is sharp .\n\
         -1:\tThe battery lasts two days .\n\
         -1:\tThe flash is weak & slow .\n"
    );
}

#[test]
fn test_run_sentences_only() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("labeled.txt");
    let mut config = sample_config();
    config.extract.keyphrases = false;

    let summary = run(&fixture("camera-reviews.xml"), &output, &config, false).unwrap();

    assert_eq!(summary.written, 3);
    assert!(!fs::read_to_string(&output).unwrap().contains("minolta"));
}

#[test]
fn test_run_keyphrases_only() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("labeled.txt");
    let mut config = sample_config();
    config.extract.sentences = false;

    run(&fixture("camera-reviews.xml"), &output, &config, false).unwrap();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "-1:\tminolta would have attracted more photographers\n"
    );
}

#[test]
fn test_run_with_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("labeled.txt");
    let mut config = PipelineConfig::load(&fixture("strong-clues-sentences-only.toml")).unwrap();
    config.lexicon.path = fixture("subjclues-sample.tff");

    run(&fixture("camera-reviews.xml"), &output, &config, false).unwrap();

    // Weak clues stay in the keyphrases: "good battery" and "poor flash"
    // never occur in the text, the con "battery" still does.
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "1:\tThe carl zeiss lens is sharp .\n\
         -1:\tThe battery lasts two days .\n"
    );
}

#[test]
fn test_run_is_repeatable() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.txt");
    let second = dir.path().join("second.txt");

    run(&fixture("camera-reviews.xml"), &first, &sample_config(), true).unwrap();
    run(&fixture("camera-reviews.xml"), &second, &sample_config(), false).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn test_malformed_reviews_keep_earlier_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("labeled.txt");

    let err = run(&fixture("broken-reviews.xml"), &output, &sample_config(), false).unwrap_err();

    assert!(matches!(err, RunError::Reviews(_)));
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "-1:\tThe battery died on day one .\n"
    );
}

#[test]
fn test_missing_lexicon() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("labeled.txt");
    let mut config = sample_config();
    config.lexicon.path = dir.path().join("missing.tff");

    let err = run(&fixture("camera-reviews.xml"), &output, &config, false).unwrap_err();

    assert!(matches!(err, RunError::Lexicon(_)));
    assert!(err.to_string().contains("missing.tff"));
}

#[test]
fn test_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("labeled.txt");

    let err = run(&dir.path().join("missing.xml"), &output, &sample_config(), false).unwrap_err();

    assert!(matches!(err, RunError::Reviews(_)));
    assert!(err.to_string().contains("missing.xml"));
}

#[test]
fn test_unwritable_output() {
    let err = run(
        &fixture("camera-reviews.xml"),
        Path::new("/nonexistent/dir/labeled.txt"),
        &sample_config(),
        false,
    )
    .unwrap_err();

    assert!(matches!(err, RunError::CreateOutput { .. }));
}

#[test]
fn test_label_reviews_into_memory() {
    let lexicon = sample_lexicon();
    let labeler = SentenceLabeler::new(&lexicon, Default::default());
    let reader = ReviewReader::open(&fixture("camera-reviews.xml")).unwrap();
    let mut sink: Vec<LabeledSentence> = Vec::new();

    let reviews = crate::label_reviews(&labeler, reader, &mut sink, false).unwrap();

    assert_eq!(reviews, 3);
    let lines: Vec<String> = sink.iter().map(ToString::to_string).collect();
    insta::assert_debug_snapshot!(lines, @r###"
    [
        "-1:\tminolta would have attracted more photographers",
        "1:\tThe carl zeiss lens is sharp .",
        "-1:\tThe battery lasts two days .",
        "-1:\tThe flash is weak & slow .",
    ]
    "###);
}
