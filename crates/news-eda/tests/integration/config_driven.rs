//! Integration tests for configuration-driven analysis.

use news_eda::config::{EdaConfig, OutputFormat};
use news_eda::counts::LabelCounts;
use news_eda::dataset::Dataset;
use news_eda::Report;

use crate::common::{Fixture, NEWS_CSV};

fn run(fixture: &Fixture, config_toml: &str) -> Report {
    let config_path = fixture.write_config(config_toml);
    let config = EdaConfig::load(Some(config_path.to_str().unwrap())).expect("load config");
    let dataset = Dataset::from_path(&fixture.path, &config.dataset).expect("load dataset");
    Report::build(&dataset, &config).expect("build report")
}

#[test]
fn test_swapped_labels() {
    let report = run(&Fixture::news(), "[labels]\nreal = 0\nfake = 1\n");
    assert_eq!(report.label_counts, LabelCounts { real: 4, fake: 3 });
}

#[test]
fn test_lowercase_merges_case_variants() {
    let report = run(&Fixture::news(), "[tokenizer]\nlowercase = true\n");

    let real_the = report
        .real_words
        .iter()
        .find(|w| w.word == "the")
        .map(|w| w.count);
    assert_eq!(real_the, Some(5));
    assert!(report.fake_words.iter().any(|w| w.word == "shocking"));
}

#[test]
fn test_stopwords_removed() {
    let report = run(
        &Fixture::news(),
        "[tokenizer]\nlowercase = true\nstopwords_enabled = true\n",
    );

    assert_eq!(report.fake_words[0].word, "emails");
    assert!(report.fake_words.iter().all(|w| w.word != "the"));
    assert!(report.real_words.iter().all(|w| w.word != "on"));
}

#[test]
fn test_small_window() {
    let report = run(
        &Fixture::news(),
        "[analysis]\nvocabulary_window = 1\nexclusive_limit = 10\n",
    );
    // Each window holds one word: "the" for fake, "on" for real.
    assert_eq!(report.exclusive_words.len(), 1);
    assert_eq!(report.exclusive_words[0].word, "the");
}

#[test]
fn test_tab_delimited_dataset() {
    let tsv = NEWS_CSV.replace(',', "\t");
    let fixture = Fixture::with_csv(&tsv);
    let report = run(&fixture, "[dataset]\ndelimiter = \"\\t\"\n");
    assert_eq!(report.label_counts.real, 3);
}

#[test]
fn test_json_format_setting() {
    let fixture = Fixture::news();
    let config_path = fixture.write_config("[output]\nformat = \"json\"\n");
    let config = EdaConfig::load(Some(config_path.to_str().unwrap())).unwrap();
    assert_eq!(config.output.format, OutputFormat::Json);

    let dataset = Dataset::from_path(&fixture.path, &config.dataset).unwrap();
    let report = Report::build(&dataset, &config).unwrap();
    let mut buf = Vec::new();
    report.write_json(&mut buf).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
    assert_eq!(value["unique_authors"], 4);
    assert_eq!(value["info"]["columns"][0]["dtype"], "int64");
}

#[test]
fn test_invalid_config_rejected() {
    let fixture = Fixture::news();
    let path = fixture.write_config("[labels]\nreal = 2\nfake = 2\n");
    assert!(EdaConfig::load(Some(path.to_str().unwrap())).is_err());
}
