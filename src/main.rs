use anyhow::Context;
use clap::Parser;
use std::io::Read;
use tracing::info;

use wortschatz::{Extraction, Extractor, GermanAnnotator, VocabError, DEFAULT_MAX_WORDS};

#[derive(Parser, Debug)]
#[command(name = "wortschatz")]
#[command(about = "Extract POS-tagged German vocabulary with example phrases from a transcript")]
#[command(version)]
struct Args {
    /// Maximum words kept in each occurrence phrase
    #[arg(long, default_value_t = DEFAULT_MAX_WORDS)]
    max_words: usize,

    /// Pretty-print the JSON result
    #[arg(long)]
    pretty: bool,
}

fn main() {
    // WHY: logs must go to stderr; stdout carries the JSON payload
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .json()
        .init();

    let args = Args::parse();

    // The annotator loads once per process, before any input is read.
    // Failure here is a configuration problem, reported distinctly.
    let annotator = match GermanAnnotator::new() {
        Ok(annotator) => annotator,
        Err(err) => {
            let err = VocabError::Configuration(format!("{err:#}"));
            eprintln!("Error: {err}");
            std::process::exit(2);
        }
    };

    match run(&annotator, &args) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            let payload = serde_json::json!({ "error": err.to_string() });
            if err.is_input_error() {
                println!("{payload}");
            } else {
                eprintln!("{payload}");
            }
            std::process::exit(1);
        }
    }
}

fn run(annotator: &GermanAnnotator, args: &Args) -> Result<String, VocabError> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    if input.is_empty() {
        return Err(VocabError::NoInput);
    }

    let transcript = resolve_transcript(&input);
    if transcript.is_empty() {
        return Err(VocabError::EmptyTranscript);
    }

    info!(chars = transcript.len(), "analyzing transcript");

    let extractor = Extractor::with_max_words(annotator, args.max_words);
    let extraction = extractor.extract(&transcript)?;

    info!(
        nouns = extraction.nouns.len(),
        verbs = extraction.verbs.len(),
        adjectives = extraction.adjectives.len(),
        "extraction complete"
    );

    serialize(&extraction, args.pretty).map_err(VocabError::from)
}

/// Resolve the transcript from the raw request payload.
///
/// A JSON object yields its `transcript` string field (missing or
/// non-string resolves to empty). Valid JSON of any other shape also
/// resolves to empty. Anything that is not valid JSON is the transcript
/// itself, verbatim but trimmed.
fn resolve_transcript(input: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(input) {
        Ok(value) => value
            .get("transcript")
            .and_then(|t| t.as_str())
            .unwrap_or_default()
            .to_string(),
        Err(_) => input.trim().to_string(),
    }
}

fn serialize(extraction: &Extraction, pretty: bool) -> anyhow::Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(extraction)?
    } else {
        serde_json::to_string(extraction)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_transcript_from_json_object() {
        assert_eq!(
            resolve_transcript(r#"{"transcript": "Der Hund läuft."}"#),
            "Der Hund läuft."
        );
    }

    #[test]
    fn test_resolve_transcript_missing_field_is_empty() {
        assert_eq!(resolve_transcript(r#"{"other": 1}"#), "");
        assert_eq!(resolve_transcript(r#"{"transcript": 42}"#), "");
    }

    #[test]
    fn test_resolve_transcript_non_object_json_is_empty() {
        assert_eq!(resolve_transcript("42"), "");
        assert_eq!(resolve_transcript(r#"["a"]"#), "");
    }

    #[test]
    fn test_resolve_transcript_raw_text_passthrough() {
        assert_eq!(resolve_transcript("Berlin ist groß.\n"), "Berlin ist groß.");
    }

    #[test]
    fn test_json_transcript_not_trimmed() {
        // Whitespace-only JSON transcripts stay non-empty and flow into the
        // extractor, which returns an empty result for them.
        assert_eq!(resolve_transcript(r#"{"transcript": "  "}"#), "  ");
    }
}
