use numsplit::candidates::Detection;
use numsplit::{Error, Extractor, Opts, ValidationError, Word, extract_segments, transcript};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn w(text: &str, start: f64, end: f64) -> Word {
    Word::new(text, start, end)
}

#[test]
fn splits_short_two_section_example() -> anyhow::Result<()> {
    let words = vec![
        w("Hello", 4.0, 4.4),
        w("One", 6.0, 6.3),
        w("This", 7.5, 7.8),
        w("is", 7.9, 8.1),
        w("first", 8.2, 8.6),
        w("Two", 10.0, 10.3),
        w("Second", 11.5, 11.9),
    ];

    let segments = extract_segments(&words, &Opts::default())?;
    assert_eq!(segments.len(), 2);

    let one = &segments[0];
    assert_eq!(one.output_file, "1.mp3");
    assert_eq!(one.source_number.word_index, 1);
    assert!(approx(one.segment_boundaries.start, 7.5));
    assert!(approx(one.segment_boundaries.end, 8.6));

    let two = &segments[1];
    assert_eq!(two.output_file, "2.mp3");
    assert_eq!(two.source_number.word_index, 5);
    assert!(approx(two.segment_boundaries.start, 11.5));
    assert!(approx(two.segment_boundaries.end, 11.9));
    Ok(())
}

#[test]
fn intro_mention_loses_to_later_structural_numbers() -> anyhow::Result<()> {
    let words = vec![
        w("Welcome", 0.0, 0.5),
        w("to", 0.6, 0.8),
        w("our", 0.9, 1.1),
        w("lesson", 1.2, 1.6),
        w("number", 1.7, 2.0),
        w("one", 2.1, 2.3),
        w("today", 2.4, 2.8),
        w("Hello", 4.0, 4.4),
        w("world", 4.5, 4.9),
        w("One", 6.0, 6.3),
        w("This", 7.5, 7.8),
        w("is", 7.9, 8.1),
        w("first", 8.2, 8.6),
        w("Two", 10.0, 10.3),
        w("Second", 11.5, 11.9),
        w("example", 12.0, 12.5),
        w("Three", 14.0, 14.3),
        w("Final", 15.5, 15.8),
        w("phrase", 15.9, 16.3),
    ];

    let plan = Extractor::new(words, Opts::default())?.plan()?;
    assert_eq!(plan.detection, Detection::Structural);

    let anchors: Vec<_> = plan
        .segments
        .iter()
        .map(|s| (s.number_value, s.source_number.word_index))
        .collect();
    assert_eq!(anchors, vec![(1, 9), (2, 13), (3, 16)]);
    assert!(plan.segments.iter().all(|s| s.source_number.is_structural));

    let last = &plan.segments[2].segment_boundaries;
    assert!(approx(last.start, 15.5));
    assert!(approx(last.end, 16.3));
    Ok(())
}

#[test]
fn later_structural_repeat_wins_ties() -> anyhow::Result<()> {
    // "one" is announced twice with identical pacing; the second announcement is the real marker.
    let words = vec![
        w("hi", 0.0, 0.5),
        w("one", 2.0, 2.5),
        w("intro", 4.0, 4.5),
        w("one", 6.0, 6.5),
        w("apple", 8.0, 8.5),
        w("two", 10.0, 10.5),
        w("pear", 12.0, 12.5),
    ];

    let segments = extract_segments(&words, &Opts::default())?;
    assert_eq!(segments[0].source_number.word_index, 3);
    assert_eq!(segments[0].segment_boundaries.start, 8.0);
    assert_eq!(segments[0].segment_boundaries.end, 8.5);

    let opts = Opts {
        prefer_later_occurrences: false,
        ..Opts::default()
    };
    let segments = extract_segments(&words, &opts)?;
    assert_eq!(segments[0].source_number.word_index, 1);
    assert_eq!(segments[0].segment_boundaries.start, 4.0);
    Ok(())
}

#[test]
fn stray_number_after_gap_is_dropped() -> anyhow::Result<()> {
    let words = vec![
        w("one", 0.0, 0.5),
        w("a", 2.0, 2.5),
        w("two", 4.0, 4.5),
        w("b", 6.0, 6.5),
        w("five", 8.0, 8.5),
        w("c", 10.0, 10.5),
    ];
    let segments = extract_segments(&words, &Opts::default())?;
    let values: Vec<_> = segments.iter().map(|s| s.number_value).collect();
    assert_eq!(values, vec![1, 2]);

    // With "five" dropped the last section runs to the end of the transcript.
    assert_eq!(segments[1].segment_boundaries.end, 10.5);
    Ok(())
}

#[test]
fn recognizes_digits_ordinals_and_compounds() -> anyhow::Result<()> {
    let words = vec![
        w("1.", 0.0, 0.5),
        w("a", 2.0, 2.5),
        w("2nd", 4.0, 4.5),
        w("b", 6.0, 6.5),
        w("Three", 8.0, 8.5),
        w("c", 10.0, 10.5),
    ];
    let segments = extract_segments(&words, &Opts::default())?;
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0].source_number.text, "1.");
    Ok(())
}

#[test]
fn inverted_timestamps_are_rejected() {
    let words = vec![w("One", 6.0, 6.3), w("Two", 10.3, 10.0)];
    let err = extract_segments(&words, &Opts::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::InvertedTimestamp { index: 1, .. })
    ));
}

#[test]
fn transcript_without_numbers_fails() {
    let words = vec![w("hello", 0.0, 0.5), w("world", 1.0, 1.5)];
    let err = extract_segments(&words, &Opts::default()).unwrap_err();
    assert!(matches!(err, Error::NoNumbersFound));
    assert_eq!(err.to_string(), "no sequential numbers found in transcription");
}

#[test]
fn loads_asr_chunks_and_plans() -> anyhow::Result<()> {
    let json = r#"{
        "text": " One. Red apple. Two. Green pear.",
        "chunks": [
            { "text": " One.", "timestamp": [1.0, 1.5] },
            { "text": " Red", "timestamp": [3.0, 3.5] },
            { "text": " apple.", "timestamp": [3.75, 4.25] },
            { "text": " Two.", "timestamp": [6.0, 6.5] },
            { "text": " Green", "timestamp": [8.5, 9.0] },
            { "text": " pear.", "timestamp": [9.25, 9.75] }
        ]
    }"#;

    let words = transcript::from_json_str(json)?;
    let plan = Extractor::new(words, Opts::default())?.plan()?;

    assert_eq!(plan.detection, Detection::Structural);
    let bounds: Vec<_> = plan
        .segments
        .iter()
        .map(|s| (s.segment_boundaries.start, s.segment_boundaries.end))
        .collect();
    assert_eq!(bounds, vec![(3.0, 4.25), (8.5, 9.75)]);
    Ok(())
}
