use question_extract::config::{ClassifierKind, Config};
use question_extract::models::{load_pages, ExtractedPaper, Subject};
use question_extract::segment::{
    assemble_questions, backfill_options, extract_questions, flatten_pages, is_question_start,
    SOLUTION_INDICATORS,
};
use question_extract::services::{classify_questions, ClassifyOptions, KeywordSubjectClassifier};
use question_extract::{App, AppError, ExtractionFlow};
use std::path::PathBuf;

const SCENARIO_A: [&str; 7] = [
    "Instructions: read carefully.",
    "1. What is the value of g?",
    "(a) 9.8",
    "(b) 10",
    "Solution: g = 9.8 m/s^2",
    "2. Find the ratio of masses.",
    "(a) 1:2",
];

/// 混合了题目、选项、续行和答案区的段落
fn mixed_paragraphs() -> Vec<&'static str> {
    vec![
        "JEE Main 2024 - Paper 1",
        "1. A particle moves along a circle of radius 2 m.",
        "Its speed increases uniformly with time.",
        "(a) 2 m/s",
        "(b) 4 m/s",
        "Q2. Which of the following is an aromatic compound?",
        "(a) Benzene",
        "Answer Key",
        "1. a",
        "2. a",
        "3. Calculate the integral of x^2 from 0 to 1.",
        "Short line",
        "Question 4) The ratio of the roots of the equation is",
    ]
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("question_extract_{}_{}", std::process::id(), name))
}

#[test]
fn test_scenario_a_excludes_preamble_and_solution() {
    let questions = assemble_questions(SCENARIO_A);

    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].text, "1. What is the value of g?");
    assert_eq!(questions[0].options, vec!["9.8", "10"]);
    assert_eq!(questions[1].text, "2. Find the ratio of masses.");
    assert_eq!(questions[1].options, vec!["1:2"]);
}

#[test]
fn test_scenario_b_answer_key_row_never_starts_question() {
    assert!(!is_question_start("3. b"));
    let questions = assemble_questions(["2. Find the ratio of masses.", "3. b"]);
    assert_eq!(questions.len(), 1);
}

#[tokio::test]
async fn test_scenario_c_no_classifier() {
    let mut questions = assemble_questions(SCENARIO_A);
    let stats = classify_questions::<KeywordSubjectClassifier>(
        &mut questions,
        None,
        ClassifyOptions::default(),
    )
    .await;

    assert_eq!(questions.len(), 2);
    assert!(questions.iter().all(|q| q.subject.is_none()));
    assert_eq!(stats.unlabeled, 2);
}

#[test]
fn test_scenario_d_backfill() {
    let mut questions = assemble_questions([
        "1. What is the value of g on the moon?",
        "2. Find the ratio of masses.",
        "(a) 1:2",
        "(b) 2:1",
    ]);
    backfill_options(&mut questions);

    assert_eq!(questions[0].options.len(), 4);
    assert_eq!(questions[0].options[3], "Option D for question 1");
    assert_eq!(questions[1].options, vec!["1:2", "2:1"]);
}

#[test]
fn test_count_matches_question_starts_and_numbers_are_dense() {
    let paragraphs = mixed_paragraphs();
    let expected = paragraphs.iter().filter(|p| is_question_start(p)).count();
    let questions = assemble_questions(paragraphs.iter().copied());

    assert_eq!(questions.len(), expected);
    assert_eq!(expected, 4);
    for (i, q) in questions.iter().enumerate() {
        assert_eq!(q.number, (i + 1).to_string());
    }
}

#[test]
fn test_count_property_over_prefixes() {
    let paragraphs = mixed_paragraphs();
    for end in 0..=paragraphs.len() {
        let slice = &paragraphs[..end];
        let expected = slice.iter().filter(|p| is_question_start(p)).count();
        let questions = assemble_questions(slice.iter().copied());
        assert_eq!(questions.len(), expected, "prefix of {} paragraphs", end);
    }
}

#[test]
fn test_short_paragraphs_never_start_questions() {
    for len in 0..20 {
        let paragraph: String = "what is 1. Q2) find".chars().cycle().take(len).collect();
        assert!(!is_question_start(&paragraph), "{:?}", paragraph);
    }
}

#[test]
fn test_solution_indicators_always_reject() {
    let stems = [
        "1. What is the value of g at the surface?",
        "Q7. Calculate the ratio of specific heats",
        "Find which of these is the correct option",
    ];
    for indicator in SOLUTION_INDICATORS {
        for stem in stems {
            let upper = format!("{} {}", indicator.to_uppercase(), stem);
            let lower = format!("{} {}", stem, indicator);
            assert!(!is_question_start(&upper), "{}", upper);
            assert!(!is_question_start(&lower), "{}", lower);
        }
    }
}

#[test]
fn test_text_lines_reproduce_continuations() {
    let questions = assemble_questions(mixed_paragraphs());
    let first: Vec<&str> = questions[0].text.lines().collect();
    assert_eq!(
        first,
        vec![
            "1. A particle moves along a circle of radius 2 m.",
            "Its speed increases uniformly with time.",
        ]
    );
    // "Answer Key" 标记行被丢弃，其后的键行按原样作为续行
    assert_eq!(
        questions[1].text,
        "Q2. Which of the following is an aromatic compound?\n1. a\n2. a"
    );
    assert_eq!(questions[2].text, "3. Calculate the integral of x^2 from 0 to 1.\nShort line");
}

#[test]
fn test_continuations_are_appended_verbatim() {
    let stem = "1. What is the value of g at the surface?";
    let bodies = [
        "The mixture is then heated by chemical means.",
        "Consider the cis and trans. isomers of the compound.",
        "A sealed can holds an aerosol.",
        "where the correct option count is unknown",
        "3 b",
        "12. d",
    ];
    for body in bodies {
        assert!(!is_question_start(body), "{}", body);
        let questions = assemble_questions([stem, body]);
        assert_eq!(questions.len(), 1, "{}", body);
        assert_eq!(questions[0].text, format!("{}\n{}", stem, body));
    }

    let questions = assemble_questions(std::iter::once(stem).chain(bodies));
    let lines: Vec<&str> = questions[0].text.lines().skip(1).collect();
    assert_eq!(lines, bodies);
}

#[test]
fn test_backfill_twice_equals_once() {
    let mut once = assemble_questions(mixed_paragraphs());
    backfill_options(&mut once);
    let mut twice = once.clone();
    backfill_options(&mut twice);
    assert_eq!(once, twice);
}

#[test]
fn test_pages_flatten_across_page_breaks() {
    let pages = ["1. What is the value of g?\n(a) 9.8", "(b) 10\n\n"];
    assert_eq!(flatten_pages(&pages).len(), 3);
    let questions = extract_questions(&pages);
    assert_eq!(questions[0].options, vec!["9.8", "10"]);
}

#[tokio::test]
async fn test_flow_classifies_mixed_paper() {
    let classifier = KeywordSubjectClassifier::new();
    let flow = ExtractionFlow::new(Some(&classifier), ClassifyOptions::default());
    let pages = [mixed_paragraphs().join("\n")];
    let outcome = flow.run(&pages).await;

    let subjects: Vec<Option<Subject>> = outcome.questions.iter().map(|q| q.subject).collect();
    assert_eq!(
        subjects,
        vec![
            Some(Subject::Physics),
            Some(Subject::Chemistry),
            Some(Subject::Mathematics),
            Some(Subject::Mathematics),
        ]
    );
    assert!(outcome.questions.iter().all(|q| !q.options.is_empty()));
}

#[tokio::test]
async fn test_app_end_to_end() {
    let input = temp_path("e2e_pages.txt");
    let output = temp_path("e2e_out.json");
    std::fs::write(&input, SCENARIO_A[..4].join("\n") + "\u{000C}" + &SCENARIO_A[4..].join("\n"))
        .unwrap();

    let config = Config {
        input_path: input.to_string_lossy().to_string(),
        output_path: output.to_string_lossy().to_string(),
        classifier: ClassifierKind::None,
        ..Default::default()
    };
    let paper = App::initialize(config).run().await.unwrap();

    assert_eq!(paper.questions.len(), 2);
    assert!(paper.classifier.is_none());

    let written: ExtractedPaper =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(written.questions, paper.questions);
    assert_eq!(written.questions[0].options, vec!["9.8", "10"]);

    let _ = std::fs::remove_file(&input);
    let _ = std::fs::remove_file(&output);
}

#[test]
fn test_app_degrades_when_llm_has_no_key() {
    let config = Config {
        classifier: ClassifierKind::Llm,
        llm_api_key: None,
        ..Default::default()
    };
    let app = App::initialize(config);
    assert!(app.classifier_name().is_none());
}

#[tokio::test]
async fn test_json_page_document_with_null_pages() {
    let input = temp_path("null_pages.json");
    std::fs::write(&input, r#"{"source": "exam.pdf", "pages": null}"#).unwrap();

    let err = load_pages(&input).await.unwrap_err();
    assert!(matches!(err, AppError::Input(_)));

    let _ = std::fs::remove_file(&input);
}

#[test]
fn test_page_loader_blocking() {
    let input = temp_path("blocking_pages.json");
    std::fs::write(&input, r#"{"pages": ["1. What is the value of g?", "(a) 9.8"]}"#).unwrap();

    let pages = tokio_test::block_on(load_pages(&input)).unwrap();
    assert_eq!(pages.pages.len(), 2);
    assert!(pages.source.ends_with("blocking_pages.json"));

    let _ = std::fs::remove_file(&input);
}
