/*!
 * End-to-end quiz flow tests: vocabulary list -> session -> grading ->
 * report.
 */

use linguabot::language::Language;
use linguabot::providers::Verdict;
use linguabot::quiz::{QuizSession, SubmitOutcome, DEFAULT_QUIZ_LENGTH};
use linguabot::vocab::VocabService;

use crate::common::create_test_repository;
use crate::common::mock_generators::ScriptedGrader;

async fn build_pool(words: &[&str]) -> Vec<String> {
    let repo = create_test_repository().unwrap();
    let vocab = VocabService::new(repo);

    for word in words {
        vocab.add_word("user-1", word, Language::Romanian).await.unwrap();
    }

    vocab
        .list_words("user-1", Language::Romanian)
        .await
        .unwrap()
        .into_iter()
        .map(|item| item.word)
        .collect()
}

#[tokio::test]
async fn test_threeWordQuiz_shouldProduceFullReport() {
    let pool = build_pool(&["casă", "apă", "pâine"]).await;
    let grader = ScriptedGrader::new(vec![Verdict::Correct, Verdict::Partial, Verdict::Wrong]);

    let mut session = QuizSession::start(&pool, Language::Romanian, 3).unwrap();
    assert_eq!(session.words().len(), 3);

    let mut finished = None;
    for _ in 0..3 {
        match session.submit_answer("answer", &grader).await.unwrap() {
            SubmitOutcome::Continue { .. } => {}
            SubmitOutcome::Finished { report, .. } => finished = Some(report),
        }
    }

    let report = finished.expect("Quiz should finish after three answers");
    assert_eq!(report.total, 1.5);
    assert_eq!(report.max, 3);
    assert_eq!(report.breakdown.len(), 3);
    assert_eq!(grader.call_count(), 3);

    // Scores and index reset while the word set stays for replay
    assert_eq!(session.progress(), (1, 3));
}

#[tokio::test]
async fn test_quiz_smallPool_shouldDegradeToPoolSize() {
    let pool = build_pool(&["casă", "apă", "pâine"]).await;

    let session =
        QuizSession::start(&pool, Language::Romanian, DEFAULT_QUIZ_LENGTH).unwrap();

    // Pool of 3 with a requested length of 10 gives 3 distinct words
    assert_eq!(session.words().len(), 3);
    let mut words = session.words().to_vec();
    words.sort();
    words.dedup();
    assert_eq!(words.len(), 3);
}

#[tokio::test]
async fn test_quiz_emptyVocabList_shouldRefuseToStart() {
    let pool = build_pool(&[]).await;

    let result = QuizSession::start(&pool, Language::Romanian, DEFAULT_QUIZ_LENGTH);
    assert!(result.is_err());
}

#[tokio::test]
async fn test_quiz_sampledWords_shouldComeFromPool() {
    let pool = build_pool(&["casă", "apă", "pâine", "vin", "lapte"]).await;

    let session = QuizSession::start(&pool, Language::Romanian, 3).unwrap();
    for word in session.words() {
        assert!(pool.contains(word), "'{}' not in pool", word);
    }
}
