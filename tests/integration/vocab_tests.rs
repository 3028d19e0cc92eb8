/*!
 * Integration tests for vocabulary list management.
 */

use linguabot::language::Language;
use linguabot::vocab::{AddOutcome, VocabService};

use crate::common::create_test_repository;

#[tokio::test]
async fn test_addListRemove_shouldRoundTrip() {
    let repo = create_test_repository().unwrap();
    let vocab = VocabService::new(repo);

    vocab.add_word("user-1", "casă", Language::Romanian).await.unwrap();
    vocab.add_word("user-1", "apă", Language::Romanian).await.unwrap();

    let list = vocab.list_words("user-1", Language::Romanian).await.unwrap();
    assert_eq!(list.len(), 2);

    vocab.remove_word("user-1", "casă").await.unwrap();
    let list = vocab.list_words("user-1", Language::Romanian).await.unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].word, "apă");
}

#[tokio::test]
async fn test_addWord_duplicate_shouldReportAlreadyInList() {
    let repo = create_test_repository().unwrap();
    let vocab = VocabService::new(repo);

    let first = vocab.add_word("user-1", "casă", Language::Romanian).await.unwrap();
    let second = vocab.add_word("user-1", "casă", Language::Romanian).await.unwrap();

    assert_eq!(first, AddOutcome::Added);
    assert_eq!(second, AddOutcome::AlreadyInList);

    // The duplicate did not create a second row
    let list = vocab.list_words("user-1", Language::Romanian).await.unwrap();
    assert_eq!(list.len(), 1);
}

#[tokio::test]
async fn test_listWords_shouldBeScopedToUser() {
    let repo = create_test_repository().unwrap();
    let vocab = VocabService::new(repo);

    vocab.add_word("user-1", "casă", Language::Romanian).await.unwrap();
    vocab.add_word("user-2", "apă", Language::Romanian).await.unwrap();

    let list = vocab.list_words("user-1", Language::Romanian).await.unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].word, "casă");
}
