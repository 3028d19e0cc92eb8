/*!
 * Integration tests for the cache-or-generate lookup service.
 */

use std::sync::atomic::Ordering;
use std::time::{Duration, Instant};

use linguabot::language::Language;
use linguabot::lookup::LookupService;

use crate::common::create_test_repository;
use crate::common::mock_generators::MockGenerator;

#[tokio::test]
async fn test_wordLookup_calledTwice_shouldGenerateOnce() {
    let repo = create_test_repository().unwrap();
    let generator = MockGenerator::working();
    let calls = generator.counter();
    let lookup = LookupService::new(repo, generator);

    let first = lookup.word("casă", Language::Romanian).await.unwrap();
    let second = lookup.word("casă", Language::Romanian).await.unwrap();

    assert_eq!(first.translation, "casă-translated");
    assert_eq!(second.translation, first.translation);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_wordLookup_keyVariants_shouldShareOneCacheEntry() {
    let repo = create_test_repository().unwrap();
    let generator = MockGenerator::working();
    let calls = generator.counter();
    let lookup = LookupService::new(repo, generator);

    // Punctuation and case variants share one cache key, so only the
    // first call reaches the generator
    let record = lookup.word("Casă,", Language::Romanian).await.unwrap();
    lookup.word("casă", Language::Romanian).await.unwrap();
    lookup.word("casă!", Language::Romanian).await.unwrap();

    assert_eq!(record.word, "casă");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_wordLookup_generatorFailure_shouldLeaveCacheEmpty() {
    let repo = create_test_repository().unwrap();
    let lookup = LookupService::new(repo.clone(), MockGenerator::failing());

    let result = lookup.word("casă", Language::Romanian).await;
    assert!(result.is_err());

    // Nothing was persisted for the failed generation
    let cached = repo
        .get_word_translation("casă", Language::Romanian)
        .await
        .unwrap();
    assert!(cached.is_none());

    // A working generator can now fill the entry
    let lookup = LookupService::new(repo, MockGenerator::working());
    let record = lookup.word("casă", Language::Romanian).await.unwrap();
    assert_eq!(record.translation, "casă-translated");
}

#[tokio::test]
async fn test_sentenceLookup_shouldScopeByStory() {
    let repo = create_test_repository().unwrap();
    let lookup = LookupService::new(repo.clone(), MockGenerator::working());

    let in_story_1 = lookup
        .sentence("Am fost la piață.", Language::Romanian, "story-1")
        .await
        .unwrap();
    assert_eq!(in_story_1, "Am fost la piață. [translated]");

    // Different story, independent cache entry
    let hit = repo
        .get_sentence_translation("Am fost la piață.", Language::Romanian, "story-2")
        .await
        .unwrap();
    assert!(hit.is_none());
}

#[tokio::test]
async fn test_lyricLookup_shouldReturnTranslationAndMeaning() {
    let repo = create_test_repository().unwrap();
    let lookup = LookupService::new(repo, MockGenerator::working());

    let record = lookup
        .lyric("Dragostea din tei", Language::Romanian, "song-1", "Dragostea din tei")
        .await
        .unwrap();

    assert_eq!(record.translation, "Dragostea din tei [translated]");
    assert_eq!(record.meaning, "Dragostea din tei [meaning]");
}

#[tokio::test]
async fn test_minRevealDelay_shouldHoldFastCacheHits() {
    let repo = create_test_repository().unwrap();
    let lookup = LookupService::new(repo, MockGenerator::working())
        .with_min_reveal_delay(Duration::from_millis(50));

    // Warm the cache
    lookup
        .sentence("Bună!", Language::Romanian, "story-1")
        .await
        .unwrap();

    // The cache hit still takes at least the configured floor
    let started = Instant::now();
    lookup
        .sentence("Bună!", Language::Romanian, "story-1")
        .await
        .unwrap();
    assert!(started.elapsed() >= Duration::from_millis(50));
}
