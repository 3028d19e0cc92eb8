/*!
 * Main test entry point for the linguabot test suite
 */

// Import common test utilities
pub mod common;

// Import integration tests
mod integration {
    // Cache-or-generate lookup tests
    pub mod lookup_tests;

    // End-to-end quiz flow tests
    pub mod quiz_flow_tests;

    // Vocabulary list tests
    pub mod vocab_tests;
}
