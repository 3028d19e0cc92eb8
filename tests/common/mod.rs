/*!
 * Common test utilities for the linguabot test suite
 */

use anyhow::Result;
use linguabot::database::Repository;

// Re-export the mock generators module
pub mod mock_generators;

/// Creates a repository over a fresh in-memory database
pub fn create_test_repository() -> Result<Repository> {
    Repository::new_in_memory()
}
