//! Clear entries use case

use crate::error::Result;
use crate::infrastructure::FileSystemRepository;

/// Remove every stored entry. The log directory and config are kept.
pub fn clear_entries(repository: &FileSystemRepository) -> Result<()> {
    repository.clear_entries()
}
