//! JSON persistence for the load book

use std::path::Path;

use haulcalc_domain::model::LoadBook;
use haulcalc_types::Result;

/// Load a book from a JSON file, or an empty book when the file does not
/// exist yet.
pub fn load(path: &Path) -> Result<LoadBook> {
    if !path.exists() {
        return Ok(LoadBook::default());
    }
    let content = std::fs::read_to_string(path)?;
    let book: LoadBook = serde_json::from_str(&content)?;
    Ok(book)
}

/// Save a book as pretty JSON, creating parent directories as needed.
pub fn save(book: &LoadBook, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(book)?;
    std::fs::write(path, content)?;
    Ok(())
}
