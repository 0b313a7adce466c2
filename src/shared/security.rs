use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of any single input file (fact record, ledger, group file, history log)
pub const MAX_FILE_SIZE: u64 = 64 * 1024 * 1024;

/// Validates that a path exists and is a directory
///
/// Symbolic links are followed: the systems root on the CI runners is
/// usually a link into a checkout.
///
/// # Errors
/// Returns an error if the path doesn't exist or isn't a directory
pub fn validate_directory(path: &Path, description: &str) -> Result<()> {
    let metadata = fs::metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "{} {} does not exist or is not readable: {}",
            description,
            path.display(),
            e
        )
    })?;

    if !metadata.is_dir() {
        anyhow::bail!("{} {} is not a directory", description, path.display());
    }

    Ok(())
}

/// Validates that a path exists and is a regular file
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist
/// - The path is not a regular file
pub fn validate_regular_file(path: &Path, description: &str) -> Result<()> {
    let metadata = fs::metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", description, e))?;

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    Ok(())
}

/// Validates file size is within acceptable limits
///
/// # Errors
/// Returns an error if the file size exceeds the maximum
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "{} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

/// Reads a text file after checking it is a regular file of sane size
pub fn read_text_file(path: &Path, description: &str) -> Result<String> {
    validate_regular_file(path, description)?;
    let size = fs::metadata(path)
        .map(|m| m.len())
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", description, e))?;
    validate_file_size(size, path, MAX_FILE_SIZE)?;

    let bytes = fs::read(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", description, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_validate_directory_success() {
        let temp_dir = TempDir::new().unwrap();
        assert!(validate_directory(temp_dir.path(), "systems root").is_ok());
    }

    #[test]
    fn test_validate_directory_missing() {
        let result = validate_directory(Path::new("/nonexistent/systems"), "systems root");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("does not exist or is not readable"));
    }

    #[test]
    fn test_validate_directory_is_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("db.csv");
        fs::write(&file_path, "x").unwrap();

        let result = validate_directory(&file_path, "systems root");
        assert!(result.unwrap_err().to_string().contains("is not a directory"));
    }

    #[test]
    fn test_validate_regular_file_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");
        fs::write(&file_path, "test").unwrap();

        assert!(validate_regular_file(&file_path, "test file").is_ok());
    }

    #[test]
    fn test_validate_regular_file_is_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = validate_regular_file(temp_dir.path(), "test directory");
        assert!(result.unwrap_err().to_string().contains("not a regular file"));
    }

    #[test]
    fn test_validate_file_size_exceeds_limit() {
        let path = PathBuf::from("/test/file.txt");
        let result = validate_file_size(MAX_FILE_SIZE + 1, &path, MAX_FILE_SIZE);
        assert!(result.unwrap_err().to_string().contains("too large"));
    }

    #[test]
    fn test_read_text_file_tolerates_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("history");
        fs::write(&file_path, b"2024-01-01 10:00:00+00:00;root;\xff;switch\n").unwrap();

        let content = read_text_file(&file_path, "history log").unwrap();
        assert!(content.contains(";root;"));
    }
}
