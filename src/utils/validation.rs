use crate::utils::error::{ConverterError, Result};
use std::path::{Component, Path, PathBuf};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let display = path.to_string_lossy();

    if display.is_empty() {
        return Err(ConverterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: display.into_owned(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if display.contains('\0') {
        return Err(ConverterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: display.into_owned(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// The converter writes the whole output in one go, so pointing it at its own
/// input would clobber the export.
pub fn validate_distinct_paths(input: &Path, output: &Path) -> Result<()> {
    if normalize_path(input) == normalize_path(output) {
        return Err(ConverterError::ConfigValidationError {
            field: "output".to_string(),
            message: format!(
                "output path '{}' is the same as the input path",
                output.display()
            ),
        });
    }
    Ok(())
}

/// Lexically drop `.` segments and fold `dir/..` pairs. Does not touch the filesystem.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(normalized.components().next_back(), Some(Component::Normal(_))) {
                    normalized.pop();
                } else {
                    normalized.push(component.as_os_str());
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value
        .as_ref()
        .ok_or_else(|| ConverterError::MissingConfigError {
            field: field_name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input", Path::new("export.csv")).is_ok());
        assert!(validate_path("input", Path::new("")).is_err());
        assert!(validate_path("input", Path::new("bad\0name.csv")).is_err());
    }

    #[test]
    fn test_validate_distinct_paths() {
        assert!(validate_distinct_paths(Path::new("in.csv"), Path::new("out.csv")).is_ok());

        let err =
            validate_distinct_paths(Path::new("same.csv"), Path::new("same.csv")).unwrap_err();
        assert!(matches!(err, ConverterError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_distinct_paths_sees_through_dot_segments() {
        assert!(validate_distinct_paths(Path::new("in.csv"), Path::new("./in.csv")).is_err());
        assert!(validate_distinct_paths(
            Path::new("exports/in.csv"),
            Path::new("exports/../exports/in.csv")
        )
        .is_err());
        assert!(validate_distinct_paths(Path::new("../in.csv"), Path::new("in.csv")).is_ok());
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(Path::new("./a/./b.csv")), PathBuf::from("a/b.csv"));
        assert_eq!(normalize_path(Path::new("a/../b.csv")), PathBuf::from("b.csv"));
        assert_eq!(normalize_path(Path::new("../b.csv")), PathBuf::from("../b.csv"));
        assert_eq!(normalize_path(Path::new("/data/./x.csv")), PathBuf::from("/data/x.csv"));
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some(PathBuf::from("in.csv"));
        let absent: Option<PathBuf> = None;

        assert!(validate_required_field("input.path", &present).is_ok());
        match validate_required_field("input.path", &absent) {
            Err(ConverterError::MissingConfigError { field }) => assert_eq!(field, "input.path"),
            other => panic!("expected MissingConfigError, got {:?}", other),
        }
    }
}
