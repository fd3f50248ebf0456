//! Reading definitions and props from the command line.

use std::path::Path;

use sarto_atelier_core::{props_from_json, CvaDefinition, Props};

use crate::error::SartoError;

/// Read and decode a JSON variant definition.
pub fn read_definition(path: &Path) -> Result<CvaDefinition, SartoError> {
    let source = std::fs::read_to_string(path).map_err(|source| SartoError::io(path, source))?;
    CvaDefinition::from_json(&source).map_err(|source| SartoError::Schema {
        path: path.to_path_buf(),
        source,
    })
}

/// Decode the `--props` argument. Absent means no props.
pub fn parse_props(props: Option<&str>) -> Result<Props, SartoError> {
    match props {
        Some(json) => props_from_json(json).map_err(SartoError::Props),
        None => Ok(Props::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sarto_atelier_core::PropValue;

    #[test]
    fn test_parse_props() {
        let props = parse_props(Some(r#"{"$size":"sm","disabled":true}"#)).unwrap();
        assert_eq!(props.get("$size"), Some(&PropValue::from("sm")));
        assert!(parse_props(None).unwrap().is_empty());
        assert!(matches!(parse_props(Some("[]")), Err(SartoError::Props(_))));
    }

    #[test]
    fn test_missing_definition() {
        let err = read_definition(Path::new("does/not/exist.json")).unwrap_err();
        assert!(err.to_string().starts_with("failed to read does/not/exist.json"));
    }
}
