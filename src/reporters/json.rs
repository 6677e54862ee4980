//! JSON reporter
//!
//! Outputs the full AuditResult as pretty-printed JSON. Useful for
//! machine consumption, piping to jq, or persistence by the caller.

use crate::models::AuditResult;
use anyhow::Result;

/// Render result as JSON
pub fn render(result: &AuditResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Render result as compact JSON (single line)
#[allow(dead_code)] // Public API helper
pub fn render_compact(result: &AuditResult) -> Result<String> {
    Ok(serde_json::to_string(result)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_result;

    #[test]
    fn test_json_render_valid() {
        let result = test_result();
        let json_str = render(&result).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert!(parsed["overall_score"].is_f64() || parsed["overall_score"].is_u64());
        assert_eq!(parsed["modules"].as_array().expect("modules").len(), 7);
        assert!(!parsed["recommendations"]
            .as_array()
            .expect("recommendations")
            .is_empty());
    }

    #[test]
    fn test_json_render_compact() {
        let result = test_result();
        let json_str = render_compact(&result).expect("render compact JSON");
        assert!(!json_str.contains('\n'));
        let _: serde_json::Value = serde_json::from_str(&json_str).expect("parse compact JSON");
    }

    #[test]
    fn test_json_roundtrips_to_result() {
        let result = test_result();
        let json_str = render(&result).unwrap();
        let back: AuditResult = serde_json::from_str(&json_str).unwrap();
        assert_eq!(back.overall_score, result.overall_score);
        assert_eq!(back.recommendations.len(), result.recommendations.len());
    }
}
