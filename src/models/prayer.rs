//! Daily prayer-campaign document

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPrayer {
    #[serde(default)]
    pub prayer: String,
    #[serde(default)]
    pub pray_content: String,
    #[serde(default)]
    pub recitation: String,
    #[serde(default)]
    pub declaration: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let doc: DailyPrayer = serde_json::from_str(r#"{"prayer": "김은혜"}"#).unwrap();
        assert_eq!(doc.prayer, "김은혜");
        assert_eq!(doc.declaration, "");
    }
}
