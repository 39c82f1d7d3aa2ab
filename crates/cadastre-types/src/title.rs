use std::fmt;

use serde::{Deserialize, Serialize};

use crate::digest::DocumentDigest;

/// Unique identifier of a land title.
///
/// The id doubles as the ledger key, so enumeration order across the
/// registry is the lexicographic byte order of ids. Immutable once a record
/// is created.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TitleId(String);

impl TitleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for TitleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TitleId({})", self.0)
    }
}

impl fmt::Display for TitleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TitleId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TitleId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A land-title record, the unit of storage in the registry.
///
/// Serialized as flat JSON with camelCase keys; every field is required.
/// Only `owner` is mutable after creation. `document_digest` is the SHA-1
/// of the document bytes as read when the record was created and is never
/// recomputed, even when the owner changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandTitle {
    pub id: TitleId,
    pub owner: String,
    /// External registry reference number.
    pub official_number: String,
    pub area_square_meters: u64,
    /// Path of the title document on the shared document store.
    pub document_path: String,
    pub document_digest: DocumentDigest,
}

impl LandTitle {
    pub fn new(
        id: impl Into<TitleId>,
        owner: impl Into<String>,
        official_number: impl Into<String>,
        area_square_meters: u64,
        document_path: impl Into<String>,
        document_digest: DocumentDigest,
    ) -> Self {
        Self {
            id: id.into(),
            owner: owner.into(),
            official_number: official_number.into(),
            area_square_meters,
            document_path: document_path.into(),
            document_digest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_title() -> LandTitle {
        LandTitle::new(
            "TF002",
            "Ndeye Fatou Dabo",
            "6543211",
            1000,
            "/mnt/shared_dir/tf002.pdf",
            DocumentDigest::from_hex("6add312cd1ea92f19e803ee463cd7a8edc5736a8").unwrap(),
        )
    }

    #[test]
    fn wire_format_uses_camel_case_keys() {
        let json = serde_json::to_value(sample_title()).unwrap();
        let obj = json.as_object().unwrap();
        let keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        for key in [
            "id",
            "owner",
            "officialNumber",
            "areaSquareMeters",
            "documentPath",
            "documentDigest",
        ] {
            assert!(keys.contains(&key), "missing wire key {key}");
        }
        assert_eq!(obj.len(), 6);
    }

    #[test]
    fn wire_roundtrip_preserves_all_fields() {
        let title = sample_title();
        let bytes = serde_json::to_vec(&title).unwrap();
        let parsed: LandTitle = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(parsed, title);
    }

    #[test]
    fn missing_field_fails_deserialization() {
        let json = r#"{"id":"TF002","owner":"x","officialNumber":"1","areaSquareMeters":5}"#;
        let result: Result<LandTitle, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn title_id_orders_lexicographically() {
        let a = TitleId::from("TF002");
        let b = TitleId::from("TF003");
        assert!(a < b);
    }

    #[test]
    fn title_id_displays_raw() {
        assert_eq!(TitleId::from("TF002").to_string(), "TF002");
    }

    proptest! {
        #[test]
        fn wire_roundtrip_arbitrary_content(
            id in "[A-Z]{2}[0-9]{3}",
            owner in ".{0,64}",
            official_number in "[0-9]{1,12}",
            area in any::<u64>(),
            path in ".{0,128}",
            hash in any::<[u8; 20]>(),
        ) {
            let title = LandTitle::new(
                id,
                owner,
                official_number,
                area,
                path,
                DocumentDigest::from_hash(hash),
            );
            let bytes = serde_json::to_vec(&title).unwrap();
            let parsed: LandTitle = serde_json::from_slice(&bytes).unwrap();
            prop_assert_eq!(parsed, title);
        }
    }
}
