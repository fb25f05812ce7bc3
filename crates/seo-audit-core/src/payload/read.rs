use anyhow::{Context, Result};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::{fs, path::Path};

use crate::report::model::{PayloadHash, PayloadInfo};

/// A backend response loaded for normalization.
///
/// Holds the parsed document and a cryptographic fingerprint of the exact
/// bytes it was parsed from.
#[derive(Debug, Clone)]
pub struct PayloadContext {
    /// Optional source path (informational only).
    pub path: Option<String>,

    /// Parsed payload.
    pub raw: Value,

    /// Size of the payload in bytes.
    pub size_bytes: u64,

    /// Hash algorithm used for fingerprinting.
    pub hash_alg: String,

    /// Hex-encoded hash of the payload bytes.
    pub hash_hex: String,
}

impl PayloadContext {
    /// Split into the parsed document and its report-facing metadata.
    pub fn into_parts(self) -> (Value, PayloadInfo) {
        let info = PayloadInfo {
            path: self.path,
            size_bytes: self.size_bytes,
            hash: PayloadHash {
                algorithm: self.hash_alg,
                value: self.hash_hex,
            },
        };
        (self.raw, info)
    }
}

/// Read a saved backend response from disk.
pub fn read_payload(path: &Path) -> Result<PayloadContext> {
    let bytes =
        fs::read(path).with_context(|| format!("failed to read payload: {}", path.display()))?;

    payload_from_bytes(&bytes, Some(path.display().to_string()))
        .with_context(|| format!("failed to load payload: {}", path.display()))
}

/// Parse payload bytes and fingerprint them.
///
/// The fingerprint depends only on the bytes, so two identical responses
/// always carry the same hash.
pub fn payload_from_bytes(bytes: &[u8], path: Option<String>) -> Result<PayloadContext> {
    let raw: Value = serde_json::from_slice(bytes).context("payload is not valid JSON")?;

    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let digest = hasher.finalize();

    Ok(PayloadContext {
        path,
        raw,
        size_bytes: bytes.len() as u64,
        hash_alg: "sha256".to_string(),
        hash_hex: hex::encode(digest),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_payload(data: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(data).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn reads_and_parses_payload() {
        let data = br#"{"domainsDashboards":{"https://a.ru/":{"top1":3}}}"#;
        let file = temp_payload(data);

        let ctx = read_payload(file.path()).expect("payload read succeeds");

        assert_eq!(ctx.size_bytes, data.len() as u64);
        assert_eq!(ctx.hash_alg, "sha256");
        assert_eq!(ctx.hash_hex.len(), 64);
        assert_eq!(ctx.raw["domainsDashboards"]["https://a.ru/"]["top1"], 3);
        assert!(ctx.path.is_some());
    }

    #[test]
    fn hash_is_stable_for_identical_bytes() {
        let a = payload_from_bytes(b"{}", None).unwrap();
        let b = payload_from_bytes(b"{}", None).unwrap();
        let c = payload_from_bytes(b"{ }", None).unwrap();

        assert_eq!(a.hash_hex, b.hash_hex);
        assert_ne!(a.hash_hex, c.hash_hex);
        // echo -n "{}" | sha256sum
        assert_eq!(
            a.hash_hex,
            "44136fa355b3678a1146ad16f7e8649e94fb4fc21fe77e8310c060f61caaff8a"
        );
    }

    #[test]
    fn invalid_json_is_an_error() {
        let file = temp_payload(b"not json");
        let err = read_payload(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("not valid JSON"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = read_payload(Path::new("/definitely/missing/payload.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read payload"));
    }

    #[test]
    fn into_parts_keeps_fingerprint() {
        let ctx = payload_from_bytes(b"[]", Some("x.json".into())).unwrap();
        let hash = ctx.hash_hex.clone();
        let (raw, info) = ctx.into_parts();

        assert!(raw.is_array());
        assert_eq!(info.path.as_deref(), Some("x.json"));
        assert_eq!(info.size_bytes, 2);
        assert_eq!(info.hash.algorithm, "sha256");
        assert_eq!(info.hash.value, hash);
    }
}
