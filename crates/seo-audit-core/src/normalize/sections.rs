//! Flat sections read directly from the payload.

use serde_json::Value;

use crate::normalize::domains::DomainSet;
use crate::payload::access::{array_at, at, bool_at, number_at, text_at};
use crate::report::model::{DomainInfo, FaviconRow, SemanticCore, SslInfo, Visibility};

const NOT_AVAILABLE: &str = "N/A";

pub const SSL_VALID: &str = "Действителен";
pub const SSL_EXPIRED: &str = "Истёк";
pub const SSL_UNKNOWN: &str = "Неизвестно";

/// Certificate status. The backend sends either a ready label or a boolean.
fn ssl_status(raw: &Value) -> String {
    match at(raw, &["sslReport", "is_expired"]) {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Bool(true)) => SSL_EXPIRED.to_string(),
        Some(Value::Bool(false)) => SSL_VALID.to_string(),
        _ => SSL_UNKNOWN.to_string(),
    }
}

pub fn ssl(raw: &Value) -> SslInfo {
    let field = |key: &str| text_at(raw, &["sslReport", key], NOT_AVAILABLE);

    SslInfo {
        owner: field("subject"),
        issuer: field("issuer"),
        valid_from: field("valid_from"),
        valid_to: field("valid_to"),
        status: ssl_status(raw),
        serial_number: field("serialNumber"),
        thumbprint: field("fingerprint"),
    }
}

pub fn domain_info(set: &DomainSet<'_>, ssl: &SslInfo, raw: &Value) -> DomainInfo {
    let primary = set.primary();
    DomainInfo {
        site: primary.name.clone(),
        site_url: primary.url.to_string(),
        has_ssl: ssl.status == SSL_VALID,
        has_robots: bool_at(raw, &["robotsReport", "exists"]),
    }
}

pub fn semantic_core(raw: &Value) -> SemanticCore {
    let count = |key: &str| number_at(raw, &["comparisonResults", key]);

    SemanticCore {
        total_requests: count("allWordsCount"),
        unique_requests: count("uniqueInFirstCount"),
        missed_requests: count("uniqueInSecondCount"),
    }
}

pub fn favicon(raw: &Value) -> Vec<FaviconRow> {
    array_at(raw, &["faviconCheck", "foundIcons"])
        .iter()
        .filter(|icon| icon.is_object())
        .map(|icon| FaviconRow {
            site: text_at(icon, &["url"], NOT_AVAILABLE),
            kind: text_at(icon, &["type"], NOT_AVAILABLE),
            size: text_at(icon, &["size"], NOT_AVAILABLE),
            method: text_at(icon, &["method"], NOT_AVAILABLE),
        })
        .collect()
}

pub fn visibility(raw: &Value) -> Visibility {
    let count = |key: &str| number_at(raw, &["vidimostData", key]);

    Visibility {
        commercial: count("vidimostCom"),
        non_commercial: count("vidimostNonCom"),
        total: count("vidimostTotal"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::RequestContext;
    use crate::observe::NoopObserver;
    use serde_json::json;

    #[test]
    fn ssl_status_accepts_labels_and_booleans() {
        let label = json!({"sslReport": {"is_expired": "Действителен"}});
        let expired = json!({"sslReport": {"is_expired": true}});
        let valid = json!({"sslReport": {"is_expired": false}});

        assert_eq!(ssl(&label).status, SSL_VALID);
        assert_eq!(ssl(&expired).status, SSL_EXPIRED);
        assert_eq!(ssl(&valid).status, SSL_VALID);
        assert_eq!(ssl(&json!({})).status, SSL_UNKNOWN);
    }

    #[test]
    fn ssl_fields_default_to_not_available() {
        let info = ssl(&json!({"sslReport": {"issuer": "R3", "serialNumber": "04AB"}}));

        assert_eq!(info.issuer, "R3");
        assert_eq!(info.serial_number, "04AB");
        assert_eq!(info.owner, NOT_AVAILABLE);
        assert_eq!(info.thumbprint, NOT_AVAILABLE);
    }

    #[test]
    fn domain_info_reflects_primary_and_flags() {
        let raw = json!({
            "domainsDashboards": {"https://a.ru/": {}, "https://b.ru/": {}},
            "sslReport": {"is_expired": false},
            "robotsReport": {"exists": true}
        });
        let set = DomainSet::resolve(
            raw["domainsDashboards"].as_object().unwrap(),
            &RequestContext::new("https://b.ru/", "Москва"),
            &NoopObserver,
        )
        .unwrap();

        let info = domain_info(&set, &ssl(&raw), &raw);

        assert_eq!(info.site, "b.ru");
        assert_eq!(info.site_url, "https://b.ru/");
        assert!(info.has_ssl);
        assert!(info.has_robots);
    }

    #[test]
    fn favicon_rows_stringify_sizes_and_skip_junk() {
        let raw = json!({"faviconCheck": {"foundIcons": [
            {"url": "https://a.ru/favicon.ico", "type": "image/x-icon", "size": 32, "method": "link"},
            "junk",
            {"url": "https://a.ru/apple.png"}
        ]}});

        let rows = favicon(&raw);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].size, "32");
        assert_eq!(rows[1].kind, NOT_AVAILABLE);
    }

    #[test]
    fn counters_default_to_zero() {
        let raw = json!({"comparisonResults": {"allWordsCount": 120}, "vidimostData": {"vidimostTotal": 7.5}});

        let core = semantic_core(&raw);
        assert_eq!(core.total_requests, 120.0);
        assert_eq!(core.unique_requests, 0.0);

        let vis = visibility(&raw);
        assert_eq!(vis.total, 7.5);
        assert_eq!(vis.commercial, 0.0);
        assert_eq!(visibility(&json!({})), Visibility::default());
    }
}
