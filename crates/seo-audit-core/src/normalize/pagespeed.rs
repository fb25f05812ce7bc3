//! PageSpeed rows from the mobile and desktop Lighthouse results.

use serde_json::Value;

use crate::payload::access::{number_at, text_at};
use crate::report::model::PageSpeedRow;

/// Shown for any audit the payload does not carry.
pub const MISSING: &str = "—";

const DEVICES: [&str; 2] = ["mobile", "desktop"];

/// Lighthouse audit ids, in display order.
const AUDITS: [(&str, &str); 6] = [
    ("Первая отрисовка контента (FCP)", "first-contentful-paint"),
    ("Отрисовка крупного контента (LCP)", "largest-contentful-paint"),
    ("Индекс скорости (Speed Index)", "speed-index"),
    ("Время до интерактивности (TTI)", "interactive"),
    ("Общее время блокировки (TBT)", "total-blocking-time"),
    ("Совокупное смещение макета (CLS)", "cumulative-layout-shift"),
];

fn score(raw: &Value, device: &str) -> String {
    let score = number_at(
        raw,
        &[
            "checkPageSpeedMobile",
            device,
            "lighthouseResult",
            "categories",
            "performance",
            "score",
        ],
    );
    format!("{}/100", (score * 100.0).round())
}

fn audit(raw: &Value, device: &str, id: &str) -> String {
    text_at(
        raw,
        &[
            "checkPageSpeedMobile",
            device,
            "lighthouseResult",
            "audits",
            id,
            "displayValue",
        ],
        MISSING,
    )
}

pub fn page_speed(raw: &Value) -> Vec<PageSpeedRow> {
    let [mobile, desktop] = DEVICES;

    let overall = PageSpeedRow {
        metric: "Скорость загрузки".to_string(),
        mobile: score(raw, mobile),
        desktop: score(raw, desktop),
    };

    std::iter::once(overall)
        .chain(AUDITS.iter().map(|(label, id)| PageSpeedRow {
            metric: label.to_string(),
            mobile: audit(raw, mobile, id),
            desktop: audit(raw, desktop, id),
        }))
        .collect()
}
