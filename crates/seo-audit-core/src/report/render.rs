use crate::report::model::AuditEnvelope;

pub fn render_text(envelope: &AuditEnvelope) -> String {
    let report = &envelope.report;
    let mut out = String::new();

    out.push_str(&format!("{} {}\n", envelope.tool.name, envelope.tool.version));
    out.push_str(&format!(
        "Payload: {} bytes, {} {}\n",
        envelope.payload.size_bytes, envelope.payload.hash.algorithm, envelope.payload.hash.value
    ));
    out.push_str(&format!(
        "Site: {} ({})\n",
        report.domain_info.site, envelope.context.city
    ));

    out.push_str("Domains:\n");
    for (row, age) in report.traffic.iter().zip(&report.competitors) {
        out.push_str(&format!(
            "  - {} [{}] age: {}, top10: {}, visits/day: {}\n",
            row.site, row.cms, age.age, row.top10, row.traffic
        ));
    }

    let season = &report.seasonality;
    match (season.labels.first(), season.labels.last()) {
        (Some(first), Some(last)) => out.push_str(&format!(
            "Seasonality: {first}..{last}, commercial {}, non-commercial {}\n",
            season.commercial.iter().sum::<f64>(),
            season.non_commercial.iter().sum::<f64>()
        )),
        _ => out.push_str("Seasonality: no data\n"),
    }

    if let Some(speed) = report.page_speed.first() {
        out.push_str(&format!(
            "PageSpeed: mobile {}, desktop {}\n",
            speed.mobile, speed.desktop
        ));
    }

    out.push_str(&format!("SSL: {}\n", report.ssl.status));

    let issues = &report.robots_issues;
    out.push_str(&format!(
        "Robots/sitemap issues: {} critical, {} warnings, {} recommendations\n",
        issues.critical.len(),
        issues.warnings.len(),
        issues.recommendations.len()
    ));

    let keywords = &report.semantic_keywords;
    out.push_str(&format!("Keywords: {}\n", keywords.total));
    for row in keywords.data.iter().take(5) {
        out.push_str(&format!(
            "  {}. {} [{}] {}\n",
            row.id, row.keyword, row.kind, row.frequency
        ));
    }
    out
}
