//! robots.txt and sitemap diagnostics.
//!
//! Builds fixed-shape tables straight from the `robotsReport` and
//! `sitemapReport` counters, plus three issue lists. When robots and sitemap
//! report nothing at all, a single "no issues" row keeps the tables from
//! rendering empty.

use serde_json::Value;

use crate::observe::{Event, Observer};
use crate::payload::access::{
    array_at, as_number, as_text, at, bool_at, flag_at, number_at, object_at, text_at, texts_at,
};
use crate::report::model::{
    Cell, DiagnosticRow, Issue, RecommendationRow, RobotsIssues, RobotsSummary, RobotsTables,
    SitemapTables, StatusCodeRow, Table,
};

const ROBOTS: &str = "robotsReport";
const SITEMAP: &str = "sitemapReport";
const NOT_AVAILABLE: &str = "N/A";

const OK: &str = "✅";
const WARN: &str = "⚠️";
const FAIL: &str = "❌";

/// `part` as a percentage of `whole`, one decimal place. `0` when `whole` is not positive.
pub fn share(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        (part / whole * 1000.0).round() / 10.0
    } else {
        0.0
    }
}

fn robots(raw: &Value, key: &str) -> f64 {
    number_at(raw, &[ROBOTS, key])
}

fn robots_stat(raw: &Value, key: &str) -> f64 {
    number_at(raw, &[ROBOTS, "stats", key])
}

fn sitemap(raw: &Value, key: &str) -> f64 {
    number_at(raw, &[SITEMAP, key])
}

fn yes_no(flag: bool) -> Cell {
    Cell::from(if flag { "Да" } else { "Нет" })
}

fn row(label: &str, value: impl Into<Cell>, status: &str) -> DiagnosticRow {
    DiagnosticRow {
        label: label.to_string(),
        value: value.into(),
        status: status.to_string(),
    }
}

/// Text of an issue entry: the string itself, or the first descriptive field of an object.
fn issue_text(entry: &Value) -> Option<String> {
    as_text(entry).or_else(|| {
        ["description", "message", "text", "title"]
            .iter()
            .find_map(|k| entry.get(*k).and_then(as_text))
    })
}

fn issue_texts(raw: &Value, path: &[&str]) -> Vec<String> {
    array_at(raw, path).iter().filter_map(issue_text).collect()
}

/// Sitemap HTTP status: explicit when reported, otherwise 200 if the sitemap listed URLs.
fn sitemap_status(raw: &Value) -> f64 {
    at(raw, &[SITEMAP, "statusCode"])
        .and_then(as_number)
        .unwrap_or_else(|| if sitemap(raw, "totalUrls") > 0.0 { 200.0 } else { 0.0 })
}

pub fn robots_summary(raw: &Value) -> RobotsSummary {
    RobotsSummary {
        http_status: robots(raw, "statusCode"),
        found: bool_at(raw, &[ROBOTS, "exists"]),
        has_errors: flag_at(raw, &[ROBOTS, "isValid"]) == Some(false),
        errors_list: issue_texts(raw, &[ROBOTS, "errors"]),
        warnings_list: issue_texts(raw, &[ROBOTS, "warnings"]),
        suggestions_list: issue_texts(raw, &[ROBOTS, "suggestions"]),
        content: text_at(raw, &[ROBOTS, "content"], ""),
        sitemap_url: texts_at(raw, &[ROBOTS, "directives", "sitemaps"])
            .into_iter()
            .next()
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        sitemap_exists: sitemap(raw, "totalUrls") > 0.0,
        sitemap_status: sitemap_status(raw),
        total_sitemaps: sitemap(raw, "totalSitemaps"),
        sitemap_urls: sitemap(raw, "totalUrls"),
        checked_urls: sitemap(raw, "checkedUrls"),
        successful_urls: sitemap(raw, "successfulUrls"),
        duplicates: sitemap(raw, "duplicateUrls"),
        inaccessible: sitemap(raw, "failedUrls"),
        blocked: sitemap(raw, "blockedUrls"),
    }
}

fn http_status_label(code: f64) -> &'static str {
    match code as i64 {
        0 => "",
        200..=299 => OK,
        300..=399 => WARN,
        _ => FAIL,
    }
}

fn count_status(count: usize, bad: &'static str) -> &'static str {
    if count == 0 { OK } else { bad }
}

pub fn robots_tables(raw: &Value, summary: &RobotsSummary) -> RobotsTables {
    let sitemap_directives = array_at(raw, &[ROBOTS, "directives", "sitemaps"]).len() as f64;

    let general = Table::new(
        "Данные robots.txt",
        vec![
            row("Всего строк", robots_stat(raw, "totalLines"), ""),
            row("User-Agent директив", robots_stat(raw, "userAgents"), ""),
            row("Правил Disallow", robots_stat(raw, "disallowRules"), ""),
            row("Правил Allow", robots_stat(raw, "allowRules"), ""),
            row("Sitemap в robots.txt", sitemap_directives, ""),
        ],
    );

    let status = Table::new(
        "Статус проверки",
        vec![
            row(
                "HTTP статус robots.txt",
                summary.http_status,
                http_status_label(summary.http_status),
            ),
            row(
                "robots.txt найден",
                yes_no(summary.found),
                if summary.found { OK } else { FAIL },
            ),
            row(
                "Синтаксис корректен",
                yes_no(!summary.has_errors),
                if summary.has_errors { FAIL } else { OK },
            ),
            row(
                "Ошибки",
                summary.errors_list.len() as f64,
                count_status(summary.errors_list.len(), FAIL),
            ),
            row(
                "Предупреждения",
                summary.warnings_list.len() as f64,
                count_status(summary.warnings_list.len(), WARN),
            ),
            row(
                "Рекомендации",
                summary.suggestions_list.len() as f64,
                "",
            ),
            row(
                "Sitemap доступна",
                yes_no(summary.sitemap_exists),
                if summary.sitemap_exists { OK } else { WARN },
            ),
            row(
                "HTTP статус sitemap",
                summary.sitemap_status,
                http_status_label(summary.sitemap_status),
            ),
        ],
    );

    let seo = Table::new(
        "SEO-анализ",
        object_at(raw, &[ROBOTS, "seo"])
            .into_iter()
            .flatten()
            .filter_map(|(flag, value)| match value {
                Value::Bool(b) => Some(row(flag, yes_no(*b), if *b { OK } else { WARN })),
                Value::Number(_) => as_number(value).map(|n| row(flag, n, "")),
                Value::String(s) => Some(row(flag, s.as_str(), "")),
                _ => None,
            })
            .collect(),
    );

    RobotsTables {
        general,
        status,
        seo,
    }
}

fn issue_list<'a>(
    entries: impl IntoIterator<Item = &'a Value>,
    category: &str,
    prefix: &str,
) -> Vec<Issue> {
    entries
        .into_iter()
        .filter_map(|entry| {
            let description = issue_text(entry)?;
            let title = entry.get("title").and_then(as_text);
            Some((title, description))
        })
        .enumerate()
        .map(|(idx, (title, description))| {
            let id = idx as u32 + 1;
            Issue {
                id,
                category: category.to_string(),
                title: title.unwrap_or_else(|| format!("{prefix} {id}")),
                description,
            }
        })
        .collect()
}

pub fn robots_issues(raw: &Value, observer: &dyn Observer) -> RobotsIssues {
    let suggestions = array_at(raw, &[ROBOTS, "suggestions"])
        .iter()
        .chain(array_at(raw, &[SITEMAP, "recommendations"]));

    let mut issues = RobotsIssues {
        critical: issue_list(
            array_at(raw, &[ROBOTS, "errors"]),
            "❌ Ошибка",
            "Критическая проблема",
        ),
        warnings: issue_list(
            array_at(raw, &[ROBOTS, "warnings"]),
            "⚠️ Предупреждение",
            "Внимание",
        ),
        recommendations: issue_list(suggestions, "💡 Рекомендация", "Совет"),
    };

    if issues.critical.is_empty() && issues.warnings.is_empty() && issues.recommendations.is_empty()
    {
        issues.critical.push(Issue {
            id: 1,
            category: "✅ OK".to_string(),
            title: "Проблем не обнаружено".to_string(),
            description: "robots.txt и sitemap.xml настроены корректно".to_string(),
        });
        observer.observe(Event::NoIssuesPlaceholder);
    }

    issues
}

fn status_class(code: &str) -> &'static str {
    match code.chars().next() {
        Some('2') => "OK",
        Some('3') => "Редирект",
        Some('4') => "Ошибка клиента",
        Some('5') => "Ошибка сервера",
        _ => "Неизвестно",
    }
}

pub fn sitemap_tables(raw: &Value) -> SitemapTables {
    let checked = sitemap(raw, "checkedUrls");
    let duplicates = sitemap(raw, "duplicateUrls");
    let failed = sitemap(raw, "failedUrls");
    let blocked = sitemap(raw, "blockedUrls");

    let main = Table::new(
        "Основная статистика",
        vec![
            row("Всего sitemap", sitemap(raw, "totalSitemaps"), ""),
            row("Всего URL", sitemap(raw, "totalUrls"), ""),
            row("Проверено URL", checked, ""),
            row("Успешных URL", sitemap(raw, "successfulUrls"), ""),
            row("Дубликатов", duplicates, ""),
            row("Недоступных", failed, ""),
            row("Заблокированных", blocked, ""),
            row("Внешних", sitemap(raw, "externalUrls"), ""),
            row("Редиректов", sitemap(raw, "redirectUrls"), ""),
            row("Дубликаты, %", share(duplicates, checked), ""),
            row("Недоступные, %", share(failed, checked), ""),
            row("Заблокированные, %", share(blocked, checked), ""),
        ],
    );

    let codes: Vec<(String, f64)> = object_at(raw, &[SITEMAP, "statusCodes"])
        .into_iter()
        .flatten()
        .map(|(code, count)| (code.clone(), as_number(count).unwrap_or(0.0)))
        .collect();
    let counted = codes.iter().fold(0.0, |acc, (_, n)| acc + n);

    let status_codes = Table::new(
        "Коды ответа",
        codes
            .into_iter()
            .map(|(http, count)| StatusCodeRow {
                status: status_class(&http).to_string(),
                percent: share(count, counted),
                count,
                http,
            })
            .collect(),
    );

    let recommendations = Table::new(
        "Рекомендации",
        array_at(raw, &[SITEMAP, "recommendations"])
            .iter()
            .filter(|entry| issue_text(entry).is_some())
            .enumerate()
            .map(|(idx, entry)| RecommendationRow {
                id: idx as u32 + 1,
                kind: text_at(entry, &["type"], "info"),
                title: text_at(entry, &["title"], ""),
                description: issue_text(entry).unwrap_or_default(),
                suggestion: text_at(entry, &["action"], ""),
            })
            .collect(),
    );

    SitemapTables {
        main,
        status_codes,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observe::NoopObserver;
    use crate::observe::testing::RecordingObserver;
    use serde_json::json;

    fn payload() -> Value {
        json!({
            "robotsReport": {
                "statusCode": 200,
                "exists": true,
                "isValid": false,
                "errors": ["Unknown directive on line 3"],
                "warnings": ["Crawl-delay ignored", {"message": "Host directive is obsolete"}],
                "suggestions": ["Add Sitemap directive"],
                "content": "User-agent: *\nDisallow: /admin",
                "stats": {"totalLines": 12, "userAgents": 2, "disallowRules": 5, "allowRules": 1},
                "seo": {"hasSitemap": true, "blocksCss": false, "score": 80, "nested": {}},
                "directives": {"sitemaps": ["https://a.ru/sitemap.xml", "https://a.ru/s2.xml"]}
            },
            "sitemapReport": {
                "totalSitemaps": 2,
                "totalUrls": 400,
                "checkedUrls": 200,
                "successfulUrls": 180,
                "duplicateUrls": 5,
                "failedUrls": 15,
                "blockedUrls": 3,
                "externalUrls": 1,
                "redirectUrls": 4,
                "statusCodes": {"200": 180, "301": 4, "404": 15, "500": 1},
                "recommendations": [
                    {"type": "warning", "title": "Broken URLs", "description": "15 URLs fail", "action": "Fix or remove"},
                    "Compress sitemap"
                ]
            }
        })
    }

    fn value_of<'a>(table: &'a Table<DiagnosticRow>, label: &str) -> &'a Cell {
        &table
            .rows
            .iter()
            .find(|r| r.label == label)
            .unwrap_or_else(|| panic!("row {label} missing"))
            .value
    }

    #[test]
    fn share_rounds_to_one_decimal_and_guards_zero() {
        assert_eq!(share(5.0, 200.0), 2.5);
        assert_eq!(share(1.0, 3.0), 33.3);
        assert_eq!(share(2.0, 3.0), 66.7);
        assert_eq!(share(7.0, 0.0), 0.0);
    }

    #[test]
    fn summary_reads_robots_and_sitemap_counters() {
        let s = robots_summary(&payload());

        assert_eq!(s.http_status, 200.0);
        assert!(s.found);
        assert!(s.has_errors);
        assert_eq!(s.warnings_list, vec!["Crawl-delay ignored", "Host directive is obsolete"]);
        assert_eq!(s.sitemap_url, "https://a.ru/sitemap.xml");
        assert!(s.sitemap_exists);
        assert_eq!(s.sitemap_status, 200.0);
        assert_eq!(s.duplicates, 5.0);
        assert_eq!(s.inaccessible, 15.0);
        assert_eq!(s.blocked, 3.0);
    }

    #[test]
    fn summary_defaults_when_reports_absent() {
        let s = robots_summary(&json!({}));

        assert_eq!(s.http_status, 0.0);
        assert!(!s.found);
        assert!(!s.has_errors);
        assert!(s.errors_list.is_empty());
        assert_eq!(s.sitemap_url, NOT_AVAILABLE);
        assert!(!s.sitemap_exists);
        assert_eq!(s.sitemap_status, 0.0);
        assert_eq!(s.content, "");
    }

    #[test]
    fn explicit_sitemap_status_wins() {
        let s = robots_summary(&json!({"sitemapReport": {"statusCode": 404, "totalUrls": 10}}));
        assert_eq!(s.sitemap_status, 404.0);
    }

    #[test]
    fn robots_tables_have_fixed_rows() {
        let raw = payload();
        let t = robots_tables(&raw, &robots_summary(&raw));

        assert_eq!(t.general.rows.len(), 5);
        assert_eq!(value_of(&t.general, "Всего строк"), &Cell::Number(12.0));
        assert_eq!(value_of(&t.general, "Sitemap в robots.txt"), &Cell::Number(2.0));
        assert_eq!(value_of(&t.status, "Синтаксис корректен"), &Cell::from("Нет"));
        assert_eq!(value_of(&t.status, "Предупреждения"), &Cell::Number(2.0));

        let seo: Vec<&str> = t.seo.rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(seo, vec!["hasSitemap", "blocksCss", "score"]);
        assert_eq!(t.seo.rows[1].status, WARN);

        let empty = robots_tables(&json!({}), &robots_summary(&json!({})));
        assert_eq!(empty.general.rows.len(), 5);
        assert_eq!(empty.status.rows.len(), 8);
        assert!(empty.seo.rows.is_empty());
        assert!(
            empty
                .general
                .rows
                .iter()
                .all(|r| r.value == Cell::Number(0.0))
        );
    }

    #[test]
    fn issues_get_sequential_ids_per_list() {
        let issues = robots_issues(&payload(), &NoopObserver);

        assert_eq!(issues.critical.len(), 1);
        assert_eq!(issues.critical[0].title, "Критическая проблема 1");
        assert_eq!(issues.critical[0].category, "❌ Ошибка");

        let warning_ids: Vec<u32> = issues.warnings.iter().map(|i| i.id).collect();
        assert_eq!(warning_ids, vec![1, 2]);
        assert_eq!(issues.warnings[1].description, "Host directive is obsolete");

        // robots suggestions first, then sitemap recommendations
        assert_eq!(issues.recommendations.len(), 3);
        assert_eq!(issues.recommendations[0].description, "Add Sitemap directive");
        assert_eq!(issues.recommendations[1].title, "Broken URLs");
        assert_eq!(issues.recommendations[1].description, "15 URLs fail");
        assert_eq!(issues.recommendations[2].title, "Совет 3");
    }

    #[test]
    fn no_issues_inserts_single_placeholder() {
        let observer = RecordingObserver::default();
        let issues = robots_issues(&json!({"robotsReport": {"exists": true}}), &observer);

        assert_eq!(issues.critical.len(), 1);
        assert_eq!(issues.critical[0].id, 1);
        assert_eq!(issues.critical[0].title, "Проблем не обнаружено");
        assert!(issues.warnings.is_empty());
        assert!(issues.recommendations.is_empty());
        assert!(observer.has(|e| *e == Event::NoIssuesPlaceholder));
    }

    #[test]
    fn sitemap_tables_compute_percentages() {
        let t = sitemap_tables(&payload());

        assert_eq!(value_of(&t.main, "Дубликаты, %"), &Cell::Number(2.5));
        assert_eq!(value_of(&t.main, "Недоступные, %"), &Cell::Number(7.5));
        assert_eq!(value_of(&t.main, "Заблокированные, %"), &Cell::Number(1.5));

        let codes: Vec<(&str, f64, &str)> = t
            .status_codes
            .rows
            .iter()
            .map(|r| (r.http.as_str(), r.percent, r.status.as_str()))
            .collect();
        assert_eq!(
            codes,
            vec![
                ("200", 90.0, "OK"),
                ("301", 2.0, "Редирект"),
                ("404", 7.5, "Ошибка клиента"),
                ("500", 0.5, "Ошибка сервера"),
            ]
        );

        assert_eq!(t.recommendations.rows.len(), 2);
        assert_eq!(t.recommendations.rows[0].suggestion, "Fix or remove");
        assert_eq!(t.recommendations.rows[1].kind, "info");
        assert_eq!(t.recommendations.rows[1].description, "Compress sitemap");
    }

    #[test]
    fn sitemap_tables_zero_default() {
        let t = sitemap_tables(&json!({}));

        assert_eq!(t.main.rows.len(), 12);
        assert!(t.main.rows.iter().all(|r| r.value == Cell::Number(0.0)));
        assert!(t.status_codes.rows.is_empty());
        assert!(t.recommendations.rows.is_empty());
    }
}
