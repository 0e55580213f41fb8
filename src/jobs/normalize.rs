//! Row normalization.
//!
//! Scraped rows come from dataframes and are full of holes. A value counts as
//! missing when its key is absent, it is JSON `null`, or it is a string equal
//! to `nan` ignoring ASCII case.

use serde::Serialize;
use serde_json::Value;

use super::scraper::RawJob;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Salary {
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub period: Option<String>,
    pub currency: String,
    pub display: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfo {
    pub industry: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub num_employees: Option<String>,
    pub revenue: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobResult {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: Salary,
    pub description: String,
    pub skills: Vec<String>,
    pub company_info: CompanyInfo,
    pub url: String,
    pub date_posted: Option<String>,
    pub source: String,
    pub job_type: Option<String>,
    pub is_remote: bool,
}

pub fn is_nan_like(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.eq_ignore_ascii_case("nan"),
        _ => false,
    }
}

/// The value under `key`, unless it is missing.
fn present<'a>(row: &'a RawJob, key: &str) -> Option<&'a Value> {
    row.get(key).filter(|v| !is_nan_like(v))
}

fn number_to_string(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        _ => n.to_string(),
    }
}

/// String form of a present scalar. Empty strings are kept.
pub fn safe_str(value: Option<&Value>) -> Option<String> {
    match value? {
        v if is_nan_like(v) => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(number_to_string(n)),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

fn str_field(row: &RawJob, key: &str) -> Option<String> {
    safe_str(row.get(key))
}

/// Like `str_field`, but empty strings fall back to `default` too.
fn str_field_or(row: &RawJob, key: &str, default: &str) -> String {
    str_field(row, key)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Lists are kept (items stringified), strings are split on commas.
pub fn safe_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter(|v| !is_nan_like(v))
            .filter_map(|v| safe_str(Some(v)))
            .collect(),
        Some(Value::String(s)) if !s.eq_ignore_ascii_case("nan") => s
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

pub fn truthy(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => {
            matches!(s.trim().to_ascii_lowercase().as_str(), "true" | "yes" | "1")
        }
        _ => false,
    }
}

/// Salary bound truncated towards zero. Non-numeric values count as missing.
fn amount(value: Option<&Value>) -> Option<i64> {
    let amount = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    amount.is_finite().then(|| amount.trunc() as i64)
}

/// `50000` → `50,000`.
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if value < 0 {
        out.insert(0, '-');
    }
    out
}

pub fn normalize_salary(row: &RawJob) -> Salary {
    let min = amount(present(row, "min_amount"));
    let max = amount(present(row, "max_amount"));
    let period = str_field(row, "interval")
        .filter(|s| !s.is_empty())
        .map(|s| s.to_lowercase());
    let currency = str_field_or(row, "currency", "USD");

    // Zero bounds are not worth displaying.
    let bounds: Vec<String> = [min, max]
        .into_iter()
        .flatten()
        .filter(|v| *v != 0)
        .map(|v| format!("${}", format_thousands(v)))
        .collect();

    let display = (!bounds.is_empty()).then(|| {
        let mut display = bounds.join(" - ");
        if let Some(period) = &period {
            display.push('/');
            display.push_str(period);
        }
        display
    });

    Salary { min, max, period, currency, display }
}

/// Maps one raw row; `index` is the row's position in the output.
pub fn normalize_job(row: &RawJob, index: usize) -> JobResult {
    let source = str_field_or(row, "site", "unknown");
    let id = str_field(row, "id")
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| format!("{source}_{index}"));

    JobResult {
        id,
        title: str_field_or(row, "title", "Untitled"),
        company: str_field_or(row, "company", "Unknown"),
        location: str_field_or(row, "location", ""),
        salary: normalize_salary(row),
        description: str_field_or(row, "description", ""),
        skills: safe_list(row.get("skills")),
        company_info: CompanyInfo {
            industry: str_field(row, "company_industry"),
            url: str_field(row, "company_url"),
            description: str_field(row, "company_description"),
            num_employees: str_field(row, "company_num_employees"),
            revenue: str_field(row, "company_revenue"),
        },
        url: str_field_or(row, "job_url", ""),
        date_posted: str_field(row, "date_posted"),
        source,
        job_type: str_field(row, "job_type"),
        is_remote: truthy(row.get("is_remote")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: Value) -> RawJob {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn nan_like_values() {
        assert!(is_nan_like(&json!(null)));
        assert!(is_nan_like(&json!("NaN")));
        assert!(is_nan_like(&json!("nan")));
        assert!(!is_nan_like(&json!("")));
        assert!(!is_nan_like(&json!("banana")));
        assert!(!is_nan_like(&json!(0)));
    }

    #[test]
    fn thousands_separators() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(50000), "50,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
        assert_eq!(format_thousands(-1500), "-1,500");
    }

    #[test]
    fn integral_floats_lose_their_fraction() {
        assert_eq!(safe_str(Some(&json!(12.0))).as_deref(), Some("12"));
        assert_eq!(safe_str(Some(&json!(12.5))).as_deref(), Some("12.5"));
        assert_eq!(safe_str(Some(&json!(7))).as_deref(), Some("7"));
    }

    #[test]
    fn skills_from_list_or_string() {
        assert_eq!(safe_list(Some(&json!(["rust", "sql"]))), ["rust", "sql"]);
        assert_eq!(safe_list(Some(&json!("rust, sql ,, go"))), ["rust", "sql", "go"]);
        assert!(safe_list(Some(&json!("nan"))).is_empty());
        assert!(safe_list(Some(&json!(42))).is_empty());
        assert!(safe_list(None).is_empty());
    }

    #[test]
    fn salary_uses_only_present_bounds() {
        let salary = normalize_salary(&row(json!({"max_amount": "80000.0", "interval": "HOURLY"})));
        assert_eq!(salary.min, None);
        assert_eq!(salary.max, Some(80000));
        assert_eq!(salary.period.as_deref(), Some("hourly"));
        assert_eq!(salary.display.as_deref(), Some("$80,000/hourly"));

        let salary = normalize_salary(&row(json!({"min_amount": 0, "max_amount": "nan"})));
        assert_eq!(salary.min, Some(0));
        assert_eq!(salary.display, None);
    }

    #[test]
    fn remote_flag_rules() {
        assert!(truthy(Some(&json!(true))));
        assert!(truthy(Some(&json!(1))));
        assert!(truthy(Some(&json!("True"))));
        assert!(!truthy(Some(&json!("nan"))));
        assert!(!truthy(Some(&json!(null))));
        assert!(!truthy(None));
    }
}
