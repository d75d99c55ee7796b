//! Pure search / filter / pagination kernels for the data table.
//!
//! Rows are processed through their JSON projection so one
//! implementation covers every entity, nested relation values included.

use serde_json::Value;

/// Sentinel option meaning "no filter applied".
pub const ALL_FILTER: &str = "__all__";

/// Case-insensitive substring search across the string form of every
/// field value (nested relation fields included). An empty query
/// matches everything.
pub fn matches_search(row: &Value, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    value_contains(row, &needle)
}

fn value_contains(value: &Value, needle_lower: &str) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => s.to_lowercase().contains(needle_lower),
        Value::Number(n) => n.to_string().contains(needle_lower),
        Value::Bool(b) => b.to_string().contains(needle_lower),
        Value::Array(items) => items.iter().any(|item| value_contains(item, needle_lower)),
        Value::Object(fields) => fields.values().any(|field| value_contains(field, needle_lower)),
    }
}

/// Strict single-field filter: the row survives iff `row[key]` is a
/// string equal to `selected`. The all-sentinel restores the full set.
pub fn matches_filter(row: &Value, key: &str, selected: &str) -> bool {
    if selected == ALL_FILTER {
        return true;
    }
    matches!(row.get(key), Some(Value::String(s)) if s == selected)
}

/// Display form of one cell value; null/missing render as a dash.
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "-".to_string(),
        Some(Value::String(s)) => {
            if s.is_empty() {
                "-".to_string()
            } else {
                s.clone()
            }
        }
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(other) => other.to_string(),
    }
}

pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Window of a 1-based page. Out-of-range pages yield an empty slice.
pub fn page_slice<T: Clone>(rows: &[T], page: usize, page_size: usize) -> Vec<T> {
    if page == 0 || page_size == 0 {
        return Vec::new();
    }
    let start = (page - 1) * page_size;
    if start >= rows.len() {
        return Vec::new();
    }
    let end = (start + page_size).min(rows.len());
    rows[start..end].to_vec()
}

/// Distinct non-empty string values of one field, in first-seen order.
/// Used to enumerate filter options from the fetched snapshot.
pub fn distinct_values(rows: &[Value], key: &str) -> Vec<String> {
    let mut seen = Vec::new();
    for row in rows {
        if let Some(Value::String(s)) = row.get(key) {
            if !s.is_empty() && !seen.contains(s) {
                seen.push(s.clone());
            }
        }
    }
    seen
}


/// Distinct non-empty values of one field over typed records, in
/// first-seen order (filter dropdowns derive their options this way).
pub fn distinct_by<T>(rows: &[T], get: impl Fn(&T) -> Option<&str>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for row in rows {
        if let Some(value) = get(row) {
            if !value.is_empty() && !seen.iter().any(|s| s == value) {
                seen.push(value.to_string());
            }
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn machine(id: &str, name: &str, machine_type: &str) -> Value {
        json!({"id": id, "name": name, "machine_type": machine_type, "tonnage": 160})
    }

    #[test]
    fn empty_search_matches_all() {
        let row = machine("m-1", "Haitian MA 1600", "injection");
        assert!(matches_search(&row, ""));
        assert!(matches_search(&row, "   "));
    }

    #[test]
    fn search_is_case_insensitive_over_any_field() {
        let row = machine("m-1", "Haitian MA 1600", "injection");
        assert!(matches_search(&row, "haitian"));
        assert!(matches_search(&row, "INJECT"));
        assert!(matches_search(&row, "160"));
        assert!(!matches_search(&row, "arburg"));
    }

    #[test]
    fn search_reaches_embedded_relation_fields() {
        let row = json!({
            "id": "wo-1",
            "work_order_number": "WO-0099",
            "machines": {"name": "Haitian MA 1600", "machine_code": "INJ-01"}
        });
        assert!(matches_search(&row, "inj-01"));
    }

    #[test]
    fn identical_rows_with_distinct_ids_both_survive() {
        let a = machine("m-1", "Haitian MA 1600", "injection");
        let b = machine("m-2", "Haitian MA 1600", "injection");
        let survivors: Vec<_> = [a, b]
            .iter()
            .filter(|row| matches_search(row, "haitian"))
            .cloned()
            .collect();
        assert_eq!(survivors.len(), 2);
    }

    #[test]
    fn filter_is_exact_not_substring() {
        let row = machine("m-1", "Haitian MA 1600", "injection");
        assert!(matches_filter(&row, "machine_type", "injection"));
        assert!(!matches_filter(&row, "machine_type", "inject"));
        assert!(matches_filter(&row, "machine_type", ALL_FILTER));
    }

    #[test]
    fn filter_never_coerces_non_string_fields() {
        let row = machine("m-1", "Haitian MA 1600", "injection");
        assert!(!matches_filter(&row, "tonnage", "160"));
    }

    #[test]
    fn all_sentinel_round_trips() {
        let rows = vec![
            machine("m-1", "A", "injection"),
            machine("m-2", "B", "blow"),
        ];
        let filtered: Vec<_> = rows
            .iter()
            .filter(|r| matches_filter(r, "machine_type", "blow"))
            .collect();
        assert_eq!(filtered.len(), 1);
        let restored: Vec<_> = rows
            .iter()
            .filter(|r| matches_filter(r, "machine_type", ALL_FILTER))
            .collect();
        assert_eq!(restored.len(), rows.len());
    }

    #[test]
    fn page_count_is_ceiling() {
        assert_eq!(page_count(23, 10), 3);
        assert_eq!(page_count(20, 10), 2);
        assert_eq!(page_count(0, 10), 0);
    }

    #[test]
    fn last_page_holds_the_remainder() {
        let rows: Vec<usize> = (0..23).collect();
        assert_eq!(page_slice(&rows, 1, 10).len(), 10);
        assert_eq!(page_slice(&rows, 3, 10), vec![20, 21, 22]);
        assert!(page_slice(&rows, 4, 10).is_empty());
    }

    #[test]
    fn null_and_missing_cells_render_as_dash() {
        let row = json!({"status": null, "name": "Cap 28mm"});
        assert_eq!(display_value(row.get("status")), "-");
        assert_eq!(display_value(row.get("unknown")), "-");
        assert_eq!(display_value(row.get("name")), "Cap 28mm");
    }

    #[test]
    fn distinct_values_preserve_first_seen_order() {
        let rows = vec![
            machine("m-1", "A", "injection"),
            machine("m-2", "B", "blow"),
            machine("m-3", "C", "injection"),
        ];
        assert_eq!(
            distinct_values(&rows, "machine_type"),
            vec!["injection".to_string(), "blow".to_string()]
        );
    }

    #[test]
    fn distinct_by_works_over_typed_rows() {
        let rows = vec![
            (1, Some("injection".to_string())),
            (2, None),
            (3, Some("injection".to_string())),
            (4, Some("blow".to_string())),
        ];
        assert_eq!(
            distinct_by(&rows, |(_, t)| t.as_deref()),
            vec!["injection".to_string(), "blow".to_string()]
        );
    }
}
