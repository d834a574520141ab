use std::collections::HashSet;

use log::debug;
use serde_json::Value;

use crate::api::models::DnsRecord;

/// Select the records whose name is in `managed`, keeping provider order.
///
/// Anything that does not look like `{response: {recs: {count > 0, objs: [..]}}}`
/// yields an empty list.
pub fn managed_records(raw: &Value, managed: &HashSet<String>) -> Vec<DnsRecord> {
    let Some(recs) = raw.get("response").and_then(|r| r.get("recs")) else {
        return Vec::new();
    };
    if !positive_count(recs.get("count")) {
        return Vec::new();
    }
    let Some(objs) = recs.get("objs").and_then(Value::as_array) else {
        return Vec::new();
    };

    let records: Vec<DnsRecord> = objs
        .iter()
        .filter_map(DnsRecord::from_value)
        .filter(|record| managed.contains(&record.name))
        .collect();

    debug!("managed records: {:?}", records);
    records
}

fn positive_count(count: Option<&Value>) -> bool {
    match count {
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n > 0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().is_ok_and(|n| n > 0.0),
        _ => false,
    }
}
