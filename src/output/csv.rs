//! CSV output formatting for subnet data.

use super::terminal::format_field;
use crate::models::Subnet;

const CSV_HEADER: &str = r#""cnt","cidr","netmask","range","usable_ips","hosts","joinable","description","color""#;

/// Format one subnet as a CSV row.
pub fn format_csv_row(j: usize, s: &Subnet) -> String {
    format!(
        r#"{j},{cidr},{netmask},{range},{usable},{hosts},{joinable},{description},{color}"#,
        j = format_field(j, 5),
        cidr = format_field(s.cidr, 20),
        netmask = format_field(&s.netmask, 17),
        range = format_field(&s.range, 33),
        usable = format_field(&s.usable_ips, 33),
        hosts = format_field(s.hosts, 12),
        joinable = format_field(s.is_joinable, 7),
        description = escape_csv_field(s.description()),
        color = escape_csv_field(s.color()),
    )
}

/// Quote a free text field when it holds a comma or a double quote.
fn escape_csv_field(input: &str) -> String {
    if input.contains(',') || input.contains('"') {
        format!("\"{}\"", input.replace('"', "\"\""))
    } else {
        format!("\"{input}\"")
    }
}

/// Header plus one row per subnet.
pub fn subnet_csv(subnets: &[Subnet]) -> Vec<String> {
    let mut lines = Vec::with_capacity(subnets.len() + 1);
    lines.push(CSV_HEADER.to_string());
    lines.extend(
        subnets
            .iter()
            .enumerate()
            .map(|(i, s)| format_csv_row(i + 1, s)),
    );
    lines
}

/// Print subnet data as CSV to stdout.
pub fn subnet_print(subnets: &[Subnet]) {
    log::info!("#Start subnet_print() count={}", subnets.len());
    for line in subnet_csv(subnets) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SubnetRecord;

    #[test]
    fn test_format_csv_row() {
        let s = Subnet::from_record(&SubnetRecord {
            cidr: "10.0.0.0/30".to_string(),
            description: Some("p2p, uplink".to_string()),
            color: None,
        })
        .unwrap();
        let row = format_csv_row(1, &s);
        assert!(row.starts_with(r#"  "1","#));
        assert!(row.contains(r#""10.0.0.0/30""#));
        assert!(row.contains(r#""255.255.255.252""#));
        assert!(row.contains(r#""10.0.0.1 - 10.0.0.2""#));
        assert!(row.ends_with(r#""p2p, uplink","""#));
    }

    #[test]
    fn test_escape_csv_field() {
        assert_eq!(escape_csv_field("plain"), "\"plain\"");
        assert_eq!(escape_csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_subnet_csv_has_header() {
        let lines = subnet_csv(&[Subnet::parse("10.0.0.0/24").unwrap()]);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], CSV_HEADER);
    }
}
