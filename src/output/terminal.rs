//! Terminal output utilities.

use crate::processing::SubnetNode;
use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    if quoted.len() >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Render a containment forest as indented lines.
///
/// Synthesised (joinable) blocks are dimmed so allocated ranges stand out.
pub fn format_tree(roots: &[SubnetNode<'_>]) -> Vec<String> {
    let mut lines = Vec::new();
    for root in roots {
        push_node(root, 0, &mut lines);
    }
    lines
}

fn push_node(node: &SubnetNode<'_>, depth: usize, lines: &mut Vec<String>) {
    let subnet = node.subnet;
    let cidr = if subnet.is_joinable && subnet.meta.is_empty() {
        subnet.cidr.to_string().dimmed()
    } else {
        subnet.cidr.to_string().bold()
    };
    let line = format!(
        "{indent}{cidr} {hosts} {desc}",
        indent = "  ".repeat(depth),
        hosts = format!("({} hosts)", subnet.hosts).cyan(),
        desc = subnet.description(),
    );
    lines.push(line.trim_end().to_string());
    for child in &node.children {
        push_node(child, depth + 1, lines);
    }
}

/// Print a containment forest to stdout.
pub fn print_tree(roots: &[SubnetNode<'_>]) {
    for line in format_tree(roots) {
        println!("{line}");
    }
}
