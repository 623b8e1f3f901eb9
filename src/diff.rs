//! Structural diff rendering over opaque JSON documents.
//!
//! Documents are rendered to a stable line form (sorted keys, one node per
//! line) and compared by recursing into the object structure, so a
//! divergence in any subtree surfaces as a small set of `- `/`+ ` lines.
//! Line-wise LCS is only applied within a single differing subtree, keeping
//! its table bounded by the changed region rather than the whole document.

use serde_json::Value;

/// Renders a document as indented `key: value` lines.
///
/// Keys are emitted bare (so a lockfile's `peer` flag renders as `peer: true`)
/// and string values keep their JSON quoting. Map keys come out sorted, which
/// makes the rendering insensitive to key order in the source file.
#[must_use]
pub fn render_lines(value: &Value) -> Vec<String> {
    render_at(value, 0)
}

fn render_at(value: &Value, depth: usize) -> Vec<String> {
    let mut lines = Vec::new();
    render_into(value, depth, &mut lines);
    lines
}

fn render_into(value: &Value, depth: usize, lines: &mut Vec<String>) {
    let pad = "  ".repeat(depth);
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            for key in keys {
                render_entry(key, &map[key], depth, lines);
            }
        }
        Value::Array(items) => {
            for item in items {
                match item {
                    Value::Object(m) if !m.is_empty() => {
                        lines.push(format!("{pad}-"));
                        render_into(item, depth + 1, lines);
                    }
                    Value::Array(a) if !a.is_empty() => {
                        lines.push(format!("{pad}-"));
                        render_into(item, depth + 1, lines);
                    }
                    _ => lines.push(format!("{pad}- {}", render_scalar(item))),
                }
            }
        }
        scalar => lines.push(format!("{pad}{}", render_scalar(scalar))),
    }
}

/// Renders a single object entry, `key:` plus children for non-empty
/// containers and `key: value` otherwise.
fn render_entry(key: &str, value: &Value, depth: usize, lines: &mut Vec<String>) {
    let pad = "  ".repeat(depth);
    match value {
        Value::Object(m) if !m.is_empty() => {
            lines.push(format!("{pad}{key}:"));
            render_into(value, depth + 1, lines);
        }
        Value::Array(a) if !a.is_empty() => {
            lines.push(format!("{pad}{key}:"));
            render_into(value, depth + 1, lines);
        }
        _ => lines.push(format!("{pad}{key}: {}", render_scalar(value))),
    }
}

fn render_scalar(value: &Value) -> String {
    match value {
        Value::Object(_) => "{}".to_string(),
        Value::Array(_) => "[]".to_string(),
        other => other.to_string(),
    }
}

/// Computes the addition/removal lines between two rendered documents.
///
/// Returns `- ` lines for content only in `expected` and `+ ` lines for
/// content only in `actual`, ordered by key path, removals before additions
/// within each differing entry. There is no header line. An empty result
/// means the renderings are equal.
#[must_use]
pub fn changed_lines(expected: &Value, actual: &Value) -> Vec<String> {
    let mut out = Vec::new();
    diff_value(expected, actual, 0, &mut out);
    out
}

/// Recursive structural diff. Equal subtrees are skipped without rendering;
/// object pairs recurse key-wise so memory stays proportional to the changed
/// subtrees, however far apart their keys sort in a large document.
fn diff_value(old: &Value, new: &Value, depth: usize, out: &mut Vec<String>) {
    if old == new {
        return;
    }
    let (Value::Object(old_map), Value::Object(new_map)) = (old, new) else {
        out.extend(diff_lines(&render_at(old, depth), &render_at(new, depth)));
        return;
    };

    let mut keys: Vec<&String> = old_map.keys().chain(new_map.keys()).collect();
    keys.sort();
    keys.dedup();
    for key in keys {
        match (old_map.get(key), new_map.get(key)) {
            (Some(old_child), None) => {
                push_prefixed(out, "- ", &entry_lines(key, old_child, depth));
            }
            (None, Some(new_child)) => {
                push_prefixed(out, "+ ", &entry_lines(key, new_child, depth));
            }
            (Some(old_child), Some(new_child)) if old_child == new_child => {}
            (Some(old_child), Some(new_child)) => {
                // Non-empty objects on both sides render the same `key:`
                // line, so only their bodies can differ.
                let nested = matches!((old_child, new_child),
                    (Value::Object(a), Value::Object(b)) if !a.is_empty() && !b.is_empty());
                if nested {
                    diff_value(old_child, new_child, depth + 1, out);
                } else {
                    out.extend(diff_lines(
                        &entry_lines(key, old_child, depth),
                        &entry_lines(key, new_child, depth),
                    ));
                }
            }
            (None, None) => {}
        }
    }
}

fn entry_lines(key: &str, value: &Value, depth: usize) -> Vec<String> {
    let mut lines = Vec::new();
    render_entry(key, value, depth, &mut lines);
    lines
}

fn push_prefixed(out: &mut Vec<String>, prefix: &str, lines: &[String]) {
    out.extend(lines.iter().map(|line| format!("{prefix}{line}")));
}

/// Line diff via longest-common-subsequence, with the common prefix and
/// suffix stripped first. Only ever applied to the rendering of a single
/// differing subtree, so the table stays small.
fn diff_lines(old: &[String], new: &[String]) -> Vec<String> {
    let common_prefix =
        old.iter().zip(new.iter()).take_while(|(a, b)| a == b).count();
    let old = &old[common_prefix..];
    let new = &new[common_prefix..];
    let common_suffix = old
        .iter()
        .rev()
        .zip(new.iter().rev())
        .take_while(|(a, b)| a == b)
        .count();
    let old = &old[..old.len() - common_suffix];
    let new = &new[..new.len() - common_suffix];

    // LCS length table, (len+1) x (len+1).
    let mut table = vec![vec![0_usize; new.len() + 1]; old.len() + 1];
    for (i, old_line) in old.iter().enumerate().rev() {
        for (j, new_line) in new.iter().enumerate().rev() {
            table[i][j] = if old_line == new_line {
                table[i + 1][j + 1] + 1
            } else {
                table[i + 1][j].max(table[i][j + 1])
            };
        }
    }

    let mut out = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < old.len() && j < new.len() {
        if old[i] == new[j] {
            i += 1;
            j += 1;
        } else if table[i + 1][j] >= table[i][j + 1] {
            out.push(format!("- {}", old[i]));
            i += 1;
        } else {
            out.push(format!("+ {}", new[j]));
            j += 1;
        }
    }
    for line in &old[i..] {
        out.push(format!("- {line}"));
    }
    for line in &new[j..] {
        out.push(format!("+ {line}"));
    }
    out
}
