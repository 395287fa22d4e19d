//! Text record format of a single group.
//!
//! `name;ticksStart;ticksEnd;node_0;node_1;...;node_n`
//!
//! The node list may be empty, in which case the record ends right after the third separator.

use crate::error::GroupError;

pub const SEPARATOR: char = ';';

/// ' ' and '=' are rejected by the host property store, ';' is the field separator.
pub const FORBIDDEN_NAME_CHARS: [char; 3] = [' ', '=', SEPARATOR];

/// name, ticksStart, ticksEnd and the (possibly empty) node list.
pub const MIN_FIELD_COUNT: usize = 4;

pub const FIELD_TICKS_START: &str = "ticksStart";
pub const FIELD_TICKS_END: &str = "ticksEnd";

pub fn validate_name(name: &str) -> Result<(), GroupError> {
    if name.contains(&FORBIDDEN_NAME_CHARS[..]) {
        return Err(GroupError::FormatError {
            name: name.to_string(),
        });
    }
    Ok(())
}

pub fn encode(name: &str, ticks_start: i32, ticks_end: i32, node_refs: &[u32]) -> String {
    let nodes = node_refs
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(";");
    format!("{name};{ticks_start};{ticks_end};{nodes}")
}

pub fn split_fields<'a>(key: &str, value: &'a str) -> Result<Vec<&'a str>, GroupError> {
    let fields: Vec<&str> = value.split(SEPARATOR).collect();
    if fields.len() < MIN_FIELD_COUNT {
        return Err(GroupError::TruncatedData {
            key: key.to_string(),
            field_count: fields.len(),
        });
    }
    Ok(fields)
}

pub fn parse_ticks(key: &str, field: &str, text: &str) -> Result<i32, GroupError> {
    text.parse::<i32>().map_err(|_| GroupError::FieldParseError {
        key: key.to_string(),
        field: field.to_string(),
        value: text.to_string(),
    })
}

/// Outcome of parsing the node tail of a record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeRefParse {
    /// Parsable handles, in record order.
    pub refs: Vec<u32>,
    /// Number of fields that were not unsigned integers.
    pub failed: usize,
}

/// Parse the node tail (fields 4..n). An empty first tail field stands for "no nodes".
pub fn parse_node_refs(tail: &[&str]) -> NodeRefParse {
    match tail.first() {
        None => return NodeRefParse::default(),
        Some(first) if first.is_empty() => return NodeRefParse::default(),
        _ => {}
    }

    let mut out = NodeRefParse {
        refs: Vec::with_capacity(tail.len()),
        failed: 0,
    };
    for field in tail {
        match field.parse::<u32>() {
            Ok(handle) => out.refs.push(handle),
            Err(_) => out.failed += 1,
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_empty_node_list_ends_after_third_separator() {
        assert_eq!(encode("Idle", 0, 1600, &[]), "Idle;0;1600;");
        assert_eq!(encode("Run", -160, 320, &[4, 9, 2]), "Run;-160;320;4;9;2");
    }

    #[test]
    fn validate_name_rejects_reserved_chars() {
        assert!(validate_name("Walk_Cycle-01").is_ok());
        assert!(validate_name("").is_ok());
        for bad in ["Walk Cycle", "a=b", "a;b"] {
            assert_eq!(
                validate_name(bad).unwrap_err(),
                GroupError::FormatError {
                    name: bad.to_string()
                }
            );
        }
    }

    #[test]
    fn split_requires_four_fields() {
        assert_eq!(split_fields("k", "a;0;1;").unwrap(), vec!["a", "0", "1", ""]);
        assert_eq!(
            split_fields("k", "a;0;1").unwrap_err(),
            GroupError::TruncatedData {
                key: "k".to_string(),
                field_count: 3
            }
        );
        assert!(split_fields("k", "").is_err());
    }

    #[test]
    fn parse_ticks_names_the_field() {
        assert_eq!(parse_ticks("k", FIELD_TICKS_START, "-42").unwrap(), -42);
        let err = parse_ticks("k", FIELD_TICKS_END, "1.5").unwrap_err();
        assert_eq!(
            err,
            GroupError::FieldParseError {
                key: "k".to_string(),
                field: FIELD_TICKS_END.to_string(),
                value: "1.5".to_string()
            }
        );
    }

    #[test]
    fn node_refs_skip_and_count_failures() {
        let parsed = parse_node_refs(&["5", "x", "7", "-1", ""]);
        assert_eq!(parsed.refs, vec![5, 7]);
        assert_eq!(parsed.failed, 3);
    }

    #[test]
    fn empty_first_tail_field_means_no_nodes() {
        assert_eq!(parse_node_refs(&[""]), NodeRefParse::default());
        assert_eq!(parse_node_refs(&[]), NodeRefParse::default());
    }
}
