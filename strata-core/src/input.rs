//! Edge-List Input
//!
//! Reads the small text format used for hand-written graphs. One edge per
//! line in any of these spellings:
//!
//! ```text
//! # comment
//! 4 1
//! 4 -> 2
//! 4,12
//! (2, 1), (1, 3), (3, 2)
//! ```
//!
//! A line that starts with `(` may hold any number of tuples.

use std::fmt::Display;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Parse an edge list into `(source, target)` pairs, keeping input order.
pub fn parse_edge_list<K>(text: &str) -> Result<Vec<(K, K)>>
where
    K: FromStr,
    K::Err: Display,
{
    let mut edges = Vec::new();

    for (number, raw) in text.lines().enumerate() {
        let line = match raw.find('#') {
            Some(at) => &raw[..at],
            None => raw,
        }
        .trim();
        if line.is_empty() {
            continue;
        }

        let invalid = |edge: &str, reason: String| Error::InvalidEdge {
            edge: edge.to_string(),
            reason: format!("line {}: {reason}", number + 1),
        };

        let pairs = if line.starts_with('(') {
            split_tuples(line).map_err(|reason| invalid(line, reason))?
        } else {
            vec![split_pair(line).map_err(|reason| invalid(line, reason))?]
        };

        for (u, v) in pairs {
            let source = parse_endpoint::<K>(u).map_err(|reason| invalid(line, reason))?;
            let target = parse_endpoint::<K>(v).map_err(|reason| invalid(line, reason))?;
            edges.push((source, target));
        }
    }

    tracing::trace!(edges = edges.len(), "parsed edge list");
    Ok(edges)
}

fn split_pair(text: &str) -> std::result::Result<(&str, &str), String> {
    let parts: Vec<&str> = if text.contains("->") {
        text.split("->").map(str::trim).collect()
    } else if text.contains(',') {
        text.split(',').map(str::trim).collect()
    } else {
        text.split_whitespace().collect()
    };

    match parts.as_slice() {
        [u, v] if !u.is_empty() && !v.is_empty() => Ok((*u, *v)),
        _ => Err(format!(
            "expected exactly two endpoints, found {}",
            parts.iter().filter(|p| !p.is_empty()).count()
        )),
    }
}

fn split_tuples(line: &str) -> std::result::Result<Vec<(&str, &str)>, String> {
    let mut pairs = Vec::new();
    let mut rest = line;

    loop {
        rest = rest.trim_start_matches(|c: char| c == ',' || c.is_whitespace());
        if rest.is_empty() {
            break;
        }
        let Some(body) = rest.strip_prefix('(') else {
            return Err(format!("expected `(` before `{rest}`"));
        };
        let Some(close) = body.find(')') else {
            return Err("unclosed `(`".to_string());
        };
        pairs.push(split_pair(&body[..close])?);
        rest = &body[close + 1..];
    }

    Ok(pairs)
}

fn parse_endpoint<K>(token: &str) -> std::result::Result<K, String>
where
    K: FromStr,
    K::Err: Display,
{
    token
        .parse()
        .map_err(|err| format!("cannot parse endpoint `{token}`: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_spellings() {
        let text = "\
# header
4 1
4 -> 2

4,12   # trailing comment
(2, 1), (1, 3),
";
        let edges: Vec<(u32, u32)> = parse_edge_list(text).unwrap();
        assert_eq!(edges, vec![(4, 1), (4, 2), (4, 12), (2, 1), (1, 3)]);
    }

    #[test]
    fn string_keys() {
        let edges: Vec<(String, String)> = parse_edge_list("alpha -> beta\nbeta gamma").unwrap();
        assert_eq!(
            edges,
            vec![
                ("alpha".to_string(), "beta".to_string()),
                ("beta".to_string(), "gamma".to_string()),
            ]
        );
    }

    #[test]
    fn missing_endpoint_is_invalid() {
        let err = parse_edge_list::<u32>("1 2\n3 ->\n").unwrap_err();
        match err {
            Error::InvalidEdge { edge, reason } => {
                assert_eq!(edge, "3 ->");
                assert!(reason.starts_with("line 2:"), "{reason}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_endpoint_is_invalid() {
        let err = parse_edge_list::<u32>("1 x").unwrap_err();
        assert!(matches!(err, Error::InvalidEdge { .. }));
        assert!(err.to_string().contains("cannot parse endpoint `x`"));
    }

    #[test]
    fn too_many_endpoints_is_invalid() {
        assert!(parse_edge_list::<u32>("1 2 3").is_err());
        assert!(parse_edge_list::<u32>("(1, 2, 3)").is_err());
        assert!(parse_edge_list::<u32>("(1, 2").is_err());
    }

    #[test]
    fn empty_input_has_no_edges() {
        let edges: Vec<(u8, u8)> = parse_edge_list("\n  \n# nothing\n").unwrap();
        assert!(edges.is_empty());
    }
}
