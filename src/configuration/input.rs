//! Reader for the plain-text body list.
//!
//! ```text
//! <N>
//! <radius>
//! <x> <y> <vx> <vy> <mass> <label>    (N times)
//! ```
//!
//! Tokens are whitespace separated and may be spread over lines freely.
//! Free text after the N-th record is ignored, but a numeric token there is
//! the start of a record the count did not announce and is rejected.

use std::io::BufRead;
use std::str::FromStr;

use log::debug;

use crate::error::{Error, Result};
use crate::simulation::states::{Body, NVec2};

/// Everything a text input file describes
#[derive(Debug, Clone)]
pub struct BodyList {
    pub radius: f64,
    pub bodies: Vec<Body>,
}

/// Whitespace tokens paired with the 1-based line they came from
struct Tokens {
    tokens: std::vec::IntoIter<(usize, String)>,
    last_line: usize,
    current_line: usize,
}

impl Tokens {
    fn read<R: BufRead>(reader: R) -> Result<Self> {
        let mut tokens = Vec::new();
        let mut last_line = 0;
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            last_line = i + 1;
            tokens.extend(line.split_whitespace().map(|t| (i + 1, t.to_string())));
        }
        Ok(Self {
            tokens: tokens.into_iter(),
            last_line,
            current_line: 1,
        })
    }

    fn next_token(&mut self, what: &str) -> Result<(usize, String)> {
        let last_line = self.last_line.max(1);
        let (line, token) = self.tokens.next().ok_or_else(|| Error::MalformedInput {
            line: last_line,
            message: format!("unexpected end of input, expected {}", what),
        })?;
        self.current_line = line;
        Ok((line, token))
    }

    fn next_parsed<T: FromStr>(&mut self, what: &str) -> Result<(usize, T)> {
        let (line, token) = self.next_token(what)?;
        token
            .parse::<T>()
            .map(|v| (line, v))
            .map_err(|_| Error::MalformedInput {
                line,
                message: format!("expected {}, found \"{}\"", what, token),
            })
    }

    fn next_real(&mut self, what: &str) -> Result<f64> {
        let (line, v) = self.next_parsed::<f64>(what)?;
        if !v.is_finite() {
            return Err(Error::MalformedInput {
                line,
                message: format!("{} must be finite, found {}", what, v),
            });
        }
        Ok(v)
    }

    fn remaining(&self) -> usize {
        self.tokens.len()
    }

    /// The next token, if it reads as a number
    fn peek_number(&self) -> Option<(usize, &str)> {
        self.tokens
            .as_slice()
            .first()
            .filter(|(_, t)| t.parse::<f64>().map_or(false, |v| v.is_finite()))
            .map(|(line, t)| (*line, t.as_str()))
    }
}

/// Read a body list, failing on the first malformed token
pub fn read_bodies<R: BufRead>(reader: R) -> Result<BodyList> {
    let mut tokens = Tokens::read(reader)?;

    let (_, n) = tokens.next_parsed::<usize>("body count (non-negative integer)")?;
    let radius = tokens.next_real("radius")?;
    if radius <= 0.0 {
        return Err(Error::MalformedInput {
            line: tokens.current_line,
            message: format!("radius must be positive, found {}", radius),
        });
    }

    // the count is untrusted, a record takes six tokens
    let mut bodies = Vec::with_capacity(n.min(tokens.remaining() / 6));
    for k in 1..=n {
        let x = tokens.next_real(&format!("x position of body {}", k))?;
        let y = tokens.next_real(&format!("y position of body {}", k))?;
        let vx = tokens.next_real(&format!("x velocity of body {}", k))?;
        let vy = tokens.next_real(&format!("y velocity of body {}", k))?;
        let m = tokens.next_real(&format!("mass of body {}", k))?;
        let (_, label) = tokens.next_token(&format!("label of body {}", k))?;
        bodies.push(Body::new(NVec2::new(x, y), NVec2::new(vx, vy), m, label)?);
    }

    if let Some((line, token)) = tokens.peek_number() {
        return Err(Error::MalformedInput {
            line,
            message: format!("found \"{}\" after the {} announced bodies, body count does not match the records", token, n),
        });
    }
    let extra = tokens.remaining();
    if extra > 0 {
        debug!("ignoring {} trailing tokens after {} bodies", extra, n);
    }

    Ok(BodyList { radius, bodies })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<BodyList> {
        read_bodies(s.as_bytes())
    }

    fn malformed_line(res: Result<BodyList>) -> usize {
        match res {
            Err(Error::MalformedInput { line, .. }) => line,
            other => panic!("expected malformed input, got {:?}", other),
        }
    }

    #[test]
    fn reads_records_in_order() {
        let list = parse(
            "2\n2.50e+11\n\
             1.4960e+11 0.0 0.0 2.9800e+04 5.9740e+24 earth.gif\n\
             0.0 0.0 0.0 0.0 1.9890e+30 sun.gif\n",
        )
        .unwrap();
        assert_eq!(list.radius, 2.5e11);
        assert_eq!(list.bodies.len(), 2);
        assert_eq!(list.bodies[0].label(), "earth.gif");
        assert_eq!(list.bodies[0].position(), NVec2::new(1.496e11, 0.0));
        assert_eq!(list.bodies[0].velocity(), NVec2::new(0.0, 2.98e4));
        assert_eq!(list.bodies[1].mass(), 1.989e30);
    }

    #[test]
    fn tokens_may_span_lines_and_trailing_text_is_ignored() {
        let list = parse("1 5.0\n1.0 2.0\n3.0\n4.0 5.0\nrock\nThis file was made by hand\n").unwrap();
        assert_eq!(list.bodies.len(), 1);
        assert_eq!(list.bodies[0].velocity(), NVec2::new(3.0, 4.0));
    }

    #[test]
    fn empty_system_is_valid() {
        let list = parse("0\n1.0e3\n").unwrap();
        assert!(list.bodies.is_empty());
    }

    #[test]
    fn bad_count_is_malformed() {
        assert_eq!(malformed_line(parse("two\n1.0\n")), 1);
        assert_eq!(malformed_line(parse("-1\n1.0\n")), 1);
        assert_eq!(malformed_line(parse("1.5\n1.0\n")), 1);
        assert_eq!(malformed_line(parse("")), 1);
    }

    #[test]
    fn non_numeric_field_reports_its_line() {
        let res = parse("1\n1.0\n\n0.0 zero 0.0 0.0 1.0 a\n");
        assert_eq!(malformed_line(res), 4);
    }

    #[test]
    fn non_finite_and_non_positive_radius_are_malformed() {
        assert_eq!(malformed_line(parse("0\nNaN\n")), 2);
        assert_eq!(malformed_line(parse("0\n0.0\n")), 2);
        assert_eq!(malformed_line(parse("1\n1.0\n0 0 inf 0 1 a\n")), 3);
    }

    #[test]
    fn missing_records_are_malformed() {
        let res = parse("3\n1.0\n0 0 0 0 1 a\n1 1 0 0 1 b\n");
        match res {
            Err(Error::MalformedInput { message, .. }) => {
                assert!(message.contains("body 3"), "{}", message)
            }
            other => panic!("expected malformed input, got {:?}", other),
        }
        // record cut short before its label
        assert!(parse("1\n1.0\n0 0 0 0 1\n").is_err());
    }

    #[test]
    fn huge_count_with_few_records_is_malformed() {
        let res = parse("1000000000000000000\n1.0\n0 0 0 0 1 a\n");
        match res {
            Err(Error::MalformedInput { message, .. }) => {
                assert!(message.contains("body 2"), "{}", message)
            }
            other => panic!("expected malformed input, got {:?}", other),
        }
    }

    #[test]
    fn extra_record_is_malformed() {
        let res = parse("1\n1.0\n0 0 0 0 1 a\n1 1 0 0 1 b\n");
        assert_eq!(malformed_line(res), 4);
        // a cut-off extra record counts as well
        assert_eq!(malformed_line(parse("1\n1.0\n0 0 0 0 1 a\n-3.5\n")), 4);
    }

    #[test]
    fn non_positive_mass_is_rejected() {
        let res = parse("1\n1.0\n0 0 0 0 -3 a\n");
        assert!(matches!(res, Err(Error::NonPositiveMass { .. })));
    }
}
