//! Shared test utilities for prism-obj integration tests.
//!
//! Parses written obj text back into structured lines so tests can check
//! what a reader sees rather than comparing strings only.

#![allow(dead_code)]

use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{char, i64 as index, one_of, space1};
use nom::combinator::{all_consuming, map, opt, rest};
use nom::multi::separated_list1;
use nom::number::complete::double;
use nom::sequence::{pair, preceded, terminated};
use nom::IResult;
use std::path::PathBuf;

// ===========================================================================
// Parsed representation
// ===========================================================================

/// One corner reference of an element, exactly as written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedCorner {
    pub position: i64,
    pub texcoord: Option<i64>,
    pub normal: Option<i64>,
}

/// The geometry part of a line
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    Position(Vec<f64>),
    Normal(Vec<f64>),
    TexCoord(Vec<f64>),
    Element { kind: char, corners: Vec<ParsedCorner> },
    Group(String),
    Command { name: String, args: Vec<String> },
    /// No geometry: blank, annotation-only or comment-only line
    Empty,
}

/// A line split into geometry, annotation string and comment
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLine {
    pub directive: Directive,
    /// Text between the first and second `#`, trimmed
    pub annotation: Option<String>,
    /// Text after the second `#`
    pub comment: Option<String>,
}

// ===========================================================================
// Parsers
// ===========================================================================

fn floats(input: &str) -> IResult<&str, Vec<f64>> {
    separated_list1(space1, double)(input)
}

fn corner(input: &str) -> IResult<&str, ParsedCorner> {
    let (input, position) = index(input)?;
    let (input, attached) = opt(preceded(
        char('/'),
        pair(opt(index), opt(preceded(char('/'), index))),
    ))(input)?;
    let (texcoord, normal) = attached.unwrap_or((None, None));
    Ok((
        input,
        ParsedCorner {
            position,
            texcoord,
            normal,
        },
    ))
}

fn geometry_directive(input: &str) -> IResult<&str, Directive> {
    alt((
        map(preceded(pair(tag("vn"), space1), floats), Directive::Normal),
        map(preceded(pair(tag("vt"), space1), floats), Directive::TexCoord),
        map(preceded(pair(tag("v"), space1), floats), Directive::Position),
        map(
            pair(
                terminated(one_of("plf"), space1),
                separated_list1(space1, corner),
            ),
            |(kind, corners)| Directive::Element { kind, corners },
        ),
        map(preceded(pair(tag("g"), space1), rest), |name: &str| {
            Directive::Group(name.to_string())
        }),
    ))(input)
}

/// Parse a single line of obj text. Panics on geometry it cannot read
pub fn parse_line(line: &str) -> ParsedLine {
    if let Some(command) = line.strip_prefix("#!") {
        let mut words = command.split_whitespace().map(str::to_string);
        let name = words.next().unwrap_or_default();
        return ParsedLine {
            directive: Directive::Command {
                name,
                args: words.collect(),
            },
            annotation: None,
            comment: None,
        };
    }

    let (geometry, annotated) = match line.split_once('#') {
        Some((geometry, rest)) => (geometry, Some(rest)),
        None => (line, None),
    };
    let (annotation, comment) = match annotated {
        Some(text) => match text.split_once('#') {
            Some((annotation, comment)) => (Some(annotation), Some(comment.to_string())),
            None => (Some(text), None),
        },
        None => (None, None),
    };

    let geometry = geometry.trim_end();
    let directive = if geometry.is_empty() {
        Directive::Empty
    } else {
        match all_consuming(geometry_directive)(geometry) {
            Ok((_, directive)) => directive,
            Err(e) => panic!("cannot parse obj line {:?}: {:?}", line, e),
        }
    };

    ParsedLine {
        directive,
        annotation: annotation.map(|a| a.trim().to_string()),
        comment,
    }
}

/// Parse every line of a document
pub fn parse_document(text: &str) -> Vec<ParsedLine> {
    text.lines().map(parse_line).collect()
}

// ===========================================================================
// Reference checking
// ===========================================================================

/// An element with every reference resolved to a 1-based absolute index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedElement {
    pub kind: char,
    pub positions: Vec<usize>,
    pub texcoords: Vec<usize>,
    pub normals: Vec<usize>,
}

fn resolve(index: i64, count: usize, line: usize) -> usize {
    let absolute = if index < 0 {
        count as i64 + 1 + index
    } else {
        index
    };
    assert!(
        absolute >= 1 && absolute as usize <= count,
        "line {}: reference {} out of range (1..={})",
        line + 1,
        index,
        count
    );
    absolute as usize
}

/// Resolve every element reference the way an obj reader does, panicking
/// on references that do not point at an earlier record
pub fn resolve_elements(lines: &[ParsedLine]) -> Vec<ResolvedElement> {
    let (mut v, mut vt, mut vn) = (0usize, 0usize, 0usize);
    let mut elements = Vec::new();
    for (n, line) in lines.iter().enumerate() {
        match &line.directive {
            Directive::Position(_) => v += 1,
            Directive::TexCoord(_) => vt += 1,
            Directive::Normal(_) => vn += 1,
            Directive::Element { kind, corners } => {
                let mut element = ResolvedElement {
                    kind: *kind,
                    positions: Vec::new(),
                    texcoords: Vec::new(),
                    normals: Vec::new(),
                };
                for c in corners {
                    element.positions.push(resolve(c.position, v, n));
                    if let Some(t) = c.texcoord {
                        element.texcoords.push(resolve(t, vt, n));
                    }
                    if let Some(nn) = c.normal {
                        element.normals.push(resolve(nn, vn, n));
                    }
                }
                elements.push(element);
            }
            _ => {}
        }
    }
    elements
}

/// Coordinates of every position record, in order
pub fn positions(lines: &[ParsedLine]) -> Vec<Vec<f64>> {
    lines
        .iter()
        .filter_map(|line| match &line.directive {
            Directive::Position(coords) => Some(coords.clone()),
            _ => None,
        })
        .collect()
}

/// Every command line as (name, args)
pub fn commands(lines: &[ParsedLine]) -> Vec<(String, Vec<String>)> {
    lines
        .iter()
        .filter_map(|line| match &line.directive {
            Directive::Command { name, args } => Some((name.clone(), args.clone())),
            _ => None,
        })
        .collect()
}

// ===========================================================================
// Output paths
// ===========================================================================

/// Path for a file written by a test, in a per-process temp directory
pub fn temp_output_path(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("prism_obj_tests_{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("create temp output dir");
    dir.join(name)
}

