use super::{InstanceReader, WarningHandler};
use crate::{
    aa::{build_af, AAFramework, Argument},
    error::ArgumentationError,
};
use anyhow::{anyhow, Context, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use std::io::{BufRead, BufReader, Read};

const ARG_NAME_PATTERN: &str = r"[_[:alpha:]][_[:alpha:]\d]*";

lazy_static! {
    static ref ARG_LINE_PATTERN: Regex =
        Regex::new(&format!(r"^arg\(\s*({})\s*\)\.$", ARG_NAME_PATTERN)).unwrap();
    static ref ATT_LINE_PATTERN: Regex = Regex::new(&format!(
        r"^att\(\s*({})\s*,\s*({})\s*\)\.$",
        ARG_NAME_PATTERN, ARG_NAME_PATTERN
    ))
    .unwrap();
}

enum Line {
    Blank,
    Arg(String),
    Att(String, String),
}

fn read_line(line: &str) -> Result<Line> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('%') {
        return Ok(Line::Blank);
    }
    if let Some(c) = ARG_LINE_PATTERN.captures(trimmed) {
        return Ok(Line::Arg(c[1].to_string()));
    }
    if let Some(c) = ATT_LINE_PATTERN.captures(trimmed) {
        return Ok(Line::Att(c[1].to_string(), c[2].to_string()));
    }
    Err(anyhow!(r#"syntax error in line "{}""#, trimmed))
}

/// A reader for the Aspartix format.
///
/// This object is used to read an [`AAFramework`] encoded using the Aspartix input format,
/// as defined on [the Aspartix website](https://www.dbai.tuwien.ac.at/research/argumentation/aspartix/dung.html).
/// In this format, defeats are written as `att` facts.
/// The [LabelType](crate::utils::LabelType) of the returned argument frameworks is [String].
///
/// Lines starting with `%` are comments.
/// Argument declarations and defeats may be interleaved, but a defeat must only refer to declared arguments.
/// Duplicate arguments and defeats raise warnings and are ignored.
///
/// # Aspartix format
///
/// The following content defines an Argumentation Framework with three arguments labelled `b`, `c` and `d`
/// and three defeats (`c` and `d` defeat each other and `b` defeats `c`).
///
/// ```text
/// arg(b).
/// arg(c).
/// arg(d).
/// att(b,c).
/// att(c,d).
/// att(d,c).
/// ```
#[derive(Default)]
pub struct AspartixReader {
    warning_handlers: Vec<WarningHandler>,
}

impl AspartixReader {
    fn warn(&self, line_index: usize, message: String) {
        self.warning_handlers
            .iter()
            .for_each(|h| (h)(1 + line_index, message.clone()));
    }
}

impl InstanceReader<String> for AspartixReader {
    fn read(&self, reader: &mut dyn Read) -> Result<AAFramework<String>> {
        let mut arg_labels = vec![];
        let mut known_args = HashSet::new();
        let mut defeats = vec![];
        let mut known_defeats = HashSet::new();
        for (i, line) in BufReader::new(reader).lines().enumerate() {
            let context = || format!("while reading line {}", i + 1);
            let line = line.with_context(context)?;
            match read_line(&line).with_context(context)? {
                Line::Blank => {}
                Line::Arg(a) => {
                    if known_args.insert(a.clone()) {
                        arg_labels.push(a);
                    } else {
                        self.warn(i, format!("argument {} is declared more than once", a));
                    }
                }
                Line::Att(a, b) => {
                    for label in [&a, &b] {
                        if !known_args.contains(label) {
                            return Err(ArgumentationError::NoSuchArgument(label.clone()))
                                .with_context(context);
                        }
                    }
                    if known_defeats.insert((a.clone(), b.clone())) {
                        defeats.push((a, b));
                    } else {
                        self.warn(i, format!("defeat from {} to {} is declared more than once", a, b));
                    }
                }
            }
        }
        build_af("", &arg_labels, &defeats)
    }

    fn read_arg_from_str<'a>(
        &self,
        af: &'a AAFramework<String>,
        arg: &str,
    ) -> Result<&'a Argument<String>> {
        af.argument_set().get_argument(&arg.trim().to_string())
    }

    fn add_warning_handler(&mut self, h: WarningHandler) {
        self.warning_handlers.push(h);
    }
}
