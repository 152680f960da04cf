//! Learner answers supplied to `check`, inline or as a JSON file.

use anyhow::{bail, Context, Result};
use congruence::perm::Perm3;
use congruence::problem::{Theorem, TriangleId};
use serde::Deserialize;
use std::path::Path;

/// On-disk answer shape.
#[derive(Debug, Deserialize)]
struct AnswerFile {
    /// Candidate id, or null/missing for "no triangle selected".
    choice: Option<String>,
    statement: [u8; 3],
    theorem: String,
}

/// Parsed submission.
#[derive(Clone, Copy, Debug)]
pub struct AnswerSpec {
    pub choice: Option<TriangleId>,
    pub statement: Perm3,
    pub theorem: Theorem,
}

impl AnswerSpec {
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        let file: AnswerFile =
            serde_json::from_slice(&raw).with_context(|| format!("parsing {}", path.display()))?;
        Ok(Self {
            choice: file.choice.as_deref().map(parse_choice).transpose()?,
            statement: Perm3::new(file.statement)?,
            theorem: parse_theorem(&file.theorem)?,
        })
    }

    pub fn from_args(
        choice: Option<&str>,
        statement: Option<&str>,
        theorem: Option<&str>,
    ) -> Result<Self> {
        let statement = statement.context("--statement is required without --answer")?;
        let theorem = theorem.context("--theorem is required without --answer")?;
        Ok(Self {
            choice: choice.map(parse_choice).transpose()?,
            statement: parse_statement(statement)?,
            theorem: parse_theorem(theorem)?,
        })
    }
}

fn parse_choice(raw: &str) -> Result<TriangleId> {
    let id = match raw.to_ascii_lowercase().as_str() {
        "correct" => TriangleId::Correct,
        "unprovable" => TriangleId::Unprovable,
        "distractor1" => TriangleId::Distractor1,
        "distractor2" => TriangleId::Distractor2,
        other => bail!("unknown candidate id: {other}"),
    };
    Ok(id)
}

fn parse_theorem(raw: &str) -> Result<Theorem> {
    let t = match raw.to_ascii_uppercase().as_str() {
        "SSS" => Theorem::Sss,
        "SAS" => Theorem::Sas,
        "ASA" => Theorem::Asa,
        "HL" => Theorem::Hl,
        other => bail!("unknown theorem: {other}"),
    };
    Ok(t)
}

fn parse_statement(raw: &str) -> Result<Perm3> {
    let parts: Vec<u8> = raw
        .split(',')
        .map(|p| {
            p.trim()
                .parse::<u8>()
                .with_context(|| format!("bad label index: {p:?}"))
        })
        .collect::<Result<_>>()?;
    let values: [u8; 3] = parts
        .as_slice()
        .try_into()
        .context("statement needs exactly three labels, e.g. 1,2,0")?;
    Ok(Perm3::new(values)?)
}
