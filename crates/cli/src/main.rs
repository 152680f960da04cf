use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use congruence::problem::{GeneratorParams, ProblemGenerator, TriangleId};
use congruence::validate::validate;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod answer;
mod json;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Congruence problem generator and answer checker")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Generate problems and print (or write) them as JSON
    Generate {
        #[arg(long, default_value_t = 2025)]
        seed: u64,
        #[arg(long, default_value_t = 1)]
        count: u32,
        /// Write a JSON array here instead of stdout
        #[arg(long)]
        out: Option<String>,
    },
    /// Regenerate the problem for a seed and judge an answer
    Check {
        #[arg(long)]
        seed: u64,
        /// Answer file: {"choice": "...", "statement": [..], "theorem": "..."}
        #[arg(long)]
        answer: Option<String>,
        /// Chosen candidate id (correct|unprovable|distractor1|distractor2)
        #[arg(long)]
        choice: Option<String>,
        /// Claimed correspondence for labels A,B,C, e.g. "1,2,0"
        #[arg(long)]
        statement: Option<String>,
        /// Claimed theorem (SSS|SAS|ASA|HL)
        #[arg(long)]
        theorem: Option<String>,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Generate { seed, count, out } => generate(seed, count, out),
        Action::Check {
            seed,
            answer,
            choice,
            statement,
            theorem,
        } => check(seed, answer, choice, statement, theorem),
    }
}

fn generate(seed: u64, count: u32, out: Option<String>) -> Result<()> {
    tracing::info!(seed, count, "generate");
    let mut gen = ProblemGenerator::new(GeneratorParams::default(), seed)?;
    let mut docs = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let sample = gen.generate_next()?;
        docs.push(json::problem_to_json(&sample.problem, &sample.replay));
    }
    let doc = serde_json::Value::Array(docs);
    match out {
        Some(path) => {
            let out_path = Path::new(&path);
            if let Some(parent) = out_path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("creating {}", parent.display()))?;
                }
            }
            std::fs::write(out_path, serde_json::to_vec_pretty(&doc)?)
                .with_context(|| format!("writing {}", out_path.display()))?;
            tracing::info!(path, "wrote problems");
        }
        None => println!("{}", serde_json::to_string_pretty(&doc)?),
    }
    Ok(())
}

fn check(
    seed: u64,
    answer: Option<String>,
    choice: Option<String>,
    statement: Option<String>,
    theorem: Option<String>,
) -> Result<()> {
    let spec = match answer {
        Some(path) => answer::AnswerSpec::from_file(Path::new(&path))?,
        None => answer::AnswerSpec::from_args(
            choice.as_deref(),
            statement.as_deref(),
            theorem.as_deref(),
        )?,
    };
    tracing::info!(seed, "check");
    let problem = ProblemGenerator::generate_single(&GeneratorParams::default(), seed)?;
    let correct = problem
        .choice(TriangleId::Correct)
        .context("generated problem has no correct choice")?;
    let chosen = match spec.choice {
        Some(id) => Some(
            problem
                .choice(id)
                .with_context(|| format!("problem has no choice {id:?}"))?,
        ),
        None => None,
    };
    let verdict = validate(
        chosen,
        spec.statement,
        spec.theorem,
        problem.theorem,
        correct,
        &problem.target,
    );
    println!("{}", serde_json::to_string_pretty(&json::verdict_to_json(&verdict))?);
    if !verdict.success {
        std::process::exit(1);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn generate_writes_a_parseable_array() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out/problems.json");
        generate(7, 3, Some(path.to_string_lossy().into_owned())).unwrap();
        let raw = std::fs::read(&path).unwrap();
        let doc: serde_json::Value = serde_json::from_slice(&raw).unwrap();
        let arr = doc.as_array().unwrap();
        assert_eq!(arr.len(), 3);
        for entry in arr {
            assert!(entry["seed"].is_u64());
            assert_eq!(entry["choices"].as_array().unwrap().len(), 4);
        }
    }
}
