//! JSON views of the core records for CLI output.

use congruence::perm::Perm3;
use congruence::problem::{ColorTag, MarkingStyle, Problem, SeedReplay, Triangle, TriangleId};
use congruence::validate::{StatementJudgment, TheoremJudgment, TriangleJudgment, Verdict};
use serde_json::{json, Value};

pub fn problem_to_json(problem: &Problem, replay: &SeedReplay) -> Value {
    json!({
        "seed": replay.seed,
        "theorem": problem.theorem.to_string(),
        "target": triangle_to_json(&problem.target),
        "choices": problem.choices.iter().map(triangle_to_json).collect::<Vec<_>>(),
    })
}

pub fn triangle_to_json(t: &Triangle) -> Value {
    json!({
        "id": id_str(t.id),
        "vertices": t.vertices.iter().map(|v| json!([v.x, v.y])).collect::<Vec<_>>(),
        "display_rotation": t.display_rotation,
        "display_flipped": t.display_flipped,
        "marking": marking_to_json(&t.marking),
        "congruent_to_target": t.congruent_to_target,
        "labels": perm_to_json(t.labels),
    })
}

pub fn verdict_to_json(v: &Verdict) -> Value {
    let triangle = match v.triangle {
        TriangleJudgment::Correct => "correct",
        TriangleJudgment::Incorrect => "incorrect",
        TriangleJudgment::Missing => "missing",
    };
    let theorem = match v.theorem {
        TheoremJudgment::Correct => "correct",
        TheoremJudgment::Incorrect => "incorrect",
    };
    let statement = match v.statement {
        StatementJudgment::Correct => "correct",
        StatementJudgment::Incorrect => "incorrect",
        StatementJudgment::NotApplicable => "na",
    };
    json!({
        "triangle": triangle,
        "theorem": theorem,
        "statement": statement,
        "messages": v.messages,
        "success": v.success,
        "expected_theorem": v.expected_theorem.to_string(),
        "expected_statement": v.expected_statement.map(|p| p.as_array()),
    })
}

fn id_str(id: TriangleId) -> &'static str {
    match id {
        TriangleId::Target => "target",
        TriangleId::Correct => "correct",
        TriangleId::Unprovable => "unprovable",
        TriangleId::Distractor1 => "distractor1",
        TriangleId::Distractor2 => "distractor2",
    }
}

fn color_str(c: ColorTag) -> &'static str {
    match c {
        ColorTag::Red => "red",
        ColorTag::Blue => "blue",
        ColorTag::Amber => "amber",
    }
}

fn marking_to_json(m: &MarkingStyle) -> Value {
    json!({
        "visible_sides": m.visible_sides,
        "visible_angles": m.visible_angles,
        "side_colors": m.side_colors.iter().map(|&c| color_str(c)).collect::<Vec<_>>(),
        "angle_colors": m.angle_colors.iter().map(|&c| color_str(c)).collect::<Vec<_>>(),
        "right_angle_vertex": m.right_angle_vertex,
    })
}

fn perm_to_json(p: Perm3) -> Value {
    json!(p.as_array())
}

#[cfg(test)]
mod tests {
    use super::*;
    use congruence::problem::{GeneratorParams, ProblemGenerator};
    use congruence::validate::validate;
    use congruence::perm::Perm3;

    #[test]
    fn problem_document_carries_the_full_round() {
        let problem = ProblemGenerator::generate_single(&GeneratorParams::default(), 11).unwrap();
        let doc = problem_to_json(&problem, &SeedReplay { seed: 11 });
        assert_eq!(doc["seed"], 11);
        assert_eq!(doc["target"]["id"], "target");
        assert_eq!(doc["choices"].as_array().unwrap().len(), 4);
        for choice in doc["choices"].as_array().unwrap() {
            assert_eq!(choice["vertices"].as_array().unwrap().len(), 3);
            assert_eq!(
                choice["marking"]["side_colors"].as_array().unwrap().len(),
                3
            );
        }
    }

    #[test]
    fn verdict_document_uses_flat_judgment_strings() {
        let problem = ProblemGenerator::generate_single(&GeneratorParams::default(), 11).unwrap();
        let correct = problem.choice(TriangleId::Correct).unwrap();
        let v = validate(
            None,
            Perm3::IDENTITY,
            problem.theorem,
            problem.theorem,
            correct,
            &problem.target,
        );
        let doc = verdict_to_json(&v);
        assert_eq!(doc["triangle"], "missing");
        assert_eq!(doc["statement"], "na");
        assert_eq!(doc["success"], false);
        assert!(doc["expected_statement"].is_array());
    }
}
