use clap::Parser;
use quizflow::prelude::*;
use rand::Rng;
use rand::rngs::ThreadRng;
use serde_json::{Map, Value, json};
use std::fs;

/// A CLI tool to generate random acyclic quiz graphs for exercising the compiler
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_graph.json")]
    output: String,

    /// Number of question blocks to generate
    #[arg(long, default_value_t = 6)]
    questions: usize,

    /// Number of result blocks to generate
    #[arg(long, default_value_t = 4)]
    results: usize,

    /// Maximum options per question (2 to 8)
    #[arg(long, default_value_t = 3)]
    max_options: usize,
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.questions == 0 || cli.results == 0 {
        eprintln!("Error: --questions and --results must both be at least 1");
        std::process::exit(1);
    }
    if !(2..=8).contains(&cli.max_options) {
        eprintln!("Error: --max-options must be between 2 and 8");
        std::process::exit(1);
    }

    println!(
        "Generating quiz graph ({} questions, {} results)...",
        cli.questions, cli.results
    );

    let mut blocks = Map::new();
    for index in 0..cli.questions {
        let option_count = rng.random_range(2..=cli.max_options);
        let options: Vec<String> = (0..option_count)
            .map(|option| format!("Answer {}", option + 1))
            .collect();

        let mut connections = Map::new();
        for option in 0..option_count {
            let target = pick_target(&mut rng, index, cli.questions, cli.results);
            connections.insert(option.to_string(), Value::String(target));
        }

        blocks.insert(
            format!("q{}", index + 1),
            json!({
                "type": "question",
                "key": format!("question_{}", index + 1),
                "question": format!("Sample question {}?", index + 1),
                "options": options,
                "connections": connections,
            }),
        );
    }

    for index in 0..cli.results {
        blocks.insert(
            format!("r{}", index + 1),
            json!({
                "type": "result",
                "label": format!("Outcome {}", index + 1),
                "summary": format!("Summary for outcome {}", index + 1),
                "products": [],
            }),
        );
    }

    let graph = json!({ "blocks": blocks });
    let pretty = serde_json::to_string_pretty(&graph)?;
    fs::write(&cli.output, &pretty)?;
    println!("Saved generated graph to '{}'", cli.output);

    // Sanity check: the generated graph must compile.
    let quiz = Compiler::builder(GraphDefinition::from_json(&pretty)?)
        .build()
        .compile()?;
    println!(
        "-> Compiles to {} question(s) and {} rule(s).",
        quiz.questions.len(),
        quiz.rules.len()
    );

    Ok(())
}

/// Picks a connection target strictly later in the generation order, so
/// the graph stays acyclic and question 1 is the unique start block.
fn pick_target(
    rng: &mut ThreadRng,
    question_index: usize,
    questions: usize,
    results: usize,
) -> String {
    let later_questions = questions - question_index - 1;
    let pick = rng.random_range(0..later_questions + results);
    if pick < later_questions {
        format!("q{}", question_index + 2 + pick)
    } else {
        format!("r{}", pick - later_questions + 1)
    }
}
