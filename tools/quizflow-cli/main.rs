use clap::Parser;
use quizflow::prelude::*;
use std::fs;
use std::io::{self, Write};
use std::time::Instant;

/// A compilation engine CLI for visual quiz flow graphs
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the serialized quiz graph JSON file
    graph_path: String,

    /// Write the questions artifact to this file instead of stdout
    #[arg(long)]
    questions_out: Option<String>,

    /// Write the rules artifact to this file instead of stdout
    #[arg(long)]
    rules_out: Option<String>,

    /// Save the whole compiled quiz as a binary bundle
    #[arg(long)]
    bundle_out: Option<String>,

    /// Maximum number of paths to enumerate before failing closed
    #[arg(long, default_value_t = quizflow::compiler::DEFAULT_MAX_PATHS)]
    max_paths: usize,

    /// Play the compiled quiz interactively after compiling
    #[arg(short, long)]
    play: bool,
}

fn main() {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    // --- 1. File Loading ---
    let load_start = Instant::now();
    let graph_json = fs::read_to_string(&cli.graph_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read graph file '{}': {}",
            &cli.graph_path, e
        ))
    });
    let load_duration = load_start.elapsed();

    // --- 2. Parsing ---
    let graph = GraphDefinition::from_json(&graph_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse quiz graph: {}", e)));

    // --- 3. Compilation ---
    println!("\nCompiling quiz graph...");
    let compile_start = Instant::now();
    let quiz = Compiler::builder(graph)
        .with_max_paths(cli.max_paths)
        .build()
        .compile()
        .unwrap_or_else(|e| exit_with_error(&format!("Compilation failed: {}", e)));
    let compile_duration = compile_start.elapsed();

    println!(
        "Compilation successful! {} question(s), {} rule(s).",
        quiz.questions.len(),
        quiz.rules.len()
    );
    for question in &quiz.questions {
        match &question.show_if {
            Some(gate) => println!("  -> '{}' shown if {}", question.key, gate),
            None => println!("  -> '{}' always shown", question.key),
        }
    }

    // --- 4. Artifact Output ---
    let questions_json = quiz
        .questions_json()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to encode questions: {}", e)));
    let rules_json = quiz
        .rules_json()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to encode rules: {}", e)));

    write_artifact("questions", &questions_json, cli.questions_out.as_deref());
    write_artifact("rules", &rules_json, cli.rules_out.as_deref());

    if let Some(path) = &cli.bundle_out {
        quiz.save(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to save bundle: {}", e)));
        println!("  -> Wrote compiled bundle to '{}'", path);
    }

    println!("\n--- Performance Summary ---");
    println!("File Loading: {:?}", load_duration);
    println!("Compilation:  {:?}", compile_duration);

    if cli.play {
        play(&quiz);
    }
}

fn write_artifact(name: &str, content: &str, path: Option<&str>) {
    match path {
        Some(path) => {
            fs::write(path, content).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to write {} to '{}': {}", name, path, e))
            });
            println!("  -> Wrote {} artifact to '{}'", name, path);
        }
        None => println!("\n{} artifact:\n{}", name, content),
    }
}

/// Runs an interactive session over the compiled quiz.
fn play(quiz: &CompiledQuiz) {
    println!("\n--- Quizflow Interactive Mode ---");
    let mut session = QuizSession::new(quiz);

    while let Some(question) = session.current_question() {
        println!("\n{}", question.question);
        for (position, option) in question.options.iter().enumerate() {
            println!("  {}: {}", position + 1, option);
        }

        let choice = loop {
            let input = prompt_for_input("Enter choice", Some("1"));
            match input.trim().parse::<usize>() {
                Ok(n) if (1..=question.options.len()).contains(&n) => break n - 1,
                _ => println!(
                    "Invalid choice. Please enter a number between 1 and {}.",
                    question.options.len()
                ),
            }
        };

        if let Err(e) = session.answer(&question.key, &question.options[choice]) {
            exit_with_error(&format!("Failed to record answer: {}", e));
        }
    }

    println!("\nQuiz finished!");
    match session.outcome() {
        Some(rule) => {
            println!("  -> Outcome: {}", rule.label);
            if !rule.summary.is_empty() {
                println!("  -> {}", rule.summary);
            }
            if !rule.products.is_empty() {
                println!("  -> Recommended products: {:?}", rule.products);
            }
        }
        None => println!("  -> No outcome matched your answers."),
    }
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    io::stdout().flush().unwrap();

    io::stdin()
        .read_line(&mut line)
        .expect("Failed to read line");
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
