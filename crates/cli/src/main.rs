use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use engine::{DecisionRecord, EngineConfig, Evaluation, RecommendationEngine, SweepPoint};
use inputs::{parse_quiz_list, ClockTime, InputError, QuizAnswer, StudentInput, QUIZ_QUESTION_COUNT};
use pipeline::{ScenarioBreakdown, Strategy};
use rand::Rng;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Sleep or Cram - should you study or go to bed before your exam?
#[derive(Parser)]
#[command(name = "sleep-or-cram")]
#[command(about = "Recommends sleeping or a short targeted cram before an exam", long_about = None)]
struct Cli {
    /// JSON file overriding the engine's tunables
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Show debug logs (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// The student's situation, shared by `recommend` and `sweep`
#[derive(Args, Debug)]
struct InputArgs {
    /// Current time (HH:MM, 24h)
    #[arg(long)]
    now: ClockTime,

    /// Exam start time (HH:MM, 24h)
    #[arg(long)]
    exam: ClockTime,

    /// Hours already studied today
    #[arg(long, default_value = "0")]
    studied: f64,

    /// Self-rated confidence, 0 to 100
    #[arg(long)]
    confidence: f64,

    /// Three quiz answers: 0/33/67/100 or none/some/most/all, comma-separated
    #[arg(long, value_parser = parse_quiz_arg)]
    quiz: [QuizAnswer; QUIZ_QUESTION_COUNT],
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend a strategy for tonight
    Recommend {
        #[command(flatten)]
        input: InputArgs,

        /// Print the decision record as JSON
        #[arg(long)]
        json: bool,

        /// Show which rules fired and both scenario breakdowns
        #[arg(long)]
        explain: bool,
    },

    /// Re-run the recommendation for later start times up to the exam
    Sweep {
        #[command(flatten)]
        input: InputArgs,

        /// Minutes between start times
        #[arg(long, default_value = "60")]
        step_minutes: u32,

        /// Print the series as JSON
        #[arg(long)]
        json: bool,
    },

    /// Time the engine over random inputs
    Benchmark {
        /// Number of evaluations to run
        #[arg(long, default_value = "10000")]
        requests: usize,
    },
}

fn parse_quiz_arg(value: &str) -> Result<[QuizAnswer; QUIZ_QUESTION_COUNT], InputError> {
    parse_quiz_list(value)
}

impl InputArgs {
    fn to_student_input(&self) -> Result<StudentInput> {
        StudentInput::new(self.now, self.exam, self.studied, self.confidence, self.quiz)
            .context("Invalid student input")
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so JSON output stays clean
    let default_directive = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive)),
        )
        .init();

    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => EngineConfig::default(),
    };
    let engine = RecommendationEngine::new(config);

    match cli.command {
        Commands::Recommend {
            input,
            json,
            explain,
        } => handle_recommend(&engine, &input, json, explain)?,
        Commands::Sweep {
            input,
            step_minutes,
            json,
        } => handle_sweep(&engine, &input, step_minutes, json)?,
        Commands::Benchmark { requests } => handle_benchmark(&engine, requests)?,
    }

    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(
    engine: &RecommendationEngine,
    args: &InputArgs,
    json: bool,
    explain: bool,
) -> Result<()> {
    let input = args.to_student_input()?;
    let evaluation = engine.evaluate(&input);

    if json {
        let output = evaluation
            .record
            .to_json()
            .context("Failed to serialize decision record")?;
        println!("{}", output);
        return Ok(());
    }

    print_record(&evaluation.record);
    if explain {
        print_explanation(&evaluation);
    }
    Ok(())
}

/// Handle the 'sweep' command
fn handle_sweep(
    engine: &RecommendationEngine,
    args: &InputArgs,
    step_minutes: u32,
    json: bool,
) -> Result<()> {
    let input = args.to_student_input()?;
    let points = engine
        .sweep(&input, step_minutes)
        .context("Failed to run sweep")?;

    if json {
        let output =
            serde_json::to_string_pretty(&points).context("Failed to serialize sweep")?;
        println!("{}", output);
        return Ok(());
    }

    print_sweep(&input, &points);
    Ok(())
}

/// Handle the 'benchmark' command
fn handle_benchmark(engine: &RecommendationEngine, requests: usize) -> Result<()> {
    if requests == 0 {
        anyhow::bail!("Benchmark needs at least one request");
    }

    let mut rng = rand::rng();
    let inputs: Vec<StudentInput> = (0..requests)
        .map(|_| random_input(&mut rng))
        .collect::<Result<_>>()?;

    let mut timings = Vec::with_capacity(requests);
    let mut cram_count = 0usize;
    let total_start = Instant::now();
    for input in &inputs {
        let start = Instant::now();
        let record = engine.recommend(input);
        timings.push(start.elapsed());
        if record.decision == Strategy::StrategicCram {
            cram_count += 1;
        }
    }
    let total_time = total_start.elapsed();

    timings.sort();
    let sum: Duration = timings.iter().sum();
    let avg_latency = sum / timings.len() as u32;
    let throughput = requests as f64 / total_time.as_secs_f64();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Requests: {} ({} cram, {} sleep)", requests, cram_count, requests - cram_count);
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(&timings, 0.50));
    println!("P95 latency: {:?}", percentile(&timings, 0.95));
    println!("P99 latency: {:?}", percentile(&timings, 0.99));
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

/// Value at quantile `q` of an ascending, non-empty slice
fn percentile(sorted: &[Duration], q: f64) -> Duration {
    let index = ((sorted.len() as f64 * q) as usize).min(sorted.len() - 1);
    sorted[index]
}

fn random_input(rng: &mut impl Rng) -> Result<StudentInput> {
    let quiz = [
        QuizAnswer::ALL[rng.random_range(0..QuizAnswer::ALL.len())],
        QuizAnswer::ALL[rng.random_range(0..QuizAnswer::ALL.len())],
        QuizAnswer::ALL[rng.random_range(0..QuizAnswer::ALL.len())],
    ];
    StudentInput::new(
        ClockTime::from_minutes(rng.random_range(0..1440)),
        ClockTime::from_minutes(rng.random_range(0..1440)),
        rng.random_range(0.0..8.0),
        rng.random_range(0.0..=100.0),
        quiz,
    )
    .context("Generated an invalid benchmark input")
}

// ============================================================================
// Output
// ============================================================================

fn strategy_label(strategy: Strategy) -> colored::ColoredString {
    match strategy {
        Strategy::Sleep => "SLEEP".bold().cyan(),
        Strategy::StrategicCram => "STRATEGIC CRAM".bold().yellow(),
    }
}

/// Print the recommendation the way the wizard's result screen reads
fn print_record(record: &DecisionRecord) {
    println!("{} {}", "Recommendation:".bold().blue(), strategy_label(record.decision));
    println!(
        "{} +{} points",
        "Projected boost:".bold(),
        record.projected_boost.to_string().green()
    );
    println!();
    println!("{}", record.reasoning);
    println!();
    println!("{}", "Action plan:".bold().blue());
    for (step, action) in record.action_plan.iter().enumerate() {
        println!("{}. {}", (step + 1).to_string().green(), action);
    }
    println!();
    println!("{} {}", "Why:".bold().blue(), record.science_note);
    println!();

    let diagnostics = &record.diagnostics;
    println!("{}", "Details:".bold().blue());
    println!("{}Available hours: {:.1}", "• ".cyan(), diagnostics.available_hours);
    println!(
        "{}Effective study hours: {:.1}",
        "• ".cyan(),
        diagnostics.effective_study_hours
    );
    println!(
        "{}Cognitive state: {}%",
        "• ".cyan(),
        diagnostics.cognitive_state_percent
    );
    println!(
        "{}Adjusted confidence: {} ({})",
        "• ".cyan(),
        diagnostics.adjusted_confidence,
        diagnostics.confidence_band
    );
}

fn print_explanation(evaluation: &Evaluation) {
    println!();
    println!("{}", "Rules:".bold().blue());
    for entry in &evaluation.outcome.trace {
        let status = if entry.fired { "fired".green() } else { "passed".dimmed() };
        println!("  - {}: {}", entry.rule, status);
    }
    if evaluation.outcome.trace.iter().all(|entry| !entry.fired) {
        println!("  - {}: {}", evaluation.outcome.verdict.rule, "fallback".yellow());
    }

    println!();
    println!("{}", "Scenarios:".bold().blue());
    print_breakdown(&evaluation.record.diagnostics.max_sleep);
    print_breakdown(&evaluation.record.diagnostics.strategic_split);
}

fn print_breakdown(breakdown: &ScenarioBreakdown) {
    println!(
        "  {}: study {:.1}h (+{:.1}), sleep {:.1}h ({:+.1}) = {:.1}",
        breakdown.kind.to_string().bold(),
        breakdown.study_hours,
        breakdown.cram_benefit,
        breakdown.sleep_hours,
        breakdown.sleep_benefit,
        breakdown.boost
    );
}

fn print_sweep(input: &StudentInput, points: &[SweepPoint]) {
    println!(
        "{}",
        format!("Recommendations from {} until the {} exam:", input.current_time, input.exam_time)
            .bold()
            .blue()
    );
    for point in points {
        println!(
            "{}  {:>4.1}h left  {:<16} +{}",
            point.start_time.to_string().green(),
            point.available_hours,
            strategy_label(point.decision),
            point.projected_boost
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_recommend_args() {
        let cli = Cli::try_parse_from([
            "sleep-or-cram",
            "recommend",
            "--now",
            "22:00",
            "--exam",
            "09:00",
            "--confidence",
            "50",
            "--quiz",
            "none,some,100",
            "--json",
        ])
        .unwrap();

        match cli.command {
            Commands::Recommend { input, json, explain } => {
                assert!(json);
                assert!(!explain);
                assert_eq!(input.studied, 0.0);
                assert_eq!(
                    input.quiz,
                    [QuizAnswer::NotAtAll, QuizAnswer::Partially, QuizAnswer::Completely]
                );
                assert!(input.to_student_input().is_ok());
            }
            _ => panic!("expected recommend"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "sleep-or-cram",
            "benchmark",
            "--requests",
            "5",
            "--verbose",
            "--config",
            "tunables.json",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("tunables.json")));
    }

    #[test]
    fn test_rejects_bad_clock_and_quiz() {
        let bad_clock = Cli::try_parse_from([
            "sleep-or-cram", "recommend", "--now", "25:00", "--exam", "09:00",
            "--confidence", "50", "--quiz", "0,0,0",
        ]);
        assert!(bad_clock.is_err());

        let bad_quiz = Cli::try_parse_from([
            "sleep-or-cram", "recommend", "--now", "22:00", "--exam", "09:00",
            "--confidence", "50", "--quiz", "0,50,0",
        ]);
        assert!(bad_quiz.is_err());
    }

    #[test]
    fn test_out_of_range_confidence_fails_validation() {
        let cli = Cli::try_parse_from([
            "sleep-or-cram", "sweep", "--now", "22:00", "--exam", "09:00",
            "--confidence", "120", "--quiz", "0,0,0",
        ])
        .unwrap();
        match cli.command {
            Commands::Sweep { input, step_minutes, .. } => {
                assert_eq!(step_minutes, 60);
                assert!(input.to_student_input().is_err());
            }
            _ => panic!("expected sweep"),
        }
    }

    #[test]
    fn test_percentile() {
        let timings: Vec<Duration> = (1..=100).map(Duration::from_micros).collect();
        assert_eq!(percentile(&timings, 0.50), Duration::from_micros(51));
        assert_eq!(percentile(&timings, 0.99), Duration::from_micros(100));
        assert_eq!(percentile(&timings[..1], 0.99), Duration::from_micros(1));
    }

    #[test]
    fn test_random_inputs_are_valid() {
        let mut rng = rand::rng();
        for _ in 0..100 {
            assert!(random_input(&mut rng).is_ok());
        }
    }
}
