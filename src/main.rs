use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use exam_calc::age::parse_date;
use exam_calc::config::Settings;
use exam_calc::eligibility::{Exam, Qualification};
use exam_calc::output;
use exam_calc::ValidationError;

const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR: i32 = 1;
const EXIT_VALIDATION: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Age on the cutoff date and the UPSC age window for a category
    Age {
        /// Date of birth (YYYY-MM-DD)
        dob: String,
        #[arg(short = 'C', long, default_value = "general")]
        category: String,
        /// Cutoff date (defaults to Aug 1 of the configured exam year)
        #[arg(long)]
        cutoff: Option<String>,
    },
    /// Full UPSC CSE age and attempts check
    Upsc {
        dob: String,
        #[arg(short = 'C', long, default_value = "general")]
        category: String,
        /// Attempts already used
        #[arg(short, long, default_value_t = 0)]
        attempts: u32,
        #[arg(long)]
        cutoff: Option<String>,
    },
    /// Remaining UPSC attempts
    Attempts {
        #[arg(short = 'C', long, default_value = "general")]
        category: String,
        /// Attempts already used
        #[arg(short, long, default_value_t = 0)]
        used: u32,
        /// Current age in whole years
        #[arg(long)]
        age: u32,
    },
    /// Age, education and attempts checked together
    Eligibility {
        dob: String,
        #[arg(short = 'C', long, default_value = "general")]
        category: String,
        /// Highest qualification (e.g. bachelor, master, diploma)
        #[arg(short, long, default_value = "bachelor")]
        education: String,
        #[arg(short, long, default_value_t = 0)]
        attempts: u32,
        #[arg(long)]
        cutoff: Option<String>,
    },
    /// Age and education check for another government exam
    Exam {
        /// Exam name (upsc, ssc_cgl, ssc_chsl, ssc_mts, ssc_gd, ibps_po, rrb_ntpc)
        exam: String,
        dob: String,
        #[arg(short = 'C', long, default_value = "general")]
        category: String,
        #[arg(short, long, default_value = "bachelor")]
        education: String,
        #[arg(long)]
        cutoff: Option<String>,
    },
    /// GS Paper I score with negative marking
    Score {
        correct: u32,
        wrong: u32,
        /// Total questions on the paper (defaults to config, then 100)
        #[arg(short, long)]
        total: Option<u32>,
    },
    /// CSAT (GS Paper II) qualifying check
    Csat {
        correct: u32,
        wrong: u32,
        #[arg(long, default_value_t = 0)]
        not_attempted: u32,
    },
    /// Both prelims papers together
    Prelims {
        gs1_correct: u32,
        gs1_wrong: u32,
        csat_correct: u32,
        csat_wrong: u32,
    },
    /// Final merit total from mains and interview marks
    Marks { mains: f64, interview: f64 },
    /// Prelims syllabus checklist
    Syllabus {
        /// Completed topic ids (e.g. p1-0 p3-2)
        #[arg(long, num_args = 0..)]
        completed: Vec<String>,
        /// Topic id to flip
        #[arg(long)]
        toggle: Option<String>,
    },
    /// Answer one JSON request, as the web API would
    Api {
        /// Endpoint name: age, upsc, attempts, eligibility, exam, score, csat,
        /// prelims, marks or syllabus
        endpoint: String,
        /// Request body; read from stdin when omitted
        #[arg(long)]
        body: Option<String>,
    },
}

#[derive(Parser, Debug)]
#[command(name = "exam-calc")]
#[command(about = "Government exam eligibility and score calculator", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/exam-calc/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "exam_calc=debug" } else { "warn" })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = cli.config.map(PathBuf::from);
    let config = match exam_calc::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = exam_calc::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let settings = Settings::from_config(&config);
    debug!(
        "Exam year {}, scoring {:?}",
        settings.exam_year, settings.scoring
    );

    let use_colors = output::should_use_colors();
    match run(cli.command, &settings, cli.json, use_colors) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            if let Some(validation) = e.downcast_ref::<ValidationError>() {
                eprintln!("Invalid input: {}", validation);
                std::process::exit(EXIT_VALIDATION);
            }
            eprintln!("Error: {:#}", e);
            std::process::exit(EXIT_ERROR);
        }
    }
}

/// Print either the formatted text or the JSON form of `value`
fn emit<T: Serialize>(
    value: &T,
    json: bool,
    text: impl FnOnce(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!("{}", output::format_json(value)?);
    } else {
        println!("{}", text(value));
    }
    Ok(())
}

fn run(
    command: Commands,
    settings: &Settings,
    json: bool,
    use_colors: bool,
) -> anyhow::Result<i32> {
    let year = settings.exam_year;

    match command {
        Commands::Age {
            dob,
            category,
            cutoff,
        } => {
            let birth = parse_date(&dob)?;
            let cutoff = Exam::UpscCse.resolve_cutoff(cutoff.as_deref(), year)?;
            let report = exam_calc::eligibility::age_report(birth, cutoff, category.into())?;
            emit(&report, json, |r| output::format_age_report(r, use_colors))?;
        }
        Commands::Upsc {
            dob,
            category,
            attempts,
            cutoff,
        } => {
            let birth = parse_date(&dob)?;
            let cutoff = Exam::UpscCse.resolve_cutoff(cutoff.as_deref(), year)?;
            let result = exam_calc::eligibility::check_upsc_eligibility(
                birth,
                cutoff,
                category.into(),
                attempts,
            )?;
            emit(&result, json, |r| output::format_upsc(r, use_colors))?;
        }
        Commands::Attempts {
            category,
            used,
            age,
        } => {
            let report = exam_calc::eligibility::attempts_report(category.into(), used, age);
            emit(&report, json, |r| output::format_attempts(r, use_colors))?;
        }
        Commands::Eligibility {
            dob,
            category,
            education,
            attempts,
            cutoff,
        } => {
            let birth = parse_date(&dob)?;
            let cutoff = Exam::UpscCse.resolve_cutoff(cutoff.as_deref(), year)?;
            let result = exam_calc::eligibility::check_full_eligibility(
                birth,
                cutoff,
                category.into(),
                &Qualification::parse(&education),
                attempts,
            )?;
            emit(&result, json, |r| {
                output::format_full_eligibility(r, use_colors)
            })?;
        }
        Commands::Exam {
            exam,
            dob,
            category,
            education,
            cutoff,
        } => {
            let exam: Exam = exam.parse()?;
            let birth = parse_date(&dob)?;
            let cutoff = exam.resolve_cutoff(cutoff.as_deref(), year)?;
            let result = exam_calc::eligibility::check_exam(
                exam,
                birth,
                cutoff,
                category.into(),
                &Qualification::parse(&education),
            )?;
            emit(&result, json, |r| output::format_exam(r, use_colors))?;
        }
        Commands::Score {
            correct,
            wrong,
            total,
        } => {
            let total = total.unwrap_or_else(|| settings.scoring.total_questions());
            let result = exam_calc::scoring::calculate_score(
                correct,
                wrong,
                total,
                &settings.scoring.gs_scheme(),
            )?;
            emit(&result, json, |r| {
                output::format_score_breakdown(r, use_colors)
            })?;
        }
        Commands::Csat {
            correct,
            wrong,
            not_attempted,
        } => {
            let result = exam_calc::scoring::evaluate_csat(
                correct,
                wrong,
                not_attempted,
                &settings.scoring,
            )?;
            emit(&result, json, |r| output::format_csat(r, use_colors))?;
        }
        Commands::Prelims {
            gs1_correct,
            gs1_wrong,
            csat_correct,
            csat_wrong,
        } => {
            let result = exam_calc::scoring::evaluate_prelims(
                gs1_correct,
                gs1_wrong,
                csat_correct,
                csat_wrong,
                &settings.scoring,
            )?;
            emit(&result, json, |r| output::format_prelims(r, use_colors))?;
        }
        Commands::Marks { mains, interview } => {
            let result = exam_calc::scoring::calculate_final_marks(mains, interview)?;
            emit(&result, json, |r| output::format_final_marks(r, use_colors))?;
        }
        Commands::Syllabus { completed, toggle } => {
            let mut progress = exam_calc::syllabus::progress_from_ids(&completed)?;
            if let Some(topic) = toggle {
                progress = exam_calc::syllabus::toggle_topic(&progress, &topic)?;
            }
            emit(&progress, json, |p| output::format_syllabus(p, use_colors))?;
        }
        Commands::Api { endpoint, body } => {
            let body = match body {
                Some(b) => b,
                None => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("Failed to read request body from stdin")?;
                    buf
                }
            };
            let response = exam_calc::api::handle(&endpoint, &body, settings);
            println!("{}", output::format_json(&response)?);
            if !response.is_success() {
                return Ok(if response.status == 422 {
                    EXIT_VALIDATION
                } else {
                    EXIT_ERROR
                });
            }
        }
    }

    Ok(EXIT_SUCCESS)
}
