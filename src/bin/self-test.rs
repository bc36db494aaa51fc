/*!
 * utilbelt self-test program
 *
 * Replays the oracle vectors shipped with the crate against the library,
 * checks the generator invariants (UUID shape, token length, alphabet) and
 * prints a colored report followed by a JSON summary.
 *
 * Usage:
 *   self-test           colored report + JSON summary
 *   self-test --json    JSON summary only
 *
 * Logging is controlled through RUST_LOG (default: warn).
 */

#![warn(clippy::all, clippy::pedantic)]
#![forbid(unsafe_code)]

use anyhow::{bail, Context, Result};
use chrono::Utc;
use colored::Colorize;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use utilbelt::{generators, predicates, strings, to_int, to_uint};

const ORACLE_VECTORS_JSON: &str = include_str!("../../tests/vectors/oracle-vectors.json");

const UUID_V4_PATTERN: &str =
    r"^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$";

/* Oracle vector file layout */
#[derive(Debug, Deserialize)]
struct OracleVectors {
    vectors: Vectors,
}

#[derive(Debug, Deserialize)]
struct Vectors {
    predicates: Section<Table<bool>>,
    transforms: Section<Table<String>>,
    numbers: Section<Table<i64>>,
}

#[derive(Debug, Deserialize)]
struct Section<T> {
    tests: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct Table<T> {
    name: String,
    cases: Vec<(String, T)>,
}

/* Report structures */
#[derive(Debug, Serialize)]
struct GroupResult {
    name: String,
    passed: bool,
    #[serde(rename = "caseCount")]
    case_count: usize,
    failures: Vec<String>,
}

#[derive(Debug, Serialize)]
struct TestResults {
    library: String,
    version: String,
    timestamp: String,
    groups: Vec<GroupResult>,
    #[serde(rename = "allPassed")]
    all_passed: bool,
}

struct SelfTestRunner {
    vectors: OracleVectors,
    json_only: bool,
    groups: Vec<GroupResult>,
}

impl SelfTestRunner {
    fn new(json_only: bool) -> Result<Self> {
        let vectors: OracleVectors = serde_json::from_str(ORACLE_VECTORS_JSON)
            .context("Failed to parse bundled oracle vectors")?;

        Ok(Self {
            vectors,
            json_only,
            groups: Vec::new(),
        })
    }

    fn run_all_tests(&mut self) -> Result<TestResults> {
        self.run_predicate_vectors()?;
        self.run_transform_vectors()?;
        self.run_number_vectors()?;
        self.run_generator_checks()?;

        let all_passed = self.groups.iter().all(|g| g.passed);
        Ok(TestResults {
            library: "utilbelt".to_string(),
            version: utilbelt::VERSION.to_string(),
            timestamp: Utc::now().to_rfc3339(),
            groups: std::mem::take(&mut self.groups),
            all_passed,
        })
    }

    fn run_predicate_vectors(&mut self) -> Result<()> {
        self.section("Predicates");

        let mut results = Vec::new();
        for table in &self.vectors.vectors.predicates.tests {
            let Some(predicate) = predicates::lookup(&table.name) else {
                bail!("Unknown predicate in vector file: {}", table.name);
            };

            let failures = table
                .cases
                .iter()
                .filter(|(input, expected)| predicate(input) != *expected)
                .map(|(input, expected)| {
                    format!("{}({:?}) expected {}", table.name, input, expected)
                })
                .collect();
            results.push(group(&table.name, table.cases.len(), failures));
        }

        self.record_all(results);
        Ok(())
    }

    fn run_transform_vectors(&mut self) -> Result<()> {
        self.section("Transforms");

        let mut results = Vec::new();
        for table in &self.vectors.vectors.transforms.tests {
            let Some(transform) = strings::lookup(&table.name) else {
                bail!("Unknown transform in vector file: {}", table.name);
            };

            let failures = table
                .cases
                .iter()
                .filter_map(|(input, expected)| {
                    let actual = transform(input);
                    (actual != *expected).then(|| {
                        format!(
                            "{}({:?}) expected {:?}, got {:?}",
                            table.name, input, expected, actual
                        )
                    })
                })
                .collect();
            results.push(group(&table.name, table.cases.len(), failures));
        }

        self.record_all(results);
        Ok(())
    }

    fn run_number_vectors(&mut self) -> Result<()> {
        self.section("Numbers");

        let mut results = Vec::new();
        for table in &self.vectors.vectors.numbers.tests {
            let convert: fn(&str) -> i64 = match table.name.as_str() {
                "to_int" => to_int,
                "to_uint" => |s| i64::from(to_uint(s)),
                other => bail!("Unknown number conversion in vector file: {}", other),
            };

            let failures = table
                .cases
                .iter()
                .filter_map(|(input, expected)| {
                    let actual = convert(input);
                    (actual != *expected).then(|| {
                        format!(
                            "{}({:?}) expected {}, got {}",
                            table.name, input, expected, actual
                        )
                    })
                })
                .collect();
            results.push(group(&table.name, table.cases.len(), failures));
        }

        self.record_all(results);
        Ok(())
    }

    fn run_generator_checks(&mut self) -> Result<()> {
        self.section("Generators");

        let uuid_pattern = Regex::new(UUID_V4_PATTERN).context("Invalid UUID pattern")?;
        let samples = 100;

        let mut failures = Vec::new();
        for _ in 0..samples {
            let id = generators::try_uuid().context("Entropy source unavailable")?;
            if !uuid_pattern.is_match(&id) {
                failures.push(format!("malformed uuid {id}"));
            }
        }
        self.record(group("uuid", samples, failures));

        let token = generators::uniq();
        let failures = if token.len() == 64 && token.chars().all(|c| c.is_ascii_hexdigit()) {
            Vec::new()
        } else {
            vec![format!("malformed token {token}")]
        };
        self.record(group("uniq", 1, failures));

        let random = generators::str_rand(256);
        let failures = if random.len() == 256
            && random.bytes().all(|b| generators::LETTERS.contains(&b))
        {
            Vec::new()
        } else {
            vec![format!("unexpected characters in {random}")]
        };
        self.record(group("str_rand", 1, failures));

        Ok(())
    }

    fn section(&self, title: &str) {
        if !self.json_only {
            println!("\n{}", title.bold().blue());
        }
    }

    fn record_all(&mut self, results: Vec<GroupResult>) {
        for result in results {
            self.record(result);
        }
    }

    fn record(&mut self, result: GroupResult) {
        debug!(group = %result.name, cases = result.case_count, "group finished");

        if !self.json_only {
            if result.passed {
                println!("  {} {} ({} cases)", "✔".green(), result.name, result.case_count);
            } else {
                println!("  {} {} ({} cases)", "✘".red(), result.name, result.case_count);
                for failure in &result.failures {
                    println!("      {}", failure.yellow());
                }
            }
        }
        self.groups.push(result);
    }
}

fn group(name: &str, case_count: usize, failures: Vec<String>) -> GroupResult {
    GroupResult {
        name: name.to_string(),
        passed: failures.is_empty(),
        case_count,
        failures,
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let json_only = std::env::args().skip(1).any(|arg| arg == "--json");
    info!(version = utilbelt::VERSION, json_only, "starting self-test");

    let mut runner = SelfTestRunner::new(json_only).context("Failed to initialize test runner")?;
    let results = runner.run_all_tests().context("Test execution failed")?;

    if !json_only {
        let verdict = if results.all_passed {
            "ALL CHECKS PASSED".green().bold()
        } else {
            "SOME CHECKS FAILED".red().bold()
        };
        println!("\n{verdict}\n");
    }
    println!(
        "{}",
        serde_json::to_string_pretty(&results).context("Failed to serialize results")?
    );

    if !results.all_passed {
        std::process::exit(1);
    }
    Ok(())
}
