//! Integration tests for the extraction commands
//!
//! Covers the exam (questions + options), answers (questions + correct
//! answers) and scrub (footer block removal) flows, plus batch processing
//! over a directory.

use examtidy::cli::batch::{self, BatchMode};
use examtidy::services::{answers_service, exam_service, scrub_service};
use std::fs;
use tempfile::TempDir;

const DUMP: &str = "\
## question 2

Which service stores objects?

A. Amazon S3

B. Amazon EC2

**Answer: A**

Community vote distribution here.
**Timestamp: Jan 1, 2024**
[View on ExamTopics](https://www.examtopics.com/discussions/amazon/view/2/)

## question 1

Pick two regions.

A. us-east-1

B. mars-north-1

C. eu-west-1

**Answer: AC**
";

#[test]
fn exam_digest_keeps_options_drops_answers() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("clf-c02.md");
    fs::write(&input, DUMP).unwrap();

    let output = exam_service::exam_file(&input, None).unwrap();
    assert_eq!(output, temp_dir.path().join("clf-c02-exam.md"));

    let sheet = fs::read_to_string(output).unwrap();
    assert!(sheet.starts_with("# Exam Topics Questions - CLF-C02\n\n"));
    assert!(sheet.contains("Which service stores objects?"));
    assert!(sheet.contains("B. Amazon EC2"));
    assert!(sheet.contains("B. mars-north-1"));
    assert!(!sheet.contains("**Answer:"));
    assert!(!sheet.contains("Community vote"));
    assert!(!sheet.contains("Timestamp"));
    // Source order is preserved: question 2 appears before question 1.
    assert!(sheet.find("## question 2").unwrap() < sheet.find("## question 1").unwrap());
}

#[test]
fn answers_digest_resolves_letters_to_texts() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("clf-c02.md");
    fs::write(&input, DUMP).unwrap();

    let output = answers_service::answers_file(&input, None).unwrap();
    assert_eq!(output, temp_dir.path().join("clf-c02-answers.md"));

    let digest = fs::read_to_string(output).unwrap();
    assert!(digest.starts_with("# Exam Questions & Answers - CLF-C02\n\n"));
    assert!(digest.contains("## question 2\n\nWhich service stores objects?"));
    assert!(digest.contains("- Amazon S3"));
    assert!(!digest.contains("- Amazon EC2"));
    assert!(digest.contains("- us-east-1"));
    assert!(digest.contains("- eu-west-1"));
    assert!(!digest.contains("- mars-north-1"));
}

#[test]
fn scrub_removes_footer_blocks_in_place() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("raw.md");
    fs::write(
        &input,
        "Keep this.\n**Timestamp: April 23, 2025**\n[View on ExamTopics](https://www.examtopics.com/discussions/amazon/view/9/)\nAnd this.\n",
    )
    .unwrap();

    let report = scrub_service::scrub_file(&input, None).unwrap();
    assert_eq!(report.removed, 1);
    assert_eq!(report.output, input);

    let scrubbed = fs::read_to_string(&input).unwrap();
    assert!(scrubbed.contains("Keep this."));
    assert!(scrubbed.contains("And this."));
    assert!(!scrubbed.contains("Timestamp"));
    assert!(!scrubbed.contains("examtopics.com"));
}

#[test]
fn batch_cleans_directory_into_output_dir() {
    let temp_dir = TempDir::new().unwrap();
    let raw = temp_dir.path().join("raw");
    let silver = temp_dir.path().join("silver");
    fs::create_dir_all(&raw).unwrap();

    fs::write(raw.join("a.md"), "## question 2\nB.\n## question 1\nA.\n").unwrap();
    fs::write(raw.join("b.md"), "## question 1\nQuestion #: 1\nX.\n").unwrap();
    fs::write(raw.join("ignore.txt"), "not markdown").unwrap();

    batch::run(&raw, Some(&silver), BatchMode::Clean, false, None).unwrap();

    let a = fs::read_to_string(silver.join("a-cleaned.md")).unwrap();
    assert_eq!(a, "## question 1\n\nA.\n\n## question 2\n\nB.\n");

    let b = fs::read_to_string(silver.join("b-cleaned.md")).unwrap();
    assert_eq!(b, "## question 1\n\nX.\n");

    assert!(!silver.join("ignore-cleaned.md").exists());
}

#[test]
fn batch_exam_mode_writes_study_sheets() {
    let temp_dir = TempDir::new().unwrap();
    let raw = temp_dir.path().join("raw");
    fs::create_dir_all(&raw).unwrap();
    fs::write(raw.join("c.md"), DUMP).unwrap();

    batch::run(&raw, None, BatchMode::Exam, false, None).unwrap();

    let sheet = fs::read_to_string(raw.join("c-exam.md")).unwrap();
    assert!(sheet.starts_with("# Exam Topics Questions - C\n\n"));
    assert!(!sheet.contains("**Answer:"));
}
