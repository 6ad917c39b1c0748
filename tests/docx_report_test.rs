// Integration tests for the Word report writer: write to disk, read the archive back

use std::fs::File;
use std::io::Read;

use anyhow::Result;
use chrono::Utc;
use tempfile::TempDir;
use zip::ZipArchive;

use torqa::config::Persona;
use torqa::report::{DocxWriter, Report, ReportAssembler, ReportSink, READABILITY_LEGEND};
use torqa::review::{RawFeedback, Synthesis};

fn sample_report() -> Result<Report> {
    let feedbacks: Vec<_> = Persona::builtins()?
        .iter()
        .map(|p| {
            RawFeedback {
                persona: p.kind,
                text: format!("### {}\n**Strong** scope & clear <objectives>.", p.name),
            }
            .normalize()
        })
        .collect();

    ReportAssembler::new(Persona::builtins()?).assemble(
        &feedbacks,
        42.5,
        &Synthesis {
            text: "A solid ToR overall.".into(),
        },
    )
}

fn read_part(path: &std::path::Path, name: &str) -> Result<String> {
    let mut archive = ZipArchive::new(File::open(path)?)?;
    let mut part = archive.by_name(name)?;
    let mut contents = String::new();
    part.read_to_string(&mut contents)?;
    Ok(contents)
}

#[test]
fn test_report_written_as_docx() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("ToR_Quality_Assessment_Report.docx");
    let writer = DocxWriter::new(&path);

    let written = writer.persist(&sample_report()?)?;
    assert_eq!(written, path);
    assert!(path.exists());

    let archive = ZipArchive::new(File::open(&path)?)?;
    let names: Vec<&str> = archive.file_names().collect();
    for part in [
        "[Content_Types].xml",
        "_rels/.rels",
        "word/document.xml",
        "word/styles.xml",
    ] {
        assert!(names.contains(&part), "missing {}", part);
    }

    let document = read_part(&path, "word/document.xml")?;
    assert!(document.contains("Terms of Reference Quality Assurance Report"));
    for heading in [
        "Quality Assessment including Scoring",
        "Evaluation Team Perspective",
        "Norwegian Development Aid Bureaucrat Perspective",
        "Readability Score",
        "Summary",
    ] {
        assert!(document.contains(heading), "missing heading {}", heading);
    }
    assert!(document.contains("Flesch Reading Ease score: 42.50"));
    assert!(document.contains("A solid ToR overall."));
    assert!(document.contains("Strong scope &amp; clear &lt;objectives&gt;."));
    assert!(!document.contains("**"));

    // every legend line lands in the body
    for line in READABILITY_LEGEND.lines() {
        assert!(document.contains(line), "missing legend line {}", line);
    }

    Ok(())
}

#[test]
fn test_no_partial_file_left_behind() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("report.docx");

    DocxWriter::new(&path).persist(&sample_report()?)?;

    let entries: Vec<_> = std::fs::read_dir(dir.path())?
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(entries, vec!["report.docx".to_string()]);
    Ok(())
}

#[test]
fn test_existing_report_is_replaced() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("report.docx");
    std::fs::write(&path, b"stale")?;

    DocxWriter::new(&path).persist(&sample_report()?)?;

    let document = read_part(&path, "word/document.xml")?;
    assert!(document.contains("Summary"));
    Ok(())
}

#[test]
fn test_unwritable_location_fails_cleanly() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("missing").join("report.docx");

    let report = Report {
        title: "t".into(),
        sections: Vec::new(),
        generated_at: Utc::now(),
    };
    assert!(DocxWriter::new(&path).persist(&report).is_err());
    assert!(!path.exists());
    Ok(())
}

#[test]
fn test_failed_rename_removes_temp_file() -> Result<()> {
    let dir = TempDir::new()?;
    // a non-empty directory at the target path makes the final rename fail
    let path = dir.path().join("report.docx");
    std::fs::create_dir(&path)?;
    std::fs::write(path.join("keep.txt"), b"x")?;

    let err = DocxWriter::new(&path)
        .persist(&sample_report()?)
        .unwrap_err();

    assert!(err.to_string().contains("Failed to move report into place"));
    assert!(!dir.path().join("report.docx.partial").exists());
    assert!(path.is_dir());
    Ok(())
}
