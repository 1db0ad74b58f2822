use std::io::{self, Write};

use serde::Serialize;

use crate::app::{DownloadResult, ProgressEvent, ProgressSink};
use crate::domain::{Category, SampleRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub category: Category,
    pub downloaded: bool,
}

pub struct JsonOutput;

impl JsonOutput {
    pub fn print_download(result: &DownloadResult) -> io::Result<()> {
        Self::print_json(result)
    }

    pub fn print_samples(records: &[SampleRecord]) -> io::Result<()> {
        Self::print_json(&records)
    }

    pub fn print_check(result: &CheckResult) -> io::Result<()> {
        Self::print_json(result)
    }

    fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
        let json = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        let mut stdout = io::stdout();
        stdout.write_all(json.as_bytes())?;
        stdout.write_all(b"\n")?;
        Ok(())
    }
}

impl ProgressSink for JsonOutput {
    fn event(&self, _event: ProgressEvent) {}
}

pub struct HumanOutput;

impl HumanOutput {
    pub fn print_download(result: &DownloadResult) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        write_section(&mut stdout, Category::Documents, &result.documents)?;
        write_section(&mut stdout, Category::Videos, &result.videos)
    }

    pub fn print_samples(category: Category, records: &[SampleRecord]) -> io::Result<()> {
        write_section(&mut io::stdout().lock(), category, records)
    }

    pub fn print_check(result: &CheckResult) -> io::Result<()> {
        writeln!(io::stdout(), "{}", result.downloaded)
    }
}

impl ProgressSink for HumanOutput {
    fn event(&self, event: ProgressEvent) {
        eprintln!(
            "[{}] {} ({})",
            event.category,
            event.name,
            event.action.as_str()
        );
    }
}

fn write_section<W: Write>(
    out: &mut W,
    category: Category,
    records: &[SampleRecord],
) -> io::Result<()> {
    writeln!(out, "{category}: {} sample(s)", records.len())?;
    for record in records {
        writeln!(out, "  {} -> {}", record.name, record.path)?;
    }
    Ok(())
}
