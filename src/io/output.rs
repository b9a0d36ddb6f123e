use crate::batch::{MethodReport, SortCounts};
use crate::errors::Error;
use colored::*;
use serde::Serialize;
use std::io::Write;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Terminal,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "terminal" => Ok(OutputFormat::Terminal),
            other => Err(Error::Configuration(format!("unknown output format '{other}'"))),
        }
    }
}

pub trait OutputWriter {
    fn write_reports(&mut self, reports: &[MethodReport]) -> anyhow::Result<()>;
}

#[derive(Serialize)]
struct JsonReport<'a> {
    summary: SortCounts,
    methods: &'a [MethodReport],
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_reports(&mut self, reports: &[MethodReport]) -> anyhow::Result<()> {
        let report = JsonReport {
            summary: SortCounts::from_reports(reports),
            methods: reports,
        };
        let json = serde_json::to_string_pretty(&report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

/// Human-readable report grouped by declaring type.
pub struct TerminalWriter<W: Write> {
    writer: W,
    use_color: bool,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, use_color: bool) -> Self {
        Self { writer, use_color }
    }

    fn paint(&self, text: &str, style: impl Fn(&str) -> ColoredString) -> String {
        if self.use_color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn write_header(&mut self) -> anyhow::Result<()> {
        let title = self.paint("Method Sort Report", |t| t.bold().blue());
        let rule = self.paint("==================", |t| t.blue());
        writeln!(self.writer, "{title}")?;
        writeln!(self.writer, "{rule}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_methods(&mut self, reports: &[MethodReport]) -> anyhow::Result<()> {
        let mut current_type: Option<&str> = None;
        for report in reports {
            if current_type != Some(report.type_name.as_str()) {
                if current_type.is_some() {
                    writeln!(self.writer)?;
                }
                let type_name = self.paint(&report.type_name, |t| t.bold());
                writeln!(self.writer, "{type_name}")?;
                current_type = Some(&report.type_name);
            }

            let sorts = report
                .sorts
                .iter()
                .map(|sort| {
                    if sort.is_bridge_sort() {
                        self.paint(sort.name(), |t| t.yellow())
                    } else {
                        self.paint(sort.name(), |t| t.green())
                    }
                })
                .collect::<Vec<_>>()
                .join(", ");
            let modifiers: String = report
                .modifiers
                .iter()
                .map(|modifier| format!("{modifier} "))
                .collect();
            let modifiers = self.paint(&modifiers, |t| t.dimmed());
            writeln!(self.writer, "  {modifiers}{}  [{sorts}]", report.signature)?;
        }
        Ok(())
    }

    fn write_summary(&mut self, reports: &[MethodReport]) -> anyhow::Result<()> {
        let summary = SortCounts::from_reports(reports);
        let label = self.paint("Summary:", |t| t.bold());
        writeln!(self.writer)?;
        writeln!(self.writer, "{label} {} methods", summary.methods)?;
        for (sort, count) in summary.counts {
            writeln!(self.writer, "  {:<22} {count}", sort.name())?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_reports(&mut self, reports: &[MethodReport]) -> anyhow::Result<()> {
        self.write_header()?;
        self.write_methods(reports)?;
        self.write_summary(reports)?;
        Ok(())
    }
}

pub fn create_writer<W: Write + 'static>(
    format: OutputFormat,
    writer: W,
    use_color: bool,
) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, use_color)),
    }
}
