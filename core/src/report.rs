//! Console table for one suite's measurements.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::engine::Measurement;

/// Buffers measurements of the suite in flight and prints them on [`Reporter::flush`].
pub struct Reporter<W: Write> {
    out: W,
    pending: Vec<Measurement>,
}

impl Reporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            pending: Vec::new(),
        }
    }

    pub fn heading(&mut self, scenario: &str) -> Result<()> {
        writeln!(self.out, "{}", scenario).context("write suite heading")
    }

    pub fn add(&mut self, measurement: Measurement) {
        self.pending.push(measurement);
    }

    pub fn pending(&self) -> &[Measurement] {
        &self.pending
    }

    /// Drops buffered measurements without printing them.
    pub fn discard(&mut self) {
        self.pending.clear();
    }

    /// Prints the buffered table and hands the drained measurements back.
    pub fn flush(&mut self) -> Result<Vec<Measurement>> {
        let table = render_table(&self.pending);
        let drained = std::mem::take(&mut self.pending);
        self.out.write_all(table.as_bytes()).context("write suite table")?;
        self.out.flush().context("flush reporter output")?;
        Ok(drained)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

pub fn render_table(measurements: &[Measurement]) -> String {
    let rows: Vec<[String; 4]> = measurements
        .iter()
        .map(|m| {
            [
                m.name.clone(),
                format_ops(m.hz),
                format!("\u{b1}{:.2}%", m.rme),
                m.samples.to_string(),
            ]
        })
        .collect();
    let width = |col: usize| rows.iter().map(|row| row[col].chars().count()).max().unwrap_or(0);
    let (name_w, ops_w, rme_w, samples_w) = (width(0), width(1), width(2), width(3));

    let mut out = String::new();
    let noun = if measurements.len() == 1 { "test" } else { "tests" };
    out.push_str(&format!("\n  {} {} completed.\n\n", measurements.len(), noun));
    for [name, ops, rme, samples] in &rows {
        out.push_str(&format!(
            "  {:<name_w$} x {:>ops_w$} ops/sec {:>rme_w$} ({:>samples_w$} runs sampled)\n",
            name, ops, rme, samples
        ));
    }
    out.push('\n');
    out
}

/// Thousands-separated operations per second; two decimals below 100.
pub fn format_ops(hz: f64) -> String {
    if !hz.is_finite() || hz < 0.0 {
        return "0".to_string();
    }
    if hz < 100.0 {
        let fixed = format!("{:.2}", hz);
        return match fixed.split_once('.') {
            Some((whole, frac)) => format!("{}.{}", group_thousands(whole), frac),
            None => fixed,
        };
    }
    let mut buffer = itoa::Buffer::new();
    group_thousands(buffer.format(hz.round() as u64))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
