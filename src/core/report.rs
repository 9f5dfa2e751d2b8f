use crate::domain::model::Snapshot;
use crate::domain::ports::ReportSink;
use crate::utils::error::Result;
use serde_json::Value;

const RULE_WIDTH: usize = 25;

/// Renders snapshots as boxed plain-text detail cards:
///
/// ```text
/// =========================
///        Car Details
/// =========================
///     Brand: Ford
///     Model: Mustang
///     Year: 2013
/// =========================
/// ```
#[derive(Debug, Default)]
pub struct TextReport {
    buffer: String,
}

impl TextReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&self) -> &str {
        &self.buffer
    }

    fn title(label: &str) -> String {
        format!("{} Details", title_case(label))
    }

    fn scalar(value: &Value) -> String {
        match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl ReportSink for TextReport {
    fn submit(&mut self, snapshot: &Snapshot) -> Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        let title = Self::title(snapshot.label());
        let pad = RULE_WIDTH.saturating_sub(title.len()) / 2;

        self.buffer.push_str(&rule);
        self.buffer.push('\n');
        self.buffer.push_str(&" ".repeat(pad));
        self.buffer.push_str(&title);
        self.buffer.push('\n');
        self.buffer.push_str(&rule);
        self.buffer.push('\n');
        for (name, value) in snapshot.fields() {
            self.buffer
                .push_str(&format!("    {}: {}\n", title_case(name), Self::scalar(value)));
        }
        self.buffer.push_str(&rule);
        self.buffer.push_str("\n\n");
        Ok(())
    }
}

/// Collects snapshots and renders them as a pretty-printed JSON array.
#[derive(Debug, Default)]
pub struct JsonReport {
    snapshots: Vec<Value>,
}

impl JsonReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.snapshots)?)
    }
}

impl ReportSink for JsonReport {
    fn submit(&mut self, snapshot: &Snapshot) -> Result<()> {
        self.snapshots.push(snapshot.to_json());
        Ok(())
    }
}

fn title_case(name: &str) -> String {
    name.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
