use anyhow::Result;
use framegen_engine::ToastLevel;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::Write;

use super::traits::Renderer;
use crate::presentation::view_models::{CommandResultViewModel, CreateView, OutputFormat};

pub struct ConsoleRenderer {
    format: OutputFormat,
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: std::io::stdout().is_terminal(),
        }
    }

    /// Render into any writer; `render` targets stdout.
    pub fn render_to<T, W>(&self, out: &mut W, result: &CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
        W: Write,
    {
        match self.format {
            OutputFormat::Json => {
                writeln!(out, "{}", serde_json::to_string_pretty(result)?)?;
            }
            OutputFormat::Html => {
                write!(out, "{}", result.content.create_html())?;
            }
            OutputFormat::Text => self.render_text(out, result)?,
        }
        Ok(())
    }

    fn render_text<T, W>(&self, out: &mut W, result: &CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
        W: Write,
    {
        if let Some(badge) = &result.badge {
            if self.color {
                writeln!(out, "{} {}", badge.icon(), badge.label.bold())?;
            } else {
                writeln!(out, "{} {}", badge.icon(), badge.label)?;
            }
            writeln!(out)?;
        }

        write!(out, "{}", result.content.create_view())?;

        for toast in result.extra_toasts() {
            let icon = match toast.level {
                ToastLevel::Error => "❌",
                ToastLevel::Success => "✅",
            };
            if self.color && toast.level == ToastLevel::Error {
                writeln!(out, "{} {}", icon, toast.message.red())?;
            } else {
                writeln!(out, "{} {}", icon, toast.message)?;
            }
        }

        if !result.suggestions.is_empty() {
            if self.color {
                writeln!(out, "\n{}", "💡 Tips:".yellow().bold())?;
            } else {
                writeln!(out, "\n💡 Tips:")?;
            }
            for tip in &result.suggestions {
                write!(out, "  • {}", tip.description)?;
                if let Some(cmd) = &tip.command {
                    if self.color {
                        write!(out, ": {}", cmd.cyan())?;
                    } else {
                        write!(out, ": {}", cmd)?;
                    }
                }
                writeln!(out)?;
            }
        }
        Ok(())
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView + Send + Sync,
    {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.render_to(&mut out, &result)
    }
}
