//! Console Event Sink
//!
//! Human-readable progress on stderr. Generator output shares the terminal,
//! so each line is self-contained.

use std::io::{self, Write};
use std::sync::Mutex;

use crossterm::style::{Color, Stylize};

use crate::config::Verbosity;
use crate::domain::ports::{RunEvent, RunEventSink};

mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const PROGRESS: &str = "●";
    pub const PENDING: &str = "○";
}

/// Event sink that prints progress lines
pub struct ConsoleEventSink {
    verbosity: Verbosity,
    color: bool,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    /// Create a console sink writing to stderr
    pub fn stderr(verbosity: Verbosity, color: bool) -> Self {
        Self::with_writer(verbosity, color, io::stderr())
    }

    pub fn with_writer<W: Write + Send + 'static>(
        verbosity: Verbosity,
        color: bool,
        writer: W,
    ) -> Self {
        Self {
            verbosity,
            color,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn line(&self, text: String) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", text);
            let _ = writer.flush();
        }
    }

    fn render(&self, event: RunEvent) -> Option<String> {
        let verbose = self.verbosity >= Verbosity::Verbose;
        let normal = self.verbosity >= Verbosity::Normal;

        match event {
            RunEvent::Started {
                tracked_root,
                dry_run,
                ..
            } if verbose => {
                let mode = if dry_run { " (dry run)" } else { "" };
                Some(format!("Scanning {}{}", tracked_root.display(), mode))
            }

            RunEvent::Discovered { generators, shared } if verbose => Some(format!(
                "Found {} generator(s), {} shared file(s)",
                generators, shared
            )),

            RunEvent::Planned {
                selected,
                total_generators,
                rerun_all,
                changed_shared,
            } if normal => {
                let mut text = if selected == 0 {
                    format!("All {} generator(s) up to date", total_generators)
                } else {
                    format!("{} of {} generator(s) to run", selected, total_generators)
                };
                if rerun_all && !changed_shared.is_empty() {
                    text.push_str(&format!(
                        "\n{}",
                        self.paint(
                            &format!("Shared files changed: {}", changed_shared.join(", ")),
                            Color::Yellow,
                        )
                    ));
                }
                Some(text)
            }

            RunEvent::UnitSkipped { key } if verbose => Some(format!(
                "  {} {} {}",
                self.paint(icons::PENDING, Color::DarkGrey),
                key,
                self.paint("(unchanged)", Color::DarkGrey)
            )),

            RunEvent::UnitStarted {
                index,
                total,
                key,
                reason,
                ..
            } if normal => Some(format!(
                "{} [{}/{}] {} {}",
                self.paint(icons::PROGRESS, Color::Cyan),
                index + 1,
                total,
                key,
                self.paint(&format!("({})", reason), Color::DarkGrey)
            )),

            RunEvent::UnitFinished {
                key, duration_ms, ..
            } if verbose => Some(format!(
                "{} {} {}",
                self.paint(icons::SUCCESS, Color::Green),
                key,
                self.paint(&format!("({} ms)", duration_ms), Color::DarkGrey)
            )),

            RunEvent::UnitFailed { key, exit_code, .. } => {
                let status = match exit_code {
                    Some(code) => format!("exited with code {}", code),
                    None => "was terminated by a signal".to_string(),
                };
                Some(format!(
                    "{} {} {}",
                    self.paint(icons::ERROR, Color::Red),
                    key,
                    status
                ))
            }

            RunEvent::Persisted { path, entries } if verbose => Some(format!(
                "Saved {} fingerprint(s) to {}",
                entries,
                path.display()
            )),

            RunEvent::Completed {
                executed,
                skipped,
                dry_run,
            } if normal => {
                let text = if dry_run {
                    format!("Dry run: {} generator(s) would run", executed)
                } else {
                    format!("Ran {} generator(s), {} up to date", executed, skipped)
                };
                Some(format!("{} {}", self.paint(icons::SUCCESS, Color::Green), text))
            }

            _ => None,
        }
    }
}

impl RunEventSink for ConsoleEventSink {
    fn on_event(&self, event: RunEvent) {
        if let Some(text) = self.render(event) {
            self.line(text);
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.verbosity >= Verbosity::Verbose
    }
}
