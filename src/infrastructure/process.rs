//! Subprocess unit runner
//!
//! Runs each generator as a fresh child process, either directly or through
//! an interpreter (`python3 <unit>`). The child inherits stderr; its stdout
//! is inherited too unless the runner is told to fold it into stderr, which
//! keeps regen's own stdout free for machine-readable output.

use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::Command;

use crate::domain::ports::{UnitOutcome, UnitRunner};
use crate::domain::value_objects::Unit;

/// Interpreter used when no configuration says otherwise
pub const DEFAULT_INTERPRETER: &str = "python3";

/// Where a generator's stdout goes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChildStdout {
    /// Share regen's stdout
    #[default]
    Inherit,
    /// Write to regen's stderr
    Stderr,
}

/// Runs generator units as child processes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRunner {
    interpreter: Option<OsString>,
    args: Vec<OsString>,
    stdout: ChildStdout,
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::with_interpreter(DEFAULT_INTERPRETER, Vec::<OsString>::new())
    }
}

impl ProcessRunner {
    /// Execute units directly; they must be executable programs
    pub fn direct() -> Self {
        Self {
            interpreter: None,
            args: Vec::new(),
            stdout: ChildStdout::Inherit,
        }
    }

    /// Execute units as `<interpreter> <args...> <unit>`
    pub fn with_interpreter<I, A>(interpreter: impl Into<OsString>, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<OsString>,
    {
        Self {
            interpreter: Some(interpreter.into()),
            args: args.into_iter().map(Into::into).collect(),
            stdout: ChildStdout::Inherit,
        }
    }

    /// Route the child's stdout
    pub fn with_stdout(mut self, stdout: ChildStdout) -> Self {
        self.stdout = stdout;
        self
    }

    pub fn stdout(&self) -> ChildStdout {
        self.stdout
    }

    /// Build the command for a unit, with the unit path made absolute so it
    /// still resolves from inside `workdir`.
    fn command(&self, unit: &Unit, workdir: &Path) -> io::Result<Command> {
        let script = std::path::absolute(unit.path())?;
        let mut cmd = match &self.interpreter {
            Some(interpreter) => {
                let mut cmd = Command::new(interpreter);
                cmd.args(&self.args).arg(&script);
                cmd
            }
            None => Command::new(&script),
        };
        cmd.current_dir(workdir);
        if self.stdout == ChildStdout::Stderr {
            cmd.stdout(io::stderr());
        }
        Ok(cmd)
    }
}

impl UnitRunner for ProcessRunner {
    fn run(&self, unit: &Unit, workdir: &Path) -> io::Result<UnitOutcome> {
        let status = self.command(unit, workdir)?.status()?;
        if status.success() {
            Ok(UnitOutcome::Success)
        } else {
            Ok(UnitOutcome::Failed {
                exit_code: status.code(),
            })
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::domain::value_objects::UnitKind;
    use std::fs;
    use tempfile::tempdir;

    fn script(dir: &Path, name: &str, body: &str) -> Unit {
        let path = dir.join(name);
        fs::write(&path, body).unwrap();
        Unit::new(path, dir, UnitKind::Generator)
    }

    #[test]
    fn success_runs_in_workdir() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out");
        fs::create_dir(&out).unwrap();
        let unit = script(dir.path(), "a.gen.sh", "echo made > result.txt\n");

        let outcome = ProcessRunner::with_interpreter("sh", Vec::<OsString>::new())
            .run(&unit, &out)
            .unwrap();

        assert_eq!(outcome, UnitOutcome::Success);
        assert_eq!(fs::read_to_string(out.join("result.txt")).unwrap(), "made\n");
    }

    #[test]
    fn non_zero_exit_is_reported() {
        let dir = tempdir().unwrap();
        let unit = script(dir.path(), "bad.gen.sh", "exit 7\n");

        let outcome = ProcessRunner::with_interpreter("sh", Vec::<OsString>::new())
            .run(&unit, dir.path())
            .unwrap();

        assert_eq!(outcome, UnitOutcome::Failed { exit_code: Some(7) });
        assert!(!outcome.is_success());
    }

    #[test]
    fn interpreter_args_precede_unit() {
        let dir = tempdir().unwrap();
        let unit = script(dir.path(), "args.gen.sh", "false\nexit 0\n");

        let outcome = ProcessRunner::with_interpreter("sh", ["-e"])
            .run(&unit, dir.path())
            .unwrap();

        assert_eq!(outcome, UnitOutcome::Failed { exit_code: Some(1) });
    }

    #[test]
    fn relative_unit_path_is_resolved() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested");
        fs::create_dir(&out).unwrap();
        let unit = script(dir.path(), "rel.gen.sh", "exit 0\n");
        let cwd_relative = Unit::new(
            unit.path().strip_prefix(dir.path()).unwrap(),
            Path::new(""),
            UnitKind::Generator,
        );

        let cmd = ProcessRunner::default().command(&cwd_relative, &out).unwrap();

        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(cmd.get_program(), DEFAULT_INTERPRETER);
        assert!(Path::new(args[0]).is_absolute());
        assert_eq!(cmd.get_current_dir(), Some(out.as_path()));
    }

    #[test]
    fn stdout_defaults_to_inherit() {
        assert_eq!(ProcessRunner::default().stdout(), ChildStdout::Inherit);
        assert_eq!(
            ProcessRunner::direct()
                .with_stdout(ChildStdout::Stderr)
                .stdout(),
            ChildStdout::Stderr
        );
    }

    #[test]
    fn stdout_folded_into_stderr_still_runs() {
        let dir = tempdir().unwrap();
        let unit = script(dir.path(), "chatty.gen.sh", "echo progress\necho done > out.txt\n");

        let outcome = ProcessRunner::with_interpreter("sh", Vec::<OsString>::new())
            .with_stdout(ChildStdout::Stderr)
            .run(&unit, dir.path())
            .unwrap();

        assert_eq!(outcome, UnitOutcome::Success);
        assert_eq!(fs::read_to_string(dir.path().join("out.txt")).unwrap(), "done\n");
    }

    #[test]
    fn missing_interpreter_is_spawn_error() {
        let dir = tempdir().unwrap();
        let unit = script(dir.path(), "a.gen.sh", "exit 0\n");

        let runner =
            ProcessRunner::with_interpreter("regen-no-such-interpreter", Vec::<OsString>::new());
        let result = runner.run(&unit, dir.path());

        assert!(result.is_err());
    }
}
