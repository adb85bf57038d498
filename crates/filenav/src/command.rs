//! Command parsing
//!
//! A line is split on whitespace and only the first three tokens are kept:
//! the command name and up to two arguments. Anything after that is ignored.
//! Each command has a fixed number of required arguments; a line that supplies
//! fewer fails with the command's usage text before any filesystem call.

use crate::error::{Error, Result};

/// Summary line shown above the prompt and by `help`.
pub const COMMAND_SUMMARY: &str = "Commands: cd, cp, mv, rm, touch, mkdir, find, chmod, help, quit";

/// A parsed command with its raw, unresolved arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Blank line. Nothing to do but redraw.
    Empty,
    Cd { dir: String },
    Touch { file: String },
    Mkdir { dir: String },
    Cp { src: String, dest: String },
    Mv { src: String, dest: String },
    Rm { file: String },
    Find { name: String },
    /// Mode comes first, unlike cp/mv which take source first.
    Chmod { mode: String, file: String },
    Help,
    Quit,
}

struct CommandSpec {
    name: &'static str,
    arity: usize,
    usage: &'static str,
    /// Builds the command from its arguments, padded with empty strings.
    build: fn([String; 2]) -> Command,
}

const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "cd",
        arity: 1,
        usage: "Usage: cd <dir>",
        build: |[dir, _]| Command::Cd { dir },
    },
    CommandSpec {
        name: "touch",
        arity: 1,
        usage: "Usage: touch <file>",
        build: |[file, _]| Command::Touch { file },
    },
    CommandSpec {
        name: "mkdir",
        arity: 1,
        usage: "Usage: mkdir <dir>",
        build: |[dir, _]| Command::Mkdir { dir },
    },
    CommandSpec {
        name: "cp",
        arity: 2,
        usage: "Usage: cp <src> <dest>",
        build: |[src, dest]| Command::Cp { src, dest },
    },
    CommandSpec {
        name: "mv",
        arity: 2,
        usage: "Usage: mv <src> <dest>",
        build: |[src, dest]| Command::Mv { src, dest },
    },
    CommandSpec {
        name: "rm",
        arity: 1,
        usage: "Usage: rm <file>",
        build: |[file, _]| Command::Rm { file },
    },
    CommandSpec {
        name: "find",
        arity: 1,
        usage: "Usage: find <filename>",
        build: |[name, _]| Command::Find { name },
    },
    CommandSpec {
        name: "chmod",
        arity: 2,
        usage: "Usage: chmod <mode> <filename>\nExample: chmod 755 myfile.txt",
        build: |[mode, file]| Command::Chmod { mode, file },
    },
    CommandSpec {
        name: "help",
        arity: 0,
        usage: "Usage: help",
        build: |_| Command::Help,
    },
    CommandSpec {
        name: "quit",
        arity: 0,
        usage: "Usage: quit",
        build: |_| Command::Quit,
    },
];

impl Command {
    /// Parse one input line.
    ///
    /// # Example
    ///
    /// ```rust
    /// use filenav::Command;
    ///
    /// let cmd = Command::parse("chmod 755 run.sh").unwrap();
    /// assert_eq!(cmd, Command::Chmod { mode: "755".into(), file: "run.sh".into() });
    /// assert!(Command::parse("cp only-one").is_err());
    /// ```
    pub fn parse(line: &str) -> Result<Self> {
        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            return Ok(Command::Empty);
        };
        let args: Vec<String> = tokens.take(2).map(str::to_string).collect();

        let spec = COMMANDS
            .iter()
            .find(|spec| spec.name == name)
            .ok_or_else(|| Error::UnknownCommand(name.to_string()))?;
        if args.len() < spec.arity {
            return Err(Error::Usage(spec.usage));
        }

        let mut args = args.into_iter();
        let args = [
            args.next().unwrap_or_default(),
            args.next().unwrap_or_default(),
        ];
        Ok((spec.build)(args))
    }

    /// Command name as typed, or `""` for an empty line.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Empty => "",
            Command::Cd { .. } => "cd",
            Command::Touch { .. } => "touch",
            Command::Mkdir { .. } => "mkdir",
            Command::Cp { .. } => "cp",
            Command::Mv { .. } => "mv",
            Command::Rm { .. } => "rm",
            Command::Find { .. } => "find",
            Command::Chmod { .. } => "chmod",
            Command::Help => "help",
            Command::Quit => "quit",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_blank_lines() {
        assert_eq!(Command::parse("").unwrap(), Command::Empty);
        assert_eq!(Command::parse("   \t ").unwrap(), Command::Empty);
    }

    #[test]
    fn test_single_argument_commands() {
        assert_eq!(
            Command::parse("cd ..").unwrap(),
            Command::Cd { dir: "..".into() }
        );
        assert_eq!(
            Command::parse("  touch   new.txt ").unwrap(),
            Command::Touch {
                file: "new.txt".into()
            }
        );
        assert_eq!(
            Command::parse("find a.txt").unwrap(),
            Command::Find {
                name: "a.txt".into()
            }
        );
    }

    #[test]
    fn test_two_argument_order() {
        assert_eq!(
            Command::parse("cp a b").unwrap(),
            Command::Cp {
                src: "a".into(),
                dest: "b".into()
            }
        );
        assert_eq!(
            Command::parse("chmod 644 f").unwrap(),
            Command::Chmod {
                mode: "644".into(),
                file: "f".into()
            }
        );
    }

    #[test]
    fn test_extra_tokens_ignored() {
        assert_eq!(
            Command::parse("mv a b c d").unwrap(),
            Command::Mv {
                src: "a".into(),
                dest: "b".into()
            }
        );
        assert_eq!(Command::parse("quit now").unwrap(), Command::Quit);
    }

    #[test]
    fn test_missing_arguments_give_usage() {
        let cases = [
            ("cd", "Usage: cd <dir>"),
            ("touch", "Usage: touch <file>"),
            ("mkdir", "Usage: mkdir <dir>"),
            ("cp a", "Usage: cp <src> <dest>"),
            ("mv", "Usage: mv <src> <dest>"),
            ("rm", "Usage: rm <file>"),
            ("find", "Usage: find <filename>"),
            (
                "chmod 755",
                "Usage: chmod <mode> <filename>\nExample: chmod 755 myfile.txt",
            ),
        ];
        for (line, usage) in cases {
            let err = Command::parse(line).unwrap_err();
            assert_eq!(err.to_string(), usage, "line {line:?}");
        }
    }

    #[test]
    fn test_unknown_command() {
        let err = Command::parse("ls -la").unwrap_err();
        assert!(matches!(err, Error::UnknownCommand(ref c) if c == "ls"));
    }

    #[test]
    fn test_commands_are_case_sensitive() {
        assert!(Command::parse("QUIT").is_err());
    }

    #[test]
    fn test_name_round_trips_through_table() {
        for spec in COMMANDS {
            let line = format!("{} x y", spec.name);
            assert_eq!(Command::parse(&line).unwrap().name(), spec.name);
        }
    }

    #[test]
    fn test_zero_arity_commands_ignore_arguments() {
        assert_eq!(Command::parse("help me out").unwrap(), Command::Help);
        assert_eq!(Command::parse("quit").unwrap(), Command::Quit);
        assert_eq!(
            Command::parse("rm victim spare").unwrap(),
            Command::Rm {
                file: "victim".into()
            }
        );
    }
}
