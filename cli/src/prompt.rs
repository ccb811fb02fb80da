use anyhow::{Context, Result, bail};
use corrido_core::{Coord, MAX_SIZE};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Line-based questions on an input/output pair, stdin/stdout outside of tests.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `question` and returns the trimmed answer.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        writeln!(self.output, "{question}")?;
        self.output.flush()?;

        let mut answer = String::new();
        let read = self
            .input
            .read_line(&mut answer)
            .context("Could not read answer")?;
        if read == 0 {
            bail!("Input ended before an answer was given");
        }
        Ok(answer.trim().to_string())
    }

    pub fn ask_size(&mut self) -> Result<Coord> {
        let answer = self.ask("Enter an integer to determine the size of the maze")?;
        let size: Coord = answer
            .parse()
            .with_context(|| format!("{answer:?} is not a valid maze size"))?;
        if size == 0 || size > MAX_SIZE {
            bail!("Maze size must be between 1 and {MAX_SIZE}, got {size}");
        }
        Ok(size)
    }

    /// Asks for a file name, a blank answer keeps `default`.
    pub fn ask_file(&mut self, default: &Path) -> Result<PathBuf> {
        let answer = self.ask(&format!(
            "Save to file: enter filename or use default [{}]",
            default.display()
        ))?;
        Ok(if answer.is_empty() {
            default.to_path_buf()
        } else {
            PathBuf::from(answer)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn reads_size() {
        let mut prompter = prompter("12\n");

        assert_eq!(prompter.ask_size().unwrap(), 12);
        let asked = String::from_utf8(prompter.output).unwrap();
        assert!(asked.starts_with("Enter an integer"));
    }

    #[test]
    fn rejects_bad_sizes() {
        assert!(prompter("twelve\n").ask_size().is_err());
        assert!(prompter("0\n").ask_size().is_err());
        assert!(prompter("-3\n").ask_size().is_err());
        assert!(prompter("").ask_size().is_err());
    }

    #[test]
    fn blank_file_name_keeps_default() {
        let default = Path::new("maze.txt");

        assert_eq!(prompter("\n").ask_file(default).unwrap(), default);
        assert_eq!(
            prompter("other.txt\n").ask_file(default).unwrap(),
            Path::new("other.txt")
        );
    }
}
