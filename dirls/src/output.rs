use crate::error::{DirlsError, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    pub fn from_option(path: Option<&PathBuf>) -> Self {
        match path {
            Some(path) => OutputTarget::File(path.clone()),
            None => OutputTarget::Stdout,
        }
    }

    fn describe(&self) -> String {
        match self {
            OutputTarget::Stdout => "standard output".to_string(),
            OutputTarget::File(path) => format!("'{}'", path.display()),
        }
    }

    /// Writes every line followed by `\n`. A file target is created (or
    /// truncated) even when `lines` is empty, and is closed before returning.
    pub fn write_lines(&self, lines: &[String]) -> Result<()> {
        let result = match self {
            OutputTarget::Stdout => {
                let stdout = io::stdout();
                write_all(stdout.lock(), lines)
            }
            OutputTarget::File(path) => File::create(path).and_then(|file| write_all(file, lines)),
        };

        self.settle(result)
    }

    /// A reader that hangs up early (`dirls | head -1`) is a normal finish
    /// for stdout; every other failure is reported.
    fn settle(&self, result: io::Result<()>) -> Result<()> {
        match result {
            Err(err)
                if err.kind() == io::ErrorKind::BrokenPipe
                    && matches!(self, OutputTarget::Stdout) =>
            {
                log::debug!("stdout closed early: {}", err);
                Ok(())
            }
            Err(source) => Err(DirlsError::Output {
                target: self.describe(),
                source,
            }),
            Ok(()) => Ok(()),
        }
    }
}

fn write_all<W: Write>(sink: W, lines: &[String]) -> io::Result<()> {
    let mut writer = BufWriter::new(sink);
    for line in lines {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn file_gets_one_line_per_record() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("out.txt");
        let target = OutputTarget::File(path.clone());

        target
            .write_lines(&["a.txt".to_string(), "b.txt".to_string()])
            .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "a.txt\nb.txt\n");
    }

    #[test]
    fn empty_listing_still_creates_the_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("empty.txt");
        fs::write(&path, "stale contents").unwrap();

        OutputTarget::File(path.clone()).write_lines(&[]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn unwritable_target_reports_output_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("no_such_dir").join("out.txt");

        let err = OutputTarget::File(path)
            .write_lines(&["x".to_string()])
            .unwrap_err();
        assert!(matches!(err, DirlsError::Output { .. }));
        assert!(err.to_string().contains("out.txt"));
    }

    #[test]
    fn closed_stdout_pipe_is_not_an_error() {
        let broken = || Err(io::Error::new(io::ErrorKind::BrokenPipe, "Broken pipe"));

        assert!(OutputTarget::Stdout.settle(broken()).is_ok());

        let file = OutputTarget::File(PathBuf::from("out.txt"));
        assert!(matches!(
            file.settle(broken()),
            Err(DirlsError::Output { .. })
        ));

        let other = Err(io::Error::new(io::ErrorKind::Other, "disk full"));
        assert!(matches!(
            OutputTarget::Stdout.settle(other),
            Err(DirlsError::Output { .. })
        ));
    }

    #[test]
    fn from_option_defaults_to_stdout() {
        assert_eq!(OutputTarget::from_option(None), OutputTarget::Stdout);
        let path = PathBuf::from("listing.txt");
        assert_eq!(
            OutputTarget::from_option(Some(&path)),
            OutputTarget::File(path)
        );
    }
}
