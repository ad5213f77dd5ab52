//! PDF output through an external HTML-to-PDF engine.
//!
//! The engine is invoked as `<program> - <output>` with the page on stdin,
//! which is the calling convention of weasyprint.

use std::io::{ErrorKind, Write};
use std::path::Path;
use std::process::{Command, Stdio};

use bilingual_pdf::{Error, Result};

/// Homebrew's library directory on Apple Silicon. weasyprint loads pango
/// through dlopen and misses it unless the fallback path points here.
#[cfg(target_os = "macos")]
const HOMEBREW_LIB: &str = "/opt/homebrew/lib";

/// An HTML-to-PDF engine program.
#[derive(Debug, Clone)]
pub struct PdfEngine {
    program: String,
}

impl PdfEngine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Render an HTML page into a PDF file.
    pub fn render(&self, html: &str, output: &Path) -> Result<()> {
        let mut command = Command::new(&self.program);
        command
            .arg("-")
            .arg(output)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());
        configure_library_path(&mut command);

        log::debug!("Running {} for {}", self.program, output.display());

        let mut child = command.spawn().map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::Render(format!(
                "PDF engine '{}' not found; install it or use --html-only",
                self.program
            )),
            _ => Error::Io(e),
        })?;

        // Feed stdin from a thread so a chatty engine cannot fill the stderr
        // pipe while we are still writing.
        let writer = child.stdin.take().map(|mut stdin| {
            let page = html.to_owned();
            std::thread::spawn(move || stdin.write_all(page.as_bytes()))
        });

        let result = child.wait_with_output()?;

        if let Some(writer) = writer {
            match writer.join() {
                Ok(Ok(())) => {}
                // The engine exiting early closes the pipe; its status says why.
                Ok(Err(e)) if e.kind() == ErrorKind::BrokenPipe => {}
                Ok(Err(e)) => return Err(Error::Io(e)),
                Err(_) => return Err(Error::Other("stdin writer panicked".into())),
            }
        }

        let stderr = String::from_utf8_lossy(&result.stderr);
        if !result.status.success() {
            return Err(Error::Render(format!(
                "{} failed ({}): {}",
                self.program,
                result.status,
                stderr.trim()
            )));
        }
        if !stderr.trim().is_empty() {
            log::debug!("{}: {}", self.program, stderr.trim());
        }

        Ok(())
    }
}

#[cfg(target_os = "macos")]
fn configure_library_path(command: &mut Command) {
    if std::env::var_os("DYLD_FALLBACK_LIBRARY_PATH").is_none() && Path::new(HOMEBREW_LIB).is_dir()
    {
        command.env("DYLD_FALLBACK_LIBRARY_PATH", HOMEBREW_LIB);
    }
}

#[cfg(not(target_os = "macos"))]
fn configure_library_path(_command: &mut Command) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_engine() {
        let dir = tempfile::tempdir().unwrap();
        let engine = PdfEngine::new("bilingual-pdf-no-such-engine");
        let err = engine
            .render("<html></html>", &dir.path().join("out.pdf"))
            .unwrap_err();

        assert!(matches!(err, Error::Render(_)));
        assert!(err.to_string().contains("--html-only"));
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_engine() {
        let dir = tempfile::tempdir().unwrap();
        let engine = PdfEngine::new("false");
        let result = engine.render("<html></html>", &dir.path().join("out.pdf"));
        assert!(matches!(result, Err(Error::Render(_))));
    }
}
