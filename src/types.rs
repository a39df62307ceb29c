//! Application-level types for the root crate

use std::fmt;
use std::path::PathBuf;

use anyhow::{bail, Context};
use sketchy_designer::{Canvas, ShapeType};

pub const USAGE: &str = "usage: sketchy [--config <settings.toml|settings.json>] <drawing>";

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    /// Settings file overriding the platform default
    pub config: Option<PathBuf>,
    /// Drawing file to open
    pub drawing: PathBuf,
}

impl CliArgs {
    /// Parses the arguments after the program name.
    pub fn parse<I, S>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = None;
        let mut drawing = None;
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-c" | "--config" => {
                    let path = args.next().context("--config needs a path")?;
                    config = Some(PathBuf::from(path));
                }
                flag if flag.starts_with('-') => bail!("unknown option '{flag}'\n{USAGE}"),
                _ if drawing.is_some() => bail!("more than one drawing given\n{USAGE}"),
                _ => drawing = Some(PathBuf::from(arg)),
            }
        }

        Ok(Self {
            config,
            drawing: drawing.with_context(|| format!("no drawing given\n{USAGE}"))?,
        })
    }
}

/// Object counts of a drawing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DrawingSummary {
    pub rectangles: usize,
    pub ellipses: usize,
    pub curves: usize,
}

impl DrawingSummary {
    pub fn of(canvas: &Canvas) -> Self {
        canvas
            .saveables()
            .fold(Self::default(), |mut summary, obj| {
                match obj.shape_type() {
                    ShapeType::Rectangle => summary.rectangles += 1,
                    ShapeType::Ellipse => summary.ellipses += 1,
                    ShapeType::Curve => summary.curves += 1,
                }
                summary
            })
    }

    pub fn total(&self) -> usize {
        self.rectangles + self.ellipses + self.curves
    }
}

impl fmt::Display for DrawingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} objects: {} rectangles, {} ellipses, {} curves",
            self.total(),
            self.rectangles,
            self.ellipses,
            self.curves
        )
    }
}
