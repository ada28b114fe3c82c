//! Text rendering of intermediate tables and results
//!
//! Terms are printed most significant bit first with `-` for wildcards,
//! followed by a space and a marker: `*` for an implicant that is still prime
//! and `m` for one that was merged into a larger implicant.

use crate::coverage::CoverageTable;
use crate::implicants::Level;
use crate::minimize::{Cover, Minimization};
use std::io::{self, Write};

/// Line printed after every group of a level
pub const GROUP_DIVIDER: &str = "----------";

/// Trait for types that can be rendered as a text report
///
/// The provided method delegates to [`write_report`](Self::write_report).
pub trait ReportWriter {
    /// Write the report to any `Write` implementation
    fn write_report<W: Write>(&self, writer: &mut W) -> io::Result<()>;

    /// Render the report to a string
    ///
    /// # Examples
    ///
    /// ```
    /// use qm_logic::{ImplicantGenerator, ReportWriter};
    ///
    /// let mut generator = ImplicantGenerator::new(1, &[0, 1], &[]);
    /// generator.generate();
    ///
    /// let text = generator.levels()[1].to_report_string().unwrap();
    /// assert_eq!(text, "Column:\n- *\n----------\n----------\n\n");
    /// ```
    fn to_report_string(&self) -> io::Result<String> {
        let mut buffer = Vec::new();
        self.write_report(&mut buffer)?;
        String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

impl ReportWriter for Level {
    fn write_report<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "Column:")?;
        for group in self.groups() {
            for term in group.terms() {
                writeln!(writer, "{}", term.display(self.width()))?;
            }
            writeln!(writer, "{}", GROUP_DIVIDER)?;
        }
        writeln!(writer)
    }
}

impl ReportWriter for CoverageTable {
    /// One row per minterm, one column per prime: `x` covered, `.` not
    fn write_report<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for row in self.rows() {
            let line: String = row.iter().map(|&c| if c { 'x' } else { '.' }).collect();
            writeln!(writer, "{}", line)?;
        }
        Ok(())
    }
}

impl ReportWriter for Cover {
    fn write_report<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for term in self.terms() {
            writeln!(writer, "{}", term.display(self.width()))?;
        }
        Ok(())
    }
}

/// Sections included by [`Minimization::write_sections`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Print every merge level
    pub levels: bool,
    /// Print the coverage matrix
    pub table: bool,
    /// Print the minimal cover
    pub cover: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions {
            levels: false,
            table: false,
            cover: true,
        }
    }
}

impl ReportOptions {
    /// Every section
    pub fn all() -> Self {
        ReportOptions {
            levels: true,
            table: true,
            cover: true,
        }
    }
}

impl Minimization {
    /// Write the selected sections in pipeline order
    pub fn write_sections<W: Write>(
        &self,
        writer: &mut W,
        options: &ReportOptions,
    ) -> io::Result<()> {
        if options.levels {
            for level in self.levels() {
                level.write_report(writer)?;
            }
        }
        if options.table {
            writeln!(writer, "Coverage:")?;
            self.table().write_report(writer)?;
            writeln!(writer)?;
        }
        if options.cover {
            writeln!(writer, "Cover:")?;
            self.cover().write_report(writer)?;
        }
        Ok(())
    }
}

impl ReportWriter for Minimization {
    fn write_report<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        self.write_sections(writer, &ReportOptions::all())
    }
}
