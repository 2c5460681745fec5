//! Writer for small fixed-format MPS models.
//!
//! Names are limited to 8 characters so every field lands in its fixed
//! column (2, 5, 15 and 25). All rows get an RHS entry, binaries get a `BV`
//! bound and continuous variables keep the default `[0, +inf)` bound.
use std::fmt::{self, Display};
use std::path::Path;

use thiserror::Error;

use crate::output::format_general;

const MAX_NAME_LEN: usize = 8;
const OBJECTIVE_ROW: &str = "OBJ";
const SET_NAME: &str = "SET";

#[derive(Error, Debug, PartialEq)]
pub enum MpsError {
    #[error("Name '{0}' must be 1 to 8 characters without spaces")]
    InvalidName(String),

    #[error("Name '{0}' is already used")]
    DuplicateName(String),

    #[error("Unknown variable index {0}")]
    UnknownVariable(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarKind {
    Binary,
    Continuous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Equal,
    LessEqual,
    GreaterEqual,
}

impl RowKind {
    fn code(&self) -> &'static str {
        match self {
            RowKind::Equal => "E",
            RowKind::LessEqual => "L",
            RowKind::GreaterEqual => "G",
        }
    }
}

/// Sparse list of `(coefficient, variable index)` pairs
pub type Terms = Vec<(f64, usize)>;

#[derive(Debug, Clone)]
pub struct Row {
    pub name: String,
    pub desc: Option<String>,
    pub kind: RowKind,
    pub terms: Terms,
    pub rhs: f64,
}

#[derive(Debug, Clone)]
struct Column {
    name: String,
    desc: Option<String>,
    kind: VarKind,
    objective: Option<f64>,
    // (row index, coefficient)
    entries: Vec<(usize, f64)>,
}

#[derive(Debug, Clone)]
pub struct MpsModel {
    name: String,
    columns: Vec<Column>,
    rows: Vec<Row>,
}

impl MpsModel {
    pub fn new(name: impl Into<String>) -> Self {
        MpsModel {
            name: name.into(),
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Add a variable and return its index
    pub fn add_var(
        &mut self,
        name: impl Into<String>,
        kind: VarKind,
        desc: Option<String>,
    ) -> Result<usize, MpsError> {
        let name = name.into();
        validate_name(&name)?;
        if self.columns.iter().any(|c| c.name == name) {
            return Err(MpsError::DuplicateName(name));
        }
        self.columns.push(Column {
            name,
            desc,
            kind,
            objective: None,
            entries: Vec::new(),
        });
        Ok(self.columns.len() - 1)
    }

    /// Add a constraint row and return its index
    pub fn add_row(&mut self, row: Row) -> Result<usize, MpsError> {
        validate_name(&row.name)?;
        if row.name == OBJECTIVE_ROW || self.rows.iter().any(|r| r.name == row.name) {
            return Err(MpsError::DuplicateName(row.name));
        }
        self.check_terms(&row.terms)?;

        let index = self.rows.len();
        for &(coefficient, var) in &row.terms {
            self.columns[var].entries.push((index, coefficient));
        }
        self.rows.push(row);
        Ok(index)
    }

    /// Replace the objective (minimized, as MPS defaults to)
    pub fn set_objective(&mut self, terms: &[(f64, usize)]) -> Result<(), MpsError> {
        self.check_terms(terms)?;
        for column in &mut self.columns {
            column.objective = None;
        }
        for &(coefficient, var) in terms {
            self.columns[var].objective = Some(coefficient);
        }
        Ok(())
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        std::fs::write(path, self.to_string())
    }

    fn check_terms(&self, terms: &[(f64, usize)]) -> Result<(), MpsError> {
        match terms.iter().find(|&&(_, var)| var >= self.columns.len()) {
            Some(&(_, var)) => Err(MpsError::UnknownVariable(var)),
            None => Ok(()),
        }
    }
}

fn validate_name(name: &str) -> Result<(), MpsError> {
    if name.is_empty() || name.len() > MAX_NAME_LEN || name.contains(char::is_whitespace) {
        return Err(MpsError::InvalidName(name.to_string()));
    }
    Ok(())
}

impl Display for MpsModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const EMPTY: &str = "";

        writeln!(f, "{:14}{}", "NAME", self.name)?;

        writeln!(f, "ROWS")?;
        writeln!(f, "{EMPTY:1}{:3}{OBJECTIVE_ROW}", "N")?;
        for row in &self.rows {
            if let Some(desc) = &row.desc {
                writeln!(f, "* {desc}")?;
            }
            writeln!(f, "{EMPTY:1}{:3}{}", row.kind.code(), row.name)?;
        }

        writeln!(f, "COLUMNS")?;
        for column in &self.columns {
            if let Some(desc) = &column.desc {
                writeln!(f, "* {desc}")?;
            }
            if let Some(coefficient) = column.objective {
                writeln!(
                    f,
                    "{EMPTY:4}{:10}{OBJECTIVE_ROW:10}{}",
                    column.name,
                    format_general(coefficient)
                )?;
            }
            for &(row, coefficient) in &column.entries {
                writeln!(
                    f,
                    "{EMPTY:4}{:10}{:10}{}",
                    column.name,
                    self.rows[row].name,
                    format_general(coefficient)
                )?;
            }
        }

        writeln!(f, "RHS")?;
        for row in &self.rows {
            writeln!(
                f,
                "{EMPTY:4}{SET_NAME:10}{:10}{}",
                row.name,
                format_general(row.rhs)
            )?;
        }

        writeln!(f, "BOUNDS")?;
        for column in self.columns.iter().filter(|c| c.kind == VarKind::Binary) {
            writeln!(f, "{EMPTY:1}{:3}{SET_NAME:10}{}", "BV", column.name)?;
        }

        writeln!(f, "ENDATA")
    }
}
