//! Header mapping and per-row cell conversion
//!
//! Maps the source sheet's header row onto the 15 required columns and
//! converts individual data rows into typed [`Record`]s.

use calamine::Data;
use std::collections::HashMap;

use crate::app::models::Record;
use crate::constants::REQUIRED_FIELDS;
use crate::{Error, Result};

/// Mapping from required field name to column index in the source sheet
#[derive(Debug, Clone)]
pub struct HeaderMap {
    columns: HashMap<String, usize>,
}

impl HeaderMap {
    /// Build the mapping from the sheet's first row
    ///
    /// Fails with [`Error::MissingFields`] listing every required column the
    /// header lacks, in canonical field order. Extra columns are ignored.
    pub fn from_header_row(header_row: &[Data]) -> Result<Self> {
        let mut columns = HashMap::new();
        for (index, cell) in header_row.iter().enumerate() {
            let label = cell_to_string(cell);
            let label = label.trim();
            if !label.is_empty() {
                columns.entry(label.to_string()).or_insert(index);
            }
        }

        let missing: Vec<String> = REQUIRED_FIELDS
            .iter()
            .filter(|field| !columns.contains_key(**field))
            .map(|field| field.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(Error::missing_fields(missing));
        }

        Ok(Self { columns })
    }

    /// Number of mapped columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether no columns were mapped
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    fn cell<'a>(&self, row: &'a [Data], field: &str) -> Option<&'a Data> {
        self.columns.get(field).and_then(|&index| row.get(index))
    }

    fn text(&self, row: &[Data], field: &str) -> String {
        self.cell(row, field).map(cell_to_string).unwrap_or_default()
    }

    fn number(&self, row: &[Data], field: &str) -> f64 {
        self.cell(row, field).map(cell_to_score).unwrap_or(0.0)
    }
}

/// Convert one data row into a typed record
///
/// String fields are carried verbatim (untrimmed); the score field is coerced
/// to a number, defaulting to 0 on parse failure.
pub fn parse_record(row: &[Data], headers: &HeaderMap) -> Record {
    Record {
        sequence: headers.text(row, "序号"),
        term: headers.text(row, "学年学期"),
        college_hosted: headers.text(row, "是否为工学院举办"),
        class_name: headers.text(row, "行政班级"),
        student_id: headers.text(row, "学号"),
        name: headers.text(row, "姓名"),
        activity_type: headers.text(row, "活动类型"),
        activity_name: headers.text(row, "活动名称"),
        score_type: headers.text(row, "加分类型"),
        score: headers.number(row, "加分分数"),
        award: headers.text(row, "奖项"),
        department: headers.text(row, "部门"),
        owner: headers.text(row, "负责人"),
        phone: headers.text(row, "联系电话"),
        remark: headers.text(row, "备注"),
    }
}

/// Render a cell as text, formatting whole floats without a decimal point
pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(n) => {
            if n.fract() == 0.0 && n.abs() < 1e15 {
                format!("{}", *n as i64)
            } else {
                format!("{n}")
            }
        }
        Data::Int(n) => format!("{n}"),
        Data::Bool(b) => if *b { "是" } else { "否" }.to_string(),
        Data::Error(e) => format!("{e:?}"),
        Data::DateTime(dt) => format!("{}", dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
    }
}

/// Coerce a cell to a score value, defaulting to 0 when non-numeric
pub fn cell_to_score(cell: &Data) -> f64 {
    match cell {
        Data::Float(n) => *n,
        Data::Int(n) => *n as f64,
        Data::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    }
}
