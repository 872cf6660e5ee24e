//! Blacklist export
//!
//! Flat, unstyled single-table export of unattended and invalid rows:
//! class, name, student id, reason under the fixed 黑名单 sheet name.

use rust_xlsxwriter::Workbook;
use tracing::info;

use crate::app::models::{InvalidRecord, UnattendedRecord};
use crate::constants::{BLACKLIST_HEADERS, BLACKLIST_SHEET_NAME};
use crate::{Error, Result};

/// One blacklist table row
#[derive(Debug, Clone, PartialEq)]
pub struct BlacklistRow {
    pub class_name: String,
    pub name: String,
    pub student_id: String,
    pub reason: String,
}

impl From<&UnattendedRecord> for BlacklistRow {
    fn from(unattended: &UnattendedRecord) -> Self {
        Self {
            class_name: unattended.record.class_name.clone(),
            name: unattended.record.name.clone(),
            student_id: unattended.record.student_id.clone(),
            reason: unattended.reason.clone(),
        }
    }
}

impl From<&InvalidRecord> for BlacklistRow {
    fn from(invalid: &InvalidRecord) -> Self {
        Self {
            class_name: invalid.record.class_name.clone(),
            name: invalid.record.name.clone(),
            student_id: invalid.record.student_id.clone(),
            reason: invalid.reason.to_string(),
        }
    }
}

/// Serialize blacklist rows into an in-memory XLSX buffer
///
/// One header row, one data row per entry, no styling. Fails only if the
/// underlying serialization fails.
pub fn export_blacklist(rows: &[BlacklistRow]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(BLACKLIST_SHEET_NAME)
        .map_err(|e| Error::serialization("invalid blacklist sheet name", e))?;

    for (col, header) in BLACKLIST_HEADERS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| Error::serialization("could not write blacklist header", e))?;
    }

    for (index, row) in rows.iter().enumerate() {
        let row_num = (index + 1) as u32;
        let cells = [&row.class_name, &row.name, &row.student_id, &row.reason];
        for (col, value) in cells.iter().enumerate() {
            worksheet
                .write_string(row_num, col as u16, value.as_str())
                .map_err(|e| Error::serialization("could not write blacklist row", e))?;
        }
    }

    info!("exported blacklist with {} rows", rows.len());

    workbook
        .save_to_buffer()
        .map_err(|e| Error::serialization("could not encode blacklist buffer", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::{InvalidReason, Record};
    use calamine::{Data, Reader, Xlsx};
    use std::io::Cursor;

    fn unattended(name: &str, reason: &str) -> UnattendedRecord {
        UnattendedRecord {
            record: Record {
                class_name: "网络工程2101".to_string(),
                name: name.to_string(),
                student_id: "20230001".to_string(),
                ..Record::default()
            },
            reason: reason.to_string(),
        }
    }

    #[test]
    fn test_blacklist_round_trips_through_reader() {
        let rows: Vec<BlacklistRow> = [
            unattended("张三", "备注中未找到考勤关键词"),
            unattended("李四", "备注中包含缺勤信息：迟到"),
        ]
        .iter()
        .map(BlacklistRow::from)
        .collect();

        let buffer = export_blacklist(&rows).unwrap();

        let mut workbook = Xlsx::new(Cursor::new(buffer)).unwrap();
        let range = workbook.worksheet_range("黑名单").unwrap();
        assert_eq!(range.get_size().0, 3); // header plus two rows
        assert_eq!(
            range.get_value((0, 3)),
            Some(&Data::String("未考勤原因".to_string()))
        );
        assert_eq!(
            range.get_value((1, 1)),
            Some(&Data::String("张三".to_string()))
        );
        assert_eq!(
            range.get_value((2, 3)),
            Some(&Data::String("备注中包含缺勤信息：迟到".to_string()))
        );
    }

    #[test]
    fn test_invalid_record_maps_reason_text() {
        let invalid = InvalidRecord {
            record: Record {
                class_name: "大数据2101".to_string(),
                name: "王五".to_string(),
                student_id: "20230002".to_string(),
                ..Record::default()
            },
            reason: InvalidReason::Duplicate,
            row_index: 4,
        };

        let row = BlacklistRow::from(&invalid);
        assert_eq!(row.reason, "重复数据");
        assert_eq!(row.class_name, "大数据2101");
    }
}
