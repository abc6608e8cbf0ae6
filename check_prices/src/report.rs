//! CSV price report

use crate::error::Result;
use crate::item::ItemRecord;
use std::io::Write;

pub const REPORT_HEADER: [&str; 7] = [
    "Item",
    "Want Quantity",
    "Market",
    "Price Each (w/o tax)",
    "Actual Quantity",
    "Sells per Day",
    "Universalis URL",
];

fn format_optional(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.2}")).unwrap_or_default()
}

/// One report row for a record; absent values become empty cells
pub fn report_row(item: &ItemRecord) -> [String; 7] {
    [
        item.name_with_hq(),
        item.want_quantity.to_string(),
        item.market.clone(),
        format_optional(item.price_each()),
        item.actual_quantity()
            .map(|q| q.to_string())
            .unwrap_or_default(),
        format_optional(item.sells_per_day()),
        item.market_url(),
    ]
}

/// Write the report for `items`, in the given order.
///
/// With `bom` set a UTF-8 byte order mark is written first so spreadsheet
/// applications detect the encoding.
pub fn write_report<W: Write>(mut out: W, items: &[ItemRecord], bom: bool) -> Result<()> {
    if bom {
        out.write_all("\u{feff}".as_bytes())?;
    }

    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(REPORT_HEADER)?;
    for item in items {
        writer.write_record(report_row(item))?;
    }
    writer.flush()?;

    log::debug!("Wrote report with {} row(s)", items.len());
    Ok(())
}
