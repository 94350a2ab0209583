//! Table layout for side-by-side output

use prettytable::Table;
use prettytable::format::{FormatBuilder, LinePosition, LineSeparator};

/// New empty table with box-drawing borders
#[must_use]
pub fn new() -> Table {
    let mut table = Table::new();
    table.set_format(
        FormatBuilder::new()
            .column_separator('│')
            .borders('│')
            .separators(&[LinePosition::Top], LineSeparator::new('─', '┬', '┌', '┐'))
            .separators(&[LinePosition::Title], LineSeparator::new('─', '┼', '├', '┤'))
            .separators(&[LinePosition::Bottom], LineSeparator::new('─', '┴', '└', '┘'))
            .padding(1, 1)
            .build(),
    );
    table
}
