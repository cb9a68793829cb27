pub(crate) mod chart;
pub(crate) mod table;

use crate::neo::NeoRecord;
use clap::ValueEnum;
use strum_macros::Display;

/// Which of the two catalog renderings to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, ValueEnum)]
#[strum(serialize_all = "lowercase")]
pub enum ViewMode {
    Table,
    Chart,
}

pub fn render(mode: ViewMode, records: &[&NeoRecord]) -> String {
    match mode {
        ViewMode::Table => table::render_table(records),
        ViewMode::Chart => chart::render_chart(records),
    }
}
