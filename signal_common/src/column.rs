//! Table columns of the signal dashboard.
//!
//! `Column` fixes both the order of the cells in a row and the header labels.
//! Iterate with `Column::iter()` (from `strum::IntoEnumIterator`) to walk the
//! columns left to right.
use strum_macros::{Display, EnumIter};

use crate::snapshot::SignalEntry;

/// Number of cells in every rendered row.
pub const COLUMN_COUNT: usize = 7;

/// Dashboard table columns, declared in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Column {
    /// Symbol key of the signal mapping.
    #[strum(to_string = "Symbol")]
    Symbol,
    /// `trend` attribute.
    #[strum(to_string = "Trend")]
    Trend,
    /// `strength` attribute.
    #[strum(to_string = "Strength")]
    Strength,
    /// `volume_spike` attribute.
    #[strum(to_string = "Volume Spike")]
    VolumeSpike,
    /// `reversal_signal` attribute.
    #[strum(to_string = "Reversal")]
    ReversalSignal,
    /// `premium_discount` attribute.
    #[strum(to_string = "Premium/Discount")]
    PremiumDiscount,
    /// `last_price` attribute.
    #[strum(to_string = "Last Price")]
    LastPrice,
}

impl Column {
    /// Plain cell text for this column. Missing attributes yield an empty string;
    /// present ones are shown verbatim.
    pub fn text_for(self, symbol: &str, entry: &SignalEntry) -> String {
        let value = match self {
            Column::Symbol => return symbol.to_string(),
            Column::Trend => &entry.trend,
            Column::Strength => &entry.strength,
            Column::VolumeSpike => &entry.volume_spike,
            Column::ReversalSignal => &entry.reversal_signal,
            Column::PremiumDiscount => &entry.premium_discount,
            Column::LastPrice => &entry.last_price,
        };
        value.as_ref().map(ToString::to_string).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::CellValue;
    use strum::IntoEnumIterator;

    #[test]
    fn columns_follow_fixed_order() {
        let labels: Vec<String> = Column::iter().map(|c| c.to_string()).collect();
        assert_eq!(labels.len(), COLUMN_COUNT);
        assert_eq!(
            labels,
            [
                "Symbol",
                "Trend",
                "Strength",
                "Volume Spike",
                "Reversal",
                "Premium/Discount",
                "Last Price"
            ]
        );
    }

    #[test]
    fn cell_text_is_verbatim() {
        let entry = SignalEntry {
            trend: Some(CellValue::Text("up".into())),
            strength: Some(CellValue::Text("WEAK".into())),
            volume_spike: None,
            reversal_signal: Some(CellValue::Bool(false)),
            premium_discount: Some(CellValue::Text("discount".into())),
            last_price: Some(CellValue::Number("42000".into())),
        };
        let cells: Vec<String> = Column::iter().map(|c| c.text_for("ETH", &entry)).collect();
        assert_eq!(cells, ["ETH", "up", "WEAK", "", "false", "discount", "42000"]);
    }
}
