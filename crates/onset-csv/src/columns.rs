//! Header name resolution for forecast tables.

use csv::StringRecord;

/// The columns a forecast table is read by, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Lat,
    Lon,
    Time,
    Week1,
    Week2,
    Week3,
    Week4,
    Later,
}

impl Column {
    pub const ALL: [Column; 8] = [
        Column::Lat,
        Column::Lon,
        Column::Time,
        Column::Week1,
        Column::Week2,
        Column::Week3,
        Column::Week4,
        Column::Later,
    ];

    /// Header name of the column.
    pub fn name(&self) -> &'static str {
        match self {
            Column::Lat => "lat",
            Column::Lon => "lon",
            Column::Time => "time",
            Column::Week1 => "week1",
            Column::Week2 => "week2",
            Column::Week3 => "week3",
            Column::Week4 => "week4",
            Column::Later => "later",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Positions of the known columns within a particular header row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    positions: [Option<usize>; 8],
}

impl ColumnMap {
    /// Resolve column positions from a header record.
    ///
    /// Matching is by exact name after trimming. Unknown headers are
    /// ignored; when a name repeats, the first occurrence wins.
    pub fn from_headers(headers: &StringRecord) -> Self {
        let mut positions = [None; 8];
        for column in Column::ALL {
            positions[column.index()] = headers.iter().position(|h| h.trim() == column.name());
        }
        Self { positions }
    }

    /// Position of a column in each record, if the table has it.
    pub fn position(&self, column: Column) -> Option<usize> {
        self.positions[column.index()]
    }

    /// Known columns missing from the header.
    pub fn missing(&self) -> Vec<&'static str> {
        Column::ALL
            .iter()
            .filter(|c| self.position(**c).is_none())
            .map(|c| c.name())
            .collect()
    }

    /// Raw text of a column in a record; empty when the column or the
    /// field is absent.
    pub fn get<'r>(&self, record: &'r StringRecord, column: Column) -> &'r str {
        self.position(column)
            .and_then(|i| record.get(i))
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_reordered_headers() {
        let headers = StringRecord::from(vec!["time", "later", "lat", "lon", "extra"]);
        let map = ColumnMap::from_headers(&headers);
        assert_eq!(map.position(Column::Time), Some(0));
        assert_eq!(map.position(Column::Lat), Some(2));
        assert_eq!(map.position(Column::Week1), None);
        assert_eq!(map.missing(), vec!["week1", "week2", "week3", "week4"]);
    }

    #[test]
    fn test_get_short_record() {
        let headers = StringRecord::from(vec!["lat", "lon", "time"]);
        let map = ColumnMap::from_headers(&headers);
        let record = StringRecord::from(vec!["10.0"]);
        assert_eq!(map.get(&record, Column::Lat), "10.0");
        assert_eq!(map.get(&record, Column::Time), "");
        assert_eq!(map.get(&record, Column::Later), "");
    }
}
