//! Common test fixtures for onset forecast tests.
//!
//! Probabilities are given as `[week1, week2, week3, week4, later]`, with
//! `None` standing for a missing cell.

/// A named classification scenario with its expected label key.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub name: &'static str,
    pub probabilities: [Option<f64>; 5],
    pub expected: &'static str,
}

const fn all(w1: f64, w2: f64, w3: f64, w4: f64, later: f64) -> [Option<f64>; 5] {
    [Some(w1), Some(w2), Some(w3), Some(w4), Some(later)]
}

/// Reference scenarios covering every check in the classification order.
pub const SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "week1 spike",
        probabilities: all(0.6, 0.1, 0.1, 0.1, 0.1),
        expected: "just_week1",
    },
    Scenario {
        name: "late tail",
        probabilities: all(0.1, 0.1, 0.1, 0.1, 0.6),
        expected: "later",
    },
    Scenario {
        name: "first fortnight",
        probabilities: all(0.3, 0.3, 0.0, 0.0, 0.0),
        expected: "weeks12",
    },
    Scenario {
        name: "weeks two and three",
        probabilities: all(0.05, 0.3, 0.25, 0.1, 0.1),
        expected: "weeks23",
    },
    Scenario {
        name: "weeks three and four",
        probabilities: all(0.0, 0.1, 0.3, 0.3, 0.2),
        expected: "weeks34",
    },
    Scenario {
        name: "week four into later",
        probabilities: all(0.0, 0.0, 0.1, 0.3, 0.4),
        expected: "weeks4later",
    },
    Scenario {
        name: "flat and low",
        probabilities: all(0.1, 0.1, 0.1, 0.1, 0.1),
        expected: "none",
    },
    Scenario {
        name: "tie keeps first window",
        probabilities: all(0.25, 0.25, 0.25, 0.05, 0.05),
        expected: "weeks12",
    },
    Scenario {
        name: "missing week1",
        probabilities: [None, Some(0.6), Some(0.0), Some(0.0), Some(0.0)],
        expected: "weeks12",
    },
    Scenario {
        name: "all missing",
        probabilities: [None, None, None, None, None],
        expected: "none",
    },
];

/// Sample forecast tables in the layout of the published summary file.
pub mod csv {
    /// Header of the forecast summary table.
    pub const HEADER: &str = "lat,lon,time,week1,week2,week3,week4,later";

    /// A small, well-formed table with one row per interesting label.
    pub const SMALL_TABLE: &str = "\
lat,lon,time,week1,week2,week3,week4,later
8.0,76.0,2024-05-27,0.62,0.2,0.1,0.05,0.03
10.0,76.0,2024-05-27,0.3,0.31,0.2,0.1,0.09
12.0,78.0,2024-05-27,0.05,0.15,0.4,0.25,0.15
20.0,80.0,2024-05-27,0.02,0.03,0.05,0.1,0.8
24.0,84.0,2024-05-27,0.1,0.1,0.1,0.1,0.1
";

    /// Blank lines, missing cells, placeholders and a row without coordinates.
    pub const MESSY_TABLE: &str = "\
lat,lon,time,week1,week2,week3,week4,later

14.0,74.0,2024-05-27,,0.6,0.0,0.0,0.0
16.0,74.0,2024-05-27,n/a,0.2,0.2,0.2,0.2
,76.0,2024-05-27,0.9,0.0,0.0,0.0,0.0
18.0,76.0,,0.1,0.1,0.1,0.1,0.7

";

    /// Columns out of order, an extra column and no `later` column.
    pub const REORDERED_TABLE: &str = "\
time,week4,week3,week2,week1,lon,lat,model
2024-06-03,0.4,0.3,0.1,0.0,82.0,22.0,blend
";
}

/// Issue dates used by the sample tables.
pub mod time {
    pub const ISSUE_DATE: &str = "2024-05-27";
    pub const ISSUE_LABEL: &str = "27 May 2024";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_names_unique() {
        let mut names: Vec<_> = SCENARIOS.iter().map(|s| s.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), SCENARIOS.len());
    }

    #[test]
    fn test_small_table_shape() {
        let lines: Vec<_> = csv::SMALL_TABLE.lines().collect();
        assert_eq!(lines[0], csv::HEADER);
        assert_eq!(lines.len(), 6);
    }
}
