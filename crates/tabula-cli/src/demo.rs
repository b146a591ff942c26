//! Built-in demo dataset: 2023 Chinese Super League team statistics.

use anyhow::Result;
use tabula_db::{DataType, Database};

/// Name of the demo table.
pub const LEAGUE_TABLE: &str = "league_data";

const LEAGUE_COLUMNS: [(&str, DataType); 11] = [
    ("Team_Name", DataType::Text),
    ("Ranking", DataType::Integer),
    ("Goal", DataType::Integer),
    ("Average_shots_per_game", DataType::Real),
    ("Average_shots_on_target_per_game", DataType::Real),
    ("Average_passes_per_game", DataType::Integer),
    ("Probability_of_successful_passes_per_game", DataType::Real),
    ("Key_passes", DataType::Integer),
    ("Goals_conceded", DataType::Integer),
    ("Tackles", DataType::Integer),
    ("Clearance", DataType::Integer),
];

const LEAGUE_ROWS: [[&str; 11]; 16] = [
    ["Shanghai ShenHua FC", "1", "23", "17.6", "5.9", "415", "0.8", "153", "12", "185", "275"],
    ["Chengdu RongCheng FC", "2", "18", "18.3", "6.9", "442", "0.79", "138", "7", "174", "246"],
    ["Beijing Guoan FC", "3", "24", "13.8", "5.6", "543", "0.86", "104", "11", "152", "301"],
    ["Shandong Taishan FC", "5", "23", "16.7", "5.5", "393", "0.78", "141", "20", "180", "308"],
    ["Shanghai Port FC", "4", "22", "15.9", "6.0", "480", "0.84", "107", "14", "200", "254"],
    ["Qingdao West Coast FC", "6", "19", "11.1", "3.7", "376", "0.72", "81", "17", "194", "241"],
    ["Tianjin jinmen Tiger FC", "7", "18", "14", "4.9", "380", "0.76", "104", "18", "197", "383"],
    ["Zhejiang FC", "8", "20", "10.8", "3.6", "459", "0.82", "86", "16", "165", "315"],
    ["Dalian Yingbo FC", "9", "11", "11.6", "3.1", "360", "0.73", "89", "16", "203", "296"],
    ["Meizhuo Hakka FC", "10", "20", "12.8", "3.8", "371", "0.76", "96", "22", "193", "325"],
    ["Yunnan Yukun FC", "11", "16", "11.4", "3.5", "312", "0.70", "91", "21", "203", "320"],
    ["Wuhan Tree Towns FC", "12", "13", "13.5", "4.9", "376", "0.76", "101", "22", "203", "309"],
    ["Shenzhen Peng City FC", "13", "11", "9.8", "2.9", "378", "0.77", "79", "22", "227", "279"],
    ["Henan FC", "14", "14", "11.4", "4.2", "365", "0.77", "83", "18", "169", "270"],
    ["Qingdao Hainiu FC", "15", "12", "9.8", "2.9", "366", "0.75", "72", "18", "226", "468"],
    ["Changchun Yatai FC", "16", "10", "9.1", "3.1", "359", "0.71", "68", "22", "200", "435"],
];

/// Creates the demo table in `db`.
pub fn load_league_data(db: &mut Database) -> Result<()> {
    let table = db.create_table(LEAGUE_TABLE)?;
    for (name, data_type) in LEAGUE_COLUMNS {
        table.add_column(name, data_type);
    }
    for row in LEAGUE_ROWS {
        table.add_row(row)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_league_data_loads() {
        let mut db = Database::new();
        load_league_data(&mut db).unwrap();

        let table = db.get_table(LEAGUE_TABLE).unwrap();
        assert_eq!(table.column_count(), 11);
        assert_eq!(table.row_count(), 16);
        // 11 columns from a width of 2: 2 -> 4 -> 8 -> 16
        assert_eq!(table.capacity(), 16);

        let rows = table.get_rows();
        assert_eq!(rows[0][0], "Shanghai ShenHua FC");
        assert_eq!(rows[4][4], "6");
        assert_eq!(rows[10][6], "0.7");
    }
}
