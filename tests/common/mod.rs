#![allow(dead_code)]

use anyhow::Result;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Chicago carries both optional columns. 2017-01-02 and 2017-01-09 are
/// Mondays, 2017-02-04 a Saturday, 2017-03-05 a Sunday.
pub const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1,2017-01-02 08:05:00,2017-01-02 08:10:00,100,A,B,Subscriber,Male,1990.0
2,2017-01-02 08:30:00,2017-01-02 08:40:00,200,A,B,Subscriber,Female,1990.0
3,2017-01-09 17:00:00,2017-01-09 17:05:00,300,A,B,Customer,,1985.0
4,2017-02-04 08:15:00,2017-02-04 08:20:00,400,A,C,Subscriber,Male,
5,2017-02-04 12:00:00,2017-02-04 12:10:00,500,A,C,Customer,,
6,2017-03-05 08:45:00,2017-03-05 08:50:00,600,B,C,Subscriber,Male,1970.0
7,2017-03-05 09:00:00,2017-03-05 09:20:00,700,B,C,Subscriber,Female,1970.0
";

/// Washington has neither gender nor birth year.
pub const WASHINGTON_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
1,2017-06-21 08:36:34,2017-06-21 08:44:43,489.066,14th & Belmont St NW,15th & K St NW,Subscriber
2,2017-06-22 18:10:00,2017-06-22 18:20:00,600.0,15th & K St NW,14th & Belmont St NW,Customer
";

pub fn write_dataset(dir: &Path, filename: &str, content: &str) -> Result<()> {
    fs::write(dir.join(filename), content)?;
    Ok(())
}

/// Temp data directory with the Chicago and Washington fixtures.
pub fn data_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_dataset(dir.path(), "chicago.csv", CHICAGO_CSV).unwrap();
    write_dataset(dir.path(), "washington.csv", WASHINGTON_CSV).unwrap();
    dir
}

/// `n` synthetic Chicago rows, for paging and benchmarks.
pub fn many_rows_csv(n: usize) -> String {
    let mut csv = String::from(
        "Start Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year\n",
    );
    for i in 0..n {
        csv.push_str(&format!(
            "2017-{:02}-{:02} {:02}:00:00,{},Station {},Station {},{},{},{}\n",
            i % 6 + 1,
            i % 28 + 1,
            i % 24,
            60 + i % 900,
            i % 17,
            i % 11,
            if i % 4 == 0 { "Customer" } else { "Subscriber" },
            if i % 3 == 0 { "" } else { "Female" },
            if i % 5 == 0 { String::new() } else { (1950 + i % 50).to_string() },
        ));
    }
    csv
}
