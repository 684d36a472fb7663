#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use bikeshare::core::parse_timestamp;
use bikeshare::models::{Calendar, Dataset, OptionalColumns, Trip};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Five trips: three in January, two in February, every optional column.
pub const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1,2017-01-02 09:00:00,2017-01-02 09:10:00,600,A,B,Subscriber,Male,1985.0
2,2017-01-02 09:30:00,2017-01-02 09:50:00,1200,A,B,Subscriber,Female,1990.0
3,2017-01-09 17:15:00,2017-01-09 17:20:00,300,C,D,Customer,,
4,2017-02-03 08:00:00,2017-02-03 08:30:00,1800,B,A,Subscriber,Male,1985.0
5,2017-02-06 08:05:00,2017-02-06 08:06:00,60,A,B,Customer,Female,1972.0
";

pub const NEW_YORK_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
10,2017-06-23 15:09:32,2017-06-23 15:14:53,321,W 52 St & 5 Ave,E 59 St & Sutton Pl,Subscriber,Male,1998.0
11,2017-05-25 18:19:03,2017-05-25 18:45:53,1610,E 4 St & 2 Ave,E 9 St & Avenue C,Subscriber,Female,1981.0
12,2017-01-04 08:27:49,2017-01-04 08:34:45,416,E 4 St & 2 Ave,E 9 St & Avenue C,Customer,,
";

/// No Gender / Birth Year columns.
pub const WASHINGTON_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
20,2017-06-21 08:36:34,2017-06-21 08:44:43,489.066,14th & Belmont St NW,15th & K St NW,Subscriber
21,2017-03-11 10:40:00,2017-03-11 10:46:00,360.0,Lincoln Memorial,Jefferson Memorial,Customer
22,2017-03-13 07:00:00,2017-03-13 07:30:00,1800.0,14th & Belmont St NW,15th & K St NW,Subscriber
";

pub fn bikeshare() -> Command {
    cargo_bin_cmd!("bikeshare")
}

/// Binary command isolated from the user's configuration, reading `data_dir`.
pub fn bikeshare_in(name: &str, data_dir: &Path) -> Command {
    let dir = data_dir.to_string_lossy().to_string();
    let mut cmd = bikeshare();
    cmd.env("BIKESHARE_CONFIG", temp_out(&format!("{name}_config"), "conf"))
        .env_remove("RUST_LOG")
        .args(["--data-dir", dir.as_str()]);
    cmd
}

/// Create an empty, unique directory inside the system temp dir
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{name}_bikeshare"));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Temp directory populated with the three city files
pub fn setup_data_dir(name: &str) -> PathBuf {
    let dir = temp_dir(name);
    fs::write(dir.join("chicago.csv"), CHICAGO_CSV).expect("write chicago");
    fs::write(dir.join("new_york_city.csv"), NEW_YORK_CSV).expect("write new york city");
    fs::write(dir.join("washington.csv"), WASHINGTON_CSV).expect("write washington");
    dir
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Trip between two stations with timestamps in `YYYY-MM-DD HH:MM:SS`.
pub fn trip(start: &str, end: &str, from: &str, to: &str) -> Trip {
    Trip::new(
        &Calendar::english(),
        parse_timestamp(start).expect("start timestamp"),
        parse_timestamp(end).expect("end timestamp"),
        from,
        to,
    )
}

pub fn dataset(trips: Vec<Trip>, columns: OptionalColumns) -> Dataset {
    Dataset::new(Vec::new(), columns, trips)
}

pub fn chicago() -> Dataset {
    bikeshare::core::read_trips(CHICAGO_CSV.as_bytes(), &Calendar::english()).expect("chicago")
}

pub fn washington() -> Dataset {
    bikeshare::core::read_trips(WASHINGTON_CSV.as_bytes(), &Calendar::english())
        .expect("washington")
}
