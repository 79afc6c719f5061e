#![allow(dead_code)]

use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};
use metroscope::{feed::Feed, repository::Repository};

pub const STATIONS: &str = "\
station_id,station_name,latitude,longitude,underground,depot,interchange
BEN,Ben Thanh,10.77,106.70,1,0,1
OPE,Opera House,10.78,106.71,1,0,0
BAS,Ba Son,10.79,106.72,0,0,0
VAN,Van Thanh,10.80,106.73,0,0,0
";

pub const LINES: &str = "\
line_id,line_name
L1,Line 1
L2,Line 2
";

pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap()
}

/// RFC 3339 timestamp `minutes` after [`base_time`].
pub fn at(minutes: i64) -> String {
    (base_time() + chrono::Duration::minutes(minutes)).to_rfc3339()
}

pub fn load(trains: &str, schedule: &str) -> Repository {
    let files: HashMap<String, String> = [
        ("stations.txt", STATIONS),
        ("lines.txt", LINES),
        ("trains.txt", trains),
        ("schedule.txt", schedule),
    ]
    .into_iter()
    .map(|(name, contents)| (name.to_string(), contents.to_string()))
    .collect();
    Repository::new()
        .load_feed(Feed::new().from_memory(files))
        .unwrap()
}

/// One active train on line 1: departs Ben Thanh at +0, arrives Opera House
/// at +6, holds one minute, arrives Ba Son at +12.
pub fn single_train() -> Repository {
    let schedule = format!(
        "train_id,line_id,station_id,order,arrival_time,departure_time,delay_minutes,status
T1,L1,BEN,1,{},{},0,scheduled
T1,L1,OPE,2,{},{},0,scheduled
T1,L1,BAS,3,{},{},0,scheduled
",
        at(-2),
        at(0),
        at(6),
        at(7),
        at(12),
        at(13),
    );
    load("train_id,line_id,status\nT1,L1,active\n", &schedule)
}
