use std::{collections::HashMap, hint::black_box};

use chrono::{DateTime, Duration, TimeZone, Utc};
use criterion::{Criterion, criterion_group, criterion_main};
use metroscope::{
    feed::Feed,
    repository::Repository,
    sim::{EtaProjector, Simulator},
};

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap()
}

/// One line, `station_count` evenly spaced stations, `train_count` trains
/// staggered two minutes apart, all mid-trip around the base time.
fn synthetic_repository(train_count: usize, station_count: usize) -> Repository {
    let mut stations = String::from(
        "station_id,station_name,latitude,longitude,underground,depot,interchange\n",
    );
    for i in 0..station_count {
        stations.push_str(&format!(
            "S{i},Station {i},{},{},0,0,0\n",
            10.70 + i as f64 * 0.01,
            106.60 + i as f64 * 0.01,
        ));
    }

    let mut trains = String::from("train_id,line_id,status\n");
    let mut schedule = String::from(
        "train_id,line_id,station_id,order,arrival_time,departure_time,delay_minutes,status\n",
    );
    for t in 0..train_count {
        trains.push_str(&format!("T{t},L1,active\n"));
        let start = base_time() - Duration::minutes((t * 2) as i64);
        for i in 0..station_count {
            let arrival = start + Duration::minutes((i * 3) as i64);
            let departure = arrival + Duration::minutes(1);
            schedule.push_str(&format!(
                "T{t},L1,S{i},{},{},{},0,scheduled\n",
                i + 1,
                arrival.to_rfc3339(),
                departure.to_rfc3339(),
            ));
        }
    }

    let files: HashMap<String, String> = [
        ("stations.txt".to_string(), stations),
        ("lines.txt".to_string(), "line_id,line_name\nL1,Line 1\n".to_string()),
        ("trains.txt".to_string(), trains),
        ("schedule.txt".to_string(), schedule),
    ]
    .into_iter()
    .collect();
    Repository::new()
        .load_feed(Feed::new().from_memory(files))
        .expect("Failed to build repository")
}

fn criterion_benchmark(c: &mut Criterion) {
    let repository = synthetic_repository(50, 14);
    let now = base_time() + Duration::minutes(10);

    c.bench_function("fleet_50_trains", |b| {
        b.iter(|| {
            let simulator = Simulator::new(&repository).at(now);
            black_box(simulator.fleet())
        })
    });

    let fleet = Simulator::new(&repository).at(now).snapshot(1);
    let projector = EtaProjector::new(&repository);
    c.bench_function("eta_last_station", |b| {
        b.iter(|| black_box(projector.project("S13", "L1", &fleet)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
