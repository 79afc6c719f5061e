pub struct Config {
    pub stations_file_name: String,
    pub lines_file_name: String,
    pub trains_file_name: String,
    pub schedule_file_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stations_file_name: "stations.txt".into(),
            lines_file_name: "lines.txt".into(),
            trains_file_name: "trains.txt".into(),
            schedule_file_name: "schedule.txt".into(),
        }
    }
}
