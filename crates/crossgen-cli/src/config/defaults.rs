pub struct DefaultsConfig {
    pub width: usize,
    pub height: usize,
    pub time_limit_secs: f64,
    pub attempts: usize,
    pub shuffle: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            width: 15,
            height: 15,
            time_limit_secs: 60.0,
            attempts: 1,
            shuffle: true,
        }
    }
}
