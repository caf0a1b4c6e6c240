//! Common test fixtures for the sombrero field tests.
//!
//! Expected values are evaluated independently in f64 from the closed-form
//! function and the grid constants.

/// The served 1000×1000 sombrero field.
pub mod sombrero {
    pub const WIDTH: usize = 1000;
    pub const HEIGHT: usize = 1000;

    /// 1000 × 1000 × 4 bytes
    pub const BYTE_LEN: usize = 4_000_000;

    /// Cell (0, 0): x = y = -10, r = sqrt(200)
    pub const CORNER_VALUE: f64 = 0.070_213_322;

    /// The four cells around the origin have |x| = |y| = 10/999
    pub const CENTER_CELLS: [(usize, usize); 4] = [(499, 499), (499, 500), (500, 499), (500, 500)];
    pub const CENTER_VALUE: f64 = 0.124_003_840;

    /// Tolerance for comparing f32 samples with f64 expectations.
    pub const TOLERANCE: f64 = 1e-3;
}

/// Origins used by CORS scenarios.
pub mod cors {
    /// The browser client's dev server origin.
    pub const ALLOWED_ORIGIN: &str = "http://localhost:5173";

    pub const DISALLOWED_ORIGIN: &str = "http://evil.example.com";
}

/// HTTP paths served by field-api.
pub mod routes {
    pub const WEATHER_DATA: &str = "/weather-data";
    pub const WEATHER_METADATA: &str = "/weather-data/metadata";
    pub const HEALTH: &str = "/health";
    pub const METRICS: &str = "/metrics";
}
