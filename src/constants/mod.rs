pub struct Env {
    pub frontend_url: String,
    pub ip: String,
    pub port: u16,
    pub workers: usize,
    pub popular_films_count: i64,
}

impl Env {
    fn new() -> Self {
        let frontend_url =
            std::env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:5173".to_string());
        let ip = std::env::var("IP").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .expect("PORT must be a valid u16 integer");
        let workers = parse_workers(&std::env::var("WORKERS").unwrap_or_else(|_| "2".to_string()))
            .expect("WORKERS must be an integer of at least 1");
        let popular_films_count = std::env::var("POPULAR_FILMS_COUNT")
            .unwrap_or_else(|_| DEFAULT_POPULAR_FILMS_COUNT.to_string())
            .parse::<i64>()
            .expect("POPULAR_FILMS_COUNT must be a valid i64 integer");
        Env { frontend_url, ip, port, workers, popular_films_count }
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}

/// actix refuses to start with zero workers.
fn parse_workers(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok().filter(|workers| *workers >= 1)
}

pub const DEFAULT_POPULAR_FILMS_COUNT: i64 = 10;

/// Earliest accepted release date: the first public film screening.
pub const CINEMA_BIRTHDAY: (i32, u32, u32) = (1895, 12, 28);

pub const MAX_DESCRIPTION_LENGTH: usize = 200;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workers_must_be_positive() {
        assert_eq!(parse_workers("4"), Some(4));
        assert_eq!(parse_workers(" 1 "), Some(1));
        assert_eq!(parse_workers("0"), None);
        assert_eq!(parse_workers("-2"), None);
        assert_eq!(parse_workers("many"), None);
    }
}
