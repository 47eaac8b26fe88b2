use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use tokio::time::{sleep_until, Duration, Instant};
use tracing::{error, info, warn};

use crate::{
    backend::client::BackendClient,
    config::Config,
    error::Result,
    timing::{
        clock::Region,
        daily::WeeklyHours,
        schedule::{PlaceStatus, Schedule},
    },
};

#[derive(Debug, Serialize)]
pub struct PlaceReport {
    pub place_id: String,
    pub checked_at: String,
    pub status: PlaceStatus,
    pub weekly_hours: WeeklyHours,
}

/// Polls the backend for the configured places and reports whether each
/// one is open.
pub struct Watcher {
    client: BackendClient,
    place_ids: Vec<String>,
    region: Region,
    soon_threshold_min: u16,
    poll_interval: Duration,
}

impl Watcher {
    pub fn setup(config: &Config, client: BackendClient) -> Result<Self> {
        Ok(Self {
            client,
            place_ids: config.place_ids.clone(),
            region: config.region()?,
            soon_threshold_min: config.soon_threshold_minutes,
            poll_interval: Duration::from_secs(config.poll_interval_secs),
        })
    }

    pub async fn run(self) {
        info!(
            "Watching {} places every {:?}",
            self.place_ids.len(),
            self.poll_interval
        );
        loop {
            for report in self.snapshot().await {
                match report.status.event {
                    Some(event) => info!(
                        place = %report.place_id,
                        open = report.status.open,
                        "{}",
                        event
                    ),
                    None => info!(place = %report.place_id, open = report.status.open),
                }
            }
            sleep_until(Instant::now() + self.poll_interval).await;
        }
    }

    /// One round over every place. A place that fails is logged and left out.
    pub async fn snapshot(&self) -> Vec<PlaceReport> {
        let now = self.region.now();
        let mut reports = Vec::with_capacity(self.place_ids.len());
        for place_id in &self.place_ids {
            match self.check(place_id, now).await {
                Ok(report) => reports.push(report),
                Err(err) => error!("Could not check place {}: {}", place_id, err),
            }
        }
        reports
    }

    async fn check(&self, place_id: &str, now: DateTime<FixedOffset>) -> Result<PlaceReport> {
        let entries = self.client.operating_hours(place_id).await?;
        if entries.is_empty() {
            warn!("Place {} has no operating hours", place_id);
        }
        let schedule = Schedule::new(entries).with_soon_threshold(self.soon_threshold_min);
        Ok(PlaceReport {
            place_id: place_id.to_string(),
            checked_at: now.to_rfc3339(),
            status: schedule.status(now),
            weekly_hours: schedule.weekly_hours(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(backend_url: &str, place_ids: &[&str]) -> Config {
        Config {
            backend_url: backend_url.to_string(),
            place_ids: place_ids.iter().map(|id| id.to_string()).collect(),
            timezone: "+07:00".to_string(),
            soon_threshold_minutes: 60,
            poll_interval_secs: 1,
        }
    }

    #[tokio::test]
    async fn snapshot_skips_failing_places() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/places/1/operating-hours"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"[{"day_of_week": "Everyday", "opening_time": "00:00", "closing_time": "23:59"}]"#,
            ))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/places/2/operating-hours"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/places/3/operating-hours"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .mount(&server)
            .await;

        let config = config(&server.uri(), &["1", "2", "3"]);
        let watcher = Watcher::setup(&config, BackendClient::new(&config.backend_url)).unwrap();
        let reports = watcher.snapshot().await;

        let ids: Vec<&str> = reports.iter().map(|r| r.place_id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert!(reports[0].weekly_hours.iter().all(|day| day.open()));
        assert!(!reports[1].status.open);
        assert_eq!(reports[1].status.event, None);
    }
}
