use async_trait::async_trait;
use natal::elevation::{ElevationError, ElevationService};
use natal::{BirthForm, RequestAssembler};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

enum Behaviour {
    Answer(f64),
    Fail,
    Hang,
}

struct MockElevation {
    behaviour: Behaviour,
    calls: AtomicUsize,
}

impl MockElevation {
    fn new(behaviour: Behaviour) -> Self {
        Self {
            behaviour,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ElevationService for MockElevation {
    async fn elevation(&self, lat: f64, lon: f64) -> Result<f64, ElevationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.behaviour {
            Behaviour::Answer(v) => Ok(v),
            Behaviour::Fail => Err(ElevationError::EmptyResponse { lat, lon }),
            Behaviour::Hang => {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Ok(1.0)
            }
        }
    }
}

fn form(coordinates: Option<(f64, f64)>) -> BirthForm {
    BirthForm {
        name: "Test".to_string(),
        year: 1992,
        month: 3,
        day: 7,
        hour: 23,
        minute: 9,
        coordinates,
    }
}

#[tokio::test]
async fn test_elevation_is_folded_into_request() {
    let assembler = RequestAssembler::new(MockElevation::new(Behaviour::Answer(1609.0)), Duration::from_secs(1));
    let request = assembler.assemble(&form(Some((39.74, -104.99)))).await;

    assert_eq!(request.date, "1992-3-7");
    assert_eq!(request.time, "23:09");
    assert_eq!(request.geo.latitude, Some(39.74));
    assert_eq!(request.geo.longitude, Some(-104.99));
    assert_eq!(request.geo.elevation, 1609.0);
}

#[tokio::test]
async fn test_no_coordinates_skips_lookup() {
    let assembler = RequestAssembler::new(MockElevation::new(Behaviour::Answer(5.0)), Duration::from_secs(1));
    let request = assembler.assemble(&form(None)).await;
    assert_eq!(request.geo.elevation, 0.0);
    assert_eq!(assembler_calls(&assembler), 0);
}

#[tokio::test]
async fn test_failed_lookup_is_best_effort() {
    let assembler = RequestAssembler::new(MockElevation::new(Behaviour::Fail), Duration::from_secs(1));
    let request = assembler.assemble(&form(Some((1.0, 2.0)))).await;
    assert_eq!(request.geo.elevation, 0.0);
    assert_eq!(request.geo.latitude, Some(1.0));
}

#[tokio::test]
async fn test_slow_lookup_times_out() {
    let assembler = RequestAssembler::new(MockElevation::new(Behaviour::Hang), Duration::from_millis(20));
    let request = assembler.assemble(&form(Some((1.0, 2.0)))).await;
    assert_eq!(request.geo.elevation, 0.0);
}

#[tokio::test]
async fn test_assembled_request_parses_back() {
    let assembler = RequestAssembler::new(MockElevation::new(Behaviour::Answer(12.5)), Duration::from_secs(1));
    let request = assembler.assemble(&form(Some((48.85, 2.35)))).await;
    let json = request.to_json().unwrap();
    let parsed = natal::BirthRequest::from_json(&json).unwrap();
    assert_eq!(parsed, request);
    assert!(natal::normalize(&parsed.date, &parsed.time).is_ok());
}

fn assembler_calls(assembler: &RequestAssembler<MockElevation>) -> usize {
    assembler.elevation_service().calls.load(Ordering::SeqCst)
}
