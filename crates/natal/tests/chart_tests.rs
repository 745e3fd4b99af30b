use natal::ephemeris::{
    CelestialBody, EphemerisError, EphemerisService, EquatorialCoordinates, Observer,
};
use natal::julian::JulianDate;
use natal::{normalize, BirthRequest, ChartEngine, ChartError, ZodiacSign};
use std::collections::HashMap;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Fixed right ascension per body, in hours.
struct Table(HashMap<CelestialBody, f64>);

impl Table {
    fn typical() -> Self {
        Self(HashMap::from([
            (CelestialBody::Sun, 5.625),
            (CelestialBody::Moon, 17.875),
            (CelestialBody::Mercury, 6.125),
            (CelestialBody::Venus, 5.0),
            (CelestialBody::Mars, 8.25),
            (CelestialBody::Jupiter, 3.875),
            (CelestialBody::Saturn, 3.5),
        ]))
    }
}

impl EphemerisService for Table {
    fn equatorial(
        &self,
        body: CelestialBody,
        jd: JulianDate,
        _observer: &Observer,
    ) -> Result<EquatorialCoordinates, EphemerisError> {
        let ra = self.0.get(&body).copied().ok_or(EphemerisError::CalculationFailed {
            body,
            julian_date: jd.value(),
            message: "missing".to_string(),
        })?;
        Ok(EquatorialCoordinates {
            right_ascension_hours: ra,
            declination_degrees: 0.0,
            distance_au: 1.0,
        })
    }
}

#[test]
fn test_reference_scenario() {
    init_logger();
    let instant = normalize("2000-06-15", "12:00").unwrap();
    assert_eq!(JulianDate::from_instant(&instant).value(), 2451711.0);

    let engine = ChartEngine::new(Table::typical());
    let chart = engine
        .natal_chart(&BirthRequest {
            name: "Reference".to_string(),
            date: "2000-06-15".to_string(),
            time: "12:00".to_string(),
            geo: Default::default(),
        })
        .unwrap();

    assert_eq!(chart.sun_sign, ZodiacSign::Gemini);
    let bodies: Vec<_> = chart.placements.iter().map(|p| p.body).collect();
    assert_eq!(bodies, CelestialBody::ALL.to_vec());

    // Sun: 5.625 h = 84.375 deg -> 24.38 Gemini, house 3
    let sun = &chart.placements[0];
    assert_eq!(sun.sign, ZodiacSign::Gemini);
    assert_eq!(sun.house, 3);
    assert_eq!(sun.degrees_label(), "24.38");

    // Moon: 17.875 h = 268.125 deg -> 28.13 Sagittarius, house 9
    let moon = &chart.placements[1];
    assert_eq!(moon.sign, ZodiacSign::Sagittarius);
    assert_eq!(moon.house, 9);
    assert_eq!(moon.degrees, 28.13);

    // Saturn: 3.5 h = 52.5 deg -> Taurus, house 2
    let saturn = &chart.placements[6];
    assert_eq!(saturn.sign, ZodiacSign::Taurus);
    assert_eq!(saturn.house, 2);
}

#[test]
fn test_julian_date_is_monotonic() {
    let instants = [
        ("0001-1-1", "00:00"),
        ("1582-10-15", "00:00"),
        ("1969-12-31", "23:59"),
        ("1970-01-01", "00:00"),
        ("1970-01-01", "00:01"),
        ("2000-02-28", "23:59"),
        ("2000-02-29", "00:00"),
        ("2024-12-31", "23:59"),
        ("9999-12-31", "23:59"),
    ];
    let jds: Vec<f64> = instants
        .iter()
        .map(|(d, t)| JulianDate::from_instant(&normalize(d, t).unwrap()).value())
        .collect();
    for pair in jds.windows(2) {
        assert!(pair[0] < pair[1], "{pair:?}");
    }
}

#[test]
fn test_every_minute_of_a_day_is_distinct() {
    let mut last = f64::MIN;
    for hour in 0..24 {
        for minute in 0..60 {
            let time = format!("{hour:02}:{minute:02}");
            let jd = JulianDate::from_instant(&normalize("2012-7-1", &time).unwrap()).value();
            assert!(jd > last, "{time}");
            last = jd;
        }
    }
}

#[test]
fn test_malformed_json_rejected_before_ephemeris() {
    let engine = ChartEngine::new(Table(HashMap::new()));
    assert!(matches!(
        engine.natal_chart_from_json(r#"{"name": "x", "date": "2000-01-01"}"#),
        Err(ChartError::MalformedRequest(_))
    ));
    assert!(matches!(
        engine.natal_chart_from_json(r#"{"date": "2000-01-01", "time": "7:00"}"#),
        Err(ChartError::InvalidTimeFormat(_))
    ));
}

#[test]
fn test_missing_body_means_no_chart() {
    let mut table = Table::typical();
    table.0.remove(&CelestialBody::Saturn);
    let engine = ChartEngine::new(table);
    assert!(matches!(
        engine.generate("2000-06-15", "12:00"),
        Err(ChartError::EphemerisUnavailable {
            body: CelestialBody::Saturn,
            ..
        })
    ));
}
