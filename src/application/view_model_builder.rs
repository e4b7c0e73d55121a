// View-model builders for the Home screen
//
// Every generating builder takes the random source from the caller; nothing
// here touches a global generator.
use crate::domain::error::ViewModelError;
use crate::domain::metrics::{Direction, MetricCard, SegmentShare, total_percentage};
use crate::domain::series::{Period, SeriesSpec, TimeSeries, TimeSeriesPoint, validate_series_names};
use chrono::{Datelike, NaiveDate};
use rand::Rng;
use rand_distr::{Distribution, Normal, StandardNormal};

pub fn build_metric_cards() -> [MetricCard; 4] {
    [
        MetricCard::new("Total Customers", "124,532", Direction::Up, "12%"),
        MetricCard::new("Cross-Banner Shopping", "23%", Direction::Up, "5%"),
        MetricCard::new("Avg Order Value", "$84.23", Direction::Up, "8%"),
        MetricCard::new("Customer Satisfaction", "4.8/5.0", Direction::Up, "0.2"),
    ]
}

pub fn build_segment_shares() -> Vec<SegmentShare> {
    let shares = vec![
        SegmentShare::new("Prime Enthusiasts", 45),
        SegmentShare::new("Fresh Regulars", 30),
        SegmentShare::new("Organic Seekers", 15),
        SegmentShare::new("Occasional", 10),
    ];
    debug_assert_eq!(total_percentage(&shares), 100);
    shares
}

/// One point per month-end date in `[start, end]`, one value per spec drawn
/// from `Normal(mean, stddev)`.
///
/// An inverted range is not an error: it yields a series with no points.
pub fn build_monthly_trend<R: Rng + ?Sized>(
    start: NaiveDate,
    end: NaiveDate,
    specs: &[SeriesSpec],
    rng: &mut R,
) -> Result<TimeSeries, ViewModelError> {
    validate_series_names(specs.iter().map(SeriesSpec::name))?;

    let dates = month_ends(start, end);
    let mut columns = Vec::with_capacity(specs.len());
    for spec in specs {
        let normal = normal_for(spec.name(), spec.mean(), spec.stddev())?;
        columns.push(normal.sample_iter(&mut *rng).take(dates.len()).collect::<Vec<f64>>());
    }

    let points = dates
        .into_iter()
        .enumerate()
        .map(|(i, date)| {
            TimeSeriesPoint::new(Period::Date(date), columns.iter().map(|c| c[i]).collect())
        })
        .collect();

    Ok(TimeSeries::new(names_of(specs.iter().map(SeriesSpec::name)), points))
}

/// Order counts per hour of day. Negative draws are clamped to zero.
pub fn build_hourly_pattern<R: Rng + ?Sized>(
    hours: u32,
    mean: f64,
    stddev: f64,
    rng: &mut R,
) -> Result<Vec<TimeSeriesPoint>, ViewModelError> {
    // Validates the same way a named series would.
    let spec = SeriesSpec::new("Orders", mean, stddev)?;
    let normal = normal_for(spec.name(), spec.mean(), spec.stddev())?;

    Ok((0..hours)
        .map(|hour| {
            let orders: f64 = normal.sample(&mut *rng);
            TimeSeriesPoint::new(Period::Index(hour), vec![orders.max(0.0)])
        })
        .collect())
}

/// Running sum of `weeks` independent standard-normal increments per series.
pub fn build_cumulative_trend<R: Rng + ?Sized, S: AsRef<str>>(
    weeks: u32,
    series_names: &[S],
    rng: &mut R,
) -> Result<TimeSeries, ViewModelError> {
    validate_series_names(series_names.iter().map(|name| name.as_ref()))?;

    let columns: Vec<Vec<f64>> = series_names
        .iter()
        .map(|_| {
            let mut total = 0.0;
            (0..weeks)
                .map(|_| {
                    let step: f64 = StandardNormal.sample(&mut *rng);
                    total += step;
                    total
                })
                .collect()
        })
        .collect();

    let points = (0..weeks)
        .map(|week| {
            let i = week as usize;
            TimeSeriesPoint::new(Period::Index(week), columns.iter().map(|c| c[i]).collect())
        })
        .collect();

    Ok(TimeSeries::new(names_of(series_names.iter().map(|name| name.as_ref())), points))
}

fn normal_for(name: &str, mean: f64, stddev: f64) -> Result<Normal<f64>, ViewModelError> {
    Normal::new(mean, stddev).map_err(|_| ViewModelError::InvalidStdDev {
        name: name.to_string(),
        stddev,
    })
}

fn names_of<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    names.map(str::to_string).collect()
}

/// Calendar month-end dates falling inside `[start, end]`.
fn month_ends(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let (mut year, mut month) = (start.year(), start.month());

    while let Some(last) = last_day_of_month(year, month) {
        if last > end {
            break;
        }
        dates.push(last);
        if month == 12 {
            year += 1;
            month = 1;
        } else {
            month += 1;
        }
    }

    dates
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::random::render_rng;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn order_specs() -> Vec<SeriesSpec> {
        vec![
            SeriesSpec::new("WFM Orders", 100.0, 10.0).unwrap(),
            SeriesSpec::new("Fresh Orders", 80.0, 15.0).unwrap(),
        ]
    }

    #[test]
    fn test_metric_cards() {
        let cards = build_metric_cards();
        let labels: Vec<&str> = cards.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Total Customers", "Cross-Banner Shopping", "Avg Order Value", "Customer Satisfaction"]
        );
        assert_eq!(cards[2].value, "$84.23");
        assert_eq!(cards[3].delta, "↑ 0.2");
    }

    #[test]
    fn test_segment_shares_sum_to_100() {
        let shares = build_segment_shares();
        assert_eq!(shares.len(), 4);
        assert_eq!(total_percentage(&shares), 100);
        assert_eq!(shares[0].name, "Prime Enthusiasts");
    }

    #[test]
    fn test_monthly_trend_has_one_point_per_month_end() {
        let mut rng = render_rng(Some(7));
        let trend = build_monthly_trend(date(2023, 1, 1), date(2023, 12, 31), &order_specs(), &mut rng).unwrap();

        assert_eq!(trend.series, vec!["WFM Orders", "Fresh Orders"]);
        assert_eq!(trend.points.len(), 12);
        assert_eq!(trend.points[0].period, Period::Date(date(2023, 1, 31)));
        assert_eq!(trend.points[1].period, Period::Date(date(2023, 2, 28)));
        assert_eq!(trend.points[11].period, Period::Date(date(2023, 12, 31)));
        assert!(trend.points.iter().all(|p| p.values.len() == 2));
    }

    #[test]
    fn test_monthly_trend_partial_months() {
        let mut rng = render_rng(Some(1));
        let trend = build_monthly_trend(date(2024, 1, 15), date(2024, 3, 10), &order_specs(), &mut rng).unwrap();
        let periods: Vec<Period> = trend.points.iter().map(|p| p.period).collect();
        assert_eq!(periods, vec![Period::Date(date(2024, 1, 31)), Period::Date(date(2024, 2, 29))]);
    }

    #[test]
    fn test_monthly_trend_is_reproducible_for_a_seed() {
        for seed in [0, 1, 42, u64::MAX] {
            let a = build_monthly_trend(date(2023, 1, 1), date(2023, 12, 31), &order_specs(), &mut render_rng(Some(seed))).unwrap();
            let b = build_monthly_trend(date(2023, 1, 1), date(2023, 12, 31), &order_specs(), &mut render_rng(Some(seed))).unwrap();
            assert_eq!(serde_json::to_vec(&a).unwrap(), serde_json::to_vec(&b).unwrap());
        }
    }

    #[test]
    fn test_monthly_trend_inverted_range_is_empty() {
        let mut rng = render_rng(Some(3));
        let trend = build_monthly_trend(date(2023, 12, 31), date(2023, 1, 1), &order_specs(), &mut rng).unwrap();
        assert!(trend.is_empty());
        assert_eq!(trend.series.len(), 2);
    }

    #[test]
    fn test_monthly_trend_zero_stddev_is_constant() {
        let specs = vec![SeriesSpec::new("Flat", 42.0, 0.0).unwrap()];
        let trend = build_monthly_trend(date(2023, 1, 1), date(2023, 6, 30), &specs, &mut render_rng(Some(9))).unwrap();
        assert_eq!(trend.column("Flat"), Some(vec![42.0; 6]));
    }

    #[test]
    fn test_monthly_trend_rejects_duplicate_names() {
        let specs = vec![
            SeriesSpec::new("WFM", 1.0, 1.0).unwrap(),
            SeriesSpec::new("WFM", 2.0, 1.0).unwrap(),
        ];
        let result = build_monthly_trend(date(2023, 1, 1), date(2023, 2, 28), &specs, &mut render_rng(Some(0)));
        assert_eq!(result, Err(ViewModelError::DuplicateSeries("WFM".to_string())));
    }

    #[test]
    fn test_unseeded_renders_differ() {
        let a = build_monthly_trend(date(2023, 1, 1), date(2023, 12, 31), &order_specs(), &mut render_rng(None)).unwrap();
        let b = build_monthly_trend(date(2023, 1, 1), date(2023, 12, 31), &order_specs(), &mut render_rng(None)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_hourly_pattern_is_clamped() {
        // A mean well below zero makes most raw draws negative.
        let points = build_hourly_pattern(24, -5.0, 10.0, &mut render_rng(Some(11))).unwrap();
        assert_eq!(points.len(), 24);
        for (hour, point) in points.iter().enumerate() {
            assert_eq!(point.period, Period::Index(hour as u32));
            assert_eq!(point.values.len(), 1);
            assert!(point.values[0] >= 0.0);
        }
    }

    #[test]
    fn test_hourly_pattern_rejects_bad_stddev() {
        let result = build_hourly_pattern(24, 40.0, -1.0, &mut render_rng(Some(0)));
        assert!(matches!(result, Err(ViewModelError::InvalidStdDev { .. })));
    }

    #[test]
    fn test_cumulative_trend_accumulates() {
        let names = ["WFM", "Fresh"];
        let trend = build_cumulative_trend(52, &names, &mut render_rng(Some(5))).unwrap();
        assert_eq!(trend.points.len(), 52);
        assert_eq!(trend.points[51].period, Period::Index(51));

        // Replaying the same seed gives the increments behind each running sum.
        let mut rng = render_rng(Some(5));
        for name in names {
            let mut expected = 0.0;
            let column = trend.column(name).unwrap();
            for value in column {
                let step: f64 = StandardNormal.sample(&mut rng);
                expected += step;
                assert_eq!(value, expected);
            }
        }
    }

    #[test]
    fn test_cumulative_trend_zero_weeks() {
        let trend = build_cumulative_trend(0, &["WFM"], &mut render_rng(Some(5))).unwrap();
        assert!(trend.is_empty());
    }

    #[test]
    fn test_cumulative_trend_rejects_empty_name() {
        let result = build_cumulative_trend(4, &["WFM", " "], &mut render_rng(Some(5)));
        assert_eq!(result, Err(ViewModelError::EmptySeriesName));
    }
}
