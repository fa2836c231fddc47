//! Dashboard statistics over realistic job mixes.

mod common;

use chrono::{Duration, TimeZone, Utc};
use common::builders::{PrintFileBuilder, PrintJobBuilder};
use printaway::schema::JobStatus;
use printaway::workflow::JobStats;

#[test]
fn stats_over_mixed_queue() {
    let now = Utc.with_ymd_and_hms(2026, 8, 28, 12, 0, 0).unwrap();
    let jobs = vec![
        PrintJobBuilder::new(1)
            .customer("Maria", "maria@example.com")
            .status(JobStatus::Completed)
            .files(vec![
                PrintFileBuilder::new(10).copies(2).colored(true).build(),
                PrintFileBuilder::new(11).copies(5).build(),
            ])
            .created_at(now - Duration::hours(1))
            .build(),
        PrintJobBuilder::new(2)
            .customer("Maria again", "MARIA@example.com")
            .status(JobStatus::Pending)
            .files(vec![PrintFileBuilder::new(20).copies(1).build()])
            .created_at(now - Duration::hours(40))
            .build(),
        PrintJobBuilder::new(3)
            .customer("Jose", "jose@example.com")
            .status(JobStatus::Cancelled)
            .files(vec![PrintFileBuilder::new(30).copies(8).colored(true).build()])
            .created_at(now - Duration::hours(3))
            .build(),
    ];

    let stats = JobStats::from_jobs(&jobs, now);

    assert_eq!(stats.total_jobs, 3);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.pending, 1);
    assert_eq!(stats.cancelled, 1);
    assert_eq!(stats.processing, 0);

    // Email identity is case-insensitive.
    assert_eq!(stats.unique_customers, 2);
    assert_eq!(stats.today_jobs, 2);

    assert_eq!(stats.total_files, 4);
    assert_eq!(stats.colored_files, 2);
    assert_eq!(stats.total_copies, 16);

    // 2 colored * 0.25 + 5 bw * 0.10 + 1 bw * 0.10 + 8 colored * 0.25;
    // every job counts, cancelled included.
    assert!((stats.revenue - 3.10).abs() < 1e-9);
}

#[test]
fn stats_today_is_a_calendar_date() {
    let now = Utc.with_ymd_and_hms(2026, 8, 29, 1, 0, 0).unwrap();
    let jobs = vec![
        // Yesterday 23:00, well within a 24-hour window.
        PrintJobBuilder::new(1)
            .created_at(Utc.with_ymd_and_hms(2026, 8, 28, 23, 0, 0).unwrap())
            .build(),
        PrintJobBuilder::new(2)
            .created_at(Utc.with_ymd_and_hms(2026, 8, 29, 0, 15, 0).unwrap())
            .build(),
    ];

    let stats = JobStats::from_jobs(&jobs, now);
    assert_eq!(stats.today_jobs, 1);
}

#[test]
fn stats_on_empty_queue_are_all_zero() {
    let stats = JobStats::from_jobs(&[], Utc::now());
    assert_eq!(stats, JobStats::default());
}
