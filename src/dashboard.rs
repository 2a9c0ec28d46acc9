//! Aggregate counts and submission quick-filters for the overview screen.
//! Everything here is a pure read over the collections.

use chrono::{Datelike, Duration, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::models::page::{Page, PageStatus};
use crate::models::post::{Post, PostStatus};
use crate::models::service::Service;
use crate::models::site::{Site, SiteStatus};
use crate::models::submission::{Submission, SubmissionStatus};
use crate::models::team::TeamMember;
use crate::models::testimonial::Testimonial;
use crate::store::Activatable;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContentStats {
    pub submissions_total: usize,
    pub submissions_new: usize,
    pub submissions_converted: usize,
    /// Converted share of all submissions, in percent. Zero when empty.
    pub conversion_rate: f64,
    pub pages_published: usize,
    pub posts_published: usize,
    pub posts_draft: usize,
    pub team_active: usize,
    pub services_active: usize,
    pub testimonials_active: usize,
    pub sites_active: usize,
}

#[allow(clippy::too_many_arguments)]
pub fn content_stats(
    submissions: &[Submission],
    pages: &[Page],
    posts: &[Post],
    team: &[TeamMember],
    services: &[Service],
    testimonials: &[Testimonial],
    sites: &[Site],
) -> ContentStats {
    let submissions_total = submissions.len();
    let submissions_converted = submissions
        .iter()
        .filter(|s| s.status == SubmissionStatus::Converted)
        .count();
    let conversion_rate = if submissions_total == 0 {
        0.0
    } else {
        submissions_converted as f64 / submissions_total as f64 * 100.0
    };
    ContentStats {
        submissions_total,
        submissions_new: submissions
            .iter()
            .filter(|s| s.status == SubmissionStatus::New)
            .count(),
        submissions_converted,
        conversion_rate,
        pages_published: pages
            .iter()
            .filter(|p| p.status == PageStatus::Published)
            .count(),
        posts_published: posts
            .iter()
            .filter(|p| p.status == PostStatus::Published)
            .count(),
        posts_draft: posts.iter().filter(|p| p.status == PostStatus::Draft).count(),
        team_active: team.iter().filter(|m| m.is_active()).count(),
        services_active: services.iter().filter(|s| s.is_active()).count(),
        testimonials_active: testimonials.iter().filter(|t| t.is_active()).count(),
        sites_active: sites.iter().filter(|s| s.status == SiteStatus::Active).count(),
    }
}

/// Newest first, capped at `limit`. The sort is stable, so submissions
/// sharing a timestamp keep their stored order.
pub fn recent_submissions(submissions: &[Submission], limit: usize) -> Vec<Submission> {
    let mut out = submissions.to_vec();
    out.sort_by_key(|s| std::cmp::Reverse(s.submitted_at));
    out.truncate(limit);
    out
}

/// Date windows offered by the submissions quick-filter bar. Each resolves
/// to an inclusive lower cutoff relative to `now`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeWindow {
    Today,
    ThisWeek,
    ThisMonth,
    Last30Days,
}

impl TimeWindow {
    pub fn cutoff(&self, now: NaiveDateTime) -> NaiveDateTime {
        let midnight = now.date().and_time(NaiveTime::MIN);
        match self {
            TimeWindow::Today => midnight,
            TimeWindow::ThisWeek => {
                let back = i64::from(now.date().weekday().num_days_from_monday());
                midnight - Duration::days(back)
            }
            TimeWindow::ThisMonth => now
                .date()
                .with_day(1)
                .map(|d| d.and_time(NaiveTime::MIN))
                .unwrap_or(midnight),
            TimeWindow::Last30Days => midnight - Duration::days(30),
        }
    }
}

/// Submission list filters, ANDed together. `None` on a field means
/// "don't filter on it".
#[derive(Debug, Clone, Default)]
pub struct QuickFilter {
    pub window: Option<TimeWindow>,
    pub form_type: Option<String>,
    pub status: Option<SubmissionStatus>,
}

pub fn filter_submissions(
    submissions: &[Submission],
    filter: &QuickFilter,
    now: NaiveDateTime,
) -> Vec<Submission> {
    let cutoff = filter.window.map(|w| w.cutoff(now));
    submissions
        .iter()
        .filter(|s| cutoff.map_or(true, |c| s.submitted_at >= c))
        .filter(|s| {
            filter
                .form_type
                .as_ref()
                .map_or(true, |ft| s.form_type.eq_ignore_ascii_case(ft))
        })
        .filter(|s| filter.status.map_or(true, |st| s.status == st))
        .cloned()
        .collect()
}
