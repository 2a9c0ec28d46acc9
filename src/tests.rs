#![cfg(test)]

use std::collections::HashMap;
use std::rc::Rc;

use pretty_assertions::assert_eq;

use crate::auth::{role_for_email, Identity, Role};
use crate::dashboard::{
    content_stats, filter_submissions, recent_submissions, QuickFilter, TimeWindow,
};
use crate::error::AdminError;
use crate::form::{EntityForm, FormMode};
use crate::models::page::PageForm;
use crate::models::post::{self, PostStatus};
use crate::models::service::ServiceForm;
use crate::models::site::{self, SiteForm, SiteStatus};
use crate::models::submission::{self, SubmissionStatus};
use crate::models::team::TeamMemberForm;
use crate::models::testimonial::TestimonialForm;
use crate::models::user::{self, AdminUser, UserForm, UserStatus};
use crate::notify::{MemoryNotifier, Notifier};
use crate::project::{active_ordered, project, project_ordered, Criteria};
use crate::screen::Screen;
use crate::seed;
use crate::settings::Settings;
use crate::store::Collection;

fn current_admin() -> Identity {
    Identity {
        id: "1".to_string(),
        display_name: "John Admin".to_string(),
        email: "admin@example.com".to_string(),
        role: Role::SuperAdmin,
    }
}

fn team_screen() -> (Screen<TeamMemberForm>, Rc<MemoryNotifier>) {
    let _ = env_logger::builder().is_test(true).try_init();
    let notifier = Rc::new(MemoryNotifier::new());
    let screen = Screen::new("Team member", seed::team_members())
        .with_notifier(Rc::clone(&notifier) as Rc<dyn Notifier>);
    (screen, notifier)
}

// ═══════════════════════════════════════════════════════════
// Screens: create / edit / cancel
// ═══════════════════════════════════════════════════════════

#[test]
fn create_appends_with_fresh_id_and_next_order() {
    let (mut screen, notifier) = team_screen();
    let before = screen.collection().records().to_vec();

    screen.open_create();
    assert_eq!(screen.form().mode(), &FormMode::Create);
    assert_eq!(screen.form().buffer().map(|b| b.display_order), Some(5));

    screen.edit(|form| {
        form.name = "Lisa Chen".to_string();
        form.position = "Designer".to_string();
    });
    let id = screen.commit().unwrap();

    assert_eq!(id, "5");
    assert_eq!(screen.collection().len(), before.len() + 1);
    // priors are untouched
    assert_eq!(&screen.collection().records()[..before.len()], &before[..]);
    assert!(!screen.form().is_open());
    assert_eq!(
        notifier.last().map(|n| n.message().to_string()),
        Some("Team member added successfully".to_string())
    );
}

#[test]
fn create_with_invalid_buffer_keeps_form_open() {
    let (mut screen, notifier) = team_screen();
    screen.open_create();
    screen.edit(|form| form.name = "No Position".to_string());

    let err = screen.commit().unwrap_err();
    assert!(matches!(err, AdminError::Validation { .. }));
    assert_eq!(screen.collection().len(), 4);
    assert!(screen.form().is_open());
    assert!(!notifier.last().map(|n| n.is_success()).unwrap_or(true));
}

#[test]
fn edit_commit_patches_only_buffered_fields() {
    let (mut screen, _) = team_screen();
    screen.open_edit("2").unwrap();
    assert_eq!(screen.form().mode(), &FormMode::Edit("2".to_string()));

    screen.edit(|form| form.position = "COO".to_string());
    // the store is untouched while the buffer is open
    assert_eq!(screen.collection().get("2").unwrap().position, "Head of Operations");

    screen.commit().unwrap();
    let member = screen.collection().get("2").unwrap();
    assert_eq!(member.position, "COO");
    assert_eq!(member.name, "Sarah Johnson");
    assert_eq!(screen.collection().len(), 4);
}

#[test]
fn cancel_discards_buffer_without_touching_store() {
    let (mut screen, _) = team_screen();
    let version = screen.collection().version();
    screen.open_edit("1").unwrap();
    screen.edit(|form| form.name = "Changed".to_string());
    screen.cancel();

    assert!(!screen.form().is_open());
    assert_eq!(screen.collection().version(), version);
    assert_eq!(screen.collection().get("1").unwrap().name, "John Smith");
}

#[test]
fn open_edit_unknown_id_notifies_not_found() {
    let (mut screen, notifier) = team_screen();
    assert!(screen.open_edit("99").unwrap_err().is_not_found());
    assert!(!screen.form().is_open());
    assert!(!notifier.last().map(|n| n.is_success()).unwrap_or(true));
}

#[test]
fn service_features_drop_blank_entries_on_commit() {
    let notifier = Rc::new(MemoryNotifier::new());
    let mut screen: Screen<ServiceForm> =
        Screen::new("Service", seed::services())
            .with_notifier(Rc::clone(&notifier) as Rc<dyn Notifier>);

    screen.open_edit("1").unwrap();
    screen.edit(|form| {
        form.features.push(String::new());
        form.features.push("CMS Integration".to_string());
        form.features.push("   ".to_string());
    });
    screen.commit().unwrap();

    let service = screen.collection().get("1").unwrap();
    assert_eq!(service.features.len(), 5);
    assert_eq!(service.features[4], "CMS Integration");
}

#[test]
fn testimonial_rating_out_of_range_is_rejected() {
    let mut screen: Screen<TestimonialForm> = Screen::new("Testimonial", seed::testimonials());
    screen.open_create();
    screen.edit(|form| {
        form.client_name = "Ann Lee".to_string();
        form.rating = 6;
    });
    assert!(matches!(screen.commit(), Err(AdminError::Validation { .. })));
}

#[test]
fn page_url_must_be_rooted() {
    let mut screen: Screen<PageForm> = Screen::new("Page", seed::pages());
    screen.open_create();
    screen.edit(|form| {
        form.title = "Careers".to_string();
        form.url = "careers".to_string();
    });
    assert!(screen.commit().is_err());

    screen.edit(|form| form.url = "/careers".to_string());
    screen.commit().unwrap();
}

// ═══════════════════════════════════════════════════════════
// Reorder + toggle
// ═══════════════════════════════════════════════════════════

#[test]
fn move_down_first_swaps_ranks_and_projection_order() {
    let (mut screen, notifier) = team_screen();
    assert!(screen.move_down("1").unwrap());

    let orders: HashMap<&str, i64> = screen
        .collection()
        .records()
        .iter()
        .map(|m| (m.id.as_str(), m.display_order))
        .collect();
    assert_eq!(orders["1"], 2);
    assert_eq!(orders["2"], 1);
    assert_eq!(orders["3"], 3);

    let visible: Vec<String> = screen
        .visible_ordered()
        .iter()
        .map(|m| m.id.clone())
        .collect();
    assert_eq!(visible, vec!["2", "1", "3", "4"]);
    assert_eq!(
        notifier.last().map(|n| n.message().to_string()),
        Some("Order updated".to_string())
    );
}

#[test]
fn reorder_at_boundary_is_silent_noop() {
    let (mut screen, notifier) = team_screen();
    let version = screen.collection().version();
    assert!(!screen.move_up("1").unwrap());
    assert!(!screen.move_down("4").unwrap());
    assert_eq!(screen.collection().version(), version);
    assert!(notifier.notices().is_empty());
}

#[test]
fn toggle_hides_from_public_view_but_keeps_record() {
    let (mut screen, _) = team_screen();
    assert!(!screen.toggle_active("2").unwrap());

    let public = active_ordered(screen.collection().records());
    assert!(public.iter().all(|m| m.id != "2"));
    assert_eq!(screen.collection().len(), 4);

    assert!(screen.toggle_active("2").unwrap());
    assert_eq!(active_ordered(screen.collection().records()).len(), 3);
}

// ═══════════════════════════════════════════════════════════
// Projection
// ═══════════════════════════════════════════════════════════

#[test]
fn projection_ands_status_and_query() {
    let posts = seed::posts();
    let mut criteria = Criteria::with_status("published");
    assert_eq!(project(&posts, &criteria).len(), 2);

    criteria.query = Some("marketing".to_string());
    let hits = project(&posts, &criteria);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "2");

    // draft post matching the query is excluded by status
    criteria.query = Some("customer".to_string());
    assert!(project(&posts, &criteria).is_empty());
}

#[test]
fn projection_query_is_case_insensitive_substring() {
    let team = seed::team_members();
    let hits = project(&team, &Criteria::with_query("SARA"));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "2");

    // matches position as well as name
    assert_eq!(project(&team, &Criteria::with_query("developer")).len(), 1);
}

#[test]
fn projection_is_pure_and_repeatable() {
    let team = seed::team_members();
    let snapshot = team.clone();
    let criteria = Criteria::with_query("john");

    let first = project(&team, &criteria);
    let second = project(&team, &criteria);
    assert_eq!(first, second);
    assert_eq!(team, snapshot);
}

#[test]
fn ordered_projection_sorts_by_rank_not_position() {
    let mut team = seed::team_members();
    team.reverse();
    let ordered = project_ordered(&team, &Criteria::all());
    let ids: Vec<&str> = ordered.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4"]);
}

// ═══════════════════════════════════════════════════════════
// Users
// ═══════════════════════════════════════════════════════════

#[test]
fn blank_password_on_edit_preserves_stored_value() {
    let mut users = Collection::from_records(seed::users());
    users.update_with("2", |u| u.password = "hunter2".to_string()).unwrap();

    let stored = users.get("2").unwrap().clone();
    let mut form = UserForm::from_record(&stored);
    assert_eq!(form.password, "");
    form.name = "Sarah E.".to_string();
    users.update_with("2", |u| form.apply_to(u)).unwrap();

    let after = users.get("2").unwrap();
    assert_eq!(after.name, "Sarah E.");
    assert_eq!(after.password, "hunter2");
}

#[test]
fn nonblank_password_on_edit_overwrites() {
    let mut users = Collection::from_records(seed::users());
    let mut form = UserForm::from_record(users.get("3").unwrap());
    form.password = "new-secret".to_string();
    users.update_with("3", |u| form.apply_to(u)).unwrap();
    assert_eq!(users.get("3").unwrap().password, "new-secret");
}

#[test]
fn cannot_delete_or_deactivate_own_account() {
    let mut users = Collection::from_records(seed::users());
    let me = current_admin();

    assert!(user::delete_user(&mut users, &me, "1").unwrap_err().is_protected());
    assert!(user::toggle_user_status(&mut users, &me, "1").unwrap_err().is_protected());
    assert_eq!(users.len(), 4);
    assert_eq!(users.get("1").unwrap().status, UserStatus::Active);
}

#[test]
fn deleting_another_account_works() {
    let mut users = Collection::from_records(seed::users());
    let me = current_admin();

    let removed = user::delete_user(&mut users, &me, "4").unwrap();
    assert_eq!(removed.name, "Emma Designer");
    assert_eq!(users.len(), 3);

    assert_eq!(
        user::toggle_user_status(&mut users, &me, "3").unwrap(),
        UserStatus::Inactive
    );
}

#[test]
fn role_predicates_and_email_mapping() {
    assert!(Role::SuperAdmin.can_manage_users());
    assert!(!Role::Admin.can_manage_users());
    assert!(!Role::Editor.can_manage_sites());
    assert!(Role::Editor.can_edit_content());

    assert_eq!(role_for_email("admin@example.com"), Role::SuperAdmin);
    assert_eq!(role_for_email("manager@example.com"), Role::Admin);
    assert_eq!(role_for_email("jane@example.com"), Role::Editor);

    assert_eq!(Role::parse("super_admin").unwrap(), Role::SuperAdmin);
    assert!(Role::parse("owner").is_err());
}

#[test]
fn site_access_honors_the_all_grant() {
    let users = seed::users();
    let admin: &AdminUser = &users[0];
    assert!(admin.has_site_access("design-site"));
    assert!(users[1].has_site_access("main-site"));
    assert!(!users[1].has_site_access("design-site"));
}

// ═══════════════════════════════════════════════════════════
// Sites
// ═══════════════════════════════════════════════════════════

#[test]
fn default_site_cannot_be_deleted() {
    let mut sites = Collection::from_records(seed::sites());
    let err = sites.remove("1").unwrap_err();
    assert!(err.is_protected());
    assert_eq!(sites.len(), 3);

    let removed = sites.remove("3").unwrap();
    assert_eq!(removed.name, "Events Portal");
    assert_eq!(sites.len(), 2);
}

#[test]
fn set_default_is_exclusive() {
    let mut sites = Collection::from_records(seed::sites());
    site::set_default(&mut sites, "2").unwrap();

    let defaults: Vec<&str> = sites
        .records()
        .iter()
        .filter(|s| s.is_default)
        .map(|s| s.id.as_str())
        .collect();
    assert_eq!(defaults, vec!["2"]);

    // the old default is now deletable, the new one is not
    assert!(sites.remove("2").unwrap_err().is_protected());
    assert!(sites.remove("1").is_ok());

    assert!(site::set_default(&mut sites, "99").unwrap_err().is_not_found());
}

#[test]
fn change_status_stamps_last_modified() {
    let mut sites = Collection::from_records(seed::sites());
    site::change_status(&mut sites, "3", SiteStatus::Active).unwrap();
    let events = sites.get("3").unwrap();
    assert_eq!(events.status, SiteStatus::Active);
    assert!(events.last_modified > chrono::NaiveDate::from_ymd_opt(2024, 8, 15).unwrap());
}

#[test]
fn site_configure_dialog_leaves_status_alone() {
    let mut sites = Collection::from_records(seed::sites());
    let mut form = SiteForm::from_record(sites.get("3").unwrap());
    form.name = "Events Hub".to_string();
    sites.update_with("3", |s| form.apply_to(s)).unwrap();

    let after = sites.get("3").unwrap();
    assert_eq!(after.name, "Events Hub");
    assert_eq!(after.status, SiteStatus::Maintenance);
}

// ═══════════════════════════════════════════════════════════
// Posts + pages + submissions
// ═══════════════════════════════════════════════════════════

#[test]
fn post_quick_status_change_bypasses_form() {
    let mut posts = Collection::from_records(seed::posts());
    post::set_status(&mut posts, "3", PostStatus::Published).unwrap();
    assert_eq!(posts.get("3").unwrap().status, PostStatus::Published);
    assert!(post::set_status(&mut posts, "99", PostStatus::Draft).unwrap_err().is_not_found());
}

#[test]
fn home_page_cannot_be_deleted() {
    let mut pages = Collection::from_records(seed::pages());
    assert!(pages.remove("homepage").unwrap_err().is_protected());
    assert!(pages.remove("terms").is_ok());
}

#[test]
fn submission_advance_walks_forward_only() {
    let mut subs = Collection::from_records(seed::submissions());

    assert_eq!(submission::advance_status(&mut subs, "1").unwrap(), SubmissionStatus::Read);
    assert_eq!(
        submission::advance_status(&mut subs, "1").unwrap(),
        SubmissionStatus::Converted
    );
    assert_eq!(
        submission::advance_status(&mut subs, "1").unwrap(),
        SubmissionStatus::Converted
    );

    submission::set_status(&mut subs, "3", SubmissionStatus::New).unwrap();
    assert_eq!(subs.get("3").unwrap().status, SubmissionStatus::New);
}

// ═══════════════════════════════════════════════════════════
// Settings
// ═══════════════════════════════════════════════════════════

#[test]
fn defaults_cover_all_three_groups() {
    let settings = Settings::with_defaults();
    assert_eq!(settings.get_or("general_site_name", ""), "CMS Dashboard");
    assert_eq!(settings.get_i64("security_session_timeout_minutes"), 60);
    assert!(settings.get_bool("email_use_ssl"));
    assert!(!settings.get_bool("security_require_two_factor"));
    assert_eq!(settings.get_group("email_").len(), 7);
}

#[test]
fn blank_secret_in_batch_save_keeps_stored_value() {
    let mut settings = Settings::with_defaults();
    settings.set("email_smtp_password", "s3cret");

    let mut tab = HashMap::new();
    tab.insert("email_smtp_host".to_string(), "mail.example.com".to_string());
    tab.insert("email_smtp_password".to_string(), String::new());
    settings.set_many(&tab);

    assert_eq!(settings.get_or("email_smtp_host", ""), "mail.example.com");
    assert_eq!(settings.get_or("email_smtp_password", ""), "s3cret");

    // a blank non-secret value does overwrite
    let mut tab = HashMap::new();
    tab.insert("email_from_name".to_string(), String::new());
    settings.set_many(&tab);
    assert_eq!(settings.get_or("email_from_name", "x"), "");
}

#[test]
fn collection_export_is_valid_json() {
    let team = Collection::from_records(seed::team_members());
    let raw = team.export_json().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed.as_array().map(|a| a.len()), Some(4));
    assert_eq!(parsed[0]["name"], "John Smith");
}

#[test]
fn settings_survive_a_json_round_trip() {
    let mut settings = Settings::with_defaults();
    settings.set("general_site_name", "Acme Admin");

    let raw = settings.to_json().unwrap();
    let restored = Settings::from_json(&raw).unwrap();
    assert_eq!(restored, settings);
}

// ═══════════════════════════════════════════════════════════
// Dashboard
// ═══════════════════════════════════════════════════════════

#[test]
fn stats_count_the_seed_data() {
    let stats = content_stats(
        &seed::submissions(),
        &seed::pages(),
        &seed::posts(),
        &seed::team_members(),
        &seed::services(),
        &seed::testimonials(),
        &seed::sites(),
    );
    assert_eq!(stats.submissions_total, 5);
    assert_eq!(stats.submissions_new, 2);
    assert_eq!(stats.submissions_converted, 1);
    assert_eq!(stats.conversion_rate, 20.0);
    assert_eq!(stats.pages_published, 5);
    assert_eq!(stats.posts_published, 2);
    assert_eq!(stats.posts_draft, 1);
    assert_eq!(stats.team_active, 3);
    assert_eq!(stats.services_active, 3);
    assert_eq!(stats.testimonials_active, 2);
    assert_eq!(stats.sites_active, 2);
}

#[test]
fn empty_collections_report_zero_conversion() {
    let stats = content_stats(&[], &[], &[], &[], &[], &[], &[]);
    assert_eq!(stats.conversion_rate, 0.0);
    assert_eq!(stats.submissions_total, 0);
}

#[test]
fn recent_submissions_newest_first_and_capped() {
    let recent = recent_submissions(&seed::submissions(), 3);
    let ids: Vec<&str> = recent.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
}

#[test]
fn quick_filter_combines_window_type_and_status() {
    let subs = seed::submissions();
    let now = chrono::NaiveDate::from_ymd_opt(2025, 1, 15)
        .unwrap()
        .and_hms_opt(18, 0, 0)
        .unwrap();

    let today = QuickFilter { window: Some(TimeWindow::Today), ..Default::default() };
    assert_eq!(filter_submissions(&subs, &today, now).len(), 5);

    let quotes = QuickFilter {
        form_type: Some("quote request".to_string()),
        status: Some(SubmissionStatus::Read),
        ..Default::default()
    };
    let hits = filter_submissions(&subs, &quotes, now);
    let ids: Vec<&str> = hits.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "5"]);

    let next_week = chrono::NaiveDate::from_ymd_opt(2025, 1, 22)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    assert!(filter_submissions(&subs, &today, next_week).is_empty());
}

#[test]
fn time_windows_resolve_against_now() {
    let now = chrono::NaiveDate::from_ymd_opt(2025, 1, 15)
        .unwrap()
        .and_hms_opt(18, 30, 0)
        .unwrap();

    let midnight = chrono::NaiveDate::from_ymd_opt(2025, 1, 15)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    assert_eq!(TimeWindow::Today.cutoff(now), midnight);

    // 2025-01-15 is a Wednesday
    assert_eq!(
        TimeWindow::ThisWeek.cutoff(now).date(),
        chrono::NaiveDate::from_ymd_opt(2025, 1, 13).unwrap()
    );
    assert_eq!(
        TimeWindow::ThisMonth.cutoff(now).date(),
        chrono::NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    );
    assert_eq!(
        TimeWindow::Last30Days.cutoff(now).date(),
        chrono::NaiveDate::from_ymd_opt(2024, 12, 16).unwrap()
    );
}
