//! Demo datasets the admin boots with before any real backend is wired in.
//! Ids are fixed so screens and tests can reference records directly.

use chrono::{NaiveDate, NaiveDateTime};

use crate::auth::Role;
use crate::models::page::{Page, PageStatus};
use crate::models::post::{Post, PostStatus};
use crate::models::service::Service;
use crate::models::site::{Site, SiteStatus};
use crate::models::submission::{Submission, SubmissionStatus};
use crate::models::team::TeamMember;
use crate::models::testimonial::Testimonial;
use crate::models::user::{AdminUser, UserStatus};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d)
        .and_hms_opt(h, min, 0)
        .unwrap_or_default()
}

fn s(value: &str) -> String {
    value.to_string()
}

pub fn team_members() -> Vec<TeamMember> {
    vec![
        TeamMember {
            id: s("1"),
            name: s("John Smith"),
            position: s("CEO & Founder"),
            bio: s("John has over 15 years of experience in technology and business development. He founded the company with a vision to deliver exceptional services."),
            photo: None,
            display_order: 1,
            is_active: true,
        },
        TeamMember {
            id: s("2"),
            name: s("Sarah Johnson"),
            position: s("Head of Operations"),
            bio: s("Sarah leads our operations team and ensures smooth delivery of all projects. She brings 12 years of operational excellence."),
            photo: None,
            display_order: 2,
            is_active: true,
        },
        TeamMember {
            id: s("3"),
            name: s("Mike Wilson"),
            position: s("Lead Developer"),
            bio: s("Mike is our technical lead with expertise in modern web technologies. He has been with us for 8 years."),
            photo: None,
            display_order: 3,
            is_active: true,
        },
        TeamMember {
            id: s("4"),
            name: s("Emma Davis"),
            position: s("Marketing Director"),
            bio: s("Emma drives our marketing initiatives and brand strategy. She has a proven track record in digital marketing."),
            photo: None,
            display_order: 4,
            is_active: false,
        },
    ]
}

pub fn services() -> Vec<Service> {
    vec![
        Service {
            id: s("1"),
            name: s("Web Development"),
            description: s("Custom website development using modern technologies and frameworks."),
            short_description: s("Build custom websites and web applications"),
            price: s("Starting at $2,500"),
            features: vec![
                s("Responsive Design"),
                s("SEO Optimized"),
                s("Fast Loading"),
                s("Mobile Friendly"),
            ],
            category: s("Development"),
            display_order: 1,
            is_active: true,
        },
        Service {
            id: s("2"),
            name: s("Digital Marketing"),
            description: s("Comprehensive digital marketing strategies to grow your online presence."),
            short_description: s("Boost your online visibility and reach"),
            price: s("Starting at $1,200/month"),
            features: vec![s("SEO"), s("Social Media"), s("PPC Campaigns"), s("Analytics")],
            category: s("Marketing"),
            display_order: 2,
            is_active: true,
        },
        Service {
            id: s("3"),
            name: s("Branding & Design"),
            description: s("Professional branding and graphic design services for your business."),
            short_description: s("Create a memorable brand identity"),
            price: s("Starting at $800"),
            features: vec![
                s("Logo Design"),
                s("Brand Guidelines"),
                s("Marketing Materials"),
                s("UI/UX Design"),
            ],
            category: s("Design"),
            display_order: 3,
            is_active: true,
        },
        Service {
            id: s("4"),
            name: s("Consulting"),
            description: s("Strategic business consulting to help you make informed decisions."),
            short_description: s("Expert business strategy guidance"),
            price: s("$150/hour"),
            features: vec![
                s("Strategy Planning"),
                s("Market Analysis"),
                s("Growth Planning"),
                s("Risk Assessment"),
            ],
            category: s("Consulting"),
            display_order: 4,
            is_active: false,
        },
    ]
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            id: s("1"),
            client_name: s("John Smith"),
            company: s("Tech Solutions Inc."),
            quote: s("Outstanding service and support. The team went above and beyond to deliver exactly what we needed."),
            rating: 5,
            photo: None,
            display_order: 1,
            is_active: true,
        },
        Testimonial {
            id: s("2"),
            client_name: s("Sarah Johnson"),
            company: s("Creative Agency"),
            quote: s("Professional, reliable, and innovative. Highly recommend their services to anyone looking for quality work."),
            rating: 5,
            photo: None,
            display_order: 2,
            is_active: true,
        },
        Testimonial {
            id: s("3"),
            client_name: s("Mike Wilson"),
            company: s("Startup Co."),
            quote: s("Excellent communication throughout the project. The final result exceeded our expectations."),
            rating: 4,
            photo: None,
            display_order: 3,
            is_active: false,
        },
    ]
}

pub fn posts() -> Vec<Post> {
    vec![
        Post {
            id: s("1"),
            title: s("How to Improve Your Business Operations"),
            content: s("Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua..."),
            excerpt: s("Learn the best practices for streamlining your business operations and increasing efficiency."),
            featured_image: None,
            publish_date: date(2025, 1, 15),
            status: PostStatus::Published,
            meta_title: s("Improve Business Operations - Tips & Strategies"),
            meta_description: s("Discover proven strategies to improve your business operations and boost productivity."),
        },
        Post {
            id: s("2"),
            title: s("The Future of Digital Marketing"),
            content: s("Digital marketing continues to evolve rapidly. Here are the trends to watch in 2025..."),
            excerpt: s("Explore the latest trends and technologies shaping the future of digital marketing."),
            featured_image: None,
            publish_date: date(2025, 1, 12),
            status: PostStatus::Published,
            meta_title: s("Future of Digital Marketing 2025"),
            meta_description: s("Stay ahead with the latest digital marketing trends and predictions for 2025."),
        },
        Post {
            id: s("3"),
            title: s("Customer Service Excellence"),
            content: s("Draft content about providing exceptional customer service..."),
            excerpt: s("Tips for delivering outstanding customer service that builds loyalty."),
            featured_image: None,
            publish_date: date(2025, 1, 20),
            status: PostStatus::Draft,
            meta_title: s("Customer Service Excellence Guide"),
            meta_description: s("Master the art of customer service with these proven strategies."),
        },
    ]
}

pub fn pages() -> Vec<Page> {
    fn page(
        id: &str,
        title: &str,
        url: &str,
        status: PageStatus,
        modified: NaiveDateTime,
    ) -> Page {
        Page {
            id: id.to_string(),
            title: title.to_string(),
            url: url.to_string(),
            content: String::new(),
            meta_title: title.to_string(),
            meta_description: String::new(),
            featured_image: None,
            is_home: url == "/",
            status,
            last_modified: modified,
        }
    }
    vec![
        page("homepage", "Homepage", "/", PageStatus::Published, datetime(2025, 1, 15, 14, 30)),
        page("about", "About Us", "/about", PageStatus::Published, datetime(2025, 1, 14, 10, 15)),
        page("services", "Services", "/services", PageStatus::Published, datetime(2025, 1, 13, 16, 45)),
        page("contact", "Contact Us", "/contact", PageStatus::Published, datetime(2025, 1, 12, 9, 20)),
        page("privacy", "Privacy Policy", "/privacy", PageStatus::Published, datetime(2025, 1, 10, 11, 30)),
        page("terms", "Terms & Conditions", "/terms", PageStatus::Draft, datetime(2025, 1, 8, 14, 0)),
    ]
}

pub fn submissions() -> Vec<Submission> {
    vec![
        Submission {
            id: s("1"),
            name: s("John Smith"),
            email: s("john@example.com"),
            phone: s("+1 (555) 123-4567"),
            form_type: s("Contact"),
            message: s("I am interested in your services and would like to schedule a consultation."),
            source: s("Contact Page"),
            submitted_at: datetime(2025, 1, 15, 14, 30),
            status: SubmissionStatus::New,
        },
        Submission {
            id: s("2"),
            name: s("Sarah Johnson"),
            email: s("sarah@company.com"),
            phone: s("+1 (555) 987-6543"),
            form_type: s("Quote Request"),
            message: s("Please provide a quote for your premium package."),
            source: s("Services Page"),
            submitted_at: datetime(2025, 1, 15, 13, 15),
            status: SubmissionStatus::Read,
        },
        Submission {
            id: s("3"),
            name: s("Mike Wilson"),
            email: s("mike.wilson@email.com"),
            phone: s("+1 (555) 456-7890"),
            form_type: s("Newsletter"),
            message: s("Subscribe to newsletter"),
            source: s("Homepage"),
            submitted_at: datetime(2025, 1, 15, 11, 45),
            status: SubmissionStatus::Converted,
        },
        Submission {
            id: s("4"),
            name: s("Emma Davis"),
            email: s("emma@startup.io"),
            phone: s("+1 (555) 234-5678"),
            form_type: s("Contact"),
            message: s("Looking for partnership opportunities."),
            source: s("About Page"),
            submitted_at: datetime(2025, 1, 15, 10, 20),
            status: SubmissionStatus::New,
        },
        Submission {
            id: s("5"),
            name: s("David Brown"),
            email: s("dbrown@corp.com"),
            phone: s("+1 (555) 345-6789"),
            form_type: s("Quote Request"),
            message: s("Need pricing information for enterprise solution."),
            source: s("Contact Page"),
            submitted_at: datetime(2025, 1, 15, 9, 30),
            status: SubmissionStatus::Read,
        },
    ]
}

pub fn users() -> Vec<AdminUser> {
    vec![
        AdminUser {
            id: s("1"),
            name: s("John Admin"),
            email: s("admin@example.com"),
            password: String::new(),
            role: Role::SuperAdmin,
            status: UserStatus::Active,
            last_login: Some(datetime(2025, 1, 15, 14, 30)),
            sites_access: vec![s("all")],
        },
        AdminUser {
            id: s("2"),
            name: s("Sarah Editor"),
            email: s("sarah@example.com"),
            password: String::new(),
            role: Role::Admin,
            status: UserStatus::Active,
            last_login: Some(datetime(2025, 1, 15, 10, 20)),
            sites_access: vec![s("main-site")],
        },
        AdminUser {
            id: s("3"),
            name: s("Mike Content"),
            email: s("mike@example.com"),
            password: String::new(),
            role: Role::Editor,
            status: UserStatus::Active,
            last_login: Some(datetime(2025, 1, 14, 16, 45)),
            sites_access: vec![s("main-site")],
        },
        AdminUser {
            id: s("4"),
            name: s("Emma Designer"),
            email: s("emma@example.com"),
            password: String::new(),
            role: Role::Editor,
            status: UserStatus::Inactive,
            last_login: Some(datetime(2025, 1, 10, 9, 15)),
            sites_access: vec![s("design-site")],
        },
    ]
}

pub fn sites() -> Vec<Site> {
    vec![
        Site {
            id: s("1"),
            name: s("Corporate Website"),
            domain: s("mycompany.com"),
            description: s("Main corporate website with company information and services"),
            status: SiteStatus::Active,
            is_default: true,
            created_at: date(2024, 1, 15),
            last_modified: date(2024, 9, 10),
            pages: 12,
            visits: 5420,
            leads: 89,
        },
        Site {
            id: s("2"),
            name: s("Product Landing"),
            domain: s("product.mycompany.com"),
            description: s("Dedicated landing page for our flagship product"),
            status: SiteStatus::Active,
            is_default: false,
            created_at: date(2024, 3, 20),
            last_modified: date(2024, 9, 12),
            pages: 6,
            visits: 2180,
            leads: 45,
        },
        Site {
            id: s("3"),
            name: s("Events Portal"),
            domain: s("events.mycompany.com"),
            description: s("Event registration and information portal"),
            status: SiteStatus::Maintenance,
            is_default: false,
            created_at: date(2024, 6, 10),
            last_modified: date(2024, 8, 15),
            pages: 8,
            visits: 890,
            leads: 23,
        },
    ]
}
