//! Sample records loaded into the directory at startup
//!
//! Six public professional profiles (the browse listing), one private
//! profile, one admin account, and four swap requests arranged so the
//! demo sign-in (sakshi@swapwise.in) sees two incoming pending requests
//! and two outgoing ones.

use crate::model::{Feedback, Profile, RequestStatus, SwapRequest};

/// Email of the account suggested on the sign-in screen
pub const DEMO_EMAIL: &str = "sakshi@swapwise.in";

/// Password shared by all seeded member accounts
pub const DEMO_PASSWORD: &str = "password123";

fn profile(
    id: &str,
    name: &str,
    email: &str,
    location: &str,
    availability: &str,
    offered: &[&str],
    wanted: &[&str],
) -> Profile {
    Profile {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        password: DEMO_PASSWORD.to_string(),
        location: location.to_string(),
        availability: availability.to_string(),
        skills_offered: offered.iter().map(|s| s.to_string()).collect(),
        skills_wanted: wanted.iter().map(|s| s.to_string()).collect(),
        is_public: true,
        is_banned: false,
        is_admin: false,
        feedback: Vec::new(),
    }
}

fn feedback(from: &str, rating: u8, comment: &str, when: &str) -> Feedback {
    Feedback {
        from_name: from.to_string(),
        rating,
        comment: comment.to_string(),
        when: when.to_string(),
    }
}

/// All seeded profiles, ids `u1`..`u8`
pub fn sample_profiles() -> Vec<Profile> {
    let mut sakshi = profile(
        "u1",
        "Sakshi",
        DEMO_EMAIL,
        "Mumbai, Maharashtra",
        "Weekends, Evenings",
        &["Python", "Machine Learning", "Django", "PostgreSQL", "AWS", "Docker"],
        &["Kubernetes", "Go", "Rust", "Blockchain Development", "Unity"],
    );
    sakshi.feedback = vec![
        feedback(
            "Yashpal",
            5,
            "Excellent Python and ML mentor, explained TensorFlow end to end.",
            "2 weeks ago",
        ),
        feedback(
            "Ayan",
            4,
            "Great Django walkthrough, learned clean architecture patterns.",
            "1 month ago",
        ),
        feedback(
            "Tina",
            5,
            "Patient teacher, the PostgreSQL sessions were gold.",
            "2 months ago",
        ),
    ];

    let mut yashpal = profile(
        "u2",
        "Yashpal",
        "yashpal@swapwise.in",
        "Bangalore, Karnataka",
        "Weekdays, Mornings",
        &["JavaScript", "TypeScript", "React", "Node.js", "GraphQL", "MongoDB"],
        &["Python", "Machine Learning", "Data Science", "TensorFlow"],
    );
    yashpal.feedback = vec![
        feedback(
            "Sakshi",
            5,
            "Amazing React and TypeScript guidance, very thorough.",
            "1 week ago",
        ),
        feedback("Lakshya", 5, "Node.js deep dive was exactly what I needed.", "3 weeks ago"),
        feedback("Ayan", 5, "GraphQL finally clicked after one session.", "1 month ago"),
        feedback("Tina", 4, "Solid JavaScript fundamentals, well structured.", "2 months ago"),
    ];

    let mut ayan = profile(
        "u3",
        "Ayan",
        "ayan@swapwise.in",
        "Delhi, NCR",
        "Weekends, Afternoons",
        &["UI/UX Design", "Figma", "Adobe Creative Suite", "Prototyping", "User Research"],
        &["React", "Vue.js", "JavaScript", "TypeScript", "Tailwind CSS"],
    );
    ayan.feedback = vec![
        feedback("Sakshi", 5, "Figma prototyping masterclass, loved it.", "2 weeks ago"),
        feedback(
            "Shobhita",
            4,
            "Design system advice that we still use daily.",
            "1 month ago",
        ),
        feedback("Yashpal", 5, "User research methods explained clearly.", "6 weeks ago"),
    ];

    let mut tina = profile(
        "u4",
        "Tina",
        "tina@swapwise.in",
        "Pune, Maharashtra",
        "Weekends, Mornings",
        &["Cybersecurity", "Penetration Testing", "Network Security", "Incident Response"],
        &["Cloud Security", "AI Security", "Blockchain Security"],
    );
    tina.feedback = vec![
        feedback(
            "Sakshi",
            5,
            "Solid security knowledge, learned secure coding practices.",
            "1 week ago",
        ),
        feedback("Yashpal", 5, "The pentest walkthrough was eye-opening.", "1 month ago"),
        feedback("Lakshya", 5, "Incident response drills worth every minute.", "2 months ago"),
        feedback("Ayan", 4, "Network security basics, clearly taught.", "3 months ago"),
    ];

    let mut shobhita = profile(
        "u5",
        "Shobhita",
        "shobhita@swapwise.in",
        "Chennai, Tamil Nadu",
        "Weekends, All Day",
        &["Unity", "C#", "Game Development", "3D Modeling", "Animation"],
        &["AI for Games", "Multiplayer Networking", "VR Development"],
    );
    shobhita.feedback = vec![
        feedback("Lakshya", 5, "Unity shaders demystified in an afternoon.", "3 weeks ago"),
        feedback("Ayan", 4, "Great 3D modeling intro for a beginner.", "2 months ago"),
    ];

    let mut lakshya = profile(
        "u6",
        "Lakshya",
        "lakshya@swapwise.in",
        "Gurgaon, Haryana",
        "Weekdays, Afternoons",
        &["Data Science", "Python", "R", "Statistical Analysis", "Tableau", "Power BI"],
        &["MLOps", "Apache Airflow", "Kubernetes", "Docker"],
    );
    lakshya.feedback = vec![
        feedback("Tina", 5, "Pandas tricks that halved my analysis time.", "1 week ago"),
        feedback("Sakshi", 5, "Tableau dashboards made simple.", "1 month ago"),
        feedback("Shobhita", 4, "Clear stats refresher, good exercises.", "2 months ago"),
    ];

    // Private profile: signs in fine but stays out of the browse listing
    let mut akshay = profile(
        "u7",
        "Akshay",
        "akshay@swapwise.in",
        "Hyderabad, Telangana",
        "Weekdays, Evenings",
        &["Java", "Spring Boot", "Microservices", "Apache Kafka", "Redis", "MySQL"],
        &["Go", "Rust", "Kubernetes", "Istio"],
    );
    akshay.is_public = false;

    let mut admin = profile(
        "u8",
        "Platform Admin",
        "admin@swapwise.in",
        "Remote",
        "Weekdays",
        &["Platform Management", "User Support", "System Administration"],
        &[],
    );
    admin.password = "admin123".to_string();
    admin.is_admin = true;

    vec![sakshi, yashpal, ayan, tina, shobhita, lakshya, akshay, admin]
}

/// Seeded swap requests, oldest first (ids `r1`..`r4`)
pub fn sample_requests() -> Vec<SwapRequest> {
    vec![
        SwapRequest {
            id: "r1".to_string(),
            requester_id: "u1".to_string(),
            recipient_id: "u6".to_string(),
            offered_skill: "Python".to_string(),
            requested_skill: "Data Science".to_string(),
            message: "Hello Lakshya! Interested in trading Python tips for data science fundamentals?"
                .to_string(),
            status: RequestStatus::Pending,
            created_at: "5 days ago".to_string(),
        },
        SwapRequest {
            id: "r2".to_string(),
            requester_id: "u1".to_string(),
            recipient_id: "u4".to_string(),
            offered_skill: "Django".to_string(),
            requested_skill: "Cybersecurity".to_string(),
            message: "Hi Tina! I can teach you Django web development in exchange for cybersecurity basics."
                .to_string(),
            status: RequestStatus::Accepted,
            created_at: "3 days ago".to_string(),
        },
        SwapRequest {
            id: "r3".to_string(),
            requester_id: "u3".to_string(),
            recipient_id: "u1".to_string(),
            offered_skill: "UI/UX Design".to_string(),
            requested_skill: "Machine Learning".to_string(),
            message: "Hello Sakshi! Would you be interested in learning UI/UX design? I need help understanding ML concepts."
                .to_string(),
            status: RequestStatus::Pending,
            created_at: "1 day ago".to_string(),
        },
        SwapRequest {
            id: "r4".to_string(),
            requester_id: "u2".to_string(),
            recipient_id: "u1".to_string(),
            offered_skill: "JavaScript".to_string(),
            requested_skill: "Python".to_string(),
            message: "Hi Sakshi! I'd love to learn Python from you. I can teach you modern JavaScript in return!"
                .to_string(),
            status: RequestStatus::Pending,
            created_at: "2 hours ago".to_string(),
        },
    ]
}
