//! Seed catalog
//!
//! The activity set is fixed at process start. Activities are never created
//! or deleted at runtime; only their rosters change.

use crate::types::{Activity, Catalog};

fn activity(
    description: &str,
    schedule: &str,
    max_participants: usize,
    participants: &[&str],
) -> Activity {
    Activity {
        description: description.to_string(),
        schedule: schedule.to_string(),
        max_participants,
        participants: participants.iter().map(|s| s.to_string()).collect(),
    }
}

/// The default activity catalog for Mergington High School.
pub fn default_catalog() -> Catalog {
    let mut catalog = Catalog::new();

    catalog.insert(
        "Basketball".to_string(),
        activity(
            "Team sport focusing on basketball skills and competitive play",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            15,
            &["alex@mergington.edu"],
        ),
    );
    catalog.insert(
        "Tennis Club".to_string(),
        activity(
            "Develop tennis techniques and participate in friendly matches",
            "Tuesdays and Thursdays, 3:30 PM - 5:00 PM",
            10,
            &["james@mergington.edu"],
        ),
    );
    catalog.insert(
        "Art Studio".to_string(),
        activity(
            "Explore painting, drawing, and other visual art forms",
            "Wednesdays, 3:30 PM - 5:00 PM",
            18,
            &["isabella@mergington.edu", "grace@mergington.edu"],
        ),
    );
    catalog.insert(
        "Music Band".to_string(),
        activity(
            "Join the school band and perform in concerts",
            "Thursdays, 4:00 PM - 5:30 PM",
            25,
            &["lucas@mergington.edu"],
        ),
    );
    catalog.insert(
        "Debate Club".to_string(),
        activity(
            "Develop argumentation and public speaking skills",
            "Mondays, 3:30 PM - 5:00 PM",
            16,
            &["sarah@mergington.edu", "aaron@mergington.edu"],
        ),
    );
    catalog.insert(
        "Science Lab".to_string(),
        activity(
            "Conduct experiments and explore scientific concepts",
            "Fridays, 3:30 PM - 5:00 PM",
            20,
            &["noah@mergington.edu"],
        ),
    );
    catalog.insert(
        "Chess Club".to_string(),
        activity(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
    );
    catalog.insert(
        "Programming Class".to_string(),
        activity(
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
    );
    catalog.insert(
        "Gym Class".to_string(),
        activity(
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
    );

    catalog
}
