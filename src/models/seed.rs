use super::Activity;

/// Activities the registry starts with on every process start.
pub fn seed_activities() -> Vec<Activity> {
    vec![
        Activity::new(
            "Soccer",
            "Competitive soccer team and training",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            18,
            &["alex@mergington.edu"],
        ),
        Activity::new(
            "Basketball",
            "Basketball league and skills development",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            15,
            &["james@mergington.edu"],
        ),
        Activity::new(
            "Drama Club",
            "Theater performances and acting workshops",
            "Wednesdays, 3:30 PM - 5:00 PM",
            25,
            &["isabella@mergington.edu", "lucas@mergington.edu"],
        ),
        Activity::new(
            "Art Studio",
            "Painting, drawing, and sculpture classes",
            "Mondays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["grace@mergington.edu"],
        ),
        Activity::new(
            "Debate Team",
            "Competitive debate and public speaking",
            "Fridays, 3:30 PM - 5:00 PM",
            16,
            &["noah@mergington.edu", "ava@mergington.edu"],
        ),
        Activity::new(
            "Science Club",
            "Experiments, research projects, and STEM activities",
            "Tuesdays, 3:30 PM - 4:30 PM",
            22,
            &["mia@mergington.edu"],
        ),
        Activity::new(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        Activity::new(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        Activity::new(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
    ]
}
