use shared::domain::{Activity, Roster};

/// Activities the server starts with when no seed file is configured.
pub fn default_roster() -> Roster {
    [
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        (
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        ),
        (
            "Basketball Team",
            Activity::new(
                "Competitive basketball league and practice",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                15,
            )
            .with_participants(["alex@mergington.edu"]),
        ),
        (
            "Tennis Club",
            Activity::new(
                "Learn tennis skills and compete in matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:00 PM",
                10,
            )
            .with_participants(["sarah@mergington.edu"]),
        ),
        (
            "Art Studio",
            Activity::new(
                "Painting, drawing, and sculpture techniques",
                "Wednesdays, 3:30 PM - 5:00 PM",
                18,
            )
            .with_participants(["maya@mergington.edu"]),
        ),
        (
            "Drama Club",
            Activity::new(
                "Theater performances and acting workshops",
                "Thursdays, 4:00 PM - 5:30 PM",
                25,
            )
            .with_participants(["james@mergington.edu", "lisa@mergington.edu"]),
        ),
        (
            "Debate Team",
            Activity::new(
                "Competitive debate and public speaking",
                "Mondays and Fridays, 3:30 PM - 4:30 PM",
                16,
            )
            .with_participants(["noah@mergington.edu"]),
        ),
        (
            "Science Club",
            Activity::new(
                "Hands-on experiments and STEM exploration",
                "Tuesdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(["ava@mergington.edu", "ethan@mergington.edu"]),
        ),
    ]
    .into_iter()
    .collect()
}
