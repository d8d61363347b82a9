//! The self-care recommendation catalog served alongside the student report.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Activity {
    pub id: String,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub category: ActivityCategory,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub youtube_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ActivityCategory {
    Mindfulness,
    Exercise,
    Social,
    Creative,
    Academic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MusicTrack {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub genre: String,
    pub mood: String,
    #[serde(default)]
    pub youtube_url: Option<String>,
}

pub fn activities() -> &'static [Activity] {
    static ACTIVITIES: std::sync::LazyLock<Vec<Activity>> = std::sync::LazyLock::new(|| {
        let activity = |id: &str,
                        title: &str,
                        description: &str,
                        duration: &str,
                        category: ActivityCategory,
                        difficulty: Difficulty,
                        url: &str| Activity {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            duration: duration.to_string(),
            category,
            difficulty,
            youtube_url: Some(url.to_string()),
        };

        vec![
            activity(
                "1",
                "5-Minute Breathing Exercise",
                "A simple breathing technique to reduce anxiety and promote relaxation",
                "5 minutes",
                ActivityCategory::Mindfulness,
                Difficulty::Easy,
                "https://www.youtube.com/watch?v=tybOi4hjZFQ",
            ),
            activity(
                "2",
                "Gratitude Journaling",
                "Write down three things you're grateful for each day",
                "10 minutes",
                ActivityCategory::Mindfulness,
                Difficulty::Easy,
                "https://www.youtube.com/watch?v=WPPPFqsECz0",
            ),
            activity(
                "3",
                "Nature Walk",
                "Take a peaceful walk outdoors to clear your mind",
                "20-30 minutes",
                ActivityCategory::Exercise,
                Difficulty::Easy,
                "https://www.youtube.com/watch?v=d0tU18Ybcvk",
            ),
            activity(
                "4",
                "Progressive Muscle Relaxation",
                "Systematically tense and relax different muscle groups",
                "15 minutes",
                ActivityCategory::Mindfulness,
                Difficulty::Medium,
                "https://www.youtube.com/watch?v=1nZEdqcGVzo",
            ),
            activity(
                "5",
                "Creative Art Session",
                "Express yourself through drawing, painting, or crafting",
                "30-60 minutes",
                ActivityCategory::Creative,
                Difficulty::Medium,
                "https://www.youtube.com/watch?v=ZczPKBbZukk",
            ),
            activity(
                "6",
                "Connect with a Friend",
                "Reach out to someone you trust for a meaningful conversation",
                "30 minutes",
                ActivityCategory::Social,
                Difficulty::Easy,
                "https://www.youtube.com/watch?v=R1vskiVDwl4",
            ),
        ]
    });
    &ACTIVITIES
}

pub fn music_tracks() -> &'static [MusicTrack] {
    static TRACKS: std::sync::LazyLock<Vec<MusicTrack>> = std::sync::LazyLock::new(|| {
        let track = |id: &str, title: &str, artist: &str, genre: &str, mood: &str| MusicTrack {
            id: id.to_string(),
            title: title.to_string(),
            artist: artist.to_string(),
            genre: genre.to_string(),
            mood: mood.to_string(),
            youtube_url: None,
        };

        vec![
            track("1", "Weightless", "Marconi Union", "Ambient", "calming"),
            track("2", "Clair de Lune", "Claude Debussy", "Classical", "peaceful"),
            track("3", "Holocene", "Bon Iver", "Indie Folk", "reflective"),
            track("4", "Breathe", "Télépopmusik", "Electronic", "relaxing"),
        ]
    });
    &TRACKS
}
