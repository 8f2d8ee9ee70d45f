use serde::{Deserialize, Serialize};

/// Candidate roommate profile as shipped to the swipe deck
///
/// The swipe core treats this as an opaque payload: only `id` participates in
/// match de-duplication. The remaining fields exist so the deck can be loaded
/// from JSON and rendered by the hosting screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub age: u8,
    pub bio: String,
    pub university: String,
    pub major: String,
    pub year: String,
    #[serde(default)]
    pub interests: Vec<String>,
    pub lifestyle: Lifestyle,
    #[serde(default)]
    pub photos: Vec<Photo>,
    pub budget: Budget,
    pub move_in_date: chrono::NaiveDate,
    pub location: LocationPreference,
}

/// Lifestyle attributes shown on the card
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lifestyle {
    /// 1-5 star rating
    pub cleanliness: u8,
    pub sleep_schedule: SleepSchedule,
    #[serde(default)]
    pub pets: bool,
    pub personality: Personality,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SleepSchedule {
    EarlyBird,
    NightOwl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Personality {
    Introvert,
    Extrovert,
    Ambivert,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    pub url: String,
    #[serde(default)]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub min: u32,
    pub max: u32,
    pub preferred_range: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationPreference {
    pub preferred: String,
    /// Miles from the preferred area
    pub max_distance: u16,
}

/// Horizontal direction of a committed swipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    /// Sign of the direction on the x axis: -1.0 for left, +1.0 for right
    #[inline]
    pub fn sign(&self) -> f64 {
        match self {
            SwipeDirection::Left => -1.0,
            SwipeDirection::Right => 1.0,
        }
    }

    /// Direction from a horizontal displacement. The decider never calls this
    /// with `dx == 0` (a zero drag always reverts).
    #[inline]
    pub fn from_dx(dx: f64) -> Self {
        if dx < 0.0 {
            SwipeDirection::Left
        } else {
            SwipeDirection::Right
        }
    }
}

impl std::fmt::Display for SwipeDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SwipeDirection::Left => write!(f, "left"),
            SwipeDirection::Right => write!(f, "right"),
        }
    }
}

/// A recorded right-swipe, retained for the matches/messages view
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub profile: Profile,
    pub matched_at: chrono::DateTime<chrono::Utc>,
}

impl MatchRecord {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            matched_at: chrono::Utc::now(),
        }
    }

    /// Identity of the matched profile
    pub fn profile_id(&self) -> &str {
        &self.profile.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_signs() {
        assert_eq!(SwipeDirection::Left.sign(), -1.0);
        assert_eq!(SwipeDirection::Right.sign(), 1.0);
        assert_eq!(SwipeDirection::from_dx(-42.0), SwipeDirection::Left);
        assert_eq!(SwipeDirection::from_dx(42.0), SwipeDirection::Right);
    }

    #[test]
    fn test_profile_deserializes_camel_case() {
        let json = r#"{
            "id": "1",
            "name": "Alex",
            "age": 21,
            "bio": "CS major",
            "university": "MIT",
            "major": "Computer Science",
            "year": "Sophomore",
            "interests": ["Coding", "Hiking"],
            "lifestyle": {
                "cleanliness": 5,
                "sleepSchedule": "early_bird",
                "pets": false,
                "personality": "ambivert"
            },
            "photos": [{"url": "https://example.com/alex.jpg"}],
            "budget": {"min": 1500, "max": 1800, "preferredRange": "$1,500 - $1,800"},
            "moveInDate": "2024-06-01",
            "location": {"preferred": "Cambridge, MA", "maxDistance": 5}
        }"#;

        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.id, "1");
        assert_eq!(profile.lifestyle.sleep_schedule, SleepSchedule::EarlyBird);
        assert_eq!(profile.lifestyle.personality, Personality::Ambivert);
        assert_eq!(profile.budget.min, 1500);
    }
}
