pub mod domain;

pub use domain::{
    Budget, Lifestyle, LocationPreference, MatchRecord, Personality, Photo, Profile,
    SleepSchedule, SwipeDirection,
};
