use crate::models::{MatchRecord, Profile, SwipeDirection};
use tracing::debug;

/// Client-side deck state: ordered candidate profiles, the cursor into them,
/// and the matches accumulated this session.
///
/// The deck itself is never mutated in place during a session. Only the
/// cursor advances, and only the commit sequencer drives mutations, so a
/// single mutation is ever in flight at a time.
#[derive(Debug, Clone, Default)]
pub struct DeckStore {
    deck: Vec<Profile>,
    current_index: usize,
    matches: Vec<MatchRecord>,
}

impl DeckStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the deck wholesale and reset the cursor to 0.
    ///
    /// Matches survive a deck reload (the matches view outlives the deck).
    pub fn set_deck(&mut self, profiles: Vec<Profile>) {
        debug!(count = profiles.len(), "deck loaded");
        self.deck = profiles;
        self.current_index = 0;
    }

    /// Advance the cursor by one, clamped to the last index.
    ///
    /// A no-op at the last card and on an empty deck.
    pub fn advance(&mut self) {
        if self.deck.len() > 1 {
            self.current_index = (self.current_index + 1).min(self.deck.len() - 1);
        }
    }

    /// Record a right-swipe. Idempotent by profile id: a second insert for
    /// the same identity is a no-op.
    pub fn record_match(&mut self, profile: Profile) {
        if self.matches.iter().any(|m| m.profile_id() == profile.id) {
            debug!(profile_id = %profile.id, "duplicate match ignored");
            return;
        }
        debug!(profile_id = %profile.id, name = %profile.name, "match recorded");
        self.matches.push(MatchRecord::new(profile));
    }

    /// The profile under the top card, if the cursor points at one
    pub fn current_profile(&self) -> Option<&Profile> {
        self.deck.get(self.current_index)
    }

    /// The profile rendered underneath the top card
    pub fn next_profile(&self) -> Option<&Profile> {
        self.deck.get(self.current_index + 1)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn deck(&self) -> &[Profile] {
        &self.deck
    }

    pub fn matches(&self) -> &[MatchRecord] {
        &self.matches
    }

    /// True once there is no card after the current one
    pub fn is_exhausted(&self) -> bool {
        self.current_index + 1 >= self.deck.len()
    }

    /// Apply the mutation for a committed swipe: right-swipes record a match
    /// first, then either direction advances the cursor.
    pub(crate) fn apply_commit(&mut self, direction: SwipeDirection) {
        if direction == SwipeDirection::Right {
            if let Some(profile) = self.current_profile().cloned() {
                self.record_match(profile);
            }
        }
        self.advance();
    }
}
