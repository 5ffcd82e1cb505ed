use serde_json::{Map, Value};

use super::entities::{JobQuote, PresetConfig, RoomInput};
use super::quoting::quote_job;

/// In-memory state for one quoting session.
///
/// The session owns the room list (insertion order is display order) and the
/// active preset. It is a plain value the host holds; nothing here touches
/// disk, and quoting never mutates it.
#[derive(Clone, Debug, Default)]
pub struct QuoteSession {
    pub rooms: Vec<RoomInput>,
    pub config: PresetConfig,
}

impl QuoteSession {
    pub fn new(config: PresetConfig) -> Self {
        Self {
            rooms: Vec::new(),
            config,
        }
    }

    /// Append a room, keeping entry order.
    pub fn add_room(&mut self, room: RoomInput) {
        self.rooms.push(room);
    }

    /// Remove a room by id. Returns whether anything was removed.
    pub fn remove_room(&mut self, id: &str) -> bool {
        let before = self.rooms.len();
        self.rooms.retain(|room| room.id != id);
        self.rooms.len() != before
    }

    pub fn room(&self, id: &str) -> Option<&RoomInput> {
        self.rooms.iter().find(|room| room.id == id)
    }

    pub fn room_mut(&mut self, id: &str) -> Option<&mut RoomInput> {
        self.rooms.iter_mut().find(|room| room.id == id)
    }

    /// Quote the whole session against the active preset.
    pub fn quote(&self, add_ons: Option<&Map<String, Value>>) -> JobQuote {
        quote_job(&self.rooms, &self.config, add_ons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::quoting::quote_room;

    #[test]
    fn rooms_keep_insertion_order() {
        let mut session = QuoteSession::default();
        session.add_room(RoomInput::new("Hall"));
        session.add_room(RoomInput::new("Lounge"));
        session.add_room(RoomInput::new("Kitchen"));

        let names: Vec<&str> = session.rooms.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Hall", "Lounge", "Kitchen"]);

        let quote = session.quote(None);
        let quoted: Vec<&str> = quote
            .room_breakdowns
            .iter()
            .map(|r| r.room_name.as_str())
            .collect();
        assert_eq!(quoted, ["Hall", "Lounge", "Kitchen"]);
    }

    #[test]
    fn remove_room_by_id() {
        let mut session = QuoteSession::default();
        let room = RoomInput::new("Lounge");
        let id = room.id.clone();
        session.add_room(room);
        session.add_room(RoomInput::new("Kitchen"));

        assert!(session.remove_room(&id));
        assert!(!session.remove_room(&id));
        assert_eq!(session.rooms.len(), 1);
        assert!(session.room(&id).is_none());
    }

    #[test]
    fn session_quote_matches_direct_quote() {
        let mut session = QuoteSession::default();
        let mut room = RoomInput::new("Bedroom");
        room.wall_area = 22.0;
        room.coats_walls = 2;
        session.add_room(room.clone());

        let quote = session.quote(None);
        assert_eq!(quote.room_breakdowns[0], quote_room(&room, &session.config));
    }
}
