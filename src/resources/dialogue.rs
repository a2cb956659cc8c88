//! Dialogue text table and the on-screen dialogue box.
//!
//! [`DialogueTable`] maps boundary names to the text shown when the player
//! touches them. It is loaded once from a JSON object:
//!
//! ```json
//! { "pc": "This is my PC.", "bed": "My bed. Not sleepy yet." }
//! ```
//!
//! [`DialogueBox`] holds the dialogue being shown. Text is revealed a few
//! characters per frame; dismissing hands back a single-use
//! [`CompletionTicket`] that becomes the one `DialogueClosed` event for that
//! dialogue.

use std::path::Path;

use bevy_ecs::prelude::{Entity, Resource};
use rustc_hash::FxHashMap;

use crate::error::{GateError, SceneError};
use crate::events::dialogue::DialogueClosed;

/// Read-only dialogue text keyed by boundary name.
#[derive(Resource, Debug, Clone, Default)]
pub struct DialogueTable {
    entries: FxHashMap<String, String>,
}

impl DialogueTable {
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        let entries: FxHashMap<String, String> = serde_json::from_str(json)
            .map_err(|e| SceneError::MalformedDialogueData(e.to_string()))?;
        Ok(Self { entries })
    }

    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let json = std::fs::read_to_string(path).map_err(|e| SceneError::asset(path, e))?;
        Self::from_json(&json)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Proof that a shown dialogue has not been completed yet.
///
/// Not `Clone`: completing consumes it, so each dialogue completes once.
#[derive(Debug)]
pub struct CompletionTicket {
    player: Entity,
    key: String,
}

impl CompletionTicket {
    pub fn complete(self) -> DialogueClosed {
        DialogueClosed {
            player: self.player,
            key: self.key,
        }
    }
}

#[derive(Debug)]
pub struct ActiveDialogue {
    pub key: String,
    pub text: String,
    /// Characters revealed so far, fractional between frames.
    revealed: f32,
    ticket: CompletionTicket,
}

#[derive(Resource, Debug)]
pub struct DialogueBox {
    active: Option<ActiveDialogue>,
    pub chars_per_second: f32,
}

impl Default for DialogueBox {
    fn default() -> Self {
        Self::new(60.0)
    }
}

impl DialogueBox {
    pub fn new(chars_per_second: f32) -> Self {
        Self {
            active: None,
            chars_per_second,
        }
    }

    /// Start showing `text` for `player`. Only one dialogue can be shown.
    pub fn show(
        &mut self,
        player: Entity,
        key: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<(), GateError> {
        if let Some(active) = &self.active {
            return Err(GateError::AlreadyOpen {
                active: active.key.clone(),
            });
        }
        let key = key.into();
        self.active = Some(ActiveDialogue {
            key: key.clone(),
            text: text.into(),
            revealed: 0.0,
            ticket: CompletionTicket { player, key },
        });
        Ok(())
    }

    pub fn is_showing(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<&ActiveDialogue> {
        self.active.as_ref()
    }

    /// Reveal more text according to elapsed time.
    pub fn advance(&mut self, delta: f32) {
        let cps = self.chars_per_second;
        if let Some(active) = self.active.as_mut() {
            let total = active.text.chars().count() as f32;
            active.revealed = if cps <= 0.0 {
                total
            } else {
                (active.revealed + cps * delta).min(total)
            };
        }
    }

    pub fn reveal_all(&mut self) {
        if let Some(active) = self.active.as_mut() {
            active.revealed = active.text.chars().count() as f32;
        }
    }

    pub fn is_fully_revealed(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|a| a.revealed as usize >= a.text.chars().count())
    }

    /// The part of the text revealed so far.
    pub fn visible_text(&self) -> &str {
        let Some(active) = self.active.as_ref() else {
            return "";
        };
        let shown = active.revealed as usize;
        match active.text.char_indices().nth(shown) {
            Some((byte, _)) => &active.text[..byte],
            None => &active.text,
        }
    }

    /// Close the box, returning its completion ticket.
    pub fn dismiss(&mut self) -> Option<CompletionTicket> {
        self.active.take().map(|a| a.ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::world::World;

    #[test]
    fn test_table_from_json() {
        let table = DialogueTable::from_json(r#"{ "pc": "My PC.", "bed": "Not now." }"#).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("pc"), Some("My PC."));
        assert_eq!(table.get("tv"), None);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_empty_table_is_empty() {
        let table = DialogueTable::from_json("{}").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.get("pc"), None);
    }

    #[test]
    fn test_table_rejects_non_object() {
        assert!(matches!(
            DialogueTable::from_json(r#"["pc"]"#),
            Err(SceneError::MalformedDialogueData(_))
        ));
    }

    #[test]
    fn test_typewriter_reveals_over_time() {
        let mut world = World::new();
        let player = world.spawn_empty().id();
        let mut dialogue = DialogueBox::new(10.0);
        dialogue.show(player, "pc", "Hello, world").unwrap();
        assert_eq!(dialogue.visible_text(), "");

        dialogue.advance(0.5);
        assert_eq!(dialogue.visible_text(), "Hello");
        assert!(!dialogue.is_fully_revealed());

        dialogue.advance(10.0);
        assert_eq!(dialogue.visible_text(), "Hello, world");
        assert!(dialogue.is_fully_revealed());
    }

    #[test]
    fn test_typewriter_respects_char_boundaries() {
        let mut world = World::new();
        let player = world.spawn_empty().id();
        let mut dialogue = DialogueBox::new(1.0);
        dialogue.show(player, "sign", "héllo").unwrap();
        dialogue.advance(2.0);
        assert_eq!(dialogue.visible_text(), "hé");
    }

    #[test]
    fn test_second_show_is_rejected() {
        let mut world = World::new();
        let player = world.spawn_empty().id();
        let mut dialogue = DialogueBox::default();
        dialogue.show(player, "pc", "a").unwrap();
        assert!(dialogue.show(player, "bed", "b").is_err());
        assert_eq!(dialogue.active().unwrap().key, "pc");
    }

    #[test]
    fn test_dismiss_yields_ticket_once() {
        let mut world = World::new();
        let player = world.spawn_empty().id();
        let mut dialogue = DialogueBox::default();
        dialogue.show(player, "pc", "a").unwrap();

        let closed = dialogue.dismiss().unwrap().complete();
        assert_eq!(closed.player, player);
        assert_eq!(closed.key, "pc");
        assert!(dialogue.dismiss().is_none());
        assert!(!dialogue.is_showing());
    }
}
