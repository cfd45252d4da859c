use log::debug;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::media::{AssetProbe, ImageResolver};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SlotTicket(u64);

#[derive(Debug, Default)]
struct SlotState {
    generation: u64,
    image: Option<String>,
}

/// Explanation image currently on display.
///
/// Every time the displayed question changes, the slot is reset and hands
/// out a new ticket. Lookups started under an older ticket cannot write.
#[derive(Clone, Debug, Default)]
pub struct MediaSlot {
    state: Arc<RwLock<SlotState>>,
}

impl MediaSlot {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn reset(&self) -> SlotTicket {
        let mut state = self.state.write();
        state.generation += 1;
        state.image = None;
        SlotTicket(state.generation)
    }

    pub fn get_ticket(&self) -> SlotTicket {
        SlotTicket(self.state.read().generation)
    }

    pub fn is_current(&self, ticket: SlotTicket) -> bool {
        self.state.read().generation == ticket.0
    }

    /// Shows `image` if `ticket` is still current. Returns whether it did.
    pub fn fulfill(&self, ticket: SlotTicket, image: String) -> bool {
        let mut state = self.state.write();
        if state.generation != ticket.0 {
            debug!("Discarding stale explanation image {}", image);
            return false;
        }
        state.image = Some(image);
        true
    }

    pub fn get_image(&self) -> Option<String> {
        self.state.read().image.clone()
    }
}

/// A pending explanation image lookup for one displayed question.
#[derive(Clone, Debug)]
pub struct MediaRequest {
    pub set_id: String,
    pub question_id: i64,
    pub ticket: SlotTicket,
    pub slot: MediaSlot,
    pub resolver: ImageResolver,
}

impl MediaRequest {
    /// Looks up the image and shows it if the question is still displayed.
    pub async fn run<P: AssetProbe + ?Sized>(self, probe: &P) -> Option<String> {
        let slot = self.slot.clone();
        let ticket = self.ticket;
        let image = self
            .resolver
            .resolve_while(probe, &self.set_id, self.question_id, || {
                slot.is_current(ticket)
            })
            .await?;
        if self.slot.fulfill(self.ticket, image.clone()) {
            Some(image)
        } else {
            None
        }
    }
}
