use std::convert::Infallible;

use crate::actor_framework::Entity;
use crate::domain::QueueMessage;

impl Entity for QueueMessage {
    type Id = String;
    // Messages are only ever seeded.
    type CreatePayload = Infallible;

    fn id(&self) -> &String { &self.message_id }

    fn from_create(_id: String, payload: Infallible) -> Result<Self, String> {
        match payload {}
    }
}
