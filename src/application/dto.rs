//! Data Transfer Objects for the actor domain
//!
//! Request shapes accepted by the use cases.

use serde::{Deserialize, Serialize};
use crate::domain::value_objects::RequesterId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListAllActorsRequest {
    pub requester_id: RequesterId,
}

impl ListAllActorsRequest {
    pub fn new(requester_id: impl Into<RequesterId>) -> Self {
        Self { requester_id: requester_id.into() }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateActorDto {
    pub name: String,
    pub email: String,
}
