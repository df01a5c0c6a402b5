//! Posted events and their roster.
//!
//! The event post's embed is the only place roster state lives; this model is what
//! the embed parses into and renders from.

use chrono::{DateTime, Utc};
use serenity::all::UserId;

use crate::model::activity::Activity;

/// Footer marker identifying an event post created by the bot.
pub const CREATED_BY_MARKER: &str = "Created by:";

/// Alternates queue length; with the member limit this keeps the embed within
/// Discord's 6000 character budget.
pub const MAX_ALTERNATES: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventPost {
    pub activity: Activity,
    pub start: DateTime<Utc>,
    pub description: Option<String>,
    pub creator_id: UserId,
    pub creator_name: String,
    /// Never longer than `activity.max_members`.
    pub members: Vec<UserId>,
    /// Never longer than `MAX_ALTERNATES`.
    pub alternates: Vec<UserId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinOutcome {
    Joined,
    /// The event is full, so the user was queued as an alternate.
    JoinedAsAlternate,
    AlreadyMember,
    /// Members and alternates are both full.
    EventFull,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlternateOutcome {
    Added,
    /// Moved from members to alternates; `promoted` took the freed slot.
    Moved { promoted: Option<UserId> },
    AlreadyAlternate,
    AlternatesFull,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveOutcome {
    Left { promoted: Option<UserId> },
    NotInEvent,
}

impl EventPost {
    /// Creates a new event with the creator as its first member.
    pub fn new(
        activity: Activity,
        start: DateTime<Utc>,
        description: Option<String>,
        creator_id: UserId,
        creator_name: impl Into<String>,
    ) -> Self {
        Self {
            activity,
            start,
            description,
            creator_id,
            creator_name: creator_name.into(),
            members: vec![creator_id],
            alternates: Vec::new(),
        }
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= usize::from(self.activity.max_members)
    }

    pub fn alternates_full(&self) -> bool {
        self.alternates.len() >= MAX_ALTERNATES
    }

    pub fn is_creator(&self, user_id: UserId) -> bool {
        self.creator_id == user_id
    }

    /// `Created by: <name> | <id>`
    pub fn footer_text(&self) -> String {
        format!(
            "{} {} | {}",
            CREATED_BY_MARKER, self.creator_name, self.creator_id
        )
    }

    pub fn join(&mut self, user_id: UserId) -> JoinOutcome {
        if self.members.contains(&user_id) {
            return JoinOutcome::AlreadyMember;
        }

        if self.is_full() {
            if !self.alternates.contains(&user_id) {
                if self.alternates_full() {
                    return JoinOutcome::EventFull;
                }
                self.alternates.push(user_id);
            }
            return JoinOutcome::JoinedAsAlternate;
        }

        self.alternates.retain(|id| *id != user_id);
        self.members.push(user_id);
        JoinOutcome::Joined
    }

    pub fn join_alternate(&mut self, user_id: UserId) -> AlternateOutcome {
        if self.alternates.contains(&user_id) {
            return AlternateOutcome::AlreadyAlternate;
        }

        if self.members.contains(&user_id) {
            self.members.retain(|id| *id != user_id);
            let promoted = self.fill_open_slot();
            self.alternates.push(user_id);
            return AlternateOutcome::Moved { promoted };
        }

        if self.alternates_full() {
            return AlternateOutcome::AlternatesFull;
        }

        self.alternates.push(user_id);
        AlternateOutcome::Added
    }

    pub fn leave(&mut self, user_id: UserId) -> LeaveOutcome {
        if self.members.contains(&user_id) {
            self.members.retain(|id| *id != user_id);
            return LeaveOutcome::Left {
                promoted: self.fill_open_slot(),
            };
        }

        if self.alternates.contains(&user_id) {
            self.alternates.retain(|id| *id != user_id);
            return LeaveOutcome::Left { promoted: None };
        }

        LeaveOutcome::NotInEvent
    }

    /// Moves the longest-waiting alternate into a free member slot.
    fn fill_open_slot(&mut self) -> Option<UserId> {
        if self.is_full() || self.alternates.is_empty() {
            return None;
        }

        let promoted = self.alternates.remove(0);
        self.members.push(promoted);
        Some(promoted)
    }
}
