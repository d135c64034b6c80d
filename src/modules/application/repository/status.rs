use serde::{Deserialize, Serialize, Serializer};

/// Lifecycle of applications, amendments and closures. Only `Pending` may
/// move, and only to one of the other three.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Declined,
    Archived,
}

impl ApprovalStatus {
    pub fn id(&self) -> i16 {
        match self {
            Self::Pending => 1,
            Self::Approved => 2,
            Self::Declined => 3,
            Self::Archived => 4,
        }
    }

    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            1 => Some(Self::Pending),
            2 => Some(Self::Approved),
            3 => Some(Self::Declined),
            4 => Some(Self::Archived),
            _ => None,
        }
    }

    pub fn can_transition_to(&self, next: ApprovalStatus) -> bool {
        *self == Self::Pending && next != Self::Pending
    }
}

impl ToString for ApprovalStatus {
    fn to_string(&self) -> String {
        match self {
            Self::Pending => String::from("pending"),
            Self::Approved => String::from("approved"),
            Self::Declined => String::from("declined"),
            Self::Archived => String::from("archived"),
        }
    }
}

/// Serializes a `current_status_id` column as its status name.
pub fn serialize_id<S: Serializer>(id: &i16, serializer: S) -> Result<S::Ok, S::Error> {
    match ApprovalStatus::from_id(*id) {
        Some(status) => status.serialize(serializer),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_match_the_seeded_lookup_table() {
        for (id, name) in [(1, "pending"), (2, "approved"), (3, "declined"), (4, "archived")] {
            let status = ApprovalStatus::from_id(id).unwrap();
            assert_eq!(status.id(), id);
            assert_eq!(status.to_string(), name);
        }
        assert_eq!(ApprovalStatus::from_id(0), None);
    }

    #[test]
    fn only_pending_requests_move() {
        assert!(ApprovalStatus::Pending.can_transition_to(ApprovalStatus::Approved));
        assert!(ApprovalStatus::Pending.can_transition_to(ApprovalStatus::Declined));
        assert!(ApprovalStatus::Pending.can_transition_to(ApprovalStatus::Archived));
        assert!(!ApprovalStatus::Pending.can_transition_to(ApprovalStatus::Pending));
        assert!(!ApprovalStatus::Approved.can_transition_to(ApprovalStatus::Declined));
        assert!(!ApprovalStatus::Declined.can_transition_to(ApprovalStatus::Approved));
    }

    #[test]
    fn status_names_deserialize_from_queries() {
        let status: ApprovalStatus = serde_json::from_str("\"declined\"").unwrap();
        assert_eq!(status, ApprovalStatus::Declined);
    }
}
