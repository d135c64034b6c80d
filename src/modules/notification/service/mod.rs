pub mod email;

use crate::{modules::user::repository::User, types::Context};
use std::sync::Arc;

pub mod types {
    #[derive(Clone, Debug)]
    pub struct Recipient {
        pub name: String,
        pub email: String,
    }

    #[derive(Clone, Debug)]
    pub struct ApplicationApproved {
        pub recipient: Recipient,
        pub stall_name: String,
        pub stall_id: String,
    }

    #[derive(Clone, Debug)]
    pub struct ApplicationDeclined {
        pub recipient: Recipient,
        pub stall_name: String,
        pub reason: String,
    }

    #[derive(Clone, Debug)]
    pub struct ChangeRequestReviewed {
        pub recipient: Recipient,
        pub stall_name: String,
        pub approved: bool,
        pub reason: Option<String>,
    }

    #[derive(Clone, Debug)]
    pub struct PasswordResetRequested {
        pub recipient: Recipient,
        pub token: String,
        pub reset_url: String,
    }
}

#[derive(Clone, Debug)]
pub enum Notification {
    ApplicationApproved(types::ApplicationApproved),
    ApplicationDeclined(types::ApplicationDeclined),
    AmendmentReviewed(types::ChangeRequestReviewed),
    ClosureReviewed(types::ChangeRequestReviewed),
    PasswordResetRequested(types::PasswordResetRequested),
}

impl From<&User> for types::Recipient {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

impl Notification {
    pub fn application_approved(user: &User, stall_name: String, stall_id: String) -> Self {
        Self::ApplicationApproved(types::ApplicationApproved {
            recipient: user.into(),
            stall_name,
            stall_id,
        })
    }

    pub fn application_declined(user: &User, stall_name: String, reason: String) -> Self {
        Self::ApplicationDeclined(types::ApplicationDeclined {
            recipient: user.into(),
            stall_name,
            reason,
        })
    }

    pub fn amendment_reviewed(
        user: &User,
        stall_name: String,
        approved: bool,
        reason: Option<String>,
    ) -> Self {
        Self::AmendmentReviewed(types::ChangeRequestReviewed {
            recipient: user.into(),
            stall_name,
            approved,
            reason,
        })
    }

    pub fn closure_reviewed(
        user: &User,
        stall_name: String,
        approved: bool,
        reason: Option<String>,
    ) -> Self {
        Self::ClosureReviewed(types::ChangeRequestReviewed {
            recipient: user.into(),
            stall_name,
            approved,
            reason,
        })
    }

    pub fn password_reset_requested(user: &User, token: String, reset_url: String) -> Self {
        Self::PasswordResetRequested(types::PasswordResetRequested {
            recipient: user.into(),
            token,
            reset_url,
        })
    }

    pub fn recipient(&self) -> &types::Recipient {
        match self {
            Self::ApplicationApproved(n) => &n.recipient,
            Self::ApplicationDeclined(n) => &n.recipient,
            Self::AmendmentReviewed(n) | Self::ClosureReviewed(n) => &n.recipient,
            Self::PasswordResetRequested(n) => &n.recipient,
        }
    }
}

#[derive(Debug)]
pub enum Error {
    NotSent,
    InvalidRecipient,
}

pub type Result<T> = std::result::Result<T, Error>;

pub async fn send(ctx: Arc<Context>, notification: Notification) -> Result<()> {
    email::send(ctx, notification).await
}

/// Sends in the background. Delivery failures are logged and never reach
/// the caller.
pub fn dispatch(ctx: Arc<Context>, notification: Notification) {
    tokio::spawn(async move {
        let recipient = notification.recipient().email.clone();
        if let Err(err) = send(ctx, notification).await {
            tracing::warn!("Failed to notify {}: {:?}", recipient, err);
        }
    });
}
