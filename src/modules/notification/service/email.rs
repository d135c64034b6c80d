use crate::types::Context;
use lettre::{
    message::{header::ContentType, Mailbox},
    AsyncTransport, Message,
};
use std::sync::Arc;

use super::{types, Error, Notification, Result};

pub struct Email {
    pub subject: String,
    pub body: String,
}

fn decision_email(kind: &str, n: &types::ChangeRequestReviewed) -> Email {
    let (verdict, detail) = match (n.approved, &n.reason) {
        (true, _) => ("approved", String::new()),
        (false, Some(reason)) => ("declined", format!("\n\nReason: {}", reason)),
        (false, None) => ("declined", String::new()),
    };

    Email {
        subject: format!("Your {} request for {} was {}", kind, n.stall_name, verdict),
        body: format!(
            "Hi {},\n\nYour {} request for {} has been {}.{}\n\nThe BuzzarFeed team",
            n.recipient.name, kind, n.stall_name, verdict, detail
        ),
    }
}

pub fn render(notification: &Notification) -> Email {
    match notification {
        Notification::ApplicationApproved(n) => Email {
            subject: format!("{} is now live on BuzzarFeed", n.stall_name),
            body: format!(
                "Hi {},\n\nGood news! Your application for {} has been approved and your stall is now listed (stall id: {}).\n\nThe BuzzarFeed team",
                n.recipient.name, n.stall_name, n.stall_id
            ),
        },
        Notification::ApplicationDeclined(n) => Email {
            subject: format!("Your application for {} was declined", n.stall_name),
            body: format!(
                "Hi {},\n\nUnfortunately your application for {} was declined.\n\nReason: {}\n\nYou are welcome to submit a new application.\n\nThe BuzzarFeed team",
                n.recipient.name, n.stall_name, n.reason
            ),
        },
        Notification::AmendmentReviewed(n) => decision_email("amendment", n),
        Notification::ClosureReviewed(n) => decision_email("closure", n),
        Notification::PasswordResetRequested(n) => Email {
            subject: String::from("Reset your BuzzarFeed password"),
            body: format!(
                "Hi {},\n\nUse the code below to reset your password at {}. It expires in one hour.\n\n{}\n\nIf you did not request this, you can ignore this email.\n\nThe BuzzarFeed team",
                n.recipient.name, n.reset_url, n.token
            ),
        },
    }
}

pub async fn send(ctx: Arc<Context>, notification: Notification) -> Result<()> {
    let recipient = notification.recipient().clone();
    let email = render(&notification);

    let mail = match &ctx.mail {
        Some(mail) => mail,
        None => {
            tracing::debug!(
                "Mail is disabled, skipping '{}' for {}",
                email.subject,
                recipient.email
            );
            return Ok(());
        }
    };

    let to = recipient
        .email
        .parse()
        .map(|address| Mailbox::new(Some(recipient.name.clone()), address))
        .map_err(|err| {
            tracing::error!("Invalid recipient address {}: {}", recipient.email, err);
            Error::InvalidRecipient
        })?;

    let from = mail.sender.parse::<Mailbox>().map_err(|err| {
        tracing::error!("Invalid sender address {}: {}", mail.sender, err);
        Error::NotSent
    })?;

    let message = Message::builder()
        .from(from)
        .to(to)
        .subject(email.subject)
        .header(ContentType::TEXT_PLAIN)
        .body(email.body)
        .map_err(|err| {
            tracing::error!("Failed to build email: {}", err);
            Error::NotSent
        })?;

    mail.transport
        .send(message)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!("Failed to send email: {}", err);
            Error::NotSent
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipient() -> types::Recipient {
        types::Recipient {
            name: String::from("Aling Nena"),
            email: String::from("nena@example.com"),
        }
    }

    #[test]
    fn declined_application_mentions_reason() {
        let email = render(&Notification::ApplicationDeclined(types::ApplicationDeclined {
            recipient: recipient(),
            stall_name: String::from("Nena's Isaw"),
            reason: String::from("Missing sanitary permit"),
        }));

        assert_eq!(email.subject, "Your application for Nena's Isaw was declined");
        assert!(email.body.contains("Reason: Missing sanitary permit"));
    }

    #[test]
    fn approved_change_request_has_no_reason_line() {
        let email = render(&Notification::ClosureReviewed(types::ChangeRequestReviewed {
            recipient: recipient(),
            stall_name: String::from("Nena's Isaw"),
            approved: true,
            reason: Some(String::from("ignored")),
        }));

        assert_eq!(email.subject, "Your closure request for Nena's Isaw was approved");
        assert!(!email.body.contains("Reason"));
    }
}
