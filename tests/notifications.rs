mod common;

use buzzarfeed::modules::notification::service::{email, types, Notification};
use tempfile::TempDir;

fn password_reset() -> Notification {
    Notification::PasswordResetRequested(types::PasswordResetRequested {
        recipient: types::Recipient {
            name: String::from("Aling Nena"),
            email: String::from("nena@example.com"),
        },
        token: String::from("reset-token"),
        reset_url: String::from("http://127.0.0.1:8000/reset-password"),
    })
}

#[tokio::test]
async fn disabled_mail_skips_delivery_without_error() {
    let dir = TempDir::new().unwrap();
    let ctx = common::context(common::unreachable_pool(), dir.path());

    assert!(ctx.mail.is_none());
    assert!(email::send(ctx, password_reset()).await.is_ok());
}
