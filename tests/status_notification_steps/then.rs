//! Then steps for status notification BDD scenarios.

use super::world::NotificationWorld;
use rstest_bdd_macros::then;

#[then("the number of sent emails is {count:usize}")]
fn sent_email_count(world: &NotificationWorld, count: usize) -> Result<(), eyre::Report> {
    let sent = world.app.sent_count()?;
    eyre::ensure!(sent == count, "expected {count} emails, found {sent}");
    Ok(())
}

#[then(r#"the last email subject is "{subject}""#)]
fn last_email_subject(world: &NotificationWorld, subject: String) -> Result<(), eyre::Report> {
    let sent = world.app.outbox.sent()?;
    let last = sent
        .last()
        .ok_or_else(|| eyre::eyre!("no email was sent"))?;
    eyre::ensure!(
        last.subject == subject,
        "expected subject {subject:?}, found {:?}",
        last.subject
    );
    Ok(())
}
