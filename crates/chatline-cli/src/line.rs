//! Plain stdin/stdout mode

use chatline_client::{ChatSession, SendOutcome};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Print the ai messages appended by the last send
fn print_replies(session: &ChatSession, count: usize, out: &mut impl Write) -> std::io::Result<()> {
    let messages = session.messages();
    for msg in &messages[messages.len() - count..] {
        writeln!(out, "ai> {}", msg.content())?;
    }
    Ok(())
}

/// Send a single message and print the replies
pub async fn run_once(
    session: &mut ChatSession,
    message: &str,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    session.set_draft(message);
    match session.send().await {
        SendOutcome::Replied(count) => {
            print_replies(session, count, out)?;
            Ok(())
        }
        SendOutcome::Skipped => anyhow::bail!("Message is empty"),
        SendOutcome::Failed => anyhow::bail!("Request to {} failed", session.transport().describe()),
    }
}

/// Read lines from `input`, sending each non-blank one
pub async fn run_lines<R>(
    session: &mut ChatSession,
    input: R,
    out: &mut impl Write,
    prompt: bool,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();

    loop {
        if prompt {
            write!(out, "> ")?;
            out.flush()?;
        }

        let Some(line) = lines.next_line().await? else {
            break;
        };

        session.set_draft(line);
        match session.send().await {
            SendOutcome::Replied(count) => print_replies(session, count, out)?,
            // Failures are only logged; the next line starts fresh
            SendOutcome::Failed => session.set_draft(""),
            SendOutcome::Skipped => {}
        }
        out.flush()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chatline_client::{Error, Role, Transport};
    use std::sync::Arc;

    /// Replies with the message echoed twice; "fail" triggers an error
    struct EchoTransport;

    #[async_trait]
    impl Transport for EchoTransport {
        async fn send(&self, message: &str) -> chatline_client::Result<Vec<String>> {
            if message == "fail" {
                return Err(Error::api(500, "nope"));
            }
            Ok(vec![message.to_uppercase(), format!("{}!", message)])
        }
    }

    fn session() -> ChatSession {
        ChatSession::new(Arc::new(EchoTransport))
    }

    #[tokio::test]
    async fn test_lines_skip_blank_and_print_replies() {
        let mut session = session();
        let mut out = Vec::new();
        let input: &[u8] = b"hi\n   \nfail\nbye\n";

        run_lines(&mut session, input, &mut out, false).await.unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "ai> HI\nai> hi!\nai> BYE\nai> bye!\n"
        );
        let roles: Vec<Role> = session.messages().iter().map(|m| m.role()).collect();
        assert_eq!(
            roles,
            vec![
                Role::User,
                Role::Ai,
                Role::Ai,
                Role::User,
                Role::User,
                Role::Ai,
                Role::Ai
            ]
        );
    }

    #[tokio::test]
    async fn test_once_reports_failure() {
        let mut session = session();
        let mut out = Vec::new();
        assert!(run_once(&mut session, "fail", &mut out).await.is_err());
        assert!(run_once(&mut session, "  ", &mut out).await.is_err());
        assert!(out.is_empty());

        run_once(&mut session, "ok", &mut out).await.unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "ai> OK\nai> ok!\n");
    }
}
