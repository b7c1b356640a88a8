//! Channel-based approval bridge.
//!
//! Carries approval requests from worker tasks to a UI-owned consumer over
//! an mpsc channel. Each request carries a one-shot reply sender; the worker
//! suspends on the reply without blocking the runtime, and the UI thread of
//! control answers whenever the human decides.
//!
//! Any failure of the rendezvous (consumer gone, reply dropped) surfaces as
//! an [`ApprovalError`], which the approval gate treats as a denial.

use async_trait::async_trait;
use promptgate_application::{ApprovalError, ApprovalPort};
use promptgate_domain::SessionId;
use tokio::sync::{mpsc, oneshot};
use tracing::debug;

/// One pending approval decision, as seen by the consumer.
#[derive(Debug)]
pub struct ApprovalRequest {
    pub session: SessionId,
    pub tool_name: String,
    /// Rendered JSON argument object, for display.
    pub arguments: String,
    /// Send `true` to approve, `false` to deny. Dropping the sender
    /// abandons the request, which the worker treats as a denial.
    pub reply: oneshot::Sender<bool>,
}

/// [`ApprovalPort`] adapter backed by an mpsc channel.
pub struct ChannelApprovalBridge {
    sender: mpsc::Sender<ApprovalRequest>,
}

impl ChannelApprovalBridge {
    pub fn new(sender: mpsc::Sender<ApprovalRequest>) -> Self {
        Self { sender }
    }

    /// Create a bridge together with the consumer end of its channel.
    pub fn pair(buffer: usize) -> (Self, mpsc::Receiver<ApprovalRequest>) {
        let (sender, receiver) = mpsc::channel(buffer);
        (Self::new(sender), receiver)
    }
}

#[async_trait]
impl ApprovalPort for ChannelApprovalBridge {
    async fn request_approval(
        &self,
        session: &SessionId,
        tool_name: &str,
        arguments: &str,
    ) -> Result<bool, ApprovalError> {
        let (reply, decision) = oneshot::channel();

        debug!(
            "Forwarding approval request for tool '{}' in session {}",
            tool_name, session
        );

        self.sender
            .send(ApprovalRequest {
                session: session.clone(),
                tool_name: tool_name.to_string(),
                arguments: arguments.to_string(),
                reply,
            })
            .await
            .map_err(|_| ApprovalError::ChannelClosed)?;

        decision.await.map_err(|_| ApprovalError::ChannelClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_consumer_decision_is_returned() {
        let (bridge, mut requests) = ChannelApprovalBridge::pair(4);

        let consumer = tokio::spawn(async move {
            // Approve the first request, deny the second
            let first = requests.recv().await.unwrap();
            assert_eq!(first.tool_name, "search");
            assert_eq!(first.arguments, r#"{"query":"rust"}"#);
            first.reply.send(true).unwrap();

            let second = requests.recv().await.unwrap();
            second.reply.send(false).unwrap();
        });

        let session = SessionId::new("s1");
        let approved = bridge
            .request_approval(&session, "search", r#"{"query":"rust"}"#)
            .await
            .unwrap();
        assert!(approved);

        let denied = bridge
            .request_approval(&session, "write_file", "{}")
            .await
            .unwrap();
        assert!(!denied);

        consumer.await.unwrap();
    }

    #[tokio::test]
    async fn test_closed_channel_is_an_error() {
        let (bridge, requests) = ChannelApprovalBridge::pair(1);
        drop(requests);

        let result = bridge
            .request_approval(&SessionId::new("s1"), "search", "{}")
            .await;
        assert!(matches!(result, Err(ApprovalError::ChannelClosed)));
    }

    #[tokio::test]
    async fn test_abandoned_reply_is_an_error() {
        let (bridge, mut requests) = ChannelApprovalBridge::pair(1);

        tokio::spawn(async move {
            let request = requests.recv().await.unwrap();
            // Drop the reply sender without answering
            drop(request.reply);
        });

        let result = bridge
            .request_approval(&SessionId::new("s1"), "search", "{}")
            .await;
        assert!(matches!(result, Err(ApprovalError::ChannelClosed)));
    }
}
