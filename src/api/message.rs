use crate::boundary::{Backend, Reply, Request};
use crate::error::ServiceError;
use crate::model::message::Message;

/// Inbox view: `userId` matches either end of the conversation.
pub fn list(backend: &mut Backend, req: Request) -> Result<Reply, ServiceError> {
    let user_id = req.query.get("userId");

    let matches: Vec<&Message> = backend
        .store
        .messages
        .all()
        .iter()
        .filter(|msg| match user_id {
            None => true,
            Some(u) if u.is_empty() => true,
            Some(u) => msg.from == u || msg.to == u,
        })
        .collect();

    Ok(Reply::ok(&matches))
}
