//! Caller metadata copied from the inbound request.

use std::net::SocketAddr;

/// What the tracker may read about the inbound caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    /// `User-Agent` header, verbatim (empty when absent).
    pub user_agent: String,
    /// Remote address in host:port form.
    pub remote_addr: Option<String>,
}

impl RequestContext {
    pub fn new(user_agent: impl Into<String>, remote_addr: Option<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            remote_addr,
        }
    }

    pub fn from_peer(user_agent: impl Into<String>, peer: SocketAddr) -> Self {
        Self::new(user_agent, Some(peer.to_string()))
    }

    /// Host part of the remote address, when it splits as host:port.
    pub fn client_ip(&self) -> Option<&str> {
        self.remote_addr.as_deref().and_then(split_host_port)
    }
}

/// Split `host:port` / `[v6]:port`. Bare hosts without a port do not split.
fn split_host_port(addr: &str) -> Option<&str> {
    if let Some(rest) = addr.strip_prefix('[') {
        let (host, tail) = rest.split_once(']')?;
        let port = tail.strip_prefix(':')?;
        return (!host.is_empty() && valid_port(port)).then_some(host);
    }

    let (host, port) = addr.rsplit_once(':')?;
    // unbracketed v6 literal is ambiguous
    if host.contains(':') || host.is_empty() || !valid_port(port) {
        return None;
    }
    Some(host)
}

fn valid_port(port: &str) -> bool {
    !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit())
}
