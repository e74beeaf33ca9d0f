use crate::gateway::SetGateway;
use redis_protocol::resp2::types::OwnedFrame as Frame;
use std::collections::HashMap;
use std::sync::Arc;

/// What a command sends back, and whether the server hangs up after it.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub frame: Frame,
    pub close: bool,
}

impl Reply {
    /// Reply, then close the connection.
    pub fn closing(frame: Frame) -> Self {
        Self { frame, close: true }
    }
}

impl From<Frame> for Reply {
    fn from(frame: Frame) -> Self {
        Self { frame, close: false }
    }
}

/// Number of arguments a command takes, not counting its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
    Between(usize, usize),
}

impl Arity {
    pub fn accepts(self, n: usize) -> bool {
        match self {
            Arity::Exactly(k) => n == k,
            Arity::AtLeast(k) => n >= k,
            Arity::Between(lo, hi) => (lo..=hi).contains(&n),
        }
    }
}

pub type BoxFuture = futures::future::BoxFuture<'static, Reply>;

pub type CmdFn = dyn Fn(SetGateway, Vec<Vec<u8>>) -> BoxFuture + Send + Sync;

/// A table entry. Handlers run only once the arity check has passed, so they
/// may index their arguments directly.
#[derive(Clone)]
pub struct Command {
    pub arity: Arity,
    run: Arc<CmdFn>,
}

impl Command {
    pub fn new(arity: Arity, run: Arc<CmdFn>) -> Self {
        Self { arity, run }
    }
}

pub type CmdMap = HashMap<&'static str, Command>;

/// Build a [`CmdFn`] from `|gw, args| future`. The future's output is turned
/// into a [`Reply`], so handlers return either a `Frame` or a `Reply`.
macro_rules! handler {
    (|$gw:ident, $args:ident| $body:expr) => {
        ::std::sync::Arc::new(move |$gw: $crate::gateway::SetGateway, $args: Vec<Vec<u8>>| {
            ::std::boxed::Box::pin(async move { $crate::command::Reply::from($body.await) })
                as $crate::command::BoxFuture
        }) as ::std::sync::Arc<$crate::command::CmdFn>
    };
}
pub(crate) use handler;

pub fn wrong_arity(cmd: &str) -> Frame {
    Frame::Error(format!("ERR wrong number of arguments for '{}' command", cmd))
}

fn unknown_command(name: &str, args: &[Vec<u8>]) -> Frame {
    let quoted: String = args
        .iter()
        .map(|a| format!("'{}' ", String::from_utf8_lossy(a)))
        .collect();
    Frame::Error(format!(
        "ERR unknown command '{}', with args beginning with: {}",
        name, quoted
    ))
}

fn build_command_map() -> CmdMap {
    let mut map = crate::connection::commands::commands();
    map.extend(crate::set::commands::commands());
    map
}

/// Dispatches requests by command name (case-insensitive) against a shared table.
#[derive(Clone)]
pub struct CommandHandler {
    gateway: SetGateway,
    map: Arc<CmdMap>,
}

impl CommandHandler {
    pub fn new(gateway: SetGateway) -> Self {
        Self {
            gateway,
            map: Arc::new(build_command_map()),
        }
    }

    pub async fn handle(&self, name: &str, args: Vec<Vec<u8>>) -> Reply {
        let Some(cmd) = self.map.get(name.to_ascii_uppercase().as_str()) else {
            return unknown_command(name, &args).into();
        };
        if !cmd.arity.accepts(args.len()) {
            return wrong_arity(&name.to_ascii_lowercase()).into();
        }
        (cmd.run)(self.gateway.clone(), args).await
    }
}
