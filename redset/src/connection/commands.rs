use crate::command::{Arity, CmdMap, Command, Reply, handler};
use crate::connection::operations::ConnectionOperations;

/// Connection commands. `QUIT` is the only one that ends the session.
pub fn commands() -> CmdMap {
    CmdMap::from([
        (
            "PING",
            Command::new(Arity::Between(0, 1), handler!(|gw, args| gw.ping(args.first().map(Vec::as_slice)))),
        ),
        ("ECHO", Command::new(Arity::Exactly(1), handler!(|gw, args| gw.echo(&args[0])))),
        (
            "QUIT",
            Command::new(
                Arity::Exactly(0),
                handler!(|gw, _args| async move { Reply::closing(gw.quit().await) }),
            ),
        ),
    ])
}
